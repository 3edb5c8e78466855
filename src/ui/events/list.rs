use super::*;
use crate::api::ApiRequest;
use crate::ui::focus::ArticleFocus;
use crate::ui::state::{ArticleForm, Modal};

pub(super) fn handle_list_key(key: KeyEvent, state: &mut AppState) {
    match &state.list.modal {
        Modal::Closed => handle_browse_key(key, state),
        Modal::Creating(_) | Modal::Editing { .. } => handle_form_key(key, state),
        Modal::ConfirmDelete { .. } => handle_confirm_key(key, state),
    }
}

fn handle_browse_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => state.list.select_previous(),
        KeyCode::Down | KeyCode::Char('j') => state.list.select_next(),
        // New article
        KeyCode::Char('n') | KeyCode::Char('N') => open_create(state),
        // Edit selected
        KeyCode::Char('e') | KeyCode::Char('E') | KeyCode::Enter => open_edit(state),
        // Delete selected (asks first)
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => open_confirm_delete(state),
        // Reload from server
        KeyCode::Char('r') | KeyCode::Char('R') => state.reload_articles(),
        _ => {}
    }
}

pub(super) fn open_create(state: &mut AppState) {
    state.list.modal = Modal::Creating(ArticleForm::create());
}

pub(super) fn open_edit(state: &mut AppState) {
    if let Some(article) = state.list.selected_article() {
        let id = article.id.clone();
        let form = ArticleForm::edit(article);
        state.list.modal = Modal::Editing { id, form };
    }
}

pub(super) fn open_confirm_delete(state: &mut AppState) {
    if let Some(article) = state.list.selected_article() {
        state.list.modal = Modal::ConfirmDelete {
            id: article.id.clone(),
            title: article.title.clone(),
        };
    }
}

fn handle_form_key(key: KeyEvent, state: &mut AppState) {
    // Ctrl+S submits from any field
    if key.code == KeyCode::Char('s') && key.modifiers.contains(KeyModifiers::CONTROL) {
        submit_article_form(state);
        return;
    }

    let Some(form) = state.list.modal.form_mut() else {
        return;
    };
    let with_author = form.has_author();

    match key.code {
        // Close without saving; an in-flight submission still completes
        KeyCode::Esc => {
            state.list.modal = Modal::Closed;
        }
        KeyCode::Tab | KeyCode::Down => {
            form.focus = form.focus.next(with_author);
        }
        KeyCode::BackTab | KeyCode::Up => {
            form.focus = form.focus.previous(with_author);
        }
        KeyCode::Enter => match form.focus {
            ArticleFocus::Title | ArticleFocus::Author => {
                form.focus = form.focus.next(with_author);
            }
            ArticleFocus::Content => form.content.insert_char('\n'),
            ArticleFocus::SubmitButton => submit_article_form(state),
            ArticleFocus::CancelButton => state.list.modal = Modal::Closed,
        },
        _ => {
            if let Some(field) = form.focused_field() {
                field.handle_key(key);
            }
        }
    }
}

/// Validate the open modal and queue a create or update call
pub(super) fn submit_article_form(state: &mut AppState) {
    let token = state.bearer_token();

    let request = match &mut state.list.modal {
        Modal::Creating(form) => {
            if form.submitting || !form.validate() {
                return;
            }
            form.submitting = true;
            ApiRequest::CreateArticle {
                token,
                article: form.new_article(),
            }
        }
        Modal::Editing { id, form } => {
            if form.submitting || !form.validate() {
                return;
            }
            form.submitting = true;
            ApiRequest::UpdateArticle {
                token,
                id: id.clone(),
                update: form.update(),
            }
        }
        Modal::Closed | Modal::ConfirmDelete { .. } => return,
    };

    state.dispatch(request);
}

fn handle_confirm_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => confirm_delete(state),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            state.list.modal = Modal::Closed;
        }
        _ => {}
    }
}

/// The prompt closes right away; the list only changes once the server confirms
pub(super) fn confirm_delete(state: &mut AppState) {
    let id = match &state.list.modal {
        Modal::ConfirmDelete { id, .. } => id.clone(),
        _ => return,
    };
    state.list.modal = Modal::Closed;

    let token = state.bearer_token();
    state.dispatch(ApiRequest::DeleteArticle { token, id });
}
