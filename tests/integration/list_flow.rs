// Article list: load, create, edit, delete

use blogdash::api::{ApiError, ApiMessage, ApiRequest, ArticleUpdate, NewArticle};
use blogdash::ui::events::apply_api_message;
use blogdash::ui::focus::ArticleFocus;
use blogdash::ui::state::{Modal, NotificationKind};
use blogdash::ui::{AppState, Screen};
use crossterm::event::KeyCode;

use crate::common::helpers::*;

fn status_error() -> ApiError {
    ApiError::Status {
        status: 500,
        message: "server exploded".into(),
    }
}

fn ids(state: &AppState) -> Vec<&str> {
    state.list.articles.iter().map(|a| a.id.as_str()).collect()
}

#[test]
fn test_mount_loads_articles() {
    let mut state = state_with_token("tok");
    state.navigate(Screen::List);

    assert!(state.list.loading);
    assert_eq!(requests(&mut state), vec![ApiRequest::LoadArticles]);

    apply_api_message(
        ApiMessage::ArticlesLoaded(Ok(vec![article("a1", "One"), article("a2", "Two")])),
        &mut state,
    );

    assert!(!state.list.loading);
    assert_eq!(ids(&state), vec!["a1", "a2"]);
    assert_eq!(state.list.list_state.selected(), Some(0));
}

#[test]
fn test_load_failure_leaves_list_empty() {
    let mut state = state_with_token("tok");
    state.navigate(Screen::List);
    requests(&mut state);

    apply_api_message(ApiMessage::ArticlesLoaded(Err(status_error())), &mut state);

    assert!(state.list.articles.is_empty());
    assert!(!state.list.loading);
    let notification = state.notification.as_ref().unwrap();
    assert_eq!(notification.kind, NotificationKind::Error);
    assert!(notification.message.starts_with("Failed to fetch data: "));
}

#[test]
fn test_reload_is_ignored_while_loading() {
    let mut state = list_state(vec![article("a1", "One")]);
    press(&mut state, KeyCode::Char('r'));
    press(&mut state, KeyCode::Char('r'));
    assert_eq!(requests(&mut state), vec![ApiRequest::LoadArticles]);
}

#[test]
fn test_create_flow_appends_once_and_closes_modal() {
    let mut state = list_state(vec![article("a1", "One")]);

    press(&mut state, KeyCode::Char('n'));
    assert!(matches!(state.list.modal, Modal::Creating(_)));

    type_text(&mut state, "Hello");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "bob");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "Body");
    handle(&mut state, ctrl('s'));

    assert_eq!(
        requests(&mut state),
        vec![ApiRequest::CreateArticle {
            token: Some("tok".into()),
            article: NewArticle {
                title: "Hello".into(),
                content: "Body".into(),
                author: "bob".into(),
            },
        }]
    );

    // Repeated submit while in flight is swallowed
    handle(&mut state, ctrl('s'));
    assert!(requests(&mut state).is_empty());

    let mut created = article("new1", "Hello");
    created.author = "bob".into();
    apply_api_message(ApiMessage::ArticleCreated(Ok(created)), &mut state);

    assert_eq!(ids(&state), vec!["a1", "new1"]);
    assert!(state.list.modal.is_closed());
    assert_eq!(
        state.notification.as_ref().unwrap().message,
        "Submission successful"
    );
}

fn handle(state: &mut AppState, key: crossterm::event::KeyEvent) {
    blogdash::ui::events::handle_key(key, state);
}

#[test]
fn test_create_validation_blocks_request() {
    let mut state = list_state(vec![]);
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "Only a title");
    handle(&mut state, ctrl('s'));

    assert!(requests(&mut state).is_empty());
    match &state.list.modal {
        Modal::Creating(form) => {
            assert_eq!(form.title.error, None);
            assert_eq!(
                form.author.as_ref().unwrap().error.as_deref(),
                Some("Please enter the author name")
            );
            assert_eq!(
                form.content.error.as_deref(),
                Some("Please enter the article content")
            );
        }
        other => panic!("modal should still be open, got {:?}", other),
    }
}

#[test]
fn test_create_failure_keeps_modal_and_values() {
    let mut state = list_state(vec![]);
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "T");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "A");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "C");
    handle(&mut state, ctrl('s'));
    requests(&mut state);

    apply_api_message(ApiMessage::ArticleCreated(Err(status_error())), &mut state);

    assert!(state.list.articles.is_empty());
    match &state.list.modal {
        Modal::Creating(form) => {
            assert!(!form.submitting);
            assert_eq!(form.title.value, "T");
        }
        other => panic!("modal should still be open, got {:?}", other),
    }
    assert!(
        state
            .notification
            .as_ref()
            .unwrap()
            .message
            .starts_with("Submission failed: ")
    );
}

#[test]
fn test_edit_prefills_and_replaces_only_target() {
    let mut state = list_state(vec![
        article("a1", "One"),
        article("a2", "Two"),
        article("a3", "Three"),
    ]);

    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char('e'));

    match &state.list.modal {
        Modal::Editing { id, form } => {
            assert_eq!(id, "a2");
            assert_eq!(form.title.value, "Two");
            assert_eq!(form.content.value, "Two body");
            assert!(form.author.is_none());
        }
        other => panic!("expected edit modal, got {:?}", other),
    }

    // Replace the title
    press(&mut state, KeyCode::End);
    type_text(&mut state, "!");
    handle(&mut state, ctrl('s'));

    assert_eq!(
        requests(&mut state),
        vec![ApiRequest::UpdateArticle {
            token: Some("tok".into()),
            id: "a2".into(),
            update: ArticleUpdate {
                title: "Two!".into(),
                content: "Two body".into(),
            },
        }]
    );

    let before = state.list.articles.clone();
    let mut updated = article("a2", "Two!");
    updated.content = "Two body".into();
    apply_api_message(
        ApiMessage::ArticleUpdated {
            id: "a2".into(),
            result: Ok(updated.clone()),
        },
        &mut state,
    );

    assert_eq!(ids(&state), vec!["a1", "a2", "a3"]);
    assert_eq!(state.list.articles.get(0), before.get(0));
    assert_eq!(state.list.articles.get(1), Some(&updated));
    assert_eq!(state.list.articles.get(2), before.get(2));
    assert!(state.list.modal.is_closed());
    assert_eq!(
        state.notification.as_ref().unwrap().message,
        "Update successful"
    );
}

#[test]
fn test_edit_focus_skips_author() {
    let mut state = list_state(vec![article("a1", "One")]);
    press(&mut state, KeyCode::Enter);
    press(&mut state, KeyCode::Tab);

    match &state.list.modal {
        Modal::Editing { form, .. } => assert_eq!(form.focus, ArticleFocus::Content),
        other => panic!("expected edit modal, got {:?}", other),
    }
}

#[test]
fn test_update_failure_leaves_list_untouched() {
    let mut state = list_state(vec![article("a1", "One")]);
    press(&mut state, KeyCode::Char('e'));
    handle(&mut state, ctrl('s'));
    requests(&mut state);

    let before = state.list.articles.clone();
    apply_api_message(
        ApiMessage::ArticleUpdated {
            id: "a1".into(),
            result: Err(status_error()),
        },
        &mut state,
    );

    assert_eq!(state.list.articles, before);
    match &state.list.modal {
        Modal::Editing { form, .. } => assert!(!form.submitting),
        other => panic!("modal should still be open, got {:?}", other),
    }
}

#[test]
fn test_delete_confirm_then_remove() {
    let mut state = list_state(vec![
        article("a", "A"),
        article("b", "B"),
        article("c", "C"),
    ]);

    press(&mut state, KeyCode::Down);
    press(&mut state, KeyCode::Char('d'));
    assert!(matches!(
        &state.list.modal,
        Modal::ConfirmDelete { id, title } if id == "b" && title == "B"
    ));
    // Nothing is sent before confirmation
    assert!(requests(&mut state).is_empty());

    press(&mut state, KeyCode::Char('y'));
    assert!(state.list.modal.is_closed());
    assert_eq!(
        requests(&mut state),
        vec![ApiRequest::DeleteArticle {
            token: Some("tok".into()),
            id: "b".into(),
        }]
    );
    // Still listed until the server confirms
    assert_eq!(ids(&state), vec!["a", "b", "c"]);

    apply_api_message(
        ApiMessage::ArticleDeleted {
            id: "b".into(),
            result: Ok(()),
        },
        &mut state,
    );

    assert_eq!(ids(&state), vec!["a", "c"]);
    assert_eq!(
        state.notification.as_ref().unwrap().message,
        "Deletion successful"
    );
}

#[test]
fn test_delete_cancel_sends_nothing() {
    let mut state = list_state(vec![article("a", "A")]);
    press(&mut state, KeyCode::Char('d'));
    press(&mut state, KeyCode::Char('n'));

    assert!(state.list.modal.is_closed());
    assert!(requests(&mut state).is_empty());
    assert_eq!(state.list.articles.len(), 1);
}

#[test]
fn test_delete_failure_keeps_article() {
    let mut state = list_state(vec![article("a", "A")]);
    apply_api_message(
        ApiMessage::ArticleDeleted {
            id: "a".into(),
            result: Err(status_error()),
        },
        &mut state,
    );

    assert_eq!(state.list.articles.len(), 1);
    assert!(
        state
            .notification
            .as_ref()
            .unwrap()
            .message
            .starts_with("Deletion failed: ")
    );
}

#[test]
fn test_late_create_completion_does_not_close_other_modal() {
    let mut state = list_state(vec![article("a1", "One")]);

    // User abandoned the create modal and opened an edit instead
    press(&mut state, KeyCode::Char('e'));
    apply_api_message(
        ApiMessage::ArticleCreated(Ok(article("new1", "Late"))),
        &mut state,
    );

    assert_eq!(ids(&state), vec!["a1", "new1"]);
    assert!(matches!(state.list.modal, Modal::Editing { .. }));
}

#[test]
fn test_late_create_completion_keeps_reopened_draft() {
    let mut state = list_state(vec![]);

    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "T");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "A");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "C");
    handle(&mut state, ctrl('s'));
    assert_eq!(requests(&mut state).len(), 1);

    // Walk away from the pending submit and start another article
    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Char('n'));
    type_text(&mut state, "Second draft");

    apply_api_message(ApiMessage::ArticleCreated(Ok(article("new1", "T"))), &mut state);

    assert_eq!(ids(&state), vec!["new1"]);
    match &state.list.modal {
        Modal::Creating(form) => {
            assert_eq!(form.title.value, "Second draft");
            assert!(!form.submitting);
        }
        other => panic!("second draft should stay open, got {:?}", other),
    }
}

#[test]
fn test_late_update_completion_keeps_reopened_edit() {
    let mut state = list_state(vec![article("a1", "One")]);

    press(&mut state, KeyCode::Char('e'));
    handle(&mut state, ctrl('s'));
    assert_eq!(requests(&mut state).len(), 1);

    press(&mut state, KeyCode::Esc);
    press(&mut state, KeyCode::Char('e'));
    press(&mut state, KeyCode::End);
    type_text(&mut state, " again");

    apply_api_message(
        ApiMessage::ArticleUpdated {
            id: "a1".into(),
            result: Ok(article("a1", "One")),
        },
        &mut state,
    );

    match &state.list.modal {
        Modal::Editing { id, form } => {
            assert_eq!(id, "a1");
            assert_eq!(form.title.value, "One again");
            assert!(!form.submitting);
        }
        other => panic!("second edit should stay open, got {:?}", other),
    }
}

#[test]
fn test_no_session_sends_no_token() {
    let mut state = state();
    state.navigate(Screen::List);
    requests(&mut state);
    state.list.loading = false;
    state.list.articles.replace_all(vec![article("a", "A")]);
    state.list.clamp_selection();

    press(&mut state, KeyCode::Char('d'));
    press(&mut state, KeyCode::Enter);

    assert_eq!(
        requests(&mut state),
        vec![ApiRequest::DeleteArticle {
            token: None,
            id: "a".into(),
        }]
    );
}

#[test]
fn test_q_quits_only_without_modal() {
    let mut state = list_state(vec![]);
    press(&mut state, KeyCode::Char('n'));
    assert!(!press(&mut state, KeyCode::Char('q')));
    press(&mut state, KeyCode::Esc);
    assert!(press(&mut state, KeyCode::Char('q')));
}
