//! Applying finished API calls to the UI state.
//!
//! Every completion either patches local state and shows a success toast, or
//! leaves state alone and shows an error toast. Nothing here is fatal.

use super::*;
use crate::api::{ApiError, ApiMessage, Article};
use crate::ui::state::{LoginState, Modal, RegisterState};
use tracing::{debug, warn};

pub const LOGIN_REJECTED: &str = "Login failed: the user name or password is incorrect";
pub const REGISTER_UNAVAILABLE: &str = "Registration request failed, please try again later.";

pub fn apply_api_message(msg: ApiMessage, state: &mut AppState) {
    match msg {
        ApiMessage::LoggedIn(result) => on_logged_in(result, state),
        ApiMessage::Registered(result) => on_registered(result, state),
        ApiMessage::ArticlesLoaded(result) => on_articles_loaded(result, state),
        ApiMessage::ArticleCreated(result) => on_article_created(result, state),
        ApiMessage::ArticleUpdated { id, result } => on_article_updated(&id, result, state),
        ApiMessage::ArticleDeleted { id, result } => on_article_deleted(&id, result, state),
    }
}

fn on_logged_in(result: Result<String, ApiError>, state: &mut AppState) {
    state.login.submitting = false;

    match result {
        Ok(token) => {
            if let Err(e) = state.session.set_token(&token) {
                // Still usable for this run, just not remembered
                warn!("could not persist session token: {:#}", e);
            }
            info!("login succeeded");
            state.login = LoginState::default();
            state.notify_success("Login successful");
            state.navigate(Screen::List);
        }
        Err(ApiError::InvalidCredentials | ApiError::Status { .. }) => {
            state.notify_error(LOGIN_REJECTED);
        }
        Err(e) => {
            warn!("login request failed: {}", e);
            state.notify_error(format!("Login request failed: {}", e));
        }
    }
}

fn on_registered(result: Result<(), ApiError>, state: &mut AppState) {
    state.register.submitting = false;

    match result {
        Ok(()) => {
            info!("registration succeeded");
            state.register = RegisterState::default();
            state.notify_success("Registration successful!");
            state.navigate(Screen::Login);
        }
        Err(e) if e.is_transport() => {
            warn!("registration request failed: {}", e);
            state.notify_error(REGISTER_UNAVAILABLE);
        }
        Err(e) => {
            let message = e
                .server_message()
                .map(str::to_string)
                .unwrap_or_else(|| e.to_string());
            state.notify_error(format!("Registration failed: {}", message));
        }
    }
}

fn on_articles_loaded(result: Result<Vec<Article>, ApiError>, state: &mut AppState) {
    state.list.loading = false;

    match result {
        Ok(articles) => {
            debug!(count = articles.len(), "articles loaded");
            state.list.articles.replace_all(articles);
            state.list.clamp_selection();
        }
        Err(e) => {
            warn!("loading articles failed: {}", e);
            state.notify_error(format!("Failed to fetch data: {}", e));
        }
    }
}

fn on_article_created(result: Result<Article, ApiError>, state: &mut AppState) {
    match result {
        Ok(article) => {
            debug!(id = %article.id, "article created");
            state.list.articles.append(article);
            state.list.clamp_selection();
            if matches!(&state.list.modal, Modal::Creating(form) if form.submitting) {
                state.list.modal = Modal::Closed;
            }
            state.notify_success("Submission successful");
        }
        Err(e) => {
            warn!("create failed: {}", e);
            if let Modal::Creating(form) = &mut state.list.modal {
                form.submitting = false;
            }
            state.notify_error(format!("Submission failed: {}", e));
        }
    }
}

/// The edit modal for `id` that is still waiting on this completion.
/// A form reopened after Esc starts with `submitting` false and stays open.
fn is_submitting_edit(modal: &Modal, id: &str) -> bool {
    matches!(
        modal,
        Modal::Editing { id: editing, form } if editing.as_str() == id && form.submitting
    )
}

fn on_article_updated(id: &str, result: Result<Article, ApiError>, state: &mut AppState) {
    match result {
        Ok(article) => {
            debug!(id, "article updated");
            if !state.list.articles.replace(id, article) {
                debug!(id, "updated article is no longer in the list");
            }
            if is_submitting_edit(&state.list.modal, id) {
                state.list.modal = Modal::Closed;
            }
            state.notify_success("Update successful");
        }
        Err(e) => {
            warn!(id, "update failed: {}", e);
            if let Modal::Editing { id: editing, form } = &mut state.list.modal {
                if editing.as_str() == id {
                    form.submitting = false;
                }
            }
            state.notify_error(format!("Update failed: {}", e));
        }
    }
}

fn on_article_deleted(id: &str, result: Result<(), ApiError>, state: &mut AppState) {
    match result {
        Ok(()) => {
            debug!(id, "article deleted");
            state.list.articles.remove(id);
            state.list.clamp_selection();
            state.notify_success("Deletion successful");
        }
        Err(e) => {
            warn!(id, "delete failed: {}", e);
            state.notify_error(format!("Deletion failed: {}", e));
        }
    }
}
