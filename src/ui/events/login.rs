use super::*;
use crate::api::{ApiRequest, Credentials};
use crate::ui::focus::LoginFocus;

pub(super) fn handle_login_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.login.focus = state.login.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.login.focus = state.login.focus.previous();
        }
        KeyCode::Enter => match state.login.focus {
            LoginFocus::SignUpButton => state.navigate(Screen::Register),
            _ => submit_login(state),
        },
        _ => {
            let field = match state.login.focus {
                LoginFocus::Username => &mut state.login.username,
                LoginFocus::Password => &mut state.login.password,
                LoginFocus::LoginButton | LoginFocus::SignUpButton => return,
            };
            field.handle_key(key);
        }
    }
}

/// Validate and queue the login call. One login at a time.
pub(super) fn submit_login(state: &mut AppState) {
    if state.login.submitting {
        return;
    }

    if !state.login.validate() {
        return;
    }

    state.login.submitting = true;
    let credentials = Credentials::new(
        state.login.username.value.clone(),
        state.login.password.value.clone(),
    );
    state.dispatch(ApiRequest::Login(credentials));
}
