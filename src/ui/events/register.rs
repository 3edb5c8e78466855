use super::*;
use crate::api::{ApiRequest, Credentials};
use crate::ui::focus::RegisterFocus;

pub(super) fn handle_register_key(key: KeyEvent, state: &mut AppState) {
    match key.code {
        // Back to login
        KeyCode::Esc => {
            state.navigate(Screen::Login);
        }
        KeyCode::Tab | KeyCode::Down => {
            state.register.focus = state.register.focus.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.register.focus = state.register.focus.previous();
        }
        KeyCode::Enter => submit_register(state),
        _ => {
            let field = match state.register.focus {
                RegisterFocus::Username => &mut state.register.username,
                RegisterFocus::Password => &mut state.register.password,
                RegisterFocus::ConfirmPassword => &mut state.register.confirm_password,
                RegisterFocus::RegisterButton => return,
            };
            field.handle_key(key);
        }
    }
}

/// Validate (including the password match) and queue the registration call.
/// Nothing goes out on the network when validation fails.
pub(super) fn submit_register(state: &mut AppState) {
    if state.register.submitting {
        return;
    }

    if !state.register.validate() {
        return;
    }

    state.register.submitting = true;
    let credentials = Credentials::new(
        state.register.username.value.clone(),
        state.register.password.value.clone(),
    );
    state.dispatch(ApiRequest::Register(credentials));
}
