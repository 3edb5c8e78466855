// Registration screen behavior

use blogdash::api::{ApiError, ApiMessage, ApiRequest, Credentials};
use blogdash::ui::events::{REGISTER_UNAVAILABLE, apply_api_message};
use blogdash::ui::state::{NotificationKind, PASSWORD_MISMATCH};
use blogdash::ui::{AppState, Screen};
use crossterm::event::KeyCode;

use crate::common::helpers::*;

fn register_state() -> AppState {
    let mut state = state();
    state.navigate(Screen::Register);
    state
}

fn fill_register(state: &mut AppState, username: &str, password: &str, confirm: &str) {
    type_text(state, username);
    press(state, KeyCode::Tab);
    type_text(state, password);
    press(state, KeyCode::Tab);
    type_text(state, confirm);
}

#[test]
fn test_matching_passwords_dispatch_register() {
    let mut state = register_state();
    fill_register(&mut state, "bob", "pw123", "pw123");
    press(&mut state, KeyCode::Enter);

    assert_eq!(
        requests(&mut state),
        vec![ApiRequest::Register(Credentials::new("bob", "pw123"))]
    );
    assert!(state.register.submitting);
}

#[test]
fn test_mismatch_sends_nothing() {
    let mut state = register_state();
    fill_register(&mut state, "bob", "pw123", "pw124");
    press(&mut state, KeyCode::Enter);

    assert!(requests(&mut state).is_empty());
    assert!(!state.register.submitting);
    assert_eq!(
        state.register.confirm_password.error.as_deref(),
        Some(PASSWORD_MISMATCH)
    );
}

#[test]
fn test_missing_confirmation_is_required_error() {
    let mut state = register_state();
    fill_register(&mut state, "bob", "pw123", "");
    press(&mut state, KeyCode::Enter);

    assert!(requests(&mut state).is_empty());
    assert_eq!(
        state.register.confirm_password.error.as_deref(),
        Some("Please confirm your password!")
    );
}

#[test]
fn test_success_returns_to_login() {
    let mut state = register_state();
    fill_register(&mut state, "bob", "pw", "pw");
    press(&mut state, KeyCode::Enter);
    requests(&mut state);

    apply_api_message(ApiMessage::Registered(Ok(())), &mut state);

    assert_eq!(state.current_screen, Screen::Login);
    assert!(state.register.username.value.is_empty());
    let notification = state.notification.as_ref().unwrap();
    assert_eq!(notification.kind, NotificationKind::Success);
    assert_eq!(notification.message, "Registration successful!");
    // Registration never logs in
    assert_eq!(state.session.token(), None);
}

#[test]
fn test_server_rejection_shows_server_message() {
    let mut state = register_state();
    fill_register(&mut state, "bob", "pw", "pw");
    press(&mut state, KeyCode::Enter);
    requests(&mut state);

    apply_api_message(
        ApiMessage::Registered(Err(ApiError::Status {
            status: 400,
            message: "User already exists".into(),
        })),
        &mut state,
    );

    assert_eq!(state.current_screen, Screen::Register);
    assert!(!state.register.submitting);
    assert_eq!(
        state.notification.as_ref().unwrap().message,
        "Registration failed: User already exists"
    );
}

#[test]
fn test_decode_error_falls_back_to_error_text() {
    let mut state = register_state();
    apply_api_message(
        ApiMessage::Registered(Err(ApiError::Decode("eof".into()))),
        &mut state,
    );
    let message = &state.notification.as_ref().unwrap().message;
    assert!(message.starts_with("Registration failed: "));
    assert_ne!(message, REGISTER_UNAVAILABLE);
}

#[test]
fn test_escape_goes_back_to_login() {
    let mut state = register_state();
    press(&mut state, KeyCode::Esc);
    assert_eq!(state.current_screen, Screen::Login);
}

#[test]
fn test_unreachable_server_asks_to_retry_later() {
    let client = blogdash::api::ApiClient::new(
        "http://127.0.0.1:9",
        Some(std::time::Duration::from_secs(2)),
    )
    .unwrap();
    let result = client.register(&Credentials::new("bob", "pw"));

    let mut state = register_state();
    apply_api_message(ApiMessage::Registered(result), &mut state);

    assert_eq!(state.current_screen, Screen::Register);
    assert_eq!(
        state.notification.as_ref().unwrap().message,
        REGISTER_UNAVAILABLE
    );
}
