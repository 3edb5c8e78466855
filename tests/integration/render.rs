// Rendering checks against an in-memory terminal

use blogdash::ui::events::draw;
use blogdash::ui::{AppState, Screen};
use crossterm::event::KeyCode;
use ratatui::{Terminal, backend::TestBackend};

use crate::common::helpers::*;

fn render(state: &mut AppState) -> String {
    let backend = TestBackend::new(100, 36);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, state)).unwrap();
    buffer_to_string(terminal.backend().buffer())
}

#[test]
fn test_login_screen_masks_password() {
    let mut state = state();
    type_text(&mut state, "alice");
    press(&mut state, KeyCode::Tab);
    type_text(&mut state, "hunter2");

    let screen = render(&mut state);
    assert!(screen.contains("Login"));
    assert!(screen.contains("alice"));
    assert!(screen.contains("Sign up"));
    assert!(!screen.contains("hunter2"));
    assert!(screen.contains("•••••••"));
}

#[test]
fn test_login_validation_errors_are_drawn() {
    let mut state = state();
    press(&mut state, KeyCode::Enter);

    let screen = render(&mut state);
    assert!(screen.contains("Please enter your username!"));
    assert!(screen.contains("Please enter your password!"));
}

#[test]
fn test_register_screen_has_confirmation() {
    let mut state = state();
    state.navigate(Screen::Register);

    let screen = render(&mut state);
    assert!(screen.contains("Register"));
    assert!(screen.contains("Confirm password"));
}

#[test]
fn test_list_shows_articles_and_footer() {
    let mut state = list_state(vec![article("a1", "First post"), article("a2", "Second")]);

    let screen = render(&mut state);
    assert!(screen.contains("First post"));
    assert!(screen.contains("Second"));
    assert!(screen.contains("by alice"));
    assert!(screen.contains("Articles: 2"));
}

#[test]
fn test_empty_list_hint() {
    let mut state = list_state(vec![]);
    let screen = render(&mut state);
    assert!(screen.contains("No articles yet"));
}

#[test]
fn test_delete_prompt_names_article() {
    let mut state = list_state(vec![article("a1", "Doomed")]);
    press(&mut state, KeyCode::Char('d'));

    let screen = render(&mut state);
    assert!(screen.contains("Delete Article"));
    assert!(screen.contains("\"Doomed\""));
}

#[test]
fn test_create_modal_fields() {
    let mut state = list_state(vec![]);
    press(&mut state, KeyCode::Char('n'));

    let screen = render(&mut state);
    assert!(screen.contains("New Article"));
    assert!(screen.contains("Article Title"));
    assert!(screen.contains("Author"));
    assert!(screen.contains("Article Content"));
    assert!(screen.contains("Submit"));
}

#[test]
fn test_edit_modal_has_no_author_field() {
    let mut state = list_state(vec![article("a1", "Existing")]);
    press(&mut state, KeyCode::Char('e'));

    let screen = render(&mut state);
    assert!(screen.contains("Edit Article"));
    assert!(screen.contains("Existing"));
    assert!(!screen.contains(" Author "));
}

#[test]
fn test_notification_toast_is_drawn() {
    let mut state = state();
    state.notify_error("Deletion failed: boom");

    let screen = render(&mut state);
    assert!(screen.contains("Error"));
    assert!(screen.contains("Deletion failed: boom"));
}

#[test]
fn test_busy_indicator() {
    let mut state = state();
    state.in_flight = 2;
    let screen = render(&mut state);
    assert!(screen.contains("Working (2)"));
}

#[test]
fn test_oversized_notification_fits_small_terminal() {
    let mut state = state();
    state.notify_error("x".repeat(65534));

    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal.draw(|frame| draw(frame, &mut state)).unwrap();

    let screen = buffer_to_string(terminal.backend().buffer());
    assert!(screen.contains("Error"));
    assert!(screen.contains("xxxxxxxxxx"));
}
