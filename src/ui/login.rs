// Login screen

use crate::ui::components::{Footer, centered_rect, render_button, render_text_field};
use crate::ui::focus::LoginFocus;
use crate::ui::state::LoginState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    text::Line,
    widgets::{Block, Borders, Paragraph, Widget},
};

pub struct LoginScreen;

impl LoginScreen {
    pub fn render(frame: &mut Frame, state: &LoginState, in_flight: usize) {
        let area = frame.area();

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let card = centered_rect(50, 16, outer[0]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Login ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spacer
                Constraint::Length(4), // Username
                Constraint::Length(4), // Password
                Constraint::Length(1), // Login button
                Constraint::Length(1), // Spacer
                Constraint::Length(1), // Sign-up link
                Constraint::Min(0),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[1],
            &state.username,
            state.focus == LoginFocus::Username,
        );
        render_text_field(
            frame,
            chunks[2],
            &state.password,
            state.focus == LoginFocus::Password,
        );

        let label = if state.submitting { "Logging in..." } else { "Login" };
        render_button(
            label,
            state.focus == LoginFocus::LoginButton,
            chunks[3],
            frame.buffer_mut(),
        );

        let hint = Paragraph::new(Line::from("No account yet?"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Gray));
        frame.render_widget(hint, chunks[4]);
        render_button(
            "Sign up",
            state.focus == LoginFocus::SignUpButton,
            chunks[5],
            frame.buffer_mut(),
        );

        Footer::login(in_flight).render(outer[1], frame.buffer_mut());
    }
}
