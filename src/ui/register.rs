// Registration screen

use crate::ui::components::{Footer, centered_rect, render_button, render_text_field};
use crate::ui::focus::RegisterFocus;
use crate::ui::state::RegisterState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Style},
    widgets::{Block, Borders, Widget},
};

pub struct RegisterScreen;

impl RegisterScreen {
    pub fn render(frame: &mut Frame, state: &RegisterState, in_flight: usize) {
        let area = frame.area();

        let outer = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let card = centered_rect(50, 19, outer[0]);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Register ")
            .title_alignment(Alignment::Center);
        let inner = block.inner(card);
        frame.render_widget(block, card);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Spacer
                Constraint::Length(4), // Username
                Constraint::Length(4), // Password
                Constraint::Length(4), // Confirm password
                Constraint::Length(1), // Register button
                Constraint::Min(0),
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[1],
            &state.username,
            state.focus == RegisterFocus::Username,
        );
        render_text_field(
            frame,
            chunks[2],
            &state.password,
            state.focus == RegisterFocus::Password,
        );
        render_text_field(
            frame,
            chunks[3],
            &state.confirm_password,
            state.focus == RegisterFocus::ConfirmPassword,
        );

        let label = if state.submitting {
            "Registering..."
        } else {
            "Register"
        };
        render_button(
            label,
            state.focus == RegisterFocus::RegisterButton,
            chunks[4],
            frame.buffer_mut(),
        );

        Footer::register(in_flight).render(outer[1], frame.buffer_mut());
    }
}
