// Article form and delete confirmation modals

use crate::ui::components::{
    Footer, centered_rect, field_height, render_button, render_text_field,
};
use crate::ui::focus::ArticleFocus;
use crate::ui::state::ArticleForm;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Visible rows of the content editor
const CONTENT_ROWS: u16 = 6;

pub struct ArticleModal;

impl ArticleModal {
    pub fn render(frame: &mut Frame, form: &ArticleForm, title: &str) {
        let area = frame.area();

        let title_height = field_height(&form.title, CONTENT_ROWS);
        let author_height = form
            .author
            .as_ref()
            .map(|f| field_height(f, CONTENT_ROWS))
            .unwrap_or(0);
        let content_height = field_height(&form.content, CONTENT_ROWS);
        // Borders, fields, buttons row, footer row
        let height = 2 + title_height + author_height + content_height + 1 + 1;

        let modal_area = centered_rect(70, height, area);
        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .title(format!(" {} ", title))
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(title_height),
                Constraint::Length(author_height),
                Constraint::Length(content_height),
                Constraint::Length(1), // Buttons
                Constraint::Length(1), // Controls
            ])
            .split(inner);

        render_text_field(
            frame,
            chunks[0],
            &form.title,
            form.focus == ArticleFocus::Title,
        );
        if let Some(ref author) = form.author {
            render_text_field(frame, chunks[1], author, form.focus == ArticleFocus::Author);
        }
        render_text_field(
            frame,
            chunks[2],
            &form.content,
            form.focus == ArticleFocus::Content,
        );

        let buttons = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(chunks[3]);
        let submit = if form.submitting {
            "Submitting..."
        } else {
            "Submit"
        };
        render_button(
            submit,
            form.focus == ArticleFocus::SubmitButton,
            buttons[0],
            frame.buffer_mut(),
        );
        render_button(
            "Cancel",
            form.focus == ArticleFocus::CancelButton,
            buttons[1],
            frame.buffer_mut(),
        );

        Footer::article_form().render(chunks[4], frame.buffer_mut());
    }
}

pub struct ConfirmModal;

impl ConfirmModal {
    pub fn render(frame: &mut Frame, article_title: &str) {
        let area = frame.area();

        // Small centered modal
        let modal_width = 50.min(area.width.saturating_sub(4));
        let modal_height = 7.min(area.height.saturating_sub(2));
        let modal_area = Rect {
            x: (area.width.saturating_sub(modal_width)) / 2,
            y: (area.height.saturating_sub(modal_height)) / 2,
            width: modal_width,
            height: modal_height,
        };

        frame.render_widget(Clear, modal_area);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Red))
            .title(" Delete Article ")
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(modal_area);
        frame.render_widget(block, modal_area);

        let lines = vec![
            Line::from(""),
            Line::from(Span::styled(
                "Are you sure you want to delete this article?",
                Style::default().fg(Color::White),
            )),
            Line::from(Span::styled(
                format!("\"{}\"", article_title),
                Style::default().fg(Color::Gray),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled(
                    "[Y]",
                    Style::default()
                        .fg(Color::Green)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::raw(" Yes   "),
                Span::styled(
                    "[N]",
                    Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
                ),
                Span::raw(" No"),
            ]),
        ];

        let paragraph = Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::White));
        frame.render_widget(paragraph, inner);
    }
}
