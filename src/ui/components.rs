// Reusable UI components

use crate::ui::form::TextField;
use crate::ui::state::{Notification, NotificationKind};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget, Wrap},
};

pub struct Footer {
    content: Line<'static>,
}

impl Footer {
    fn from_controls(prefix: String, controls: &[(&'static str, &'static str)]) -> Self {
        let mut spans = vec![Span::raw(prefix)];

        for (i, (hotkey, desc)) in controls.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw("  "));
            }
            spans.push(Span::styled(*hotkey, Style::default().fg(Color::Yellow)));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(*desc));
        }

        Self {
            content: Line::from(spans),
        }
    }

    fn busy_prefix(in_flight: usize) -> String {
        if in_flight > 0 {
            format!("Working ({})...  |  ", in_flight)
        } else {
            "CONTROLS: ".to_string()
        }
    }

    pub fn login(in_flight: usize) -> Self {
        Self::from_controls(
            Self::busy_prefix(in_flight),
            &[
                ("[Tab]", "Next"),
                ("[Enter]", "Submit"),
                ("[Ctrl+C]", "Quit"),
            ],
        )
    }

    pub fn register(in_flight: usize) -> Self {
        Self::from_controls(
            Self::busy_prefix(in_flight),
            &[
                ("[Tab]", "Next"),
                ("[Enter]", "Register"),
                ("[Esc]", "Back"),
                ("[Ctrl+C]", "Quit"),
            ],
        )
    }

    pub fn list(total: usize, in_flight: usize) -> Self {
        let prefix = format!("Articles: {}  |  {}", total, Self::busy_prefix(in_flight));
        Self::from_controls(
            prefix,
            &[
                ("[↑/↓]", "Select"),
                ("[N]", "New"),
                ("[E]", "Edit"),
                ("[D]", "Delete"),
                ("[R]", "Reload"),
                ("[Q]", "Quit"),
            ],
        )
    }

    pub fn article_form() -> Self {
        Self::from_controls(
            "CONTROLS: ".to_string(),
            &[
                ("[Tab]", "Next"),
                ("[Ctrl+S]", "Submit"),
                ("[Esc]", "Cancel"),
            ],
        )
    }
}

impl Widget for Footer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.content)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}

pub fn render_button(label: &str, focused: bool, area: Rect, buf: &mut Buffer) {
    let style = if focused {
        Style::default().bg(Color::Blue).fg(Color::White).bold()
    } else {
        Style::default().fg(Color::White)
    };

    let text = Line::from(vec![
        Span::styled("[ ", Style::default().fg(Color::Yellow)),
        Span::raw(label.to_string()),
        Span::styled(" ]", Style::default().fg(Color::Yellow)),
    ])
    .style(style);

    let mut centered_area = area;
    let text_width = label.chars().count() as u16 + 4; // "[ " + label + " ]"
    if area.width > text_width {
        let padding = (area.width - text_width) / 2;
        centered_area.x += padding;
        centered_area.width = text_width;
    }

    buf.set_line(centered_area.x, centered_area.y, &text, centered_area.width);
}

/// Rows a field needs: bordered input plus one line for a validation error
pub fn field_height(field: &TextField, content_rows: u16) -> u16 {
    let rows = if field.multiline { content_rows } else { 1 };
    rows + 2 + 1
}

/// Bordered input box titled with the label, error line underneath
pub fn render_text_field(frame: &mut Frame, area: Rect, field: &TextField, focused: bool) {
    if area.height < 3 {
        return;
    }

    let input_area = Rect {
        height: area.height.saturating_sub(1),
        ..area
    };
    let error_area = Rect {
        y: area.y + input_area.height,
        height: 1,
        ..area
    };

    let border_style = if field.error.is_some() {
        Style::default().fg(Color::Red)
    } else if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::White)
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border_style)
        .title(format!(" {} ", field.label));

    let paragraph = if field.value.is_empty() && !focused {
        Paragraph::new(Span::styled(
            field.placeholder,
            Style::default().fg(Color::DarkGray),
        ))
    } else {
        let text = if focused {
            field.display_with_cursor()
        } else {
            field.display_value()
        };
        let style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Green)
        };
        Paragraph::new(text).style(style)
    };

    let paragraph = if field.multiline {
        paragraph.wrap(Wrap { trim: false })
    } else {
        paragraph
    };

    frame.render_widget(paragraph.block(block), input_area);

    if let Some(ref error) = field.error {
        frame.render_widget(
            Paragraph::new(Span::styled(error.as_str(), Style::default().fg(Color::Red))),
            error_area,
        );
    }
}

/// Rectangle of the given size centered in `area`, clipped to fit
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

/// Toast in the top-right corner
pub fn render_notification(frame: &mut Frame, notification: &Notification) {
    let area = frame.area();
    let (color, title) = match notification.kind {
        NotificationKind::Success => (Color::Green, " Success "),
        NotificationKind::Error => (Color::Red, " Error "),
    };

    // Sized in usize; messages can carry arbitrarily long server text
    let message_len = notification.message.chars().count();
    let max_width = usize::from(area.width.saturating_sub(2).max(1));
    let width = (message_len + 4).max(20).min(max_width);
    let inner_width = width.saturating_sub(2).max(1);
    let lines = message_len.div_ceil(inner_width).max(1);
    let height = (lines + 2).min(usize::from(area.height));

    let width = u16::try_from(width).unwrap_or(u16::MAX);
    let height = u16::try_from(height).unwrap_or(u16::MAX);

    let toast_area = Rect {
        x: area.x + area.width.saturating_sub(width.saturating_add(1)),
        y: area.y + 1u16.min(area.height.saturating_sub(height)),
        width: width.min(area.width),
        height,
    };

    frame.render_widget(Clear, toast_area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
        .title(title)
        .title_alignment(Alignment::Left)
        .style(Style::default().bg(Color::Black));

    frame.render_widget(
        Paragraph::new(notification.message.as_str())
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .block(block),
        toast_area,
    );
}
