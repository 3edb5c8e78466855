// Article list screen

use crate::api::Article;
use crate::ui::components::Footer;
use crate::ui::modal::{ArticleModal, ConfirmModal};
use crate::ui::state::{ArticlesState, Modal};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Widget},
};

/// Longest content preview shown in a list row
const PREVIEW_CHARS: usize = 60;

pub struct ListScreen;

impl ListScreen {
    pub fn render(frame: &mut Frame, state: &mut ArticlesState, in_flight: usize) {
        let area = frame.area();

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(area);

        let title = if state.loading {
            " Articles (loading...) "
        } else {
            " Articles "
        };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(title);

        if state.articles.is_empty() {
            let message = if state.loading {
                "Loading articles..."
            } else {
                "No articles yet. Press N to write one."
            };
            let empty = Paragraph::new(message)
                .alignment(Alignment::Center)
                .style(Style::default().fg(Color::Gray))
                .block(block);
            frame.render_widget(empty, chunks[0]);
        } else {
            let items: Vec<ListItem> = state.articles.iter().map(article_row).collect();
            let list = List::new(items)
                .block(block)
                .highlight_style(
                    Style::default()
                        .bg(Color::Blue)
                        .add_modifier(Modifier::BOLD),
                )
                .highlight_symbol("> ");
            frame.render_stateful_widget(list, chunks[0], &mut state.list_state);
        }

        Footer::list(state.articles.len(), in_flight).render(chunks[1], frame.buffer_mut());

        match &state.modal {
            Modal::Closed => {}
            Modal::Creating(form) => ArticleModal::render(frame, form, "New Article"),
            Modal::Editing { form, .. } => ArticleModal::render(frame, form, "Edit Article"),
            Modal::ConfirmDelete { title, .. } => ConfirmModal::render(frame, title),
        }
    }
}

fn article_row(article: &Article) -> ListItem<'_> {
    let preview = preview(&article.content);
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                article.title.as_str(),
                Style::default()
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  by {}", article.author),
                Style::default().fg(Color::Yellow),
            ),
        ]),
        Line::from(Span::styled(
            format!("  {}", preview),
            Style::default().fg(Color::Gray),
        )),
    ])
}

/// First line of the content, cut to a fixed width
fn preview(content: &str) -> String {
    let first = content.lines().next().unwrap_or("");
    if first.chars().count() > PREVIEW_CHARS {
        let cut: String = first.chars().take(PREVIEW_CHARS).collect();
        format!("{}...", cut)
    } else if content.lines().count() > 1 {
        format!("{}...", first)
    } else {
        first.to_string()
    }
}
