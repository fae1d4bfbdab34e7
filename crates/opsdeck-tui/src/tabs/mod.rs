pub mod chat;
pub mod credentials;
pub mod dashboard;
pub mod feedback;
pub mod integrations;
pub mod pricing;
pub mod support;
pub mod use_cases;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use opsdeck_core::types::StatCard;

use crate::theme::Theme;

/// Row of bordered stat cards, used by Dashboard, Credentials and Feedback.
pub fn render_stat_cards(frame: &mut Frame, area: Rect, cards: &[(StatCard, ratatui::style::Color)], theme: &Theme) {
    if cards.is_empty() {
        return;
    }
    let constraints: Vec<Constraint> = cards
        .iter()
        .map(|_| Constraint::Ratio(1, cards.len() as u32))
        .collect();
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for (i, (card, color)) in cards.iter().enumerate() {
        let block = Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", card.title))
            .border_style(Style::default().fg(*color));
        let lines = vec![
            Line::from(Span::styled(
                card.value.clone(),
                Style::default().fg(*color).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(card.change.clone(), theme.muted_style())),
        ];
        frame.render_widget(Paragraph::new(lines).block(block), cols[i]);
    }
}
