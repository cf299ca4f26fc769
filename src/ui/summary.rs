//! Summary card row rendering.
//!
//! Draws the three hero cards (Fish Count, Plant Status, System Health)
//! assembled by [`crate::data::Dashboard`].

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    text::Line,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::SummaryCard;

/// Render the summary card row.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cards = &app.dashboard.summary;
    if cards.is_empty() {
        super::common::render_empty_state(frame, app, area, "Overview", "No summary data");
        return;
    }

    let constraints: Vec<Constraint> =
        cards.iter().map(|_| Constraint::Ratio(1, cards.len() as u32)).collect();
    let chunks = Layout::horizontal(constraints).split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        render_card(frame, app, card, *chunk);
    }
}

fn render_card(frame: &mut Frame, app: &App, card: &SummaryCard, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", card.label))
        .title_style(app.theme.label)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let lines = vec![
        Line::styled(card.value.clone(), app.theme.value),
        Line::styled(card.caption.clone(), app.theme.caption),
    ];

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
