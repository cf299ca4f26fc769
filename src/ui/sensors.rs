//! Sensor card grid rendering.
//!
//! One bordered card per reading: name in the title, formatted value with
//! unit, and a colored status badge. An empty reading list renders a
//! placeholder instead of collapsing the section.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::SensorCard;

/// Render the sensor card grid.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let cards = &app.dashboard.sensors;
    if cards.is_empty() {
        super::common::render_empty_state(
            frame,
            app,
            area,
            "Water & Environment",
            "No sensor readings available",
        );
        return;
    }

    let constraints: Vec<Constraint> =
        cards.iter().map(|_| Constraint::Ratio(1, cards.len() as u32)).collect();
    let chunks = Layout::horizontal(constraints).split(area);

    for (card, chunk) in cards.iter().zip(chunks.iter()) {
        render_card(frame, app, card, *chunk);
    }
}

fn render_card(frame: &mut Frame, app: &App, card: &SensorCard, area: Rect) {
    let block = Block::default()
        .title(format!(" {} ", card.title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let value_line = Line::from(vec![
        Span::styled(card.value_text.clone(), app.theme.value),
        Span::raw(" "),
        Span::styled(card.unit.clone(), app.theme.caption),
    ]);
    let badge_line = Line::from(Span::styled(
        card.badge.label(),
        app.theme.status_style(card.badge).add_modifier(Modifier::BOLD),
    ));

    frame.render_widget(Paragraph::new(vec![value_line, badge_line]).block(block), area);
}
