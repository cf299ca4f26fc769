//! Health trend chart rendering.
//!
//! Draws the two [`crate::data::ChartPanel`]s (fish and plant) side by
//! side as line charts. Timestamps are the x axis, scores the y axis; the
//! renderer draws whatever points the assembly produced without reordering
//! or dropping any.

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::Style,
    symbols::Marker,
    text::{Line, Span},
    widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::{format_measurement, ChartPanel};

/// Render the fish and plant health panels side by side.
pub fn render(frame: &mut Frame, app: &App, area: Rect) {
    let chunks =
        Layout::horizontal([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)]).split(area);

    render_panel(frame, app, &app.dashboard.fish, chunks[0]);
    render_panel(frame, app, &app.dashboard.plant, chunks[1]);
}

fn render_panel(frame: &mut Frame, app: &App, panel: &ChartPanel, area: Rect) {
    if panel.is_empty() {
        super::common::render_empty_state(frame, app, area, &panel.title, "No health data yet");
        return;
    }

    let block = Block::default()
        .title(format!(" {} ", panel.title))
        .title_style(app.theme.label)
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::vertical([
        Constraint::Length(1), // AI verdict line
        Constraint::Length(1), // Last checked line
        Constraint::Min(4),    // Chart
    ])
    .split(inner);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(panel.subtitle.clone(), app.theme.caption))),
        chunks[0],
    );
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Last checked: {}", panel.last_checked),
            app.theme.caption,
        ))),
        chunks[1],
    );

    let datasets = vec![Dataset::default()
        .marker(Marker::Braille)
        .graph_type(GraphType::Line)
        .style(Style::default().fg(app.theme.optimal))
        .data(&panel.points)];

    let x_labels: Vec<Span> = edge_labels(&panel.x_labels)
        .into_iter()
        .map(|l| Span::styled(l, app.theme.caption))
        .collect();
    let y_labels: Vec<Span> = panel
        .y_bounds
        .iter()
        .map(|&b| Span::styled(format_measurement(b), app.theme.caption))
        .collect();

    let chart = Chart::new(datasets)
        .x_axis(
            Axis::default()
                .bounds(panel.x_bounds())
                .labels(x_labels)
                .style(Style::default().fg(app.theme.border)),
        )
        .y_axis(
            Axis::default()
                .bounds(panel.y_bounds)
                .labels(y_labels)
                .style(Style::default().fg(app.theme.border)),
        );

    frame.render_widget(chart, chunks[2]);
}

/// Pick first, middle, and last labels so the axis stays readable.
fn edge_labels(labels: &[String]) -> Vec<String> {
    match labels.len() {
        0 => Vec::new(),
        1 => vec![labels[0].clone()],
        2 => vec![labels[0].clone(), labels[1].clone()],
        n => vec![
            labels[0].clone(),
            labels[n / 2].clone(),
            labels[n - 1].clone(),
        ],
    }
}
