//! Common UI components shared across sections.
//!
//! This module contains the header bar, status bar, help overlay, and the
//! empty-state placeholder used by the card and chart sections.

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::app::App;
use crate::data::SensorStatus;

/// Render the header bar with the brand line and overall condition.
///
/// Displays: status indicator, title, tagline, snapshot time.
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    // Overall condition is the worst badge across sensors
    let worst = app
        .snapshot
        .sensors
        .iter()
        .map(|s| s.status)
        .max()
        .unwrap_or(SensorStatus::Optimal);
    let status_style = app.theme.status_style(worst);

    let line = Line::from(vec![
        Span::styled(" ● ", status_style),
        Span::styled("AQUAPONICS ", Style::default().add_modifier(Modifier::BOLD)),
        Span::raw("│ Realtime ecosystem monitoring · AI-assisted insights │ "),
        Span::styled(
            app.snapshot.timestamp.format("%H:%M:%S").to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

/// Render the status bar at the bottom.
///
/// Shows the data source, time of the last snapshot, and available controls.
/// Temporary status messages (command acknowledgements, export results)
/// take precedence.
pub fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    if let Some(msg) = app.get_status_message() {
        let paragraph =
            Paragraph::new(format!(" {} ", msg)).style(Style::default().fg(app.theme.highlight));
        frame.render_widget(paragraph, area);
        return;
    }

    let status = format!(
        " {} | Snapshot {} | r:refresh s:scan d:report o:logout e:export ?:help q:quit",
        app.source_description(),
        app.snapshot.timestamp.format("%H:%M:%S"),
    );

    let paragraph = Paragraph::new(status).style(Style::default().add_modifier(Modifier::DIM));
    frame.render_widget(paragraph, area);
}

/// Render the help overlay with keyboard shortcuts.
///
/// Displayed as a centered modal on top of the dashboard.
pub fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let help_text = vec![
        Line::from(vec![Span::styled("Keyboard Shortcuts", app.theme.label)]),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Dashboard",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  r         Refresh snapshot"),
        Line::from("  e         Export snapshot to JSON"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " Controls (preview build: inert)",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  s         Run Scan"),
        Line::from("  d         Download Report"),
        Line::from("  o         Logout"),
        Line::from(""),
        Line::from(vec![Span::styled(
            " General",
            Style::default().add_modifier(Modifier::BOLD),
        )]),
        Line::from("  ?         Toggle this help"),
        Line::from("  q         Quit"),
        Line::from(""),
        Line::from(vec![Span::styled(
            "Press any key to close",
            Style::default().add_modifier(Modifier::DIM),
        )]),
    ];

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.highlight));

    let paragraph = Paragraph::new(help_text).block(block);

    // Center the help overlay - responsive to terminal size
    let help_width = 42u16.min(area.width.saturating_sub(4));
    let help_height = 20u16.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(help_width)) / 2;
    let y = area.y + (area.height.saturating_sub(help_height)) / 2;
    let help_area = Rect::new(x, y, help_width, help_height);

    // Clear the area behind the help
    frame.render_widget(ratatui::widgets::Clear, help_area);
    frame.render_widget(paragraph, help_area);
}

/// Render an empty-state placeholder inside a bordered block.
///
/// Used when a sensor list or health series is empty; the section keeps its
/// footprint instead of collapsing or panicking.
pub fn render_empty_state(frame: &mut Frame, app: &App, area: Rect, title: &str, message: &str) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_type(app.theme.border_type)
        .border_style(Style::default().fg(app.theme.border));

    let paragraph = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(app.theme.caption)
        .block(block);

    frame.render_widget(paragraph, area);
}
