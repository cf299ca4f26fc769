//! Terminal UI rendering using ratatui.
//!
//! This module contains all rendering logic for the dashboard. Each section
//! of the page is implemented in its own submodule with a `render` function.
//!
//! ## Submodules
//!
//! - [`summary`]: Hero card row (Fish Count, Plant Status, System Health)
//! - [`sensors`]: Sensor card grid with status badges
//! - [`charts`]: Fish and plant health trend line charts
//! - [`common`]: Shared components (header, status bar, help overlay,
//!   empty-state placeholder)
//! - [`theme`]: Light/dark theme support with terminal auto-detection
//!
//! ## Rendering Architecture
//!
//! The main loop in `main.rs` draws the fixed page layout:
//!
//! ```text
//! ┌──────────────────────────────────────┐
//! │ Header (common::render_header)       │
//! ├──────────────────────────────────────┤
//! │ Summary cards (summary::render)      │
//! ├──────────────────────────────────────┤
//! │ Sensor cards (sensors::render)       │
//! ├──────────────────────────────────────┤
//! │ Health charts (charts::render)       │
//! ├──────────────────────────────────────┤
//! │ Status bar (common::render_status)   │
//! └──────────────────────────────────────┘
//! ```

pub mod charts;
pub mod common;
pub mod sensors;
pub mod summary;
pub mod theme;

pub use theme::{Theme, ThemeChoice};

use ratatui::{
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

use crate::app::App;

/// Minimum terminal size for a usable display.
const MIN_WIDTH: u16 = 70;
const MIN_HEIGHT: u16 = 22;

/// Render the full dashboard page.
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Check for minimum terminal size
    if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
        let msg = format!(
            "Terminal too small: {}x{}\nMinimum: {}x{}\n\nResize to continue",
            area.width, area.height, MIN_WIDTH, MIN_HEIGHT
        );
        let paragraph = Paragraph::new(msg)
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::Yellow));
        let centered = Rect::new(0, area.height.saturating_sub(4) / 2, area.width, 5);
        frame.render_widget(paragraph, centered);
        return;
    }

    let chunks = Layout::vertical([
        Constraint::Length(1), // Header bar
        Constraint::Length(4), // Summary cards
        Constraint::Length(4), // Sensor cards
        Constraint::Min(10),   // Health charts
        Constraint::Length(1), // Status bar
    ])
    .split(area);

    common::render_header(frame, app, chunks[0]);
    summary::render(frame, app, chunks[1]);
    sensors::render(frame, app, chunks[2]);
    charts::render(frame, app, chunks[3]);
    common::render_status_bar(frame, app, chunks[4]);

    // Render help overlay if active
    if app.show_help {
        common::render_help(frame, app, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::NoopHandler;
    use crate::source::SimulatedSource;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::new(
            Box::new(SimulatedSource::new()),
            Box::new(NoopHandler),
            Theme::dark(),
        )
    }

    fn draw(app: &App, width: u16, height: u16) -> ratatui::buffer::Buffer {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal.backend().buffer().clone()
    }

    fn buffer_text(buffer: &ratatui::buffer::Buffer) -> String {
        buffer.content().iter().map(|cell| cell.symbol()).collect()
    }

    #[test]
    fn test_render_full_dashboard() {
        let app = test_app();
        let text = buffer_text(&draw(&app, 120, 40));

        assert!(text.contains("Fish Count"));
        assert!(text.contains("Plant Status"));
        assert!(text.contains("System Health"));
        assert!(text.contains("pH Level"));
        assert!(text.contains("OPTIMAL"));
        assert!(text.contains("Fish Health & Activity"));
        assert!(text.contains("Plant Health & Growth"));
    }

    #[test]
    fn test_render_empty_sensor_list_shows_placeholder() {
        let mut app = test_app();
        app.snapshot.sensors.clear();
        app.dashboard = crate::data::Dashboard::assemble(&app.snapshot);

        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("No sensor readings available"));
    }

    #[test]
    fn test_render_empty_series_shows_placeholder() {
        let mut app = test_app();
        app.snapshot.fish_health.clear();
        app.dashboard = crate::data::Dashboard::assemble(&app.snapshot);

        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("No health data yet"));
        // The plant chart still renders
        assert!(text.contains("Plant Health & Growth"));
    }

    #[test]
    fn test_render_small_terminal_shows_resize_hint() {
        let app = test_app();
        let text = buffer_text(&draw(&app, 40, 10));
        assert!(text.contains("Terminal too small"));
    }

    #[test]
    fn test_render_help_overlay() {
        let mut app = test_app();
        app.show_help = true;

        let text = buffer_text(&draw(&app, 120, 40));
        assert!(text.contains("Keyboard Shortcuts"));
    }
}
