use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent};

use crate::app::App;
use crate::commands::Command;

/// Poll for events with a timeout
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// Handle a key event
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    // If help is shown, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    match key.code {
        // Quit
        KeyCode::Char('q') | KeyCode::Esc => app.quit(),

        // Refresh the snapshot
        KeyCode::Char('r') => {
            app.refresh();
            app.set_status_message("Snapshot refreshed".to_string());
        }

        // Inert controls, dispatched through the command seam
        KeyCode::Char('s') => app.dispatch(Command::RunScan),
        KeyCode::Char('d') => app.dispatch(Command::DownloadReport),
        KeyCode::Char('o') => app.dispatch(Command::Logout),

        // Export
        KeyCode::Char('e') => {
            let export_path = std::path::PathBuf::from("aquawatch_export.json");
            match app.export_state(&export_path) {
                Ok(()) => {
                    app.set_status_message(format!("Exported to {}", export_path.display()));
                }
                Err(e) => {
                    app.set_status_message(format!("Export failed: {}", e));
                }
            }
        }

        // Help
        KeyCode::Char('?') => app.toggle_help(),

        _ => {}
    }
}
