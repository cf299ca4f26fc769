//! Application state and interaction logic.

use std::path::Path;

use anyhow::Result;

use crate::commands::{Command, CommandHandler};
use crate::data::{Dashboard, SystemSnapshot};
use crate::source::SnapshotProvider;
use crate::ui::Theme;

/// Main application state.
///
/// Holds the current snapshot and the dashboard assembled from it. The two
/// are only ever replaced together, in [`App::refresh`].
pub struct App {
    pub running: bool,
    pub show_help: bool,

    // Data source
    source: Box<dyn SnapshotProvider>,
    pub snapshot: SystemSnapshot,
    pub dashboard: Dashboard,

    // Inert control seam
    commands: Box<dyn CommandHandler>,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App, taking an initial snapshot from the provider.
    pub fn new(
        mut source: Box<dyn SnapshotProvider>,
        commands: Box<dyn CommandHandler>,
        theme: Theme,
    ) -> Self {
        let snapshot = source.snapshot();
        let dashboard = Dashboard::assemble(&snapshot);
        Self {
            running: true,
            show_help: false,
            source,
            snapshot,
            dashboard,
            commands,
            theme,
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Take a fresh snapshot and reassemble the dashboard.
    pub fn refresh(&mut self) {
        self.snapshot = self.source.snapshot();
        self.dashboard = Dashboard::assemble(&self.snapshot);
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Dispatch a dashboard command and surface the outcome.
    pub fn dispatch(&mut self, command: Command) {
        match self.commands.handle(command) {
            Ok(outcome) => self.set_status_message(outcome.message),
            Err(e) => self.set_status_message(format!("{} failed: {}", command.label(), e)),
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current snapshot and assembled summary to a JSON file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        use std::io::Write;

        let mut export = serde_json::Map::new();

        // Summary cards as label -> value
        let mut summary = serde_json::Map::new();
        for card in &self.dashboard.summary {
            summary.insert(card.label.clone(), serde_json::json!(card.value));
        }
        export.insert("summary".to_string(), serde_json::Value::Object(summary));

        // Sensor cards
        let sensors: Vec<serde_json::Value> = self
            .dashboard
            .sensors
            .iter()
            .map(|c| {
                serde_json::json!({
                    "name": c.title,
                    "value": c.value_text,
                    "unit": c.unit,
                    "status": c.badge.label(),
                })
            })
            .collect();
        export.insert("sensors".to_string(), serde_json::Value::Array(sensors));

        // Full snapshot for downstream tooling
        export.insert("snapshot".to_string(), serde_json::to_value(&self.snapshot)?);

        let json = serde_json::to_string_pretty(&serde_json::Value::Object(export))?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;

        Ok(())
    }
}
