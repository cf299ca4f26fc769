//! Dashboard commands.
//!
//! The Logout, Run Scan, and Download Report controls are inert in this
//! build. They are still dispatched through the [`CommandHandler`] trait so
//! a later implementation can wire real behavior without changing the view
//! layer or key handling.

use anyhow::Result;

/// A user-invoked dashboard action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Logout,
    RunScan,
    DownloadReport,
}

impl Command {
    /// Returns the display label for this command.
    pub fn label(&self) -> &'static str {
        match self {
            Command::Logout => "Logout",
            Command::RunScan => "Run Scan",
            Command::DownloadReport => "Download Report",
        }
    }
}

/// Result of handling a command, surfaced as a transient status message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutcome {
    pub message: String,
}

impl CommandOutcome {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Capability seam for dashboard actions.
pub trait CommandHandler: Send {
    fn handle(&mut self, command: Command) -> Result<CommandOutcome>;
}

/// Handler that acknowledges every command without doing anything.
#[derive(Debug, Default)]
pub struct NoopHandler;

impl CommandHandler for NoopHandler {
    fn handle(&mut self, command: Command) -> Result<CommandOutcome> {
        Ok(CommandOutcome::new(format!(
            "{}: not available in this preview build",
            command.label()
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(Command::Logout.label(), "Logout");
        assert_eq!(Command::RunScan.label(), "Run Scan");
        assert_eq!(Command::DownloadReport.label(), "Download Report");
    }

    #[test]
    fn test_noop_handler_acknowledges_every_command() {
        let mut handler = NoopHandler;

        for command in [Command::Logout, Command::RunScan, Command::DownloadReport] {
            let outcome = handler.handle(command).unwrap();
            assert!(outcome.message.starts_with(command.label()));
        }
    }
}
