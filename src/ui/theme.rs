//! Theme configuration for the TUI.
//!
//! Supports light and dark themes with automatic terminal detection.

use clap::ValueEnum;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::block::BorderType;

use crate::data::SensorStatus;

/// Theme selection from the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ThemeChoice {
    /// Detect from the terminal background luminance.
    #[default]
    Auto,
    Dark,
    Light,
}

/// Color and style theme for the TUI.
///
/// Use [`Theme::auto_detect()`] for automatic theme selection based on
/// terminal background, or [`Theme::dark()`]/[`Theme::light()`] explicitly.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Accent color for highlights and active elements.
    pub highlight: Color,
    /// Color for the Optimal sensor badge.
    pub optimal: Color,
    /// Color for the Warning sensor badge.
    pub warning: Color,
    /// Color for the Critical sensor badge.
    pub critical: Color,
    /// Color for borders and separators.
    pub border: Color,
    /// Style for card labels and section headers.
    pub label: Style,
    /// Style for the big value text on cards.
    pub value: Style,
    /// Style for sub-captions and secondary text.
    pub caption: Style,
    /// Border style (rounded, plain, etc.).
    pub border_type: BorderType,
}

impl Theme {
    /// Create a dark theme suitable for dark terminal backgrounds.
    pub fn dark() -> Self {
        Self {
            highlight: Color::Cyan,
            optimal: Color::Green,
            warning: Color::Yellow,
            critical: Color::Red,
            border: Color::Gray,
            label: Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            value: Style::default().add_modifier(Modifier::BOLD),
            caption: Style::default().fg(Color::Gray).add_modifier(Modifier::DIM),
            border_type: BorderType::Rounded,
        }
    }

    /// Create a light theme suitable for light terminal backgrounds.
    pub fn light() -> Self {
        Self {
            highlight: Color::Blue,
            optimal: Color::Green,
            warning: Color::Yellow,
            critical: Color::Red,
            border: Color::DarkGray,
            label: Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
            value: Style::default().add_modifier(Modifier::BOLD),
            caption: Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
            border_type: BorderType::Rounded,
        }
    }

    /// Auto-detect based on terminal background
    pub fn auto_detect() -> Self {
        // Use terminal-light crate to detect background luminance
        match terminal_light::luma() {
            Ok(luma) if luma > 0.5 => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Resolve a command-line theme choice.
    pub fn from_choice(choice: ThemeChoice) -> Self {
        match choice {
            ThemeChoice::Auto => Self::auto_detect(),
            ThemeChoice::Dark => Self::dark(),
            ThemeChoice::Light => Self::light(),
        }
    }

    /// Get the badge style for a sensor status
    pub fn status_style(&self, status: SensorStatus) -> Style {
        match status {
            SensorStatus::Optimal => Style::default().fg(self.optimal),
            SensorStatus::Warning => Style::default().fg(self.warning),
            SensorStatus::Critical => {
                Style::default().fg(self.critical).add_modifier(Modifier::BOLD)
            }
        }
    }
}
