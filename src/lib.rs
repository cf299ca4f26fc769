// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # aquawatch
//!
//! A terminal dashboard for monitoring a demo aquaponics setup (fish tank +
//! plant bed).
//!
//! All displayed values are simulated: sensor readings and AI health scores
//! are demo constants stamped with the current wall-clock time. There is no
//! data acquisition, persistence, or inference — the interesting part is the
//! snapshot-to-widget pipeline, which is built so a real data source could
//! replace the simulated one without touching the view layer.
//!
//! ## Architecture
//!
//! The crate is organized into five main modules:
//!
//! ```text
//! ┌───────────────────────────────────────────────────────────────┐
//! │                         Application                           │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌──────────┐  │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal │  │
//! │  │ (state) │    │(assembly)│    │(drawing)│    │          │  │
//! │  └────┬────┘    └──────────┘    └─────────┘    └──────────┘  │
//! │       │
//! │       ├──▶ ┌──────────┐
//! │       │    │  source  │◀── SimulatedSource
//! │       │    │ (input)  │
//! │       │    └──────────┘
//! │       └──▶ ┌──────────┐
//! │            │ commands │◀── NoopHandler (inert controls)
//! │            └──────────┘
//! └───────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, refresh, and status messages
//! - **[`source`]**: Snapshot provider abstraction ([`SnapshotProvider`]
//!   trait) with the simulated implementation
//! - **[`data`]**: Snapshot types and the pure snapshot-to-widget assembly
//!   ([`Dashboard`])
//! - **[`ui`]**: Terminal rendering using ratatui - summary cards, sensor
//!   cards, health charts, and theme support
//! - **[`commands`]**: Capability seam for the inert Logout / Run Scan /
//!   Download Report controls
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Launch the dashboard
//! aquawatch
//!
//! # Write the current snapshot to JSON and exit
//! aquawatch --export snapshot.json
//! ```
//!
//! ### As a library
//!
//! ```
//! use aquawatch::{App, NoopHandler, SimulatedSource, Theme};
//!
//! let app = App::new(
//!     Box::new(SimulatedSource::new()),
//!     Box::new(NoopHandler),
//!     Theme::dark(),
//! );
//! assert_eq!(app.dashboard.summary.len(), 3);
//! ```

pub mod app;
pub mod commands;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use commands::{Command, CommandHandler, CommandOutcome, NoopHandler};
pub use data::{
    ChartPanel, Dashboard, HealthSeriesPoint, SensorCard, SensorReading, SensorStatus,
    SummaryCard, SystemSnapshot,
};
pub use source::{SimulatedSource, SnapshotProvider};
pub use ui::{Theme, ThemeChoice};
