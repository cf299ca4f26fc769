//! Data models for the dashboard.
//!
//! This module holds the snapshot types and the presentation-data assembly
//! that turns a snapshot into displayable widget values.
//!
//! ## Submodules
//!
//! - [`snapshot`]: Immutable system state for one render ([`SystemSnapshot`],
//!   [`SensorReading`], [`HealthSeriesPoint`])
//! - [`dashboard`]: Pure snapshot-to-widget mapping ([`Dashboard`] and the
//!   card/panel types it is built from)
//!
//! ## Data Flow
//!
//! ```text
//! SnapshotProvider::snapshot()
//!        │
//!        ▼
//! SystemSnapshot ──▶ Dashboard::assemble() ──▶ SummaryCard / SensorCard / ChartPanel
//! ```

pub mod dashboard;
pub mod snapshot;

pub use dashboard::{format_measurement, ChartPanel, Dashboard, SensorCard, SummaryCard};
pub use snapshot::{HealthSeriesPoint, SensorReading, SensorStatus, SystemSnapshot};
