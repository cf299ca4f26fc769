//! Snapshot provider abstraction.
//!
//! The app never constructs a [`crate::data::SystemSnapshot`] directly; it
//! asks a [`SnapshotProvider`] for one. The only shipped implementation is
//! [`SimulatedSource`], which stamps demo constants with the current time.
//! A real acquisition backend (hardware sensors, an inference service) can
//! replace it without touching the assembly or rendering layers.

mod simulated;

pub use simulated::SimulatedSource;

use std::fmt::Debug;

use crate::data::SystemSnapshot;

/// Trait for producing system snapshots.
///
/// # Example
///
/// ```
/// use aquawatch::{SimulatedSource, SnapshotProvider};
///
/// let mut source = SimulatedSource::new();
/// let snapshot = source.snapshot();
/// assert_eq!(snapshot.sensors.len(), 5);
/// ```
pub trait SnapshotProvider: Send + Debug {
    /// Produce a fresh snapshot. Must not fail; providers with fallible
    /// backends should fall back to their last known-good state.
    fn snapshot(&mut self) -> SystemSnapshot;

    /// Returns a human-readable description of the provider.
    ///
    /// Used for display in the status bar.
    fn description(&self) -> &str;
}
