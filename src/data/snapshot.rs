//! Snapshot types describing one render's worth of system state.
//!
//! A [`SystemSnapshot`] is an immutable bundle of everything the dashboard
//! displays: scalar summary values, the current sensor readings, and the two
//! health-score series. Snapshots are rebuilt on every refresh and never
//! persisted; serde support exists for the JSON export mode.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Condition badge for a sensor reading.
///
/// The simulated data source only ever emits [`SensorStatus::Optimal`], but
/// the badge rendering and theme styling support all three levels so a real
/// thresholding source can plug in without UI changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum SensorStatus {
    Optimal,
    Warning,
    Critical,
}

impl SensorStatus {
    /// Returns the badge text for display.
    pub fn label(&self) -> &'static str {
        match self {
            SensorStatus::Optimal => "OPTIMAL",
            SensorStatus::Warning => "WARNING",
            SensorStatus::Critical => "CRITICAL",
        }
    }
}

/// One named environmental measurement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    pub name: String,
    pub value: f64,
    pub unit: String,
    pub status: SensorStatus,
}

impl SensorReading {
    pub fn new(name: &str, value: f64, unit: &str, status: SensorStatus) -> Self {
        Self {
            name: name.to_string(),
            value,
            unit: unit.to_string(),
            status,
        }
    }
}

/// One (time, score) point on a health trend line. Scores are 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HealthSeriesPoint {
    pub timestamp: DateTime<Local>,
    pub score: f64,
}

/// Everything needed for one dashboard render.
///
/// Constructed by a [`crate::source::SnapshotProvider`], consumed by
/// [`crate::data::Dashboard::assemble`]. Construction cannot fail.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemSnapshot {
    /// Wall-clock instant the snapshot was taken.
    pub timestamp: DateTime<Local>,
    pub fish_count: u32,
    pub plant_status: String,
    pub system_health_percent: f64,
    pub sensors: Vec<SensorReading>,
    /// Fish health scores, oldest first.
    pub fish_health: Vec<HealthSeriesPoint>,
    /// Plant health scores, oldest first.
    pub plant_health: Vec<HealthSeriesPoint>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(SensorStatus::Optimal.label(), "OPTIMAL");
        assert_eq!(SensorStatus::Warning.label(), "WARNING");
        assert_eq!(SensorStatus::Critical.label(), "CRITICAL");
    }

    #[test]
    fn test_status_ordering_worst_last() {
        assert!(SensorStatus::Optimal < SensorStatus::Warning);
        assert!(SensorStatus::Warning < SensorStatus::Critical);
    }

    #[test]
    fn test_snapshot_round_trips_through_json() {
        let snapshot = SystemSnapshot {
            timestamp: Local::now(),
            fish_count: 12,
            plant_status: "Fresh".to_string(),
            system_health_percent: 98.0,
            sensors: vec![SensorReading::new("pH Level", 7.39, "pH", SensorStatus::Optimal)],
            fish_health: vec![HealthSeriesPoint {
                timestamp: Local::now(),
                score: 94.0,
            }],
            plant_health: vec![],
        };

        let json = serde_json::to_string(&snapshot).unwrap();
        let back: SystemSnapshot = serde_json::from_str(&json).unwrap();
        assert_eq!(back, snapshot);
    }
}
