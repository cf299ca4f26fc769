//! Simulated data source.
//!
//! Produces the demo snapshot: fixed sensor readings and health scores
//! stamped with the current wall-clock time. The clock is read once per
//! snapshot; the six historical points are backward offsets from that
//! instant.

use chrono::{DateTime, Duration, Local};

use super::SnapshotProvider;
use crate::data::{HealthSeriesPoint, SensorReading, SensorStatus, SystemSnapshot};

/// Hours back from "now" for the six series points, oldest first.
const SERIES_HOURS_BACK: [i64; 6] = [20, 16, 12, 8, 4, 0];

const FISH_SCORES: [f64; 6] = [94.0, 96.0, 95.0, 96.0, 97.0, 98.0];
const PLANT_SCORES: [f64; 6] = [92.0, 93.0, 94.0, 93.0, 95.0, 96.0];

/// A snapshot provider backed by demo constants.
#[derive(Debug)]
pub struct SimulatedSource {
    description: String,
}

impl Default for SimulatedSource {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedSource {
    pub fn new() -> Self {
        Self {
            description: "simulated: demo aquaponics data".to_string(),
        }
    }

    /// Build the snapshot for a given instant.
    ///
    /// Split out from [`SnapshotProvider::snapshot`] so callers can pin the
    /// clock; every field except the timestamps is constant.
    pub fn snapshot_at(now: DateTime<Local>) -> SystemSnapshot {
        SystemSnapshot {
            timestamp: now,
            fish_count: 12,
            plant_status: "Fresh".to_string(),
            system_health_percent: 98.0,
            sensors: vec![
                SensorReading::new("pH Level", 7.39, "pH", SensorStatus::Optimal),
                SensorReading::new("Turbidity", 15.0, "NTU", SensorStatus::Optimal),
                SensorReading::new("Humidity", 71.0, "%", SensorStatus::Optimal),
                SensorReading::new("Light Intensity", 864.0, "lux", SensorStatus::Optimal),
                SensorReading::new("Temperature", 23.3, "°C", SensorStatus::Optimal),
            ],
            fish_health: demo_series(now, &FISH_SCORES),
            plant_health: demo_series(now, &PLANT_SCORES),
        }
    }
}

/// Build a health series ending at `now`, oldest point first.
fn demo_series(now: DateTime<Local>, scores: &[f64; 6]) -> Vec<HealthSeriesPoint> {
    SERIES_HOURS_BACK
        .iter()
        .zip(scores.iter())
        .map(|(&hours, &score)| HealthSeriesPoint {
            timestamp: now - Duration::hours(hours),
            score,
        })
        .collect()
}

impl SnapshotProvider for SimulatedSource {
    fn snapshot(&mut self) -> SystemSnapshot {
        Self::snapshot_at(Local::now())
    }

    fn description(&self) -> &str {
        &self.description
    }
}
