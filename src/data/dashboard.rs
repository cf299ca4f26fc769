//! Presentation-data assembly.
//!
//! This module maps a [`SystemSnapshot`] into the widget values the UI
//! draws: summary cards, sensor cards, and the two chart panels. The mapping
//! is a pure function of the snapshot (no clock reads, no I/O), so two
//! assemblies of the same snapshot produce identical dashboards.

use super::snapshot::{HealthSeriesPoint, SensorStatus, SystemSnapshot};

/// Vertical padding applied around observed scores when computing y bounds.
const Y_BOUNDS_PAD: f64 = 2.0;

/// A labeled scalar card in the hero panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryCard {
    pub label: String,
    pub value: String,
    pub caption: String,
}

/// One card per sensor reading, with pre-formatted value text.
#[derive(Debug, Clone, PartialEq)]
pub struct SensorCard {
    pub title: String,
    pub value_text: String,
    pub unit: String,
    pub badge: SensorStatus,
}

/// Data for one health trend chart.
///
/// Points are `(epoch seconds, score)` pairs in the order they appeared in
/// the snapshot; assembly never reorders or drops them. An empty panel is
/// valid and rendered as a placeholder by the UI.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartPanel {
    pub title: String,
    pub subtitle: String,
    pub last_checked: String,
    pub points: Vec<(f64, f64)>,
    pub x_labels: Vec<String>,
    pub y_bounds: [f64; 2],
}

impl ChartPanel {
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// X-axis bounds covering all points.
    ///
    /// A single-point series gets an artificial one-hour span so the chart
    /// widget has a non-degenerate axis to draw.
    pub fn x_bounds(&self) -> [f64; 2] {
        match (self.points.first(), self.points.last()) {
            (Some(&(first, _)), Some(&(last, _))) if last > first => [first, last],
            (Some(&(only, _)), _) => [only - 1800.0, only + 1800.0],
            _ => [0.0, 1.0],
        }
    }
}

/// The full widget tree for one render.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub summary: Vec<SummaryCard>,
    pub sensors: Vec<SensorCard>,
    pub fish: ChartPanel,
    pub plant: ChartPanel,
}

impl Dashboard {
    /// Assemble the display widgets for a snapshot.
    pub fn assemble(snapshot: &SystemSnapshot) -> Self {
        let summary = vec![
            SummaryCard {
                label: "Fish Count".to_string(),
                value: snapshot.fish_count.to_string(),
                caption: "Tank A · Live".to_string(),
            },
            SummaryCard {
                label: "Plant Status".to_string(),
                value: snapshot.plant_status.clone(),
                caption: "Mint & leafy greens".to_string(),
            },
            SummaryCard {
                label: "System Health".to_string(),
                value: format!("{}%", format_measurement(snapshot.system_health_percent)),
                caption: "AI-assessed · Stable".to_string(),
            },
        ];

        let sensors = snapshot
            .sensors
            .iter()
            .map(|s| SensorCard {
                title: s.name.clone(),
                value_text: format_measurement(s.value),
                unit: s.unit.clone(),
                badge: s.status,
            })
            .collect();

        let last_checked = snapshot.timestamp.format("%I:%M:%S %p").to_string();

        Self {
            summary,
            sensors,
            fish: chart_panel(
                "Fish Health & Activity",
                "AI vision indicates: Healthy (94.2% confidence)",
                &last_checked,
                &snapshot.fish_health,
            ),
            plant: chart_panel(
                "Plant Health & Growth",
                "AI vision indicates: Fresh (91.8% confidence)",
                &last_checked,
                &snapshot.plant_health,
            ),
        }
    }
}

/// Build one chart panel from a health series.
///
/// Accepts any number of points; y bounds are padded around the observed
/// scores and clamped to the 0-100 score domain.
fn chart_panel(
    title: &str,
    subtitle: &str,
    last_checked: &str,
    series: &[HealthSeriesPoint],
) -> ChartPanel {
    let points: Vec<(f64, f64)> = series
        .iter()
        .map(|p| (p.timestamp.timestamp() as f64, p.score))
        .collect();

    let x_labels: Vec<String> =
        series.iter().map(|p| p.timestamp.format("%H:%M").to_string()).collect();

    let y_bounds = if series.is_empty() {
        [0.0, 100.0]
    } else {
        let min = series.iter().map(|p| p.score).fold(f64::INFINITY, f64::min);
        let max = series.iter().map(|p| p.score).fold(f64::NEG_INFINITY, f64::max);
        [(min - Y_BOUNDS_PAD).max(0.0), (max + Y_BOUNDS_PAD).min(100.0)]
    };

    ChartPanel {
        title: title.to_string(),
        subtitle: subtitle.to_string(),
        last_checked: last_checked.to_string(),
        points,
        x_labels,
        y_bounds,
    }
}

/// Format a measurement for display.
///
/// Trims trailing zeros so `7.39` renders as "7.39" and `15.0` as "15".
/// Non-finite values render as "N/A" rather than leaking "NaN"/"inf" text
/// into a card.
pub fn format_measurement(value: f64) -> String {
    if !value.is_finite() {
        return "N/A".to_string();
    }

    let text = format!("{:.2}", value);
    let trimmed = text.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::snapshot::SensorReading;
    use chrono::{Duration, Local, TimeZone};

    fn reference_snapshot() -> SystemSnapshot {
        // Fixed instant so assembly output is reproducible
        let now = Local.with_ymd_and_hms(2025, 6, 1, 14, 30, 0).unwrap();
        let series = |scores: &[f64]| {
            scores
                .iter()
                .enumerate()
                .map(|(i, &score)| HealthSeriesPoint {
                    timestamp: now - Duration::hours(20 - 4 * i as i64),
                    score,
                })
                .collect()
        };

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
            fish_health: series(&[94.0, 96.0, 95.0, 96.0, 97.0, 98.0]),
            plant_health: series(&[92.0, 93.0, 94.0, 93.0, 95.0, 96.0]),
        }
    }

    #[test]
    fn test_summary_has_exactly_three_labeled_cards() {
        let dashboard = Dashboard::assemble(&reference_snapshot());

        let labels: Vec<&str> = dashboard.summary.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Fish Count", "Plant Status", "System Health"]);
    }

    #[test]
    fn test_summary_values_for_reference_snapshot() {
        let dashboard = Dashboard::assemble(&reference_snapshot());

        assert_eq!(dashboard.summary[0].value, "12");
        assert_eq!(dashboard.summary[1].value, "Fresh");
        assert_eq!(dashboard.summary[2].value, "98%");
    }

    #[test]
    fn test_one_sensor_card_per_reading() {
        let snapshot = reference_snapshot();
        let dashboard = Dashboard::assemble(&snapshot);

        assert_eq!(dashboard.sensors.len(), snapshot.sensors.len());
        assert_eq!(dashboard.sensors.len(), 5);
    }

    #[test]
    fn test_sensor_card_formatting() {
        let dashboard = Dashboard::assemble(&reference_snapshot());

        let ph = &dashboard.sensors[0];
        assert_eq!(ph.title, "pH Level");
        assert_eq!(ph.value_text, "7.39");
        assert_eq!(ph.unit, "pH");
        assert_eq!(ph.badge, SensorStatus::Optimal);

        // Whole numbers lose their decimals
        assert_eq!(dashboard.sensors[1].value_text, "15");
        assert_eq!(dashboard.sensors[4].value_text, "23.3");
    }

    #[test]
    fn test_sensor_cards_preserve_input_order() {
        let snapshot = reference_snapshot();
        let dashboard = Dashboard::assemble(&snapshot);

        let titles: Vec<&str> = dashboard.sensors.iter().map(|c| c.title.as_str()).collect();
        let names: Vec<&str> = snapshot.sensors.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(titles, names);
    }

    #[test]
    fn test_non_finite_sensor_value_renders_na() {
        let mut snapshot = reference_snapshot();
        snapshot.sensors[0].value = f64::NAN;
        snapshot.sensors[1].value = f64::INFINITY;

        let dashboard = Dashboard::assemble(&snapshot);
        assert_eq!(dashboard.sensors[0].value_text, "N/A");
        assert_eq!(dashboard.sensors[1].value_text, "N/A");
    }

    #[test]
    fn test_chart_points_preserve_order() {
        let snapshot = reference_snapshot();
        let dashboard = Dashboard::assemble(&snapshot);

        assert_eq!(dashboard.fish.points.len(), 6);
        assert_eq!(dashboard.plant.points.len(), 6);

        // Timestamps stay non-decreasing and scores map positionally
        for window in dashboard.fish.points.windows(2) {
            assert!(window[0].0 <= window[1].0);
        }
        let scores: Vec<f64> = dashboard.fish.points.iter().map(|p| p.1).collect();
        assert_eq!(scores, [94.0, 96.0, 95.0, 96.0, 97.0, 98.0]);
    }

    #[test]
    fn test_chart_accepts_single_point() {
        let mut snapshot = reference_snapshot();
        snapshot.fish_health.truncate(1);

        let dashboard = Dashboard::assemble(&snapshot);
        assert_eq!(dashboard.fish.points.len(), 1);

        let [lo, hi] = dashboard.fish.x_bounds();
        assert!(lo < hi);
    }

    #[test]
    fn test_empty_series_yields_empty_panel() {
        let mut snapshot = reference_snapshot();
        snapshot.fish_health.clear();

        let dashboard = Dashboard::assemble(&snapshot);
        assert!(dashboard.fish.is_empty());
        assert_eq!(dashboard.fish.y_bounds, [0.0, 100.0]);
        assert_eq!(dashboard.fish.x_bounds(), [0.0, 1.0]);
    }

    #[test]
    fn test_y_bounds_padded_and_clamped() {
        let dashboard = Dashboard::assemble(&reference_snapshot());

        assert_eq!(dashboard.fish.y_bounds, [92.0, 100.0]);
        assert_eq!(dashboard.plant.y_bounds, [90.0, 98.0]);
    }

    #[test]
    fn test_assembly_is_idempotent() {
        let snapshot = reference_snapshot();

        let first = Dashboard::assemble(&snapshot);
        let second = Dashboard::assemble(&snapshot);
        assert_eq!(first, second);
    }

    #[test]
    fn test_empty_sensor_list_is_not_an_error() {
        let mut snapshot = reference_snapshot();
        snapshot.sensors.clear();

        let dashboard = Dashboard::assemble(&snapshot);
        assert!(dashboard.sensors.is_empty());
        // Summary cards are unaffected
        assert_eq!(dashboard.summary.len(), 3);
    }

    #[test]
    fn test_format_measurement() {
        assert_eq!(format_measurement(7.39), "7.39");
        assert_eq!(format_measurement(15.0), "15");
        assert_eq!(format_measurement(23.3), "23.3");
        assert_eq!(format_measurement(864.0), "864");
        assert_eq!(format_measurement(0.0), "0");
        assert_eq!(format_measurement(f64::NAN), "N/A");
        assert_eq!(format_measurement(f64::NEG_INFINITY), "N/A");
    }

    #[test]
    fn test_last_checked_uses_twelve_hour_clock() {
        let dashboard = Dashboard::assemble(&reference_snapshot());
        assert_eq!(dashboard.fish.last_checked, "02:30:00 PM");
        assert_eq!(dashboard.plant.last_checked, dashboard.fish.last_checked);
    }
}
