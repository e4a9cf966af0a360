//! Pure presentation mapping from snapshots to display-ready values.
//!
//! Everything here is a stateless function over immutable inputs: percentage
//! to arc fraction, minutes to "7h 52m", status to indicator direction, and
//! the per-dashboard [`DisplayModel`] the rendering layer consumes. The
//! rendering layer never reads raw snapshot fields directly.

use super::metrics::{HealthSnapshot, Status, TargetRange};

/// Direction of the trend indicator next to a metric row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorDirection {
    Up,
    Down,
}

/// The three dashboards the application renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dashboard {
    Strain,
    Recovery,
    Sleep,
}

impl Dashboard {
    /// Cycle to the next dashboard.
    pub fn next(self) -> Self {
        match self {
            Dashboard::Strain => Dashboard::Recovery,
            Dashboard::Recovery => Dashboard::Sleep,
            Dashboard::Sleep => Dashboard::Strain,
        }
    }

    /// Cycle to the previous dashboard.
    pub fn prev(self) -> Self {
        match self {
            Dashboard::Strain => Dashboard::Sleep,
            Dashboard::Recovery => Dashboard::Strain,
            Dashboard::Sleep => Dashboard::Recovery,
        }
    }

    /// Returns the tab label for this dashboard.
    pub fn label(&self) -> &'static str {
        match self {
            Dashboard::Strain => "Strain",
            Dashboard::Recovery => "Recovery",
            Dashboard::Sleep => "Sleep",
        }
    }

    /// All dashboards in tab order.
    pub fn all() -> [Dashboard; 3] {
        [Dashboard::Strain, Dashboard::Recovery, Dashboard::Sleep]
    }
}

/// One metric row beneath the ring: a title, a formatted value, and a trend
/// indicator.
#[derive(Debug, Clone, PartialEq)]
pub struct MetricRow {
    pub title: &'static str,
    pub value: String,
    pub direction: IndicatorDirection,
}

/// Display-ready values for one dashboard.
///
/// `arc` and `target_zone` are trim fractions in [0, 1]; the renderer rotates
/// the ring so fraction 0 sits at the 12 o'clock position.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplayModel {
    /// Small label under the percentage ("strain", "recovered", "quality").
    pub heading: &'static str,
    /// The score driving the ring, in [0, 100].
    pub score: f64,
    /// Filled portion of the ring, in [0, 1].
    pub arc: f64,
    /// Secondary target-zone band, as (start, end) trim fractions.
    pub target_zone: Option<(f64, f64)>,
    /// The two metric rows shown beneath the ring.
    pub rows: Vec<MetricRow>,
}

/// Map a percentage in [0, 100] to a ring trim fraction in [0, 1].
pub fn arc_fraction(percentage: f64) -> f64 {
    percentage / 100.0
}

/// Map a target range to the ring's trim-fraction space.
pub fn target_zone_arc(range: TargetRange) -> (f64, f64) {
    (range.low() / 100.0, range.high() / 100.0)
}

/// Format a minute count as "{h}h {m}m".
///
/// Fractional minutes truncate rather than round, so 89.9 minutes is
/// "1h 29m".
pub fn format_minutes(minutes: f64) -> String {
    let total = minutes as u64;
    format!("{}h {}m", total / 60, total % 60)
}

/// Map a status to the indicator direction shown next to a metric.
///
/// Only `HigherThanNormal` points up; `Normal` and `LowerThanNormal` both
/// point down, matching the original widget's two-state indicator (the
/// tri-state classification is preserved in [`Status`] itself).
pub fn indicator_direction(status: Status) -> IndicatorDirection {
    match status {
        Status::HigherThanNormal => IndicatorDirection::Up,
        Status::Normal | Status::LowerThanNormal => IndicatorDirection::Down,
    }
}

/// Build the display model for one dashboard from a snapshot.
pub fn present(snapshot: &HealthSnapshot, dashboard: Dashboard) -> DisplayModel {
    match dashboard {
        Dashboard::Strain => DisplayModel {
            heading: "strain",
            score: snapshot.strain_score(),
            arc: arc_fraction(snapshot.strain_score()),
            target_zone: Some(target_zone_arc(snapshot.strain_target_range())),
            rows: vec![
                row("Duration", format_minutes(snapshot.exercise_minutes().value()),
                    snapshot.exercise_minutes().status()),
                row("Calories", format!("{} kcal", snapshot.calories_burned().value() as u64),
                    snapshot.calories_burned().status()),
            ],
        },
        Dashboard::Recovery => DisplayModel {
            heading: "recovered",
            score: snapshot.recovery_score(),
            arc: arc_fraction(snapshot.recovery_score()),
            target_zone: None,
            rows: vec![
                row("HRV", format!("{} ms", snapshot.heart_rate_variability().value() as u64),
                    snapshot.heart_rate_variability().status()),
                row("RHR", format!("{} bpm", snapshot.resting_heart_rate().value() as u64),
                    snapshot.resting_heart_rate().status()),
            ],
        },
        Dashboard::Sleep => DisplayModel {
            heading: "quality",
            score: snapshot.sleep_score(),
            arc: arc_fraction(snapshot.sleep_score()),
            target_zone: None,
            rows: vec![
                row("In Bed", format_minutes(snapshot.time_in_bed_minutes().value()),
                    snapshot.time_in_bed_minutes().status()),
                row("Asleep", format_minutes(snapshot.time_asleep_minutes().value()),
                    snapshot.time_asleep_minutes().status()),
            ],
        },
    }
}

fn row(title: &'static str, value: String, status: Status) -> MetricRow {
    MetricRow {
        title,
        value,
        direction: indicator_direction(status),
    }
}
