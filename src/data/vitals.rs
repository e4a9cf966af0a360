//! Processed vitals data ready for display.
//!
//! Wraps a validated snapshot with its capture instant so the application
//! can distinguish fresh data from stale data instead of silently presenting
//! old values as current.

use std::time::{Duration, Instant};

use super::metrics::{HealthSnapshot, Status, ValueWithStatus};
use super::present::{present, Dashboard, DisplayModel};

/// A validated snapshot paired with the instant it was received.
#[derive(Debug, Clone)]
pub struct VitalsData {
    pub snapshot: HealthSnapshot,
    pub last_updated: Instant,
}

impl VitalsData {
    /// Wrap a snapshot received just now.
    pub fn from_snapshot(snapshot: HealthSnapshot) -> Self {
        Self {
            snapshot,
            last_updated: Instant::now(),
        }
    }

    /// Whether the snapshot is older than the given threshold.
    pub fn is_stale(&self, threshold: Duration) -> bool {
        self.last_updated.elapsed() > threshold
    }

    /// Build the display model for one dashboard.
    pub fn display(&self, dashboard: Dashboard) -> DisplayModel {
        present(&self.snapshot, dashboard)
    }

    /// The six detail metrics with their field names, in display order.
    pub fn metrics(&self) -> [(&'static str, ValueWithStatus); 6] {
        [
            ("time_asleep_minutes", self.snapshot.time_asleep_minutes()),
            ("time_in_bed_minutes", self.snapshot.time_in_bed_minutes()),
            ("resting_heart_rate", self.snapshot.resting_heart_rate()),
            (
                "heart_rate_variability",
                self.snapshot.heart_rate_variability(),
            ),
            ("exercise_minutes", self.snapshot.exercise_minutes()),
            ("calories_burned", self.snapshot.calories_burned()),
        ]
    }

    /// Count of metrics currently above their baseline.
    pub fn elevated_count(&self) -> usize {
        self.metrics()
            .iter()
            .filter(|(_, m)| m.status() == Status::HigherThanNormal)
            .count()
    }

    /// Count of metrics currently below their baseline.
    pub fn lowered_count(&self) -> usize {
        self.metrics()
            .iter()
            .filter(|(_, m)| m.status() == Status::LowerThanNormal)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> VitalsData {
        let snapshot = HealthSnapshot::builder()
            .sleep_score(75.0)
            .recovery_score(60.0)
            .strain_score(40.0)
            .strain_target_range(50.0, 60.0)
            .time_asleep_minutes(472.0, Status::LowerThanNormal)
            .time_in_bed_minutes(482.0, Status::HigherThanNormal)
            .resting_heart_rate(59.0, Status::LowerThanNormal)
            .heart_rate_variability(85.0, Status::HigherThanNormal)
            .exercise_minutes(75.0, Status::HigherThanNormal)
            .calories_burned(654.0, Status::LowerThanNormal)
            .build()
            .unwrap();
        VitalsData::from_snapshot(snapshot)
    }

    #[test]
    fn test_fresh_data_is_not_stale() {
        let data = sample();
        assert!(!data.is_stale(Duration::from_secs(120)));
        assert!(data.is_stale(Duration::from_nanos(0)));
    }

    #[test]
    fn test_status_counts() {
        let data = sample();
        assert_eq!(data.elevated_count(), 3);
        assert_eq!(data.lowered_count(), 3);
    }

    #[test]
    fn test_metrics_order() {
        let data = sample();
        let metrics = data.metrics();
        assert_eq!(metrics[0].0, "time_asleep_minutes");
        assert_eq!(metrics[0].1.value(), 472.0);
        assert_eq!(metrics[5].0, "calories_burned");
        assert_eq!(metrics[5].1.value(), 654.0);
    }

    #[test]
    fn test_display_delegates_to_present() {
        let data = sample();
        let model = data.display(Dashboard::Strain);
        assert_eq!(model.score, 40.0);
    }
}
