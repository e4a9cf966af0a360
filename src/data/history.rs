//! Historical score tracking for sparklines.

use std::collections::VecDeque;

use super::present::Dashboard;
use super::vitals::VitalsData;

/// Maximum number of historical samples to keep.
const MAX_HISTORY_SIZE: usize = 60;

/// Tracks the three dashboard scores over time for trend sparklines.
#[derive(Debug, Clone, Default)]
pub struct History {
    strain: VecDeque<f64>,
    recovery: VecDeque<f64>,
    sleep: VecDeque<f64>,
}

impl History {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the scores from a new data sample.
    pub fn record(&mut self, data: &VitalsData) {
        push_bounded(&mut self.strain, data.snapshot.strain_score());
        push_bounded(&mut self.recovery, data.snapshot.recovery_score());
        push_bounded(&mut self.sleep, data.snapshot.sleep_score());
    }

    /// Number of recorded samples.
    pub fn len(&self) -> usize {
        self.strain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strain.is_empty()
    }

    /// Sparkline data for a dashboard's score, normalized to 0-7 for 8 bar
    /// levels. Scores map absolutely (score 100 -> level 7), so a flat line
    /// means a steady score, not a missing one.
    pub fn score_sparkline(&self, dashboard: Dashboard) -> Vec<u8> {
        let scores = match dashboard {
            Dashboard::Strain => &self.strain,
            Dashboard::Recovery => &self.recovery,
            Dashboard::Sleep => &self.sleep,
        };
        scores
            .iter()
            .map(|&s| {
                let level = (s / 100.0 * 7.0) as u8;
                level.min(7)
            })
            .collect()
    }
}

fn push_bounded(values: &mut VecDeque<f64>, value: f64) {
    values.push_back(value);
    if values.len() > MAX_HISTORY_SIZE {
        values.pop_front();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::metrics::{HealthSnapshot, Status};

    fn data_with_strain(strain: f64) -> VitalsData {
        let snapshot = HealthSnapshot::builder()
            .sleep_score(75.0)
            .recovery_score(60.0)
            .strain_score(strain)
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
    fn test_record_and_sparkline() {
        let mut history = History::new();
        assert!(history.is_empty());

        history.record(&data_with_strain(0.0));
        history.record(&data_with_strain(50.0));
        history.record(&data_with_strain(100.0));

        assert_eq!(history.len(), 3);
        assert_eq!(history.score_sparkline(Dashboard::Strain), vec![0, 3, 7]);
        // Other dashboards track their own scores
        assert_eq!(history.score_sparkline(Dashboard::Sleep), vec![5, 5, 5]);
    }

    #[test]
    fn test_history_is_bounded() {
        let mut history = History::new();
        for _ in 0..(MAX_HISTORY_SIZE + 10) {
            history.record(&data_with_strain(40.0));
        }
        assert_eq!(history.len(), MAX_HISTORY_SIZE);
    }

    #[test]
    fn test_sparkline_levels_clamped() {
        let mut history = History::new();
        history.record(&data_with_strain(100.0));
        assert!(history
            .score_sparkline(Dashboard::Strain)
            .iter()
            .all(|&l| l <= 7));
    }
}
