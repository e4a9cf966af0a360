//! Builtin fixed-value data source.
//!
//! The current-scope metric catalog: with no backing store, every poll yields
//! the same snapshot. A real acquisition pipeline replaces this source behind
//! the same trait and must preserve the snapshot invariants.

use crate::data::{HealthSnapshot, Status};

use super::MetricSource;

/// A data source that returns a fixed snapshot.
///
/// Synchronous and infallible: `poll()` always yields a complete snapshot,
/// and the values are constant until a different source is composed in.
#[derive(Debug)]
pub struct BuiltinSource {
    description: &'static str,
}

impl BuiltinSource {
    pub fn new() -> Self {
        Self {
            description: "builtin",
        }
    }

    /// The fixed snapshot this source serves.
    ///
    /// The values are valid by construction, so the builder cannot fail here.
    pub fn snapshot() -> HealthSnapshot {
        HealthSnapshot::builder()
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
            .expect("builtin snapshot values satisfy every invariant")
    }
}

impl Default for BuiltinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MetricSource for BuiltinSource {
    fn poll(&mut self) -> Option<HealthSnapshot> {
        Some(Self::snapshot())
    }

    fn description(&self) -> &str {
        self.description
    }

    fn error(&self) -> Option<&str> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::format_minutes;

    #[test]
    fn test_builtin_values() {
        let mut source = BuiltinSource::new();
        let snapshot = source.poll().unwrap();

        assert_eq!(snapshot.strain_score(), 40.0);
        assert_eq!(snapshot.exercise_minutes().value(), 75.0);
        assert_eq!(
            snapshot.exercise_minutes().status(),
            Status::HigherThanNormal
        );
        assert_eq!(
            format_minutes(snapshot.time_asleep_minutes().value()),
            "7h 52m"
        );
    }

    #[test]
    fn test_every_poll_yields_same_snapshot() {
        let mut source = BuiltinSource::new();
        let first = source.poll().unwrap();
        let second = source.poll().unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_builtin_never_fails() {
        let source = BuiltinSource::new();
        assert!(source.error().is_none());
        assert_eq!(source.description(), "builtin");
    }
}
