//! JSON wire form for health snapshots.
//!
//! These types define the serialization format consumed by the file and
//! stream sources and produced by export. Conversion into [`HealthSnapshot`]
//! goes through the validating builder, so no unvalidated snapshot can enter
//! the system from the wire.

use serde::{Deserialize, Serialize};

use crate::data::{HealthSnapshot, SnapshotError, Status};

/// Wire form of a metric value with its baseline classification.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedMetric {
    pub value: f64,
    pub status: Status,
}

/// Wire form of the strain target range.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedRange {
    pub low: f64,
    pub high: f64,
}

/// Wire form of a complete snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializedSnapshot {
    pub sleep_score: f64,
    pub recovery_score: f64,
    pub strain_score: f64,
    pub strain_target_range: SerializedRange,
    pub time_asleep_minutes: SerializedMetric,
    pub time_in_bed_minutes: SerializedMetric,
    pub resting_heart_rate: SerializedMetric,
    pub heart_rate_variability: SerializedMetric,
    pub exercise_minutes: SerializedMetric,
    pub calories_burned: SerializedMetric,
}

impl TryFrom<SerializedSnapshot> for HealthSnapshot {
    type Error = SnapshotError;

    fn try_from(s: SerializedSnapshot) -> Result<Self, Self::Error> {
        HealthSnapshot::builder()
            .sleep_score(s.sleep_score)
            .recovery_score(s.recovery_score)
            .strain_score(s.strain_score)
            .strain_target_range(s.strain_target_range.low, s.strain_target_range.high)
            .time_asleep_minutes(s.time_asleep_minutes.value, s.time_asleep_minutes.status)
            .time_in_bed_minutes(s.time_in_bed_minutes.value, s.time_in_bed_minutes.status)
            .resting_heart_rate(s.resting_heart_rate.value, s.resting_heart_rate.status)
            .heart_rate_variability(
                s.heart_rate_variability.value,
                s.heart_rate_variability.status,
            )
            .exercise_minutes(s.exercise_minutes.value, s.exercise_minutes.status)
            .calories_burned(s.calories_burned.value, s.calories_burned.status)
            .build()
    }
}

impl From<&HealthSnapshot> for SerializedSnapshot {
    fn from(s: &HealthSnapshot) -> Self {
        let metric = |m: crate::data::ValueWithStatus| SerializedMetric {
            value: m.value(),
            status: m.status(),
        };
        Self {
            sleep_score: s.sleep_score(),
            recovery_score: s.recovery_score(),
            strain_score: s.strain_score(),
            strain_target_range: SerializedRange {
                low: s.strain_target_range().low(),
                high: s.strain_target_range().high(),
            },
            time_asleep_minutes: metric(s.time_asleep_minutes()),
            time_in_bed_minutes: metric(s.time_in_bed_minutes()),
            resting_heart_rate: metric(s.resting_heart_rate()),
            heart_rate_variability: metric(s.heart_rate_variability()),
            exercise_minutes: metric(s.exercise_minutes()),
            calories_burned: metric(s.calories_burned()),
        }
    }
}

/// Parse and validate a snapshot from a JSON string.
pub(crate) fn parse_snapshot(content: &str) -> Result<HealthSnapshot, String> {
    let serialized: SerializedSnapshot =
        serde_json::from_str(content).map_err(|e| format!("Parse error: {}", e))?;
    serialized
        .try_into()
        .map_err(|e| format!("Invalid snapshot: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_json() -> &'static str {
        r#"{
            "sleep_score": 75,
            "recovery_score": 60,
            "strain_score": 40,
            "strain_target_range": { "low": 50, "high": 60 },
            "time_asleep_minutes": { "value": 472, "status": "lower_than_normal" },
            "time_in_bed_minutes": { "value": 482, "status": "higher_than_normal" },
            "resting_heart_rate": { "value": 59, "status": "lower_than_normal" },
            "heart_rate_variability": { "value": 85, "status": "higher_than_normal" },
            "exercise_minutes": { "value": 75, "status": "higher_than_normal" },
            "calories_burned": { "value": 654, "status": "lower_than_normal" }
        }"#
    }

    #[test]
    fn test_deserialize_and_validate() {
        let snapshot = parse_snapshot(sample_json()).unwrap();
        assert_eq!(snapshot.sleep_score(), 75.0);
        assert_eq!(snapshot.strain_target_range().high(), 60.0);
        assert_eq!(
            snapshot.time_in_bed_minutes().status(),
            Status::HigherThanNormal
        );
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = parse_snapshot("not valid json").unwrap_err();
        assert!(err.contains("Parse error"));
    }

    #[test]
    fn test_invariant_violation_is_rejected() {
        let json = sample_json().replace(r#""strain_score": 40"#, r#""strain_score": 140"#);
        let err = parse_snapshot(&json).unwrap_err();
        assert!(err.contains("Invalid snapshot"));
        assert!(err.contains("strain_score"));
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        let json = sample_json().replace(
            r#""low": 50, "high": 60"#,
            r#""low": 70, "high": 60"#,
        );
        let err = parse_snapshot(&json).unwrap_err();
        assert!(err.contains("inverted"));
    }

    #[test]
    fn test_round_trip_through_wire_form() {
        let snapshot = parse_snapshot(sample_json()).unwrap();
        let wire = SerializedSnapshot::from(&snapshot);
        let json = serde_json::to_string(&wire).unwrap();
        let restored = parse_snapshot(&json).unwrap();
        assert_eq!(restored, snapshot);
    }
}
