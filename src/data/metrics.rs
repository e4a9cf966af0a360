//! Core health metric types and snapshot invariants.
//!
//! A [`HealthSnapshot`] is constructed atomically through its builder, which
//! validates every invariant before any snapshot becomes observable. No other
//! construction path exists, so downstream code (presentation, rendering,
//! export) never needs to re-check ranges.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classification of a metric value against the user's personal baseline.
///
/// Baseline computation happens upstream; snapshots arrive pre-classified.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    HigherThanNormal,
    Normal,
    LowerThanNormal,
}

/// Errors raised when snapshot invariants are violated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SnapshotError {
    /// A score field fell outside the [0, 100] percentage range.
    #[error("{field}: percentage {value} outside [0, 100]")]
    PercentageOutOfRange { field: &'static str, value: f64 },

    /// A metric value was negative.
    #[error("{field}: negative value {value}")]
    NegativeValue { field: &'static str, value: f64 },

    /// A value was NaN or infinite.
    #[error("{field}: value is not finite")]
    NotFinite { field: &'static str },

    /// The target range had `low > high`.
    #[error("target range inverted: low {low} > high {high}")]
    InvertedRange { low: f64, high: f64 },

    /// A required field was never supplied to the builder.
    #[error("missing field: {0}")]
    MissingField(&'static str),
}

/// A metric value paired with its baseline classification.
///
/// The value is non-negative and finite; its unit is implied by the metric
/// (minutes, bpm, ms, kcal).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValueWithStatus {
    value: f64,
    status: Status,
}

impl ValueWithStatus {
    /// Create a validated value/status pair.
    pub fn new(value: f64, status: Status) -> Result<Self, SnapshotError> {
        check_metric("value", value)?;
        Ok(Self { value, status })
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

/// A desired band of percentage values, rendered as a secondary zone on the
/// progress ring.
///
/// Replaces the unlabeled `(low, high)` pair: the constructor enforces
/// `0 <= low <= high <= 100`, so a range can never be inverted once built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TargetRange {
    low: f64,
    high: f64,
}

impl TargetRange {
    /// Create a validated target range.
    pub fn new(low: f64, high: f64) -> Result<Self, SnapshotError> {
        check_percentage("target range low", low)?;
        check_percentage("target range high", high)?;
        if low > high {
            return Err(SnapshotError::InvertedRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }
}

/// One complete, immutable set of health metric values.
///
/// Scores are percentages in [0, 100]; the six detail metrics carry their
/// baseline classification. A snapshot has no identity beyond the instant it
/// was captured (tracked by the caller, not the snapshot itself).
#[derive(Debug, Clone, PartialEq)]
pub struct HealthSnapshot {
    sleep_score: f64,
    recovery_score: f64,
    strain_score: f64,
    strain_target_range: TargetRange,
    time_asleep_minutes: ValueWithStatus,
    time_in_bed_minutes: ValueWithStatus,
    resting_heart_rate: ValueWithStatus,
    heart_rate_variability: ValueWithStatus,
    exercise_minutes: ValueWithStatus,
    calories_burned: ValueWithStatus,
}

impl HealthSnapshot {
    /// Create a builder for a snapshot.
    pub fn builder() -> HealthSnapshotBuilder {
        HealthSnapshotBuilder::default()
    }

    /// Sleep quality score in [0, 100].
    pub fn sleep_score(&self) -> f64 {
        self.sleep_score
    }

    /// Recovery score in [0, 100].
    pub fn recovery_score(&self) -> f64 {
        self.recovery_score
    }

    /// Strain score in [0, 100].
    pub fn strain_score(&self) -> f64 {
        self.strain_score
    }

    /// Desired strain band for the day.
    pub fn strain_target_range(&self) -> TargetRange {
        self.strain_target_range
    }

    /// Time asleep last night, in minutes.
    pub fn time_asleep_minutes(&self) -> ValueWithStatus {
        self.time_asleep_minutes
    }

    /// Time in bed last night, in minutes.
    pub fn time_in_bed_minutes(&self) -> ValueWithStatus {
        self.time_in_bed_minutes
    }

    /// Resting heart rate, in bpm.
    pub fn resting_heart_rate(&self) -> ValueWithStatus {
        self.resting_heart_rate
    }

    /// Heart rate variability, in ms.
    pub fn heart_rate_variability(&self) -> ValueWithStatus {
        self.heart_rate_variability
    }

    /// Exercise duration today, in minutes.
    pub fn exercise_minutes(&self) -> ValueWithStatus {
        self.exercise_minutes
    }

    /// Active calories burned today, in kcal.
    pub fn calories_burned(&self) -> ValueWithStatus {
        self.calories_burned
    }
}

impl Default for HealthSnapshot {
    /// An all-zero snapshot.
    ///
    /// Satisfies every invariant; used as the seed value for channel-based
    /// sources before their first real send.
    fn default() -> Self {
        let zero = ValueWithStatus {
            value: 0.0,
            status: Status::Normal,
        };
        Self {
            sleep_score: 0.0,
            recovery_score: 0.0,
            strain_score: 0.0,
            strain_target_range: TargetRange { low: 0.0, high: 0.0 },
            time_asleep_minutes: zero,
            time_in_bed_minutes: zero,
            resting_heart_rate: zero,
            heart_rate_variability: zero,
            exercise_minutes: zero,
            calories_burned: zero,
        }
    }
}

/// Builder for [`HealthSnapshot`].
///
/// All fields are required; [`build`](Self::build) validates every invariant
/// in one pass so the snapshot is either fully valid or not constructed.
#[derive(Debug, Default)]
pub struct HealthSnapshotBuilder {
    sleep_score: Option<f64>,
    recovery_score: Option<f64>,
    strain_score: Option<f64>,
    strain_target_range: Option<(f64, f64)>,
    time_asleep_minutes: Option<(f64, Status)>,
    time_in_bed_minutes: Option<(f64, Status)>,
    resting_heart_rate: Option<(f64, Status)>,
    heart_rate_variability: Option<(f64, Status)>,
    exercise_minutes: Option<(f64, Status)>,
    calories_burned: Option<(f64, Status)>,
}

impl HealthSnapshotBuilder {
    pub fn sleep_score(mut self, score: f64) -> Self {
        self.sleep_score = Some(score);
        self
    }

    pub fn recovery_score(mut self, score: f64) -> Self {
        self.recovery_score = Some(score);
        self
    }

    pub fn strain_score(mut self, score: f64) -> Self {
        self.strain_score = Some(score);
        self
    }

    pub fn strain_target_range(mut self, low: f64, high: f64) -> Self {
        self.strain_target_range = Some((low, high));
        self
    }

    pub fn time_asleep_minutes(mut self, value: f64, status: Status) -> Self {
        self.time_asleep_minutes = Some((value, status));
        self
    }

    pub fn time_in_bed_minutes(mut self, value: f64, status: Status) -> Self {
        self.time_in_bed_minutes = Some((value, status));
        self
    }

    pub fn resting_heart_rate(mut self, value: f64, status: Status) -> Self {
        self.resting_heart_rate = Some((value, status));
        self
    }

    pub fn heart_rate_variability(mut self, value: f64, status: Status) -> Self {
        self.heart_rate_variability = Some((value, status));
        self
    }

    pub fn exercise_minutes(mut self, value: f64, status: Status) -> Self {
        self.exercise_minutes = Some((value, status));
        self
    }

    pub fn calories_burned(mut self, value: f64, status: Status) -> Self {
        self.calories_burned = Some((value, status));
        self
    }

    /// Validate all invariants and construct the snapshot.
    pub fn build(self) -> Result<HealthSnapshot, SnapshotError> {
        let sleep_score = require("sleep_score", self.sleep_score)?;
        let recovery_score = require("recovery_score", self.recovery_score)?;
        let strain_score = require("strain_score", self.strain_score)?;
        check_percentage("sleep_score", sleep_score)?;
        check_percentage("recovery_score", recovery_score)?;
        check_percentage("strain_score", strain_score)?;

        let (low, high) = require("strain_target_range", self.strain_target_range)?;
        let strain_target_range = TargetRange::new(low, high)?;

        Ok(HealthSnapshot {
            sleep_score,
            recovery_score,
            strain_score,
            strain_target_range,
            time_asleep_minutes: build_metric("time_asleep_minutes", self.time_asleep_minutes)?,
            time_in_bed_minutes: build_metric("time_in_bed_minutes", self.time_in_bed_minutes)?,
            resting_heart_rate: build_metric("resting_heart_rate", self.resting_heart_rate)?,
            heart_rate_variability: build_metric(
                "heart_rate_variability",
                self.heart_rate_variability,
            )?,
            exercise_minutes: build_metric("exercise_minutes", self.exercise_minutes)?,
            calories_burned: build_metric("calories_burned", self.calories_burned)?,
        })
    }
}

fn require<T>(field: &'static str, value: Option<T>) -> Result<T, SnapshotError> {
    value.ok_or(SnapshotError::MissingField(field))
}

fn check_percentage(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if !value.is_finite() {
        return Err(SnapshotError::NotFinite { field });
    }
    if !(0.0..=100.0).contains(&value) {
        return Err(SnapshotError::PercentageOutOfRange { field, value });
    }
    Ok(())
}

fn check_metric(field: &'static str, value: f64) -> Result<(), SnapshotError> {
    if !value.is_finite() {
        return Err(SnapshotError::NotFinite { field });
    }
    if value < 0.0 {
        return Err(SnapshotError::NegativeValue { field, value });
    }
    Ok(())
}

fn build_metric(
    field: &'static str,
    entry: Option<(f64, Status)>,
) -> Result<ValueWithStatus, SnapshotError> {
    let (value, status) = require(field, entry)?;
    check_metric(field, value)?;
    Ok(ValueWithStatus { value, status })
}
