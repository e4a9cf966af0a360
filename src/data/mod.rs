//! Data models and presentation mapping for health snapshots.
//!
//! This module owns the core data model and the pure transformations that
//! turn a snapshot into display-ready values.
//!
//! ## Submodules
//!
//! - [`metrics`]: Core data model ([`HealthSnapshot`], [`Status`],
//!   [`ValueWithStatus`], [`TargetRange`]) with constructor-enforced invariants
//! - [`present`]: Pure presentation functions - arc fractions, duration
//!   formatting, indicator directions, and per-dashboard display models
//! - [`vitals`]: Snapshot wrapped with its capture instant and staleness check
//! - [`history`]: Score history for trend sparklines
//!
//! ## Data Flow
//!
//! ```text
//! HealthSnapshot (validated at construction)
//!        │
//!        ▼
//! VitalsData::from_snapshot()
//!        │
//!        ├──▶ present() → DisplayModel (per dashboard)
//!        │
//!        └──▶ History::record() (for sparklines)
//! ```

pub mod history;
pub mod metrics;
pub mod present;
pub mod vitals;

pub use history::History;
pub use metrics::{HealthSnapshot, SnapshotError, Status, TargetRange, ValueWithStatus};
pub use present::{
    arc_fraction, format_minutes, indicator_direction, present, target_zone_arc, Dashboard,
    DisplayModel, IndicatorDirection, MetricRow,
};
pub use vitals::VitalsData;
