// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # vitalwatch
//!
//! A terminal dashboard and library for personal health metrics.
//!
//! This crate provides an immutable health-snapshot data model with
//! constructor-enforced invariants, pure presentation mapping from snapshots
//! to display-ready values, and an interactive terminal UI with three
//! dashboards: strain, recovery, and sleep.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(snapshot +    │(rendering)   │         │ │
//! │  └────┬────┘    │ presentation) └─────────┘    └─────────┘ │
//! │       │         └──────────┘                                │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── BuiltinSource | FileSource |                │
//! │  │ (input) │    ChannelSource | StreamSource                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, dashboard navigation, staleness tracking
//! - **[`source`]**: The metric-catalog capability ([`MetricSource`] trait)
//!   with builtin, file-polling, channel, and stream implementations
//! - **[`data`]**: The validated [`HealthSnapshot`] model and the pure
//!   presentation functions (arc fractions, duration formatting, indicator
//!   directions, per-dashboard display models)
//! - **[`ui`]**: Terminal rendering using ratatui - progress rings, metric
//!   rows, sparklines, and theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Dashboard over the builtin snapshot
//! vitalwatch
//!
//! # Poll a JSON file written by a sync pipeline
//! vitalwatch --file vitals.json
//!
//! # Live snapshots over TCP (newline-delimited JSON)
//! vitalwatch --connect localhost:9090
//! ```
//!
//! ### As a library
//!
//! ```
//! use vitalwatch::{present, BuiltinSource, Dashboard, MetricSource};
//!
//! let mut source = BuiltinSource::new();
//! let snapshot = source.poll().unwrap();
//!
//! let model = present(&snapshot, Dashboard::Sleep);
//! assert_eq!(model.heading, "quality");
//! assert_eq!(model.rows[1].value, "7h 52m");
//! ```
//!
//! ### Feeding snapshots from your own pipeline
//!
//! ```
//! use vitalwatch::{App, ChannelSource};
//! use std::time::Duration;
//!
//! let (tx, source) = ChannelSource::create("sync-agent");
//! let app = App::new(Box::new(source), Duration::from_secs(120));
//!
//! // Elsewhere: tx.send(snapshot) whenever new data arrives
//! # drop(tx);
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::App;
pub use data::{
    arc_fraction, format_minutes, indicator_direction, present, target_zone_arc, Dashboard,
    DisplayModel, HealthSnapshot, History, IndicatorDirection, MetricRow, SnapshotError, Status,
    TargetRange, ValueWithStatus, VitalsData,
};
pub use source::{
    BuiltinSource, ChannelSource, FileSource, MetricSource, SerializedMetric, SerializedRange,
    SerializedSnapshot, StreamSource,
};
