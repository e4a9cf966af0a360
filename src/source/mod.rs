//! Data source abstraction for receiving health snapshots.
//!
//! The metric catalog is a capability, not a hardcoded service: the
//! application takes a boxed [`MetricSource`] at construction time, and the
//! concrete implementation (builtin constants, file polling, channel, stream)
//! is chosen at composition time.

mod builtin;
mod channel;
mod file;
mod snapshot;
mod stream;

pub use builtin::BuiltinSource;
pub use channel::ChannelSource;
pub use file::FileSource;
pub use snapshot::{SerializedMetric, SerializedRange, SerializedSnapshot};
pub use stream::StreamSource;

use std::fmt::Debug;

use crate::data::HealthSnapshot;

/// Trait for receiving health snapshots from various backends.
///
/// A source yields complete, validated snapshots or nothing: partial or
/// streamed snapshots are not part of this contract. Failures are surfaced
/// through [`error`](Self::error) rather than swallowed, so the application
/// can tell "no new data" apart from "data unavailable".
///
/// # Example
///
/// ```
/// use vitalwatch::{BuiltinSource, MetricSource};
///
/// let mut source = BuiltinSource::new();
/// let snapshot = source.poll().unwrap();
/// assert_eq!(snapshot.strain_score(), 40.0);
/// ```
pub trait MetricSource: Send + Debug {
    /// Poll for the latest snapshot.
    ///
    /// Returns `Some(snapshot)` if new data is available, `None` otherwise.
    /// This method must be non-blocking.
    fn poll(&mut self) -> Option<HealthSnapshot>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if the last poll failed to produce a usable
    /// snapshot (read failure, parse failure, invariant violation).
    fn error(&self) -> Option<&str>;
}
