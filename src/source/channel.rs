//! Channel-based data source.
//!
//! Receives health snapshots via a tokio watch channel. This is useful for
//! embedding the dashboard behind a live data feed where snapshots are
//! pushed rather than polled from a file.

use tokio::sync::watch;

use crate::data::HealthSnapshot;

use super::MetricSource;

/// A data source that receives health snapshots via a channel.
///
/// The producer (a sync agent, a device bridge) sends snapshots through the
/// channel, and this source provides them to the TUI. The channel is seeded
/// with an all-zero snapshot until the first real send.
///
/// # Example
///
/// ```
/// use vitalwatch::ChannelSource;
///
/// let (tx, source) = ChannelSource::create("sync-agent");
/// ```
#[derive(Debug)]
pub struct ChannelSource {
    receiver: watch::Receiver<HealthSnapshot>,
    description: String,
    /// Track if we've returned the initial value yet
    initial_returned: bool,
}

impl ChannelSource {
    /// Create a new channel source.
    ///
    /// # Arguments
    ///
    /// * `receiver` - The receiving end of a watch channel
    /// * `source_description` - A description of where snapshots come from
    pub fn new(receiver: watch::Receiver<HealthSnapshot>, source_description: &str) -> Self {
        let description = format!("channel: {}", source_description);
        Self {
            receiver,
            description,
            initial_returned: false,
        }
    }

    /// Create a channel pair for sending snapshots to a ChannelSource.
    ///
    /// Returns (sender, source) where the sender can be used to push
    /// snapshots and the source can be handed to the application.
    pub fn create(source_description: &str) -> (watch::Sender<HealthSnapshot>, Self) {
        let (tx, rx) = watch::channel(HealthSnapshot::default());
        let source = Self::new(rx, source_description);
        (tx, source)
    }
}

impl MetricSource for ChannelSource {
    fn poll(&mut self) -> Option<HealthSnapshot> {
        // Return the initial value on first poll
        if !self.initial_returned {
            self.initial_returned = true;
            self.receiver.mark_changed();
        }

        // Check if there's a new value without blocking
        if self.receiver.has_changed().unwrap_or(false) {
            let snapshot = self.receiver.borrow_and_update().clone();
            Some(snapshot)
        } else {
            None
        }
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        // Connection errors belong to the producer side of the channel
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::BuiltinSource;

    #[test]
    fn test_channel_source_poll() {
        let (tx, mut source) = ChannelSource::create("test");

        // Initially returns the zeroed seed snapshot
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.sleep_score(), 0.0);

        // No change, so poll returns None
        assert!(source.poll().is_none());

        // Send a new snapshot
        tx.send(BuiltinSource::snapshot()).unwrap();

        // Now poll returns the new snapshot
        let snapshot = source.poll().unwrap();
        assert_eq!(snapshot.sleep_score(), 75.0);
    }

    #[test]
    fn test_channel_source_description() {
        let (_tx, source) = ChannelSource::create("sync-agent");
        assert_eq!(source.description(), "channel: sync-agent");
    }
}
