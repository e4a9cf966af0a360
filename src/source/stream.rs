//! Stream-based data source.
//!
//! Receives health snapshots from an async byte stream. This is useful for
//! network-based sources like TCP connections.

use std::sync::{Arc, Mutex};

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;

use crate::data::HealthSnapshot;

use super::snapshot::parse_snapshot;
use super::MetricSource;

/// A data source that receives health snapshots from an async stream.
///
/// This source spawns a background task that reads newline-delimited JSON
/// from the provided async reader and makes validated snapshots available
/// via `poll()`. Lines that fail to parse or violate snapshot invariants are
/// reported and skipped; the stream keeps going.
#[derive(Debug)]
pub struct StreamSource {
    receiver: mpsc::Receiver<HealthSnapshot>,
    description: String,
    last_error: Arc<Mutex<Option<String>>>,
    // Copy of `last_error` taken during `poll()`, so `error()` can hand out
    // a borrow without holding the mutex.
    cached_error: Option<String>,
}

impl StreamSource {
    /// Spawn a background task that reads from the given async reader.
    ///
    /// The reader should provide newline-delimited JSON snapshots, one
    /// complete snapshot per line.
    ///
    /// # Example
    ///
    /// ```
    /// use vitalwatch::source::{MetricSource, StreamSource};
    ///
    /// # tokio_test::block_on(async {
    /// let cursor = std::io::Cursor::new("");
    /// let mut source = StreamSource::spawn(cursor, "tcp://localhost:9090");
    /// assert_eq!(source.description(), "stream: tcp://localhost:9090");
    /// assert!(source.poll().is_none());
    /// # });
    /// ```
    pub fn spawn<R>(reader: R, description: &str) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, rx) = mpsc::channel(16);
        let last_error = Arc::new(Mutex::new(None));
        let error_handle = last_error.clone();

        tokio::spawn(async move {
            let mut reader = BufReader::new(reader);
            let mut line = String::new();

            loop {
                line.clear();
                match reader.read_line(&mut line).await {
                    Ok(0) => {
                        // EOF
                        *error_handle.lock().unwrap() = Some("Connection closed".to_string());
                        break;
                    }
                    Ok(_) => match parse_snapshot(line.trim()) {
                        Ok(snapshot) => {
                            *error_handle.lock().unwrap() = None;
                            if tx.send(snapshot).await.is_err() {
                                // Receiver dropped
                                break;
                            }
                        }
                        Err(e) => {
                            *error_handle.lock().unwrap() = Some(e);
                        }
                    },
                    Err(e) => {
                        *error_handle.lock().unwrap() = Some(format!("Read error: {}", e));
                        break;
                    }
                }
            }
        });

        Self {
            receiver: rx,
            description: format!("stream: {}", description),
            last_error,
            cached_error: None,
        }
    }
}

impl MetricSource for StreamSource {
    fn poll(&mut self) -> Option<HealthSnapshot> {
        let result = match self.receiver.try_recv() {
            Ok(snapshot) => Some(snapshot),
            Err(mpsc::error::TryRecvError::Empty) => None,
            Err(mpsc::error::TryRecvError::Disconnected) => {
                *self.last_error.lock().unwrap() = Some("Stream disconnected".to_string());
                None
            }
        };
        self.cached_error = self.last_error.lock().unwrap().clone();
        result
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.cached_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn sample_json() -> String {
        let wire = crate::source::SerializedSnapshot::from(&crate::source::BuiltinSource::snapshot());
        serde_json::to_string(&wire).unwrap()
    }

    #[tokio::test]
    async fn test_stream_source_spawn() {
        let data = format!("{}\n", sample_json());
        let cursor = Cursor::new(data);

        let mut source = StreamSource::spawn(cursor, "test");

        // Give the background task time to process
        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        let snapshot = source.poll();
        assert!(snapshot.is_some());
        assert_eq!(snapshot.unwrap().strain_score(), 40.0);
    }

    #[tokio::test]
    async fn test_stream_source_multiple_snapshots() {
        let data = format!("{}\n{}\n", sample_json(), sample_json());
        let cursor = Cursor::new(data);

        let mut source = StreamSource::spawn(cursor, "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert!(source.poll().is_some());
        assert!(source.poll().is_some());
        assert!(source.poll().is_none());
    }

    #[tokio::test]
    async fn test_stream_source_description() {
        let cursor = Cursor::new("");
        let source = StreamSource::spawn(cursor, "tcp://localhost:9090");
        assert_eq!(source.description(), "stream: tcp://localhost:9090");
    }

    #[tokio::test]
    async fn test_stream_source_invalid_line_is_skipped() {
        let data = format!("not valid json\n{}\n", sample_json());
        let cursor = Cursor::new(data);

        let mut source = StreamSource::spawn(cursor, "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        // The valid line still comes through
        let snapshot = source.poll();
        assert!(snapshot.is_some());
    }

    #[tokio::test]
    async fn test_stream_source_error_visible_through_trait() {
        let cursor = Cursor::new("not valid json\n");
        let mut source = StreamSource::spawn(cursor, "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert!(source.poll().is_none());
        // Callers only see the trait object, so the parse failure has to
        // surface through `error()`.
        let source: &dyn MetricSource = &source;
        assert!(source.error().is_some());
    }

    #[tokio::test]
    async fn test_stream_source_eof_reported_as_error() {
        let data = format!("{}\n", sample_json());
        let mut source = StreamSource::spawn(Cursor::new(data), "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert!(source.poll().is_some());
        assert_eq!(source.error(), Some("Connection closed"));
    }

    #[tokio::test]
    async fn test_stream_source_empty_stream() {
        let cursor = Cursor::new("");
        let mut source = StreamSource::spawn(cursor, "test");

        tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;

        assert!(source.poll().is_none());
    }
}
