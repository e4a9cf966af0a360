//! File-based data source.
//!
//! Polls a JSON file for health snapshots.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::data::HealthSnapshot;

use super::snapshot::parse_snapshot;
use super::MetricSource;

/// A data source that reads health snapshots from a JSON file.
///
/// An external pipeline (sync agent, exporter, cron job) writes snapshots to
/// a file, and this source polls it. The source tracks the file's
/// modification time and only returns new data when the file has been
/// updated. Read, parse, and invariant failures are surfaced via `error()`.
#[derive(Debug)]
pub struct FileSource {
    path: PathBuf,
    description: String,
    last_error: Option<String>,
    last_modified: Option<SystemTime>,
}

impl FileSource {
    /// Create a new file source for the given path.
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        let path = path.as_ref().to_path_buf();
        let description = format!("file: {}", path.display());
        Self {
            path,
            description,
            last_error: None,
            last_modified: None,
        }
    }

    /// Returns the path being monitored.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file's modification time.
    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    /// Read, parse, and validate the file.
    fn read_file(&mut self) -> Option<HealthSnapshot> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match parse_snapshot(&content) {
                Ok(snapshot) => {
                    self.last_error = None;
                    Some(snapshot)
                }
                Err(e) => {
                    self.last_error = Some(e);
                    None
                }
            },
            Err(e) => {
                self.last_error = Some(format!("Read error: {}", e));
                None
            }
        }
    }
}

impl MetricSource for FileSource {
    fn poll(&mut self) -> Option<HealthSnapshot> {
        let current_modified = self.get_modified_time();

        // Check if file has been modified since last read
        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, don't update
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(snapshot) = self.read_file() {
                self.last_modified = current_modified;
                return Some(snapshot);
            }
        }

        None
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Seek, Write};
    use tempfile::NamedTempFile;

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
    fn test_file_source_new() {
        let source = FileSource::new("/tmp/vitals.json");
        assert_eq!(source.path(), Path::new("/tmp/vitals.json"));
        assert_eq!(source.description(), "file: /tmp/vitals.json");
        assert!(source.error().is_none());
    }

    #[test]
    fn test_file_source_poll_reads_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll should return data
        let snapshot = source.poll();
        assert!(snapshot.is_some());
        assert_eq!(snapshot.unwrap().strain_score(), 40.0);

        // Second poll without file change should return None
        assert!(source.poll().is_none());
    }

    #[test]
    fn test_file_source_detects_changes() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "{}", sample_json()).unwrap();

        let mut source = FileSource::new(file.path());

        // First poll
        let _ = source.poll();

        // Modify the file (need to wait a bit for mtime to change)
        std::thread::sleep(std::time::Duration::from_millis(10));
        file.rewind().unwrap();
        let updated = sample_json().replace(r#""strain_score": 40"#, r#""strain_score": 55"#);
        writeln!(file, "{}", updated).unwrap();
        file.flush().unwrap();

        // Poll again - should detect change
        // Note: This test may be flaky on some filesystems with low mtime resolution
        if let Some(s) = source.poll() {
            assert_eq!(s.strain_score(), 55.0);
        }
    }

    #[test]
    fn test_file_source_missing_file() {
        let mut source = FileSource::new("/nonexistent/path/vitals.json");

        assert!(source.poll().is_none());
        assert!(source.error().is_some());
        assert!(source.error().unwrap().contains("Read error"));
    }

    #[test]
    fn test_file_source_invalid_json() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not valid json").unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().is_some());
        assert!(source.error().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_file_source_rejects_invariant_violations() {
        let mut file = NamedTempFile::new().unwrap();
        let bad = sample_json().replace(r#""recovery_score": 60"#, r#""recovery_score": -5"#);
        writeln!(file, "{}", bad).unwrap();

        let mut source = FileSource::new(file.path());

        assert!(source.poll().is_none());
        assert!(source.error().unwrap().contains("Invalid snapshot"));
    }
}
