//! Application state and navigation logic.

use std::path::Path;
use std::time::{Duration, Instant};

use anyhow::Result;

use crate::data::{Dashboard, History, VitalsData};
use crate::source::{MetricSource, SerializedSnapshot};
use crate::ui::Theme;

/// Main application state.
pub struct App {
    pub running: bool,
    pub current: Dashboard,
    pub show_help: bool,

    // Data source
    source: Box<dyn MetricSource>,
    pub data: Option<VitalsData>,
    pub history: History,
    pub load_error: Option<String>,
    /// Age beyond which the last-known snapshot is flagged stale rather than
    /// presented as fresh.
    pub stale_after: Duration,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, Instant)>,
}

impl App {
    /// Create a new App with the given data source and staleness threshold.
    pub fn new(source: Box<dyn MetricSource>, stale_after: Duration) -> Self {
        Self {
            running: true,
            current: Dashboard::Strain,
            show_help: false,
            source,
            data: None,
            history: History::new(),
            load_error: None,
            stale_after,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> &str {
        self.source.description()
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source for new data.
    ///
    /// Returns Ok(true) if a new snapshot was received, Ok(false) if no new
    /// data. Source failures land in `load_error` and keep the last-known
    /// snapshot in place (it will be flagged stale once old enough).
    pub fn reload_data(&mut self) -> Result<bool> {
        if let Some(snapshot) = self.source.poll() {
            let data = VitalsData::from_snapshot(snapshot);
            self.history.record(&data);
            self.data = Some(data);
            self.load_error = None;
            Ok(true)
        } else {
            if let Some(err) = self.source.error() {
                self.load_error = Some(err.to_string());
            }
            Ok(false)
        }
    }

    /// Whether the displayed snapshot is older than the staleness threshold.
    pub fn is_stale(&self) -> bool {
        self.data
            .as_ref()
            .is_some_and(|d| d.is_stale(self.stale_after))
    }

    /// Switch to the next dashboard (Strain → Recovery → Sleep).
    pub fn next_view(&mut self) {
        self.current = self.current.next();
    }

    /// Switch to the previous dashboard.
    pub fn prev_view(&mut self) {
        self.current = self.current.prev();
    }

    /// Switch to a specific dashboard.
    pub fn set_view(&mut self, dashboard: Dashboard) {
        self.current = dashboard;
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Quit the application.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export the current state to a JSON file.
    ///
    /// Writes the raw snapshot (wire form) plus the three display models so
    /// downstream tooling gets both the data and what the screen shows.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        use std::io::Write;

        let Some(ref data) = self.data else {
            anyhow::bail!("no data to export");
        };

        let dashboards: Vec<serde_json::Value> = Dashboard::all()
            .iter()
            .map(|&d| {
                let model = data.display(d);
                serde_json::json!({
                    "dashboard": d.label(),
                    "heading": model.heading,
                    "score": model.score,
                    "arc": model.arc,
                    "target_zone": model.target_zone.map(|(lo, hi)| serde_json::json!({
                        "from": lo,
                        "to": hi,
                    })),
                    "rows": model.rows.iter().map(|r| serde_json::json!({
                        "title": r.title,
                        "value": r.value,
                        "direction": format!("{:?}", r.direction),
                    })).collect::<Vec<_>>(),
                })
            })
            .collect();

        let export = serde_json::json!({
            "source": self.source_description(),
            "stale": self.is_stale(),
            "snapshot": SerializedSnapshot::from(&data.snapshot),
            "dashboards": dashboards,
        });

        let json = serde_json::to_string_pretty(&export)?;
        let mut file = std::fs::File::create(path)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }
}
