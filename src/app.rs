//! Application state and navigation logic.

use std::path::Path;

use anyhow::Result;

use crate::data::{timestamp::format_timestamp, Clock, SensorData};
use crate::source::DataSource;
use crate::ui::Theme;

/// The current view/tab in the TUI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// Metric tiles plus the time-series line chart.
    Overview,
    /// Histogram of the measured values.
    Distribution,
    /// Raw readings table.
    Readings,
}

impl View {
    /// Cycle to the next view.
    pub fn next(self) -> Self {
        match self {
            View::Overview => View::Distribution,
            View::Distribution => View::Readings,
            View::Readings => View::Overview,
        }
    }

    /// Cycle to the previous view.
    pub fn prev(self) -> Self {
        match self {
            View::Overview => View::Readings,
            View::Distribution => View::Overview,
            View::Readings => View::Distribution,
        }
    }

    /// Returns the display label for this view.
    pub fn label(&self) -> &'static str {
        match self {
            View::Overview => "Overview",
            View::Distribution => "Distribution",
            View::Readings => "Readings",
        }
    }
}

/// Main application state.
///
/// One instance lives for the whole session and walks the per-upload
/// state machine: idle (no source chosen) → loaded or error, recomputed
/// in full every time the source hands out a new table.
pub struct App {
    pub running: bool,
    pub current_view: View,
    pub show_help: bool,

    // Data source; `None` is the idle state (prompt, not an error)
    source: Option<Box<dyn DataSource>>,
    clock: Box<dyn Clock>,
    pub data: Option<SensorData>,
    pub load_error: Option<String>,

    // Scroll position in the Readings view
    pub table_offset: usize,

    // UI
    pub theme: Theme,

    // Status message (temporary feedback)
    pub status_message: Option<(String, std::time::Instant)>,
}

impl App {
    /// Create a new App.
    ///
    /// `source` is `None` when no file was chosen; the UI then shows a
    /// prompt instead of statistics.
    pub fn new(source: Option<Box<dyn DataSource>>, clock: Box<dyn Clock>) -> Self {
        Self {
            running: true,
            current_view: View::Overview,
            show_help: false,
            source,
            clock,
            data: None,
            load_error: None,
            table_offset: 0,
            theme: Theme::auto_detect(),
            status_message: None,
        }
    }

    /// Whether a data source was configured at all.
    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    /// Returns a description of the current data source.
    pub fn source_description(&self) -> Option<&str> {
        self.source.as_ref().map(|s| s.description())
    }

    /// Set a temporary status message that will be shown for a few seconds.
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some((message, std::time::Instant::now()));
    }

    /// Get the current status message if it hasn't expired (3 seconds).
    pub fn get_status_message(&self) -> Option<&str> {
        if let Some((msg, time)) = &self.status_message {
            if time.elapsed() < std::time::Duration::from_secs(3) {
                return Some(msg);
            }
        }
        None
    }

    /// Poll the data source and reprocess on a new upload.
    ///
    /// Returns Ok(true) if a new table was processed, Ok(false) if nothing
    /// changed. A processing failure never propagates: it becomes one
    /// user-visible message, and no partial results are kept.
    pub fn reload_data(&mut self) -> Result<bool> {
        let Some(source) = self.source.as_mut() else {
            return Ok(false);
        };

        if let Some(table) = source.poll() {
            match SensorData::from_table(&table, self.clock.as_ref()) {
                Ok(data) => {
                    self.table_offset = self.table_offset.min(data.series.len().saturating_sub(1));
                    self.data = Some(data);
                    self.load_error = None;
                    return Ok(true);
                }
                Err(e) => {
                    self.data = None;
                    self.load_error = Some(e.to_string());
                    return Ok(false);
                }
            }
        }

        if let Some(err) = source.error() {
            self.data = None;
            self.load_error = Some(err.to_string());
        }
        Ok(false)
    }

    /// Switch to the next view (cycles Overview → Distribution → Readings).
    pub fn next_view(&mut self) {
        self.current_view = self.current_view.next();
    }

    /// Switch to the previous view.
    pub fn prev_view(&mut self) {
        self.current_view = self.current_view.prev();
    }

    /// Switch to a specific view.
    pub fn set_view(&mut self, view: View) {
        self.current_view = view;
    }

    /// Scroll the readings table down by n rows.
    pub fn scroll_down_n(&mut self, n: usize) {
        if let Some(ref data) = self.data {
            let max = data.series.len().saturating_sub(1);
            self.table_offset = (self.table_offset + n).min(max);
        }
    }

    /// Scroll the readings table up by n rows.
    pub fn scroll_up_n(&mut self, n: usize) {
        self.table_offset = self.table_offset.saturating_sub(n);
    }

    /// Jump to the first row.
    pub fn scroll_top(&mut self) {
        self.table_offset = 0;
    }

    /// Jump to the last row.
    pub fn scroll_bottom(&mut self) {
        if let Some(ref data) = self.data {
            self.table_offset = data.series.len().saturating_sub(1);
        }
    }

    /// Toggle the help overlay.
    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Signal the application to quit.
    pub fn quit(&mut self) {
        self.running = false;
    }

    /// Export current state to a file.
    pub fn export_state(&self, path: &Path) -> Result<()> {
        let Some(ref data) = self.data else {
            anyhow::bail!("No data to export");
        };
        write_export(path, data)
    }
}

/// Build the export document: the four statistics plus the raw series.
pub fn export_json(data: &SensorData) -> Result<serde_json::Value> {
    let mut summary = serde_json::to_value(data.stats)?;
    summary["count"] = serde_json::json!(data.series.len());

    let readings: Vec<serde_json::Value> = data
        .series
        .readings
        .iter()
        .map(|r| {
            serde_json::json!({
                "time": format_timestamp(r.timestamp),
                "lux": r.value,
            })
        })
        .collect();

    Ok(serde_json::json!({
        "summary": summary,
        "readings": readings,
    }))
}

/// Write the export document as pretty JSON.
pub fn write_export(path: &Path, data: &SensorData) -> Result<()> {
    use std::io::Write;

    let json = serde_json::to_string_pretty(&export_json(data)?)?;
    let mut file = std::fs::File::create(path)?;
    file.write_all(json.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::FixedClock;
    use crate::source::MemorySource;
    use chrono::NaiveDate;

    fn clock() -> Box<FixedClock> {
        Box::new(FixedClock(
            NaiveDate::from_ymd_opt(2024, 5, 17)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        ))
    }

    fn loaded_app() -> App {
        let source = MemorySource::from_csv("test", "Time,Lux\n08:00,120\n08:01,450\n08:02,300\n");
        let mut app = App::new(Some(Box::new(source)), clock());
        app.reload_data().unwrap();
        app
    }

    #[test]
    fn test_reload_builds_stats() {
        let app = loaded_app();
        let data = app.data.as_ref().unwrap();
        assert_eq!(data.series.len(), 3);
        assert_eq!(data.stats.current, 300.0);
        assert_eq!(data.stats.mean, 290.0);
        assert!(app.load_error.is_none());
    }

    #[test]
    fn test_reload_returns_false_when_nothing_new() {
        let mut app = loaded_app();
        assert!(!app.reload_data().unwrap());
        // Old data stays when the source simply has nothing new
        assert!(app.data.is_some());
    }

    #[test]
    fn test_processing_failure_shows_one_message_and_no_partial_results() {
        let source = MemorySource::from_csv("test", "Time,Lux\n08:00,abc\n");
        let mut app = App::new(Some(Box::new(source)), clock());

        assert!(!app.reload_data().unwrap());
        assert!(app.data.is_none());
        let message = app.load_error.as_ref().unwrap();
        assert!(message.contains("abc"));
    }

    #[test]
    fn test_source_error_is_surfaced() {
        let source = MemorySource::from_csv("test", "Lux\n1,2\n");
        let mut app = App::new(Some(Box::new(source)), clock());

        assert!(!app.reload_data().unwrap());
        assert!(app.data.is_none());
        assert!(app.load_error.as_ref().unwrap().contains("Parse error"));
    }

    #[test]
    fn test_idle_app_has_no_error() {
        let mut app = App::new(None, clock());
        assert!(!app.reload_data().unwrap());
        assert!(app.data.is_none());
        assert!(app.load_error.is_none());
        assert!(!app.has_source());
    }

    #[test]
    fn test_view_cycle_round_trips() {
        let mut app = App::new(None, clock());
        assert_eq!(app.current_view, View::Overview);
        app.next_view();
        assert_eq!(app.current_view, View::Distribution);
        app.next_view();
        assert_eq!(app.current_view, View::Readings);
        app.next_view();
        assert_eq!(app.current_view, View::Overview);
        app.prev_view();
        assert_eq!(app.current_view, View::Readings);
    }

    #[test]
    fn test_scrolling_clamps_to_series() {
        let mut app = loaded_app();
        app.scroll_down_n(100);
        assert_eq!(app.table_offset, 2);
        app.scroll_up_n(1);
        assert_eq!(app.table_offset, 1);
        app.scroll_top();
        assert_eq!(app.table_offset, 0);
        app.scroll_bottom();
        assert_eq!(app.table_offset, 2);
    }

    #[test]
    fn test_export_round_trips_summary() {
        let app = loaded_app();
        let file = tempfile::NamedTempFile::new().unwrap();
        app.export_state(file.path()).unwrap();

        let text = std::fs::read_to_string(file.path()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();

        assert_eq!(value["summary"]["current"], 300.0);
        assert_eq!(value["summary"]["mean"], 290.0);
        assert_eq!(value["summary"]["max"], 450.0);
        assert_eq!(value["summary"]["min"], 120.0);
        assert_eq!(value["summary"]["count"], 3);
        assert_eq!(value["readings"].as_array().unwrap().len(), 3);
        assert_eq!(value["readings"][0]["lux"], 120.0);
    }

    #[test]
    fn test_export_without_data_fails() {
        let app = App::new(None, clock());
        assert!(app.export_state(Path::new("/tmp/never-written.json")).is_err());
    }
}
