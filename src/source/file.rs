//! File-based data source.
//!
//! Polls a CSV file and hands out a freshly parsed table whenever the
//! file changes. Each change is one upload event.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::data::RawTable;

use super::DataSource;

/// A data source that reads sensor logs from a CSV file.
///
/// The source tracks the file's modification time and only returns a new
/// table when the file has been updated, so an unchanged file polls as
/// `None` and the dashboard keeps its current state.
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

    /// Returns the path being watched.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Get the file's modification time.
    fn get_modified_time(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok()?.modified().ok()
    }

    /// Read and parse the file.
    fn read_file(&mut self) -> Option<RawTable> {
        match fs::read_to_string(&self.path) {
            Ok(content) => match RawTable::parse(&content) {
                Ok(table) => {
                    self.last_error = None;
                    Some(table)
                }
                Err(e) => {
                    self.last_error = Some(format!("Parse error: {}", e));
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

impl DataSource for FileSource {
    fn poll(&mut self) -> Option<RawTable> {
        let current_modified = self.get_modified_time();

        // Check if file has been modified since last read
        let file_changed = match (&self.last_modified, &current_modified) {
            (None, _) => true,        // First poll, always read
            (Some(_), None) => false, // File disappeared, don't update
            (Some(last), Some(current)) => current > last,
        };

        if file_changed {
            if let Some(table) = self.read_file() {
                self.last_modified = current_modified;
                return Some(table);
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
