//! Data source abstraction for receiving uploaded tables.
//!
//! This module provides a trait-based abstraction for receiving sensor
//! log tables from various backends (a watched file on disk, or an
//! in-memory queue for tests and embedding).

mod file;
mod memory;

pub use file::FileSource;
pub use memory::MemorySource;

use std::fmt::Debug;

use crate::data::RawTable;

/// Trait for receiving sensor log tables from various backends.
///
/// Each table a source hands out represents one upload event: the
/// application reprocesses it in full, with no state carried over.
///
/// # Example
///
/// ```
/// use luxwatch::{DataSource, MemorySource, RawTable};
///
/// let table = RawTable::from_rows(vec!["Lux"], vec![vec!["120"], vec!["450"]]);
/// let mut source = MemorySource::with_table("demo", table);
/// if let Some(table) = source.poll() {
///     println!("Got {} rows", table.row_count());
/// }
/// ```
pub trait DataSource: Send + Debug {
    /// Poll for a newly uploaded table.
    ///
    /// Returns `Some(table)` if new data is available, `None` otherwise.
    /// This method should be non-blocking.
    fn poll(&mut self) -> Option<RawTable>;

    /// Returns a human-readable description of the source.
    ///
    /// Used for display in the TUI status bar.
    fn description(&self) -> &str;

    /// Check if the source has encountered an error.
    ///
    /// Returns the error message if an error occurred during the last poll.
    fn error(&self) -> Option<&str>;
}
