//! In-memory data source.
//!
//! Hands out pre-loaded tables, one per poll. Useful for tests and for
//! embedding the dashboard without touching the filesystem.

use std::collections::VecDeque;

use crate::data::RawTable;

use super::DataSource;

/// A data source backed by a queue of tables.
///
/// Each queued table is returned exactly once, in order, so every push
/// models one upload event.
#[derive(Debug)]
pub struct MemorySource {
    tables: VecDeque<RawTable>,
    description: String,
    last_error: Option<String>,
}

impl MemorySource {
    /// Create an empty source with a display label.
    pub fn new(label: &str) -> Self {
        Self {
            tables: VecDeque::new(),
            description: format!("memory: {}", label),
            last_error: None,
        }
    }

    /// Create a source pre-loaded with one table.
    pub fn with_table(label: &str, table: RawTable) -> Self {
        let mut source = Self::new(label);
        source.push(table);
        source
    }

    /// Create a source from CSV text.
    ///
    /// A parse failure surfaces through [`DataSource::error`] instead of
    /// returning a table, matching how the file source reports bad input.
    pub fn from_csv(label: &str, text: &str) -> Self {
        let mut source = Self::new(label);
        match RawTable::parse(text) {
            Ok(table) => source.push(table),
            Err(e) => source.last_error = Some(format!("Parse error: {}", e)),
        }
        source
    }

    /// Queue another table to be returned by a later poll.
    pub fn push(&mut self, table: RawTable) {
        self.tables.push_back(table);
    }
}

impl DataSource for MemorySource {
    fn poll(&mut self) -> Option<RawTable> {
        self.tables.pop_front()
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
