//! Error types for reading normalization and summarization.

use thiserror::Error;

/// Errors that can occur while turning an uploaded CSV into readings.
///
/// Every variant except [`DataError::Empty`] is a parse failure of some
/// kind; `Empty` marks a table with zero data rows, for which no summary
/// can be produced.
#[derive(Debug, Error)]
pub enum DataError {
    /// Could not read the file at all.
    #[error("read error: {0}")]
    Io(#[from] std::io::Error),

    /// The content is not valid CSV (ragged rows, bad quoting, etc.).
    #[error("invalid CSV: {0}")]
    Csv(#[from] csv::Error),

    /// A "Time" column entry could not be parsed as a date-time.
    #[error("unparseable timestamp {value:?}: {reason}")]
    Timestamp { value: String, reason: String },

    /// A value column entry could not be coerced to a number.
    #[error("non-numeric reading {value:?} in {column:?}: {reason}")]
    Value {
        column: String,
        value: String,
        reason: String,
    },

    /// A "Time" table needs a second column to supply readings.
    #[error("table has {columns} column(s), none left to supply readings")]
    MissingValueColumn { columns: usize },

    /// The table parsed fine but holds no data rows.
    #[error("no data rows to summarize")]
    Empty,
}
