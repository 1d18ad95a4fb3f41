//! Raw tabular input as parsed from an uploaded CSV file.

use csv::{ReaderBuilder, Trim};

use super::error::DataError;

/// An uploaded table before normalization: a header row plus string rows.
///
/// The first CSV record is always treated as the header. Rows keep their
/// original order and their fields stay unparsed; column selection and
/// numeric coercion happen later, in
/// [`ReadingSeries::from_table`](super::readings::ReadingSeries::from_table).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    /// Column names from the header row.
    pub headers: Vec<String>,
    /// Data rows, one `Vec<String>` per CSV record, in file order.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Parse CSV text into a table.
    ///
    /// Rows whose field count differs from the header fail the whole
    /// parse.
    pub fn parse(text: &str) -> Result<Self, DataError> {
        let mut reader = ReaderBuilder::new().trim(Trim::All).from_reader(text.as_bytes());

        let headers = reader.headers()?.iter().map(str::to_string).collect();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            rows.push(record.iter().map(str::to_string).collect());
        }

        Ok(Self { headers, rows })
    }

    /// Build a table directly from rows (library consumers and tests).
    pub fn from_rows<S: Into<String>>(headers: Vec<S>, rows: Vec<Vec<S>>) -> Self {
        Self {
            headers: headers.into_iter().map(Into::into).collect(),
            rows: rows
                .into_iter()
                .map(|row| row.into_iter().map(Into::into).collect())
                .collect(),
        }
    }

    /// Position of a column with this exact header name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Number of data rows (the header is not a row).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, per the header row.
    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_and_rows() {
        let table = RawTable::parse("Time,Lux\n08:00,120\n08:01,450\n").unwrap();
        assert_eq!(table.headers, vec!["Time", "Lux"]);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows[0], vec!["08:00", "120"]);
        assert_eq!(table.rows[1], vec!["08:01", "450"]);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let table = RawTable::parse("Time, Lux\n08:00 , 120\n").unwrap();
        assert_eq!(table.headers, vec!["Time", "Lux"]);
        assert_eq!(table.rows[0], vec!["08:00", "120"]);
    }

    #[test]
    fn test_parse_ragged_row_fails() {
        let err = RawTable::parse("Time,Lux\n08:00,120,extra\n").unwrap_err();
        assert!(matches!(err, DataError::Csv(_)));
    }

    #[test]
    fn test_parse_empty_text() {
        let table = RawTable::parse("").unwrap();
        assert!(table.headers.is_empty());
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_parse_header_only() {
        let table = RawTable::parse("Lux\n").unwrap();
        assert_eq!(table.headers, vec!["Lux"]);
        assert_eq!(table.row_count(), 0);
    }

    #[test]
    fn test_column_index_is_exact_match() {
        let table = RawTable::from_rows(vec!["time", "Time", "Lux"], vec![]);
        assert_eq!(table.column_index("Time"), Some(1));
        assert_eq!(table.column_index("TIME"), None);
        assert_eq!(table.column_count(), 3);
    }
}
