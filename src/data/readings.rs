//! Reading normalization: raw tables in, timestamped series out.
//!
//! This is where an uploaded table becomes a uniform sequence of
//! `(timestamp, lux)` observations. Column selection is positional (see
//! [`value_column_index`]); timestamps come from a "Time" column when one
//! exists and are synthesized from the clock otherwise.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{Duration, NaiveDateTime};

use super::clock::Clock;
use super::error::DataError;
use super::stats::SummaryStats;
use super::table::RawTable;
use super::timestamp::parse_timestamp;

/// Display name given to the value column, whatever it was called upstream.
pub const VALUE_LABEL: &str = "Luminosidad (lux)";

/// Gap between synthesized timestamps.
const SYNTH_STEP_MINUTES: i64 = 1;

/// One normalized observation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Reading {
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

/// A normalized, timestamped sequence of readings from one uploaded file.
///
/// Rows keep their original file order; a provided "Time" column is parsed
/// but never re-sorted. The series length always equals the table's data
/// row count.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingSeries {
    /// Display label for the value column (always [`VALUE_LABEL`]).
    pub label: String,
    /// Observations in original file order.
    pub readings: Vec<Reading>,
}

/// Which column supplies readings.
///
/// Selection is positional, never by name: original index 1 when a "Time"
/// column exists (wherever that column sits in the file), original index 0
/// otherwise, matching the upstream logger's fixed layout.
fn value_column_index(has_time_column: bool) -> usize {
    if has_time_column {
        1
    } else {
        0
    }
}

impl ReadingSeries {
    /// Normalize a raw table into a reading series.
    ///
    /// With a column named exactly "Time", its parsed date-times become the
    /// timestamps verbatim. Without one, timestamps are synthesized from
    /// `clock.now()` in one-minute steps, in row order.
    pub fn from_table(table: &RawTable, clock: &dyn Clock) -> Result<Self, DataError> {
        match table.column_index("Time") {
            Some(time_index) => Self::from_timed_table(table, time_index, clock),
            None => Self::from_untimed_table(table, clock),
        }
    }

    fn from_timed_table(
        table: &RawTable,
        time_index: usize,
        clock: &dyn Clock,
    ) -> Result<Self, DataError> {
        let value_index = value_column_index(true);
        if table.column_count() <= value_index {
            return Err(DataError::MissingValueColumn {
                columns: table.column_count(),
            });
        }

        let today = clock.now().date();
        let mut readings = Vec::with_capacity(table.row_count());
        for row in &table.rows {
            let time_field = Self::field(row, time_index)?;
            let value_field = Self::field(row, value_index)?;
            readings.push(Reading {
                timestamp: parse_timestamp(time_field, today)?,
                value: Self::coerce_value(value_field)?,
            });
        }

        Ok(Self {
            label: VALUE_LABEL.to_string(),
            readings,
        })
    }

    fn from_untimed_table(table: &RawTable, clock: &dyn Clock) -> Result<Self, DataError> {
        let value_index = value_column_index(false);
        if table.column_count() <= value_index {
            return Err(DataError::MissingValueColumn {
                columns: table.column_count(),
            });
        }

        let start = clock.now();
        let mut readings = Vec::with_capacity(table.row_count());
        for (i, row) in table.rows.iter().enumerate() {
            let value_field = Self::field(row, value_index)?;
            readings.push(Reading {
                timestamp: start + Duration::minutes(SYNTH_STEP_MINUTES * i as i64),
                value: Self::coerce_value(value_field)?,
            });
        }

        Ok(Self {
            label: VALUE_LABEL.to_string(),
            readings,
        })
    }

    fn field(row: &[String], index: usize) -> Result<&str, DataError> {
        row.get(index)
            .map(String::as_str)
            .ok_or(DataError::MissingValueColumn { columns: row.len() })
    }

    fn coerce_value(field: &str) -> Result<f64, DataError> {
        field.parse().map_err(|e: std::num::ParseFloatError| DataError::Value {
            column: VALUE_LABEL.to_string(),
            value: field.to_string(),
            reason: e.to_string(),
        })
    }

    /// Number of readings; always equals the source table's row count.
    pub fn len(&self) -> usize {
        self.readings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.readings.is_empty()
    }

    /// The values in row order.
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.readings.iter().map(|r| r.value)
    }
}

/// Complete processed data for one upload, ready for display.
#[derive(Debug, Clone)]
pub struct SensorData {
    pub series: ReadingSeries,
    pub stats: SummaryStats,
    pub last_updated: Instant,
}

impl SensorData {
    /// Load and process a CSV file.
    pub fn load(path: &Path, clock: &dyn Clock) -> Result<Self, DataError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content, clock)
    }

    /// Process CSV text.
    pub fn parse(content: &str, clock: &dyn Clock) -> Result<Self, DataError> {
        let table = RawTable::parse(content)?;
        Self::from_table(&table, clock)
    }

    /// Normalize and summarize a raw table.
    ///
    /// Everything is recomputed from scratch; nothing is carried over from
    /// a previous upload.
    pub fn from_table(table: &RawTable, clock: &dyn Clock) -> Result<Self, DataError> {
        let series = ReadingSeries::from_table(table, clock)?;
        let stats = SummaryStats::from_series(&series)?;
        Ok(Self {
            series,
            stats,
            last_updated: Instant::now(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clock::FixedClock;
    use crate::data::timestamp::format_timestamp;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 5, 17)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    fn timed_table() -> RawTable {
        RawTable::from_rows(
            vec!["Time", "Lux"],
            vec![
                vec!["08:00", "120"],
                vec!["08:01", "450"],
                vec!["08:02", "300"],
            ],
        )
    }

    #[test]
    fn test_time_column_supplies_timestamps_verbatim() {
        let series = ReadingSeries::from_table(&timed_table(), &clock()).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(series.label, VALUE_LABEL);
        assert_eq!(
            format_timestamp(series.readings[0].timestamp),
            "2024-05-17 08:00:00"
        );
        assert_eq!(
            format_timestamp(series.readings[2].timestamp),
            "2024-05-17 08:02:00"
        );
        assert_eq!(series.values().collect::<Vec<_>>(), vec![120.0, 450.0, 300.0]);
    }

    #[test]
    fn test_provided_timestamps_are_not_resorted() {
        let table = RawTable::from_rows(
            vec!["Time", "Lux"],
            vec![
                vec!["09:00", "120"],
                vec!["08:00", "450"],
                vec!["08:30", "300"],
            ],
        );
        let series = ReadingSeries::from_table(&table, &clock()).unwrap();

        // Row order survives even when timestamps are out of order.
        assert_eq!(series.values().collect::<Vec<_>>(), vec![120.0, 450.0, 300.0]);
        assert!(series.readings[0].timestamp > series.readings[1].timestamp);
    }

    #[test]
    fn test_synthesized_timestamps_one_minute_apart() {
        let table = RawTable::from_rows(
            vec!["Lux"],
            vec![vec!["120"], vec!["450"], vec!["300"]],
        );
        let series = ReadingSeries::from_table(&table, &clock()).unwrap();

        assert_eq!(series.len(), 3);
        assert_eq!(
            format_timestamp(series.readings[0].timestamp),
            "2024-05-17 10:00:00"
        );
        assert_eq!(
            format_timestamp(series.readings[1].timestamp),
            "2024-05-17 10:01:00"
        );
        assert_eq!(
            format_timestamp(series.readings[2].timestamp),
            "2024-05-17 10:02:00"
        );
        for pair in series.readings.windows(2) {
            assert_eq!(pair[1].timestamp - pair[0].timestamp, Duration::minutes(1));
        }
    }

    #[test]
    fn test_value_column_is_positional_index_one() {
        // "Time" sits at index 2; the value column is still index 1.
        let table = RawTable::from_rows(
            vec!["Station", "Lux", "Time"],
            vec![
                vec!["roof", "120", "08:00"],
                vec!["roof", "450", "08:01"],
            ],
        );
        let series = ReadingSeries::from_table(&table, &clock()).unwrap();

        assert_eq!(series.values().collect::<Vec<_>>(), vec![120.0, 450.0]);
        assert_eq!(
            format_timestamp(series.readings[0].timestamp),
            "2024-05-17 08:00:00"
        );
    }

    #[test]
    fn test_untimed_table_uses_first_column() {
        let table = RawTable::from_rows(
            vec!["Lux", "Station"],
            vec![vec!["120", "roof"], vec!["450", "roof"]],
        );
        let series = ReadingSeries::from_table(&table, &clock()).unwrap();
        assert_eq!(series.values().collect::<Vec<_>>(), vec![120.0, 450.0]);
    }

    #[test]
    fn test_normalization_is_idempotent() {
        let table = timed_table();
        let first = ReadingSeries::from_table(&table, &clock()).unwrap();
        let second = ReadingSeries::from_table(&table, &clock()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_synthesized_spacing_is_clock_independent() {
        let table = RawTable::from_rows(vec!["Lux"], vec![vec!["1"], vec!["2"]]);
        let later = FixedClock(clock().0 + Duration::hours(3));

        let a = ReadingSeries::from_table(&table, &clock()).unwrap();
        let b = ReadingSeries::from_table(&table, &later).unwrap();

        assert_eq!(a.values().collect::<Vec<_>>(), b.values().collect::<Vec<_>>());
        assert_eq!(
            a.readings[1].timestamp - a.readings[0].timestamp,
            b.readings[1].timestamp - b.readings[0].timestamp,
        );
    }

    #[test]
    fn test_time_table_without_value_column() {
        let table = RawTable::from_rows(vec!["Time"], vec![vec!["08:00"]]);
        let err = ReadingSeries::from_table(&table, &clock()).unwrap_err();
        assert!(matches!(err, DataError::MissingValueColumn { columns: 1 }));
    }

    #[test]
    fn test_non_numeric_value_fails_loudly() {
        let table = RawTable::from_rows(
            vec!["Time", "Lux"],
            vec![vec!["08:00", "120"], vec!["08:01", "abc"]],
        );
        let err = ReadingSeries::from_table(&table, &clock()).unwrap_err();
        assert!(matches!(err, DataError::Value { .. }));
        assert!(err.to_string().contains("abc"));
    }

    #[test]
    fn test_unparseable_timestamp_fails_loudly() {
        let table = RawTable::from_rows(
            vec!["Time", "Lux"],
            vec![vec!["yesterday-ish", "120"]],
        );
        let err = ReadingSeries::from_table(&table, &clock()).unwrap_err();
        assert!(matches!(err, DataError::Timestamp { .. }));
        assert!(err.to_string().contains("yesterday-ish"));
    }

    #[test]
    fn test_empty_table_normalizes_to_empty_series() {
        let table = RawTable::from_rows(vec!["Lux"], vec![]);
        let series = ReadingSeries::from_table(&table, &clock()).unwrap();
        assert!(series.is_empty());
        assert_eq!(series.len(), table.row_count());
    }

    #[test]
    fn test_sensor_data_end_to_end() {
        let csv = "Time,Lux\n08:00,120\n08:01,450\n08:02,300\n";
        let data = SensorData::parse(csv, &clock()).unwrap();

        assert_eq!(data.series.len(), 3);
        assert_eq!(data.stats.current, 300.0);
        assert_eq!(data.stats.mean, 290.0);
        assert_eq!(data.stats.max, 450.0);
        assert_eq!(data.stats.min, 120.0);
    }

    #[test]
    fn test_sensor_data_rejects_empty_table() {
        let err = SensorData::parse("Lux\n", &clock()).unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }
}
