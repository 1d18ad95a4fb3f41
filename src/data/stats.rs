//! Summary statistics over a reading series.

use serde::Serialize;

use super::error::DataError;
use super::readings::ReadingSeries;

/// The four headline numbers shown on the dashboard.
///
/// `mean`, `max`, and `min` are plain reductions over all values and do
/// not depend on row order. `current` is the value of the positionally
/// last row: normalization never re-sorts, so for a file that provides
/// out-of-order timestamps this is the last row *in file order*, not the
/// chronologically latest one.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SummaryStats {
    pub current: f64,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
}

impl SummaryStats {
    /// Reduce a series to its summary.
    ///
    /// An empty series has no "current" value and is rejected.
    pub fn from_series(series: &ReadingSeries) -> Result<Self, DataError> {
        let Some(last) = series.readings.last() else {
            return Err(DataError::Empty);
        };

        let mut sum = 0.0;
        let mut max = f64::NEG_INFINITY;
        let mut min = f64::INFINITY;
        for value in series.values() {
            sum += value;
            max = max.max(value);
            min = min.min(value);
        }

        Ok(Self {
            current: last.value,
            mean: sum / series.len() as f64,
            max,
            min,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clock::FixedClock;
    use crate::data::table::RawTable;
    use chrono::NaiveDate;

    fn clock() -> FixedClock {
        FixedClock(
            NaiveDate::from_ymd_opt(2024, 5, 17)
                .unwrap()
                .and_hms_opt(10, 0, 0)
                .unwrap(),
        )
    }

    fn series_from(rows: Vec<Vec<&str>>) -> ReadingSeries {
        let table = RawTable::from_rows(vec!["Time", "Lux"], rows);
        ReadingSeries::from_table(&table, &clock()).unwrap()
    }

    #[test]
    fn test_summary_of_timed_series() {
        let series = series_from(vec![
            vec!["08:00", "120"],
            vec!["08:01", "450"],
            vec!["08:02", "300"],
        ]);
        let stats = SummaryStats::from_series(&series).unwrap();

        assert_eq!(stats.current, 300.0);
        assert_eq!(stats.mean, 290.0);
        assert_eq!(stats.max, 450.0);
        assert_eq!(stats.min, 120.0);
    }

    #[test]
    fn test_untimed_series_summarizes_identically() {
        let table = RawTable::from_rows(
            vec!["Lux"],
            vec![vec!["120"], vec!["450"], vec!["300"]],
        );
        let series = ReadingSeries::from_table(&table, &clock()).unwrap();
        let stats = SummaryStats::from_series(&series).unwrap();

        assert_eq!(stats.current, 300.0);
        assert_eq!(stats.mean, 290.0);
        assert_eq!(stats.max, 450.0);
        assert_eq!(stats.min, 120.0);
    }

    #[test]
    fn test_mean_is_permutation_invariant_but_current_is_not() {
        // Same values, timestamps provided out of chronological order.
        let original = series_from(vec![
            vec!["08:00", "120"],
            vec!["08:01", "450"],
            vec!["08:02", "300"],
        ]);
        let permuted = series_from(vec![
            vec!["08:02", "300"],
            vec!["08:01", "450"],
            vec!["08:00", "120"],
        ]);

        let a = SummaryStats::from_series(&original).unwrap();
        let b = SummaryStats::from_series(&permuted).unwrap();

        assert_eq!(a.mean, b.mean);
        assert_eq!(a.max, b.max);
        assert_eq!(a.min, b.min);

        // current follows file order, not the chronologically latest row.
        assert_eq!(a.current, 300.0);
        assert_eq!(b.current, 120.0);
    }

    #[test]
    fn test_single_reading() {
        let series = series_from(vec![vec!["08:00", "42.5"]]);
        let stats = SummaryStats::from_series(&series).unwrap();
        assert_eq!(stats.current, 42.5);
        assert_eq!(stats.mean, 42.5);
        assert_eq!(stats.max, 42.5);
        assert_eq!(stats.min, 42.5);
    }

    #[test]
    fn test_empty_series_is_rejected() {
        let series = series_from(vec![]);
        let err = SummaryStats::from_series(&series).unwrap_err();
        assert!(matches!(err, DataError::Empty));
    }
}
