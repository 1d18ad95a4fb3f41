//! Parsing and formatting of timestamps from uploaded files.
//!
//! Sensor loggers are loose about date-time layout, so parsing tries an
//! ordered list of layouts: full date-times first, then bare dates, then
//! bare times of day (anchored to the current date).

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

use super::error::DataError;

/// Full date-time layouts (order matters: more specific first).
const DATE_TIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Bare-date layouts; midnight is assumed.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d/%m/%Y"];

/// Time-of-day layouts; the date comes from `today`.
const TIME_FORMATS: &[&str] = &["%H:%M:%S%.f", "%H:%M"];

/// Parse timestamp strings like "2024-05-17 08:30:00", "08:00", or RFC 3339.
///
/// `today` anchors bare times of day; pass the clock's current date.
pub fn parse_timestamp(s: &str, today: NaiveDate) -> Result<NaiveDateTime, DataError> {
    let s = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.naive_local());
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, format) {
            return Ok(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(s, format) {
            return Ok(date.and_time(NaiveTime::MIN));
        }
    }

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(s, format) {
            return Ok(today.and_time(time));
        }
    }

    Err(DataError::Timestamp {
        value: s.to_string(),
        reason: "unrecognized date-time layout".to_string(),
    })
}

/// Format a timestamp for display
pub fn format_timestamp(ts: NaiveDateTime) -> String {
    ts.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Format a timestamp compactly for chart axis labels
pub fn format_axis_label(ts: NaiveDateTime) -> String {
    ts.format("%H:%M:%S").to_string()
}
