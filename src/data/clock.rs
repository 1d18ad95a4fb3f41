//! Clock capability for timestamp synthesis.
//!
//! Tables without a "Time" column get timestamps synthesized from "now";
//! injecting the clock keeps that reproducible in tests and embeddings.

use std::fmt::Debug;

use chrono::{Local, NaiveDateTime};

/// Source of the current local date-time.
///
/// The normalizer only consults the clock when it has to synthesize
/// timestamps (no "Time" column) or anchor a bare time of day to a date.
pub trait Clock: Send + Debug {
    /// The current moment, naive local time.
    fn now(&self) -> NaiveDateTime;
}

/// Wall-clock implementation used by the binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> NaiveDateTime {
        Local::now().naive_local()
    }
}

/// A clock pinned to one instant.
///
/// Useful for tests and for embedders that want deterministic synthesized
/// timestamps.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub NaiveDateTime);

impl Clock for FixedClock {
    fn now(&self) -> NaiveDateTime {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn fixed_clock_returns_its_instant() {
        let instant = NaiveDate::from_ymd_opt(2024, 5, 17)
            .unwrap()
            .and_hms_opt(8, 30, 0)
            .unwrap();
        let clock = FixedClock(instant);
        assert_eq!(clock.now(), instant);
        assert_eq!(clock.now(), clock.now());
    }
}
