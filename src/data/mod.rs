//! Data models and processing for uploaded sensor logs.
//!
//! This module turns raw CSV tables into a uniform, timestamped reading
//! series plus the four summary statistics the dashboard displays.
//!
//! ## Submodules
//!
//! - [`table`]: [`RawTable`] - CSV text parsed into header + string rows
//! - [`readings`]: the normalizer - column selection, timestamp parsing
//!   and synthesis, [`ReadingSeries`] and [`SensorData`]
//! - [`stats`]: [`SummaryStats`] - current/mean/max/min reductions
//! - [`timestamp`]: permissive date-time parsing and display formatting
//! - [`clock`]: injected [`Clock`] capability for timestamp synthesis
//! - [`error`]: the [`DataError`] taxonomy
//!
//! ## Data Flow
//!
//! ```text
//! CSV text
//!    │
//!    ▼
//! RawTable::parse()
//!    │
//!    ▼
//! ReadingSeries::from_table()   ("Time" column, or synthesized from Clock)
//!    │
//!    ▼
//! SummaryStats::from_series()
//! ```

pub mod clock;
pub mod error;
pub mod readings;
pub mod stats;
pub mod table;
pub mod timestamp;

pub use clock::{Clock, FixedClock, SystemClock};
pub use error::DataError;
pub use readings::{Reading, ReadingSeries, SensorData, VALUE_LABEL};
pub use stats::SummaryStats;
pub use table::RawTable;
