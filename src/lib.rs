// Library crate: public API items may not be used by the binary
#![allow(unused)]

//! # luxwatch
//!
//! A terminal dashboard and library for luminosity (lux) sensor CSV logs.
//!
//! This crate watches a CSV file of sensor readings, normalizes it into a
//! timestamped series, derives summary statistics, and displays them in an
//! interactive terminal UI: metric tiles, a time-series line chart, a
//! histogram, and a raw-readings table.
//!
//! ## Architecture
//!
//! The crate is organized into four main modules:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Application                          │
//! │  ┌─────────┐    ┌──────────┐    ┌─────────┐    ┌─────────┐ │
//! │  │  app    │───▶│   data   │───▶│   ui    │───▶│ Terminal│ │
//! │  │ (state) │    │(processing)   │(rendering)   │         │ │
//! │  └────┬────┘    └──────────┘    └─────────┘    └─────────┘ │
//! │       │                                                     │
//! │       ▼                                                     │
//! │  ┌─────────┐                                                │
//! │  │ source  │◀── FileSource | MemorySource                  │
//! │  │ (input) │                                                │
//! │  └─────────┘                                                │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! - **[`app`]**: Application state, view navigation, and the per-upload
//!   load/error cycle
//! - **[`source`]**: Data source abstraction ([`DataSource`] trait) with a
//!   polled-file implementation and an in-memory queue
//! - **[`data`]**: Normalization and summarization - turns raw CSV tables
//!   into a timestamped [`ReadingSeries`] and [`SummaryStats`]
//! - **[`ui`]**: Terminal rendering using ratatui - metric tiles, line
//!   chart, histogram, readings table, and theme support
//!
//! ## Usage
//!
//! ### As a CLI tool
//!
//! ```bash
//! # Watch a CSV log of lux readings
//! luxwatch --file lux.csv
//!
//! # Summarize a log to JSON without entering the TUI
//! luxwatch --file lux.csv --export summary.json
//! ```
//!
//! ### As a library with a file source
//!
//! ```
//! use luxwatch::{App, DataSource, FileSource, SystemClock};
//!
//! let source: Box<dyn DataSource> = Box::new(FileSource::new("lux.csv"));
//! let app = App::new(Some(source), Box::new(SystemClock));
//! ```
//!
//! ### Processing a table directly
//!
//! ```
//! use luxwatch::{RawTable, ReadingSeries, SummaryStats, SystemClock};
//!
//! let table = RawTable::parse("Time,Lux\n08:00,120\n08:01,450\n").unwrap();
//! let series = ReadingSeries::from_table(&table, &SystemClock).unwrap();
//! let stats = SummaryStats::from_series(&series).unwrap();
//! assert_eq!(stats.max, 450.0);
//! ```
//!
//! Tables without a "Time" column get timestamps synthesized from the
//! injected [`Clock`], one minute apart; pass a [`FixedClock`] to make
//! that deterministic:
//!
//! ```
//! use chrono::NaiveDate;
//! use luxwatch::{FixedClock, RawTable, ReadingSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap()
//!     .and_hms_opt(10, 0, 0).unwrap();
//! let table = RawTable::parse("Lux\n120\n450\n").unwrap();
//! let series = ReadingSeries::from_table(&table, &FixedClock(start)).unwrap();
//! assert_eq!(series.readings[1].timestamp, start + chrono::Duration::minutes(1));
//! ```

pub mod app;
pub mod data;
pub mod events;
pub mod source;
pub mod ui;

// Re-export main types for convenience
pub use app::{App, View};
pub use data::{
    Clock, DataError, FixedClock, RawTable, Reading, ReadingSeries, SensorData, SummaryStats,
    SystemClock, VALUE_LABEL,
};
pub use source::{DataSource, FileSource, MemorySource};
