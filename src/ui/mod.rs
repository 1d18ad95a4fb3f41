//! Terminal rendering.
//!
//! All rendering is direct calls into ratatui widgets; there is no custom
//! drawing logic beyond arranging the data each view needs.
//!
//! - [`common`]: header bar, tab bar, status bar, help overlay
//! - [`overview`]: metric tiles and the time-series line chart
//! - [`histogram`]: value-distribution bar chart
//! - [`readings`]: scrollable raw-readings table
//! - [`theme`]: light/dark color themes

pub mod common;
pub mod histogram;
pub mod overview;
pub mod readings;
pub mod theme;

pub use theme::Theme;
