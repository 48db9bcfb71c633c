//! Analysis outputs produced alongside the charts
//!
//! - [`summary`]: percentile and bin tables printed to the console
//! - [`export`]: JSON dump of the chart inputs

pub mod export;
pub mod summary;

// Re-export main functions for convenience
pub use export::{export_chart_data, ExportError};
pub use summary::{format_bin_table, format_summary};
