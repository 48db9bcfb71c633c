//! Common infrastructure modules shared across the tool
//!
//! This module provides reusable infrastructure for:
//! - Data structures for parsed histograms and chart inputs
//! - Fixed-width bucketing and ASCII table formatting
//! - Plotting the percentile curve and count histogram

pub mod buckets;
pub mod data_structures;
pub mod plots;

// Re-export commonly used items
pub use data_structures::{ChartData, HistogramRow, LatencyBin, ParsedHistogram};
pub use plots::PlotError;
