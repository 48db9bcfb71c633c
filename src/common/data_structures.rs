use serde::{Deserialize, Serialize};

/// A single data row of a latency histogram file
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramRow {
    /// Latency value of this row (usually milliseconds)
    pub latency: f64,
    /// Percentile rank in the 0.0 - 1.0 range
    pub percentile: f64,
    /// Number of observations at or below [`Self::latency`]
    pub total_count: u64,
    /// `1 / (1 - percentile)` as reported by the source
    pub inverse_percentile: f64,
}

/// Result of parsing a histogram file
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParsedHistogram {
    /// Reconstructed per-request latencies, in file order
    pub samples: Vec<f64>,
    /// All matched rows, in file order
    pub percentiles: Vec<HistogramRow>,
}

/// A fixed-width latency bin of the count histogram, covering `[left, right)`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatencyBin {
    pub left: f64,
    pub right: f64,
    pub count: usize,
}

/// Everything the renderer draws.
///
/// `percentile_curve` holds `(percentage, latency)` pairs where percentage is on
/// the 0-100 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub percentile_curve: Vec<(f64, f64)>,
    pub histogram: Vec<LatencyBin>,
}

impl ChartData {
    /// Builds the chart inputs from the parsed percentile table and computed bins.
    pub fn new(percentiles: &[HistogramRow], histogram: Vec<LatencyBin>) -> Self {
        let percentile_curve = percentiles
            .iter()
            .map(|row| (row.percentile * 100.0, row.latency))
            .collect();

        Self {
            percentile_curve,
            histogram,
        }
    }
}
