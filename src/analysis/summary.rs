//! Console summaries of a parsed histogram
//!
//! Produces the text printed after parsing: latency at the standard percentiles,
//! totals for the reconstructed samples and, optionally, the non-empty bins.

use crate::common::buckets::{format_bucket_table, BucketEntry};
use crate::common::{HistogramRow, LatencyBin, ParsedHistogram};
use tabled::{Table, Tabled};

/// Percentiles reported in the summary, on the 0-100 scale.
pub const SUMMARY_PERCENTILES: [f64; 5] = [50.0, 90.0, 99.0, 99.9, 100.0];

/// A row of the percentile summary table
#[derive(Debug, Clone, Tabled)]
pub struct PercentileEntry {
    #[tabled(rename = "Percentile")]
    pub percentile: String,
    #[tabled(rename = "Latency")]
    pub latency: String,
}

/// Latency of the first row at or above `target` (0-100 scale).
pub fn latency_at_percentile(rows: &[HistogramRow], target: f64) -> Option<f64> {
    // Tolerance for sources printing 0.999 as 0.99899999...
    const EPSILON: f64 = 1e-9;

    rows.iter()
        .find(|row| row.percentile * 100.0 + EPSILON >= target)
        .map(|row| row.latency)
}

/// Builds the percentile table entries for [`SUMMARY_PERCENTILES`].
pub fn percentile_entries(rows: &[HistogramRow]) -> Vec<PercentileEntry> {
    SUMMARY_PERCENTILES
        .iter()
        .map(|&target| PercentileEntry {
            percentile: format!("p{}", target),
            latency: latency_at_percentile(rows, target)
                .map(|latency| format!("{:.2}ms", latency))
                .unwrap_or_else(|| "-".to_string()),
        })
        .collect()
}

/// Generate the complete summary text for a parsed histogram
pub fn format_summary(parsed: &ParsedHistogram) -> String {
    let table = Table::new(percentile_entries(&parsed.percentiles)).to_string();

    let samples = &parsed.samples;
    let stats = if samples.is_empty() {
        "No samples reconstructed".to_string()
    } else {
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = samples.iter().sum::<f64>() / samples.len() as f64;
        format!(
            "Min latency: {:.2}ms\nMean latency: {:.2}ms\nMax latency: {:.2}ms",
            min, mean, max
        )
    };

    format!(
        "Latency Summary\n{}\n{}\n\nMatched rows: {}\nReconstructed samples: {}\n{}",
        "=".repeat(15),
        table,
        parsed.percentiles.len(),
        samples.len(),
        stats
    )
}

/// Formats the non-empty bins as a table, with percentages relative to all samples.
pub fn format_bin_table(bins: &[LatencyBin], total_samples: usize) -> String {
    let entries: Vec<BucketEntry> = bins
        .iter()
        .filter(|bin| bin.count > 0)
        .map(|bin| BucketEntry::from_bin(bin, total_samples))
        .collect();

    format_bucket_table(&entries, Some("Latency Distribution (Fixed Bins)"))
}
