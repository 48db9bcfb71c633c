//! Fixed-width latency bucketing and ASCII table formatting
//!
//! This module provides:
//! - [`bucket_samples`] for turning the reconstructed sample list into [`LatencyBin`]s
//! - [`BucketEntry`] and [`format_bucket_table`] for printing bins using the [`tabled`] crate

use crate::common::LatencyBin;
use crate::config::{ConfigError, PlotConfig};
use tabled::{Table, Tabled};

/// Counts samples into `config.bin_count()` equal bins over `[0, max_delay)`.
///
/// Samples outside the range (including NaN) are not counted, so the sum of all
/// bin counts never exceeds `samples.len()`.
pub fn bucket_samples(samples: &[f64], config: &PlotConfig) -> Result<Vec<LatencyBin>, ConfigError> {
    let bin_count = config.bin_count()?;
    let max_delay = config.max_delay as f64;
    let width = max_delay / bin_count as f64;

    let mut counts = vec![0usize; bin_count];
    for &sample in samples {
        if !(0.0..max_delay).contains(&sample) {
            continue;
        }

        // Float rounding can push values just below max_delay onto bin_count.
        let index = ((sample / width) as usize).min(bin_count - 1);
        counts[index] += 1;
    }

    let bins = counts
        .into_iter()
        .enumerate()
        .map(|(index, count)| LatencyBin {
            left: index as f64 * width,
            right: if index + 1 == bin_count {
                max_delay
            } else {
                (index + 1) as f64 * width
            },
            count,
        })
        .collect();

    Ok(bins)
}

/// Represents a single bucket with its range, count, and percentage
#[derive(Debug, Clone, Tabled)]
pub struct BucketEntry {
    /// Human-readable range description (e.g., "10.00-20.00ms")
    #[tabled(rename = "Range")]
    pub range: String,
    /// Number of samples in this bucket
    #[tabled(rename = "Count")]
    pub count: usize,
    /// Percentage of all samples in this bucket
    #[tabled(rename = "Percentage")]
    pub percentage: String,
}

impl BucketEntry {
    /// Creates a new bucket entry with formatted percentage
    pub fn new(range: String, count: usize, total: usize) -> Self {
        let percentage = if total == 0 {
            "0.00%".to_string()
        } else {
            format!("{:.2}%", (count as f64 / total as f64) * 100.0)
        };

        Self {
            range,
            count,
            percentage,
        }
    }

    /// Creates an entry describing a latency bin
    pub fn from_bin(bin: &LatencyBin, total: usize) -> Self {
        Self::new(
            format!("{:.2}-{:.2}ms", bin.left, bin.right),
            bin.count,
            total,
        )
    }
}

/// Formats bucket entries as an ASCII table using the [`tabled`] crate
///
/// # Arguments
/// * `buckets` - A slice of [`BucketEntry`] to format
/// * `title` - Optional title for the table
///
/// # Returns
/// A formatted ASCII table as a [`String`]
pub fn format_bucket_table(buckets: &[BucketEntry], title: Option<&str>) -> String {
    if buckets.is_empty() {
        return "No data available for bucketing".to_string();
    }

    let table = Table::new(buckets).to_string();

    if let Some(title) = title {
        format!("{}\n{}\n{}", title, "=".repeat(title.len()), table)
    } else {
        table
    }
}
