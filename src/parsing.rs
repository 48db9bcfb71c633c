//! File parsing functionality for latency histogram files
//!
//! Histogram files are plain text dumps such as the ones printed by HdrHistogram:
//!
//! ```text
//!        Value     Percentile TotalCount 1/(1-Percentile)
//!
//!        0.127 0.000000000000          1           1.00
//!        0.255 0.500000000000        512           2.00
//! #[Mean    =        0.301, StdDeviation   =        0.112]
//! ```
//!
//! Any line holding four consecutive numeric tokens is a data row, everything else
//! is skipped. Files ending in `.zst` are decompressed on the fly.

use crate::common::{HistogramRow, ParsedHistogram};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;
use zstd::Decoder;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read input file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to decompress zstd file: {0}")]
    Decompression(String),

    #[error("Invalid number '{token}' on line {line}")]
    InvalidNumber { line: usize, token: String },
}

type Result<T> = core::result::Result<T, ParsingError>;

/// Number of numeric columns in a data row.
const ROW_FIELDS: usize = 4;

/// Parse a histogram file and reconstruct its sample list
///
/// # Arguments
/// * `file_path` - Path to the histogram file (plain text, or zstd compressed if it ends in `.zst`)
///
/// # Returns
/// * `Ok(ParsedHistogram)` - Sample list and percentile table; both empty if no line matched
/// * `Err(ParsingError)` - If the file could not be read or a row holds a malformed number
pub fn parse_histogram_file(file_path: &Path) -> Result<ParsedHistogram> {
    let text = read_histogram_text(file_path)?;
    let parsed = parse_histogram_text(&text)?;

    tracing::debug!(
        path = %file_path.display(),
        rows = parsed.percentiles.len(),
        samples = parsed.samples.len(),
        "parsed histogram file"
    );

    Ok(parsed)
}

fn read_histogram_text(file_path: &Path) -> Result<String> {
    let mut file = File::open(file_path)?;
    let mut text = String::new();

    let is_zstd = file_path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("zst"));

    if is_zstd {
        let mut decoder = Decoder::new(file)
            .map_err(|e| ParsingError::Decompression(format!("Failed to create decoder: {}", e)))?;
        decoder
            .read_to_string(&mut text)
            .map_err(|e| ParsingError::Decompression(e.to_string()))?;
    } else {
        file.read_to_string(&mut text)?;
    }

    Ok(text)
}

/// Parse histogram text that is already in memory
///
/// Rows are consumed in order; see [`reconstruct_samples`] for how the sample list is built.
pub fn parse_histogram_text(text: &str) -> Result<ParsedHistogram> {
    let mut percentiles = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if let Some(row) = parse_row(line, index + 1)? {
            percentiles.push(row);
        }
    }

    let samples = reconstruct_samples(&percentiles);
    Ok(ParsedHistogram {
        samples,
        percentiles,
    })
}

/// Parses a single line, returning `None` if it is not a data row.
fn parse_row(line: &str, line_number: usize) -> Result<Option<HistogramRow>> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(fields) = tokens
        .windows(ROW_FIELDS)
        .find(|window| window.iter().all(|token| is_numeric_token(token)))
    else {
        return Ok(None);
    };

    Ok(Some(HistogramRow {
        latency: parse_number(fields[0], line_number)?,
        percentile: parse_number(fields[1], line_number)?,
        total_count: parse_number(fields[2], line_number)?,
        inverse_percentile: parse_number(fields[3], line_number)?,
    }))
}

/// A token is numeric-looking when it consists only of digits and dots.
fn is_numeric_token(token: &str) -> bool {
    !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit() || b == b'.')
}

fn parse_number<T: std::str::FromStr>(token: &str, line: usize) -> Result<T> {
    token.parse().map_err(|_| ParsingError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

/// Expands cumulative counts into one latency value per observation.
///
/// A row with a lower cumulative count than its predecessor contributes nothing,
/// but still becomes the baseline for the following row. Irregular input is passed
/// through rather than corrected.
pub fn reconstruct_samples(rows: &[HistogramRow]) -> Vec<f64> {
    let mut samples = Vec::new();
    let mut previous_total = 0u64;

    for row in rows {
        if let Some(delta) = row.total_count.checked_sub(previous_total) {
            samples.extend(std::iter::repeat_n(row.latency, delta as usize));
        }
        previous_total = row.total_count;
    }

    samples
}
