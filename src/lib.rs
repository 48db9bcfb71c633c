//! # latency-histogram-plot
//!
//! Reads a latency histogram file (`latency percentile total-count 1/(1-percentile)` rows),
//! reconstructs the individual latencies it describes and renders two charts: the
//! percentile curve and a fixed-width count histogram.
//!
//! The pipeline is [`parsing::parse_histogram_file`] → [`common::buckets::bucket_samples`]
//! → [`common::plots::write_report_page`], wired together by [`run`].

pub mod args;
pub mod config;
pub mod logging;
pub mod parsing;
pub mod viewer;

/// Shared data structures, bucketing and plotting.
pub mod common;

/// Console summaries and data export.
pub mod analysis;

use crate::args::Args;
use crate::common::buckets::bucket_samples;
use crate::common::plots::write_report_page;
use crate::common::ChartData;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while producing the charts
#[derive(Error, Debug)]
pub enum AnalysisError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Parsing error: {0}")]
    Parsing(#[from] parsing::ParsingError),

    #[error("Plot error: {0}")]
    Plot(#[from] common::PlotError),

    #[error("Export error: {0}")]
    Export(#[from] analysis::ExportError),
}

pub type Result<T> = core::result::Result<T, AnalysisError>;

/// Parses the histogram file named in `args`, prints the summary and writes the chart page.
///
/// # Returns
/// * `Ok(PathBuf)` - Location of the written chart page
/// * `Err(AnalysisError)` - On invalid settings, unreadable/malformed input or write failures
pub fn run(args: &Args) -> Result<PathBuf> {
    let config = args.plot_config();
    // Reject settings before touching the file.
    config.bin_count()?;

    tracing::info!(path = %args.histogram_file.display(), "reading histogram");
    let parsed = parsing::parse_histogram_file(&args.histogram_file)?;
    if parsed.percentiles.is_empty() {
        tracing::warn!("no histogram rows found, charts will be empty");
    }

    println!("{}", analysis::format_summary(&parsed));

    let bins = bucket_samples(&parsed.samples, &config)?;
    let binned: usize = bins.iter().map(|bin| bin.count).sum();
    if binned < parsed.samples.len() {
        tracing::info!(
            excluded = parsed.samples.len() - binned,
            max_delay = config.max_delay,
            "samples outside histogram range"
        );
    }

    if args.print_buckets {
        println!();
        println!("{}", analysis::format_bin_table(&bins, parsed.samples.len()));
    }

    let data = ChartData::new(&parsed.percentiles, bins);

    if let Some(export_path) = &args.export {
        analysis::export_chart_data(&data, export_path)?;
        tracing::info!(path = %export_path.display(), "exported chart data");
    }

    let output_path = args
        .output
        .clone()
        .unwrap_or_else(|| viewer::default_output_path(&args.histogram_file));
    let title = args
        .histogram_file
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| args.histogram_file.display().to_string());

    write_report_page(&data, config.max_delay as f64, &title, &output_path)?;
    println!("\nCharts written to {}", output_path.display());

    if !args.no_open {
        if let Err(e) = viewer::open_in_browser(&output_path) {
            tracing::warn!(error = %e, "could not open a browser, open the page manually");
        }
    }

    Ok(output_path)
}
