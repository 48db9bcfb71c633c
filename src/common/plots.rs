//! Plotting infrastructure for the latency charts
//!
//! Charts are drawn with the [`plotters`] SVG backend at a fixed 1200x400 resolution.
//! Hover tooltips are added on top of the drawn chart as invisible SVG shapes carrying
//! `<title>` elements, one per plotted data point or bin, which every browser shows
//! on mouse-over without any scripting.
//!
//! Both charts are then stacked vertically in a single self-contained HTML page.

use crate::common::{ChartData, LatencyBin};
use plotters::prelude::*;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Size of each chart in pixels.
const CHART_SIZE: (u32, u32) = (1200, 400);

pub const PERCENTILE_CHART_TITLE: &str = "Latency distribution (x:Percentage, y:Latency)";
pub const HISTOGRAM_CHART_TITLE: &str = "Latency distribution (x:Latency, y:Count)";

const BAR_COLOR: RGBColor = RGBColor(0, 128, 0);

/// Headroom above the highest value on the Y axis.
const Y_HEADROOM: f64 = 1.05;

/// Renders the percentile curve (x: percentage 0-100, y: latency) as an SVG document
///
/// Points are connected in the order given; no sorting takes place.
///
/// # Arguments
/// * `curve` - `(percentage, latency)` pairs in file order
///
/// # Returns
/// * `Ok(String)` - The SVG markup, with one hover target per point
/// * `Err(PlotError)` - If drawing failed
pub fn render_percentile_chart(curve: &[(f64, f64)]) -> Result<String> {
    let y_max = axis_max(curve.iter().map(|&(_, latency)| latency));

    let mut svg = String::new();
    let hover_targets: Vec<String>;
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(PERCENTILE_CHART_TITLE, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..100.0, 0.0..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("Percentage")
            .y_desc("Latency ms")
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        chart
            .draw_series(LineSeries::new(curve.iter().copied(), RED.stroke_width(2)))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        hover_targets = curve
            .iter()
            .map(|&(percentage, latency)| {
                let (x, y) = chart.backend_coord(&(percentage, latency));
                format!(
                    r##"<circle cx="{}" cy="{}" r="6" fill="#000" fill-opacity="0"><title>Percentage: {} %&#10;Latency: {:.2}ms</title></circle>"##,
                    x, y, percentage, latency
                )
            })
            .collect();

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    attach_hover_targets(svg, &hover_targets)
}

/// Renders the latency-vs-count histogram as an SVG document
///
/// Each bin is drawn as a bar from zero to its count over `[left, right)`. Empty bins
/// draw nothing, but still get a hover target.
///
/// # Arguments
/// * `bins` - The bucketed histogram
/// * `max_delay` - Upper bound of the X axis
pub fn render_histogram_chart(bins: &[LatencyBin], max_delay: f64) -> Result<String> {
    let y_max = axis_max(bins.iter().map(|bin| bin.count as f64));

    let mut svg = String::new();
    let hover_targets: Vec<String>;
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        root.fill(&WHITE)
            .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

        let mut chart = ChartBuilder::on(&root)
            .caption(HISTOGRAM_CHART_TITLE, ("sans-serif", 24))
            .margin(20)
            .x_label_area_size(50)
            .y_label_area_size(70)
            .build_cartesian_2d(0.0..max_delay, 0.0..y_max)
            .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

        chart
            .configure_mesh()
            .x_desc("Latency ms")
            .y_desc("Count")
            .draw()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        let filled = bins.iter().filter(|bin| bin.count > 0);
        chart
            .draw_series(filled.clone().map(|bin| {
                Rectangle::new(
                    [(bin.left, 0.0), (bin.right, bin.count as f64)],
                    BAR_COLOR.filled(),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
        chart
            .draw_series(filled.map(|bin| {
                Rectangle::new(
                    [(bin.left, 0.0), (bin.right, bin.count as f64)],
                    WHITE.stroke_width(1),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;

        // Targets span the full column height so short bars stay easy to hover.
        hover_targets = bins
            .iter()
            .map(|bin| {
                let (x0, y0) = chart.backend_coord(&(bin.left, y_max));
                let (x1, y1) = chart.backend_coord(&(bin.right, 0.0));
                format!(
                    r##"<rect x="{}" y="{}" width="{}" height="{}" fill="#000" fill-opacity="0"><title>Count: {}&#10;Latency range: {:.2}ms - {:.2}ms</title></rect>"##,
                    x0,
                    y0,
                    (x1 - x0).max(1),
                    (y1 - y0).max(1),
                    bin.count,
                    bin.left,
                    bin.right
                )
            })
            .collect();

        root.present()
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    attach_hover_targets(svg, &hover_targets)
}

/// Renders both charts into one HTML page, percentile curve on top
///
/// # Arguments
/// * `data` - The chart inputs
/// * `max_delay` - Upper bound of the histogram X axis
/// * `title` - Page title, usually the name of the histogram file
pub fn render_report_page(data: &ChartData, max_delay: f64, title: &str) -> Result<String> {
    let percentile_svg = render_percentile_chart(&data.percentile_curve)?;
    let histogram_svg = render_histogram_chart(&data.histogram, max_delay)?;
    let title = escape_html(title);

    let page = format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n\
         <style>body {{ font-family: sans-serif; margin: 20px; }} .chart {{ margin-bottom: 20px; }}</style>\n\
         </head>\n<body>\n<h2>{title}</h2>\n\
         <div class=\"chart\">\n{percentile_svg}\n</div>\n\
         <div class=\"chart\">\n{histogram_svg}\n</div>\n\
         </body>\n</html>\n"
    );

    Ok(page)
}

/// Renders the report page and saves it to `output_path`
pub fn write_report_page(
    data: &ChartData,
    max_delay: f64,
    title: &str,
    output_path: &Path,
) -> Result<()> {
    let page = render_report_page(data, max_delay, title)?;
    std::fs::write(output_path, page)?;
    Ok(())
}

/// Upper bound for a value axis; never zero so empty charts still get a valid range.
fn axis_max(values: impl Iterator<Item = f64>) -> f64 {
    let max = values.fold(0.0, f64::max);
    if max > 0.0 {
        max * Y_HEADROOM
    } else {
        1.0
    }
}

/// Inserts the hover targets as the topmost group of the SVG document.
fn attach_hover_targets(mut svg: String, targets: &[String]) -> Result<String> {
    let end = svg
        .rfind("</svg>")
        .ok_or_else(|| PlotError::Drawing("SVG output has no closing tag".to_string()))?;

    let mut group = String::from("<g class=\"hover-targets\">\n");
    for target in targets {
        group.push_str(target);
        group.push('\n');
    }
    group.push_str("</g>\n");

    svg.insert_str(end, &group);
    Ok(svg)
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
