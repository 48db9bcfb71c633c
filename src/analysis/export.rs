//! JSON export of the chart inputs

use crate::common::ChartData;
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while exporting chart data
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("Failed to write export file: {0}")]
    FileWrite(#[from] std::io::Error),

    #[error("Failed to serialize chart data: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Writes `data` to `output_path` as pretty-printed JSON.
pub fn export_chart_data(data: &ChartData, output_path: &Path) -> Result<(), ExportError> {
    let writer = BufWriter::new(File::create(output_path)?);
    serde_json::to_writer_pretty(writer, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::LatencyBin;

    #[test]
    fn exported_json_reads_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.json");
        let data = ChartData {
            percentile_curve: vec![(50.0, 10.0), (100.0, 30.0)],
            histogram: vec![LatencyBin {
                left: 0.0,
                right: 10.0,
                count: 3,
            }],
        };

        export_chart_data(&data, &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("\"percentile_curve\""));
        let read_back: ChartData = serde_json::from_str(&text).unwrap();
        assert_eq!(read_back, data);
    }

    #[test]
    fn missing_directory_is_write_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("chart.json");
        let data = ChartData {
            percentile_curve: Vec::new(),
            histogram: Vec::new(),
        };

        let result = export_chart_data(&data, &path);
        assert!(matches!(result, Err(ExportError::FileWrite(_))));
    }
}
