use argh::FromArgs;
use latency_histogram_plot::args::Args;
use latency_histogram_plot::common::buckets::bucket_samples;
use latency_histogram_plot::common::ChartData;
use latency_histogram_plot::config::PlotConfig;
use latency_histogram_plot::parsing::{parse_histogram_file, ParsingError};
use latency_histogram_plot::{run, AnalysisError};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

const HGRM: &str = "\
       Value     Percentile TotalCount 1/(1-Percentile)

      10.000 0.500000000000          5           2.00
      20.000 0.900000000000          9          10.00
      30.000 1.000000000000         10
#[Mean    =       16.000, StdDeviation   =        6.633]
#[Max     =       30.000, Total count    =           10]
#[Buckets =           20, SubBuckets     =         2048]
";

const ROWS: &str = "\
10 0.5 5 0.5
20 0.9 9 0.1
30 1.0 10 0.0
";

fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn args_for(histogram: &Path, extra: &[&str]) -> Args {
    let histogram = histogram.to_str().unwrap();
    let mut argv = vec!["-H", histogram, "--no-open"];
    argv.extend_from_slice(extra);
    Args::from_args(&["latency-histogram-plot"], &argv).unwrap()
}

#[test]
fn parses_rows_from_file() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "rows.txt", ROWS.as_bytes());

    let parsed = parse_histogram_file(&path).unwrap();
    assert_eq!(parsed.percentiles.len(), 3);
    assert_eq!(parsed.samples.len(), 10);
    assert_eq!(parsed.samples.iter().filter(|&&s| s == 10.0).count(), 5);
    assert_eq!(parsed.samples.iter().filter(|&&s| s == 20.0).count(), 4);
    assert_eq!(parsed.samples.iter().filter(|&&s| s == 30.0).count(), 1);

    // Same file, same result.
    assert_eq!(parse_histogram_file(&path).unwrap(), parsed);
}

#[test]
fn hdr_style_output_skips_three_column_row() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "run.hgrm", HGRM.as_bytes());

    let parsed = parse_histogram_file(&path).unwrap();
    assert_eq!(parsed.percentiles.len(), 2);
    assert_eq!(parsed.samples.len(), 9);
}

#[test]
fn zstd_compressed_file_matches_plain() {
    let dir = TempDir::new().unwrap();
    let plain = write_file(&dir, "rows.txt", ROWS.as_bytes());
    let compressed = zstd::encode_all(ROWS.as_bytes(), 3).unwrap();
    let packed = write_file(&dir, "rows.txt.zst", &compressed);

    assert_eq!(
        parse_histogram_file(&packed).unwrap(),
        parse_histogram_file(&plain).unwrap()
    );
}

#[test]
fn corrupt_zstd_file_is_decompression_error() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "rows.zst", ROWS.as_bytes());

    let result = parse_histogram_file(&path);
    assert!(matches!(result, Err(ParsingError::Decompression(_))));
}

#[test]
fn bin_counts_never_exceed_samples() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "rows.txt", ROWS.as_bytes());
    let parsed = parse_histogram_file(&path).unwrap();

    let everything = bucket_samples(&parsed.samples, &PlotConfig::default()).unwrap();
    let total: usize = everything.iter().map(|bin| bin.count).sum();
    assert_eq!(total, parsed.samples.len());

    // 30.0 falls on the excluded upper bound.
    let narrow = PlotConfig {
        max_delay: 30,
        delay_step: 10,
    };
    let bins = bucket_samples(&parsed.samples, &narrow).unwrap();
    let counts: Vec<usize> = bins.iter().map(|bin| bin.count).collect();
    assert_eq!(counts, vec![0, 5, 4]);
}

#[test]
fn run_writes_page_and_export() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "run.hgrm", HGRM.as_bytes());
    let output = dir.path().join("page.html");
    let export = dir.path().join("data.json");

    let args = args_for(
        &path,
        &[
            "-o",
            output.to_str().unwrap(),
            "--export",
            export.to_str().unwrap(),
            "--print-buckets",
            "-m",
            "100",
        ],
    );

    let written = run(&args).unwrap();
    assert_eq!(written, output);

    let page = fs::read_to_string(&output).unwrap();
    assert_eq!(page.matches("<svg").count(), 2);
    assert!(page.contains("<title>run.hgrm</title>"));
    assert_eq!(page.matches("<title>Percentage: ").count(), 2);
    assert_eq!(page.matches("<title>Count: ").count(), 10);
    assert!(page.contains("Count: 5&#10;Latency range: 10.00ms - 20.00ms"));

    let data: ChartData = serde_json::from_str(&fs::read_to_string(&export).unwrap()).unwrap();
    assert_eq!(data.percentile_curve, vec![(50.0, 10.0), (90.0, 20.0)]);
    assert_eq!(data.histogram.len(), 10);
    assert_eq!(data.histogram.iter().map(|bin| bin.count).sum::<usize>(), 9);
}

#[test]
fn run_with_no_matching_rows_renders_empty_charts() {
    let dir = TempDir::new().unwrap();
    let path = write_file(&dir, "empty.txt", b"nothing to see\n");
    let output = dir.path().join("page.html");

    let args = args_for(&path, &["-o", output.to_str().unwrap()]);
    run(&args).unwrap();

    let page = fs::read_to_string(&output).unwrap();
    assert_eq!(page.matches("<title>Percentage: ").count(), 0);
    assert_eq!(page.matches("<title>Count: 0&#10;").count(), 200);
}

#[test]
fn run_fails_on_missing_file() {
    let dir = TempDir::new().unwrap();
    let args = args_for(&dir.path().join("missing.hgrm"), &[]);

    let result = run(&args);
    assert!(matches!(
        result,
        Err(AnalysisError::Parsing(ParsingError::FileRead(_)))
    ));
}

#[test]
fn run_rejects_config_before_reading() {
    let dir = TempDir::new().unwrap();
    let args = args_for(&dir.path().join("missing.hgrm"), &["-s", "0"]);

    let result = run(&args);
    assert!(matches!(result, Err(AnalysisError::Config(_))));
}
