//! End-to-end tests: series files on disk through parse, detect and report.

use std::fs;
use std::io::Write;

use peakdet::report::{write_peaks, write_preview, OutputFormat};
use peakdet::{Analysis, DetectorConfig, HeaderSkip, SeriesError};
use tempfile::{tempdir, NamedTempFile};

fn series_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("create temp file");
    file.write_all(contents.as_bytes()).expect("write temp file");
    file.flush().expect("flush temp file");
    file
}

fn config(capacity: usize, threshold: i64, header_skip: HeaderSkip) -> DetectorConfig {
    DetectorConfig {
        capacity,
        threshold,
        header_skip,
        ..DetectorConfig::default()
    }
}

// ============================================
// Line-skip files
// ============================================

#[test]
fn test_line_skip_file_scenario() {
    let file = series_file("header ignored\n10\n600\n200\n900\n500\n");
    let analysis =
        Analysis::from_path(file.path(), &config(5, 500, HeaderSkip::LineSkip)).unwrap();

    assert_eq!(analysis.series.values(), &[0, 10, 600, 200, 900]);
    assert_eq!(analysis.peaks.indices(), &[2, 4]);
}

#[test]
fn test_line_skip_default_capacity() {
    let mut contents = String::from("Raw Value\n");
    for i in 1..20_000 {
        let value = if i % 1_000 == 0 { 750 } else { 120 };
        contents.push_str(&format!("{value}\n"));
    }
    let file = series_file(&contents);

    let analysis = Analysis::from_path(file.path(), &DetectorConfig::default()).unwrap();
    assert_eq!(analysis.series.len(), 20_000);
    let expected: Vec<usize> = (1_000..20_000).step_by(1_000).collect();
    assert_eq!(analysis.peaks.indices(), expected.as_slice());
}

#[test]
fn test_line_skip_truncated_file() {
    let file = series_file("header\n1\n2\n3\n");
    let err = Analysis::from_path(file.path(), &config(10, 0, HeaderSkip::LineSkip)).unwrap_err();

    match err {
        SeriesError::TruncatedInput { parsed, expected, .. } => {
            assert_eq!(parsed, 3);
            assert_eq!(expected, 9);
        }
        other => panic!("expected truncation, got {other}"),
    }
}

#[test]
fn test_line_skip_malformed_file() {
    let file = series_file("header\n1\n2.5\n3\n");
    let err = Analysis::from_path(file.path(), &config(4, 0, HeaderSkip::LineSkip)).unwrap_err();

    match err {
        SeriesError::MalformedToken { index, text } => {
            assert_eq!(index, 2);
            assert_eq!(text, "2.5");
        }
        other => panic!("expected malformed token, got {other}"),
    }
}

// ============================================
// Field-skip files
// ============================================

#[test]
fn test_field_skip_file() {
    let file = series_file("time raw level :\n0 9 4 8\n2\n");
    let analysis =
        Analysis::from_path(file.path(), &config(5, 3, HeaderSkip::FieldSkip)).unwrap();

    assert_eq!(analysis.series.values(), &[0, 9, 4, 8, 2]);
    assert_eq!(analysis.peaks.indices(), &[1, 2, 3]);
}

// ============================================
// Source handling
// ============================================

#[test]
fn test_missing_file_is_source_unavailable() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("data0.txt");

    let err = Analysis::from_path(&path, &DetectorConfig::default()).unwrap_err();
    match err {
        SeriesError::SourceUnavailable { origin, .. } => {
            assert!(origin.ends_with("data0.txt"));
        }
        other => panic!("expected source unavailable, got {other}"),
    }
}

#[test]
fn test_config_file_drives_run() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("peakdet.json");
    fs::write(
        &config_path,
        r#"{"capacity": 4, "threshold": 5, "header_skip": "line-skip"}"#,
    )
    .unwrap();
    let config = DetectorConfig::from_json_file(&config_path).unwrap();

    let file = series_file("h\n6\n5\n7\n");
    let analysis = Analysis::from_path(file.path(), &config).unwrap();
    assert_eq!(analysis.peaks.indices(), &[1, 3]);
}

// ============================================
// Reporting
// ============================================

#[test]
fn test_preview_and_peak_output() {
    let file = series_file("header ignored\n10\n600\n200\n900\n500\n");
    let analysis =
        Analysis::from_path(file.path(), &config(5, 500, HeaderSkip::LineSkip)).unwrap();

    let mut preview = Vec::new();
    write_preview(&mut preview, &analysis.series, 3).unwrap();
    assert_eq!(String::from_utf8(preview).unwrap(), "0\n10\n600\n");

    let mut peaks = Vec::new();
    write_peaks(&mut peaks, &analysis, OutputFormat::Plain).unwrap();
    assert_eq!(String::from_utf8(peaks).unwrap(), "2\n4\n");
}
