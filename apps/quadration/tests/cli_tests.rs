//! CLI command tests against real files.

#![allow(clippy::unwrap_used, clippy::panic)]

use quadration::cli::{cmd_batch, cmd_reading, load_batch, run_batch};
use quadration::config::AppConfig;
use quadration::types::BatchRecord;
use quadration_core::SpreadError;
use std::io::Write;
use std::path::Path;
use tempfile::{NamedTempFile, TempDir};

const SUBSCRIBERS_CSV: &str = "first_name,birth_date,target_month_year,email\n\
Cassidy,1991-02-17,2026-02-21,cassidy@example.com\n\
Noel,1988-12-31,2026-03,noel@example.com\n\
Lee,1985-07-04,2026-03,lee@example.com\n";

fn write_file(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, contents).unwrap();
    path
}

fn read_records(path: &Path) -> Vec<BatchRecord> {
    let bytes = std::fs::read(path).unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

// =============================================================================
// BATCH TESTS
// =============================================================================

#[test]
fn test_batch_csv_reports_failures_inline() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "subscribers.csv", SUBSCRIBERS_CSV);
    let output = dir.path().join("readings.json");

    cmd_batch(&AppConfig::default(), &input, "csv", Some(&output)).unwrap();

    let records = read_records(&output);
    assert_eq!(records.len(), 3);
    assert_eq!(
        records.iter().map(|r| r.record).collect::<Vec<_>>(),
        vec![1, 2, 3]
    );

    let cassidy = records[0].response.reading.as_ref().unwrap();
    assert_eq!(cassidy.birth_card.to_string(), "8♦");
    assert_eq!(cassidy.period.card.to_string(), "7♦");

    assert!(!records[1].response.success);
    assert_eq!(records[1].response.subscriber, "Noel");
    assert!(records[1].response.error.as_ref().unwrap().contains("12-31"));

    let lee = records[2].response.reading.as_ref().unwrap();
    assert_eq!(lee.target_date.to_string(), "2026-03-15");
    assert_eq!(lee.period.card.to_string(), "4♣");
}

#[test]
fn test_batch_json_input() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "subscribers.json",
        r#"[{"first_name":"Kit","birth_date":"1930-01-01","target":"2026-03-15"}]"#,
    );
    let output = dir.path().join("out.json");

    cmd_batch(&AppConfig::default(), &input, "json", Some(&output)).unwrap();

    let records = read_records(&output);
    let kit = records[0].response.reading.as_ref().unwrap();
    assert_eq!(kit.spread_year.get(), 90);
    assert!(kit.year_long.displacement.is_none());
}

#[test]
fn test_batch_uses_configured_default_target() {
    let requests = vec![quadration::types::ReadingRequest::new(
        "Cassidy",
        "1991-02-17",
        None,
    )];
    let config = AppConfig::from_toml_str("[reading]\ndefault_target_date = \"2026-02-21\"\n")
        .unwrap();

    let records = run_batch(&config, &requests);
    let reading = records[0].response.reading.as_ref().unwrap();
    assert_eq!(reading.period.days_since, 5);
}

#[test]
fn test_batch_rejects_unknown_format() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "first_name,birth_date").unwrap();

    let result = load_batch(&AppConfig::default(), file.path(), "xml");
    assert!(matches!(result, Err(SpreadError::InvalidInput(_))));
}

#[test]
fn test_batch_rejects_non_utf8_csv() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(b"first_name,birth_date\nJos\xe9,1991-02-17\n").unwrap();

    let result = load_batch(&AppConfig::default(), file.path(), "csv");
    assert!(matches!(result, Err(SpreadError::SerializationError(_))));
}

#[test]
fn test_batch_csv_with_quoted_name() {
    let dir = TempDir::new().unwrap();
    let input = write_file(
        &dir,
        "export.csv",
        "\"first_name\",\"birth_date\",\"target_month_year\"\n\"Jo, Jr\",\"1991-02-17\",\"2026-02-21\"\n",
    );
    let output = dir.path().join("out.json");

    cmd_batch(&AppConfig::default(), &input, "csv", Some(&output)).unwrap();

    let records = read_records(&output);
    let reading = records[0].response.reading.as_ref().unwrap();
    assert_eq!(reading.subscriber, "Jo, Jr");
    assert_eq!(reading.birth_card.to_string(), "8♦");
}

#[test]
fn test_batch_rejects_oversized_file() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "subscribers.csv", SUBSCRIBERS_CSV);
    let config = AppConfig::from_toml_str("[batch]\nmax_file_bytes = 16\n").unwrap();

    let result = load_batch(&config, &input, "csv");
    assert!(matches!(result, Err(SpreadError::InvalidInput(_))));
}

#[test]
fn test_batch_rejects_too_many_records() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "subscribers.csv", SUBSCRIBERS_CSV);
    let config = AppConfig::from_toml_str("[batch]\nmax_records = 2\n").unwrap();

    let result = load_batch(&config, &input, "csv");
    assert!(matches!(result, Err(SpreadError::InvalidInput(_))));
}

#[test]
fn test_batch_rejects_missing_or_directory_input() {
    let dir = TempDir::new().unwrap();
    let config = AppConfig::default();

    assert!(matches!(
        load_batch(&config, &dir.path().join("absent.csv"), "csv"),
        Err(SpreadError::IoError(_))
    ));
    assert!(matches!(
        load_batch(&config, dir.path(), "csv"),
        Err(SpreadError::IoError(_))
    ));
}

#[test]
fn test_batch_rejects_output_in_missing_directory() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "subscribers.csv", SUBSCRIBERS_CSV);
    let output = dir.path().join("nope").join("out.json");

    let result = cmd_batch(&AppConfig::default(), &input, "csv", Some(&output));
    assert!(matches!(result, Err(SpreadError::IoError(_))));
}

// =============================================================================
// READING / CONFIG TESTS
// =============================================================================

#[test]
fn test_reading_surfaces_unassignable_birth_date() {
    let result = cmd_reading(&AppConfig::default(), true, "Noel", "1988-12-31", None);
    assert!(matches!(
        result,
        Err(SpreadError::UnassignableBirthDate { month: 12, day: 31, .. })
    ));
}

#[test]
fn test_reading_succeeds_for_valid_input() {
    assert!(cmd_reading(&AppConfig::default(), true, "Lee", "2000-02-29", None).is_ok());
}

#[test]
fn test_config_file_loading() {
    let dir = TempDir::new().unwrap();
    let path = write_file(
        &dir,
        "quadration.toml",
        "[reading]\ntarget_day = 1\n\n[batch]\nmax_records = 5\n",
    );

    let config = AppConfig::from_file(&path).unwrap();
    assert_eq!(config.reading.target_day, 1);
    assert_eq!(config.batch.max_records, 5);
    assert!(AppConfig::from_file(&dir.path().join("missing.toml")).is_err());
}
