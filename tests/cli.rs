//! Integration tests for the `bizm` binary.

use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures").join(name)
}

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("bizm").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("alerts"));
}

#[test]
fn test_run_prints_summary_and_exports() {
    let temp = TempDir::new().unwrap();
    let json_out = temp.path().join("output.json");
    let csv_out = temp.path().join("output.csv");

    let mut cmd = Command::cargo_bin("bizm").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(fixture("sample_data.json"))
        .arg("--export")
        .arg(&json_out)
        .arg("--export-csv")
        .arg(&csv_out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Days: 4 (latest 2025-03-04)"))
        .stdout(predicate::str::contains("CAC increased by 87.50%"))
        .stdout(predicate::str::contains("Review marketing campaigns due to rising CAC"));

    let state = biz_metrics::io::read_result_json(&json_out).unwrap();
    assert_eq!(state.daily_data.len(), 4);
    assert_eq!(state.avg_revenue, 1000.0);
    assert_eq!(state.avg_cost, 800.0);
    assert_eq!(state.recommendations.len(), 2);

    let csv = std::fs::read_to_string(&csv_out).unwrap();
    assert!(csv.starts_with("metric,value\n"));
    assert!(csv.contains("alert,CAC increased by 87.50%"));
}

#[test]
fn test_alerts_from_csv() {
    let mut cmd = Command::cargo_bin("bizm").unwrap();
    cmd.arg("alerts")
        .arg("-i")
        .arg(fixture("sample_data.csv"))
        .assert()
        .success()
        .stdout(
            "ALERT: CAC increased by 87.50%\n\
             REC: Review marketing campaigns due to rising CAC\n\
             REC: Consider increasing advertising budget as sales trend is growing\n",
        );
}

#[test]
fn test_single_day_exits_with_insufficient_data() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("one.json");
    std::fs::write(&input, r#"{"daily_data": [{"revenue": 10, "cost": 5, "customers": 1}]}"#).unwrap();

    let mut cmd = Command::cargo_bin("bizm").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .assert()
        .code(3)
        .stderr(predicate::str::contains("At least 2 days of data are required"));
}

#[test]
fn test_missing_field_exits_with_input_error() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("days.json");
    std::fs::write(
        &input,
        r#"{"daily_data": [{"revenue": 10, "cost": 5, "customers": 1}, {"revenue": 10, "customers": 1}]}"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("bizm").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Record 1: missing field 'cost'"));
}

#[test]
fn test_zero_customers_exits_with_computation_error() {
    let temp = TempDir::new().unwrap();
    let input = temp.path().join("days.csv");
    std::fs::write(&input, "revenue,cost,customers\n10,5,1\n10,5,0\n").unwrap();

    let mut cmd = Command::cargo_bin("bizm").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg(&input)
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Division by zero"));
}

#[test]
fn test_missing_input_file() {
    let mut cmd = Command::cargo_bin("bizm").unwrap();
    cmd.arg("run")
        .arg("--input")
        .arg("/definitely/not/here.json")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to open input"));
}
