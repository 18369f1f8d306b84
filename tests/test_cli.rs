//! Tests for CLI argument parsing and the end-to-end scoring binary

mod common;

use assert_cmd::Command;
use clap::Parser;
use predicates::prelude::*;
use woeiv::cli::Cli;
use woeiv::pipeline::ColumnKind;

use common::write_test_csv;

#[test]
fn test_cli_default_values() {
    let cli = Cli::parse_from(["woeiv", "-i", "data.csv", "-t", "target"]);

    assert_eq!(cli.bins, 10, "Default bucket count should be 10");
    assert_eq!(cli.kind, None, "Column kind should be inferred by default");
    assert_eq!(cli.id_column, None);
    assert_eq!(cli.output, None);
    assert_eq!(
        cli.infer_schema_length, 10000,
        "Default schema inference should be 10000"
    );
}

#[test]
fn test_cli_custom_values() {
    let cli = Cli::parse_from([
        "woeiv",
        "-i",
        "data.csv",
        "-t",
        "label",
        "--id-column",
        "customer_id",
        "--bins",
        "5",
        "--kind",
        "continuous",
    ]);

    assert_eq!(cli.target, "label");
    assert_eq!(cli.id_column.as_deref(), Some("customer_id"));
    assert_eq!(cli.bins, 5);
    assert_eq!(cli.kind, Some(ColumnKind::Continuous));
}

#[test]
fn test_cli_rejects_unknown_kind() {
    let result = Cli::try_parse_from(["woeiv", "-i", "data.csv", "-t", "y", "--kind", "ordinal"]);
    assert!(result.is_err());
}

#[test]
fn test_binary_scores_and_ranks_columns() {
    let (_dir, path) = write_test_csv();

    Command::cargo_bin("woeiv")
        .unwrap()
        .args([
            "-i",
            path.to_str().unwrap(),
            "-t",
            "target",
            "--id-column",
            "customer_id",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("INFORMATION VALUE RANKING"))
        .stdout(predicate::str::contains("segment"))
        .stdout(predicate::str::contains("balance"))
        .stdout(predicate::str::contains("scoring complete"));
}

#[test]
fn test_binary_exports_json_report() {
    let (dir, path) = write_test_csv();
    let output = dir.path().join("scores.json");

    Command::cargo_bin("woeiv")
        .unwrap()
        .args([
            "-i",
            path.to_str().unwrap(),
            "-t",
            "target",
            "--id-column",
            "customer_id",
            "-o",
            output.to_str().unwrap(),
        ])
        .assert()
        .success();

    let report: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&output).unwrap()).unwrap();

    assert_eq!(report["metadata"]["target_column"], "target");
    let columns = report["columns"].as_array().unwrap();
    assert_eq!(columns.len(), 2, "segment and balance should be scored");
    for column in columns {
        assert!(column["woe_table"]["rows"].as_array().is_some());
    }
}

#[test]
fn test_binary_fails_on_missing_target_column() {
    let (_dir, path) = write_test_csv();

    Command::cargo_bin("woeiv")
        .unwrap()
        .args(["-i", path.to_str().unwrap(), "-t", "nonexistent"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_binary_fails_on_missing_input_file() {
    Command::cargo_bin("woeiv")
        .unwrap()
        .args(["-i", "/no/such/file.csv", "-t", "target"])
        .assert()
        .failure();
}
