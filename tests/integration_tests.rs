//! Integration tests for the pccat CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get a pccat command isolated from the user's config
fn pccat(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pccat").unwrap();
    cmd.current_dir(home.path())
        .env("HOME", home.path())
        .env("XDG_CONFIG_HOME", home.path().join(".config"))
        .env_remove("PCCAT_REPORT_FILE")
        .env_remove("PCCAT_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

fn rule() -> String {
    "-".repeat(99)
}

#[test]
fn test_help() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("report"))
        .stdout(predicate::str::contains("interactive"));
}

#[test]
fn test_report_single_pc() {
    let tmp = TempDir::new().unwrap();
    let output = pccat(&tmp)
        .args(["report", "--pc", "M1|1999|ManuCorp|A,B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0], rule());
    assert_eq!(lines[1].trim(), "PCPROG REPORT");
    assert_eq!(lines[2], rule());
    assert_eq!(
        lines[3],
        format!("  1 {:>20}   1999 {:>15} [A, B]", "M1", "ManuCorp")
    );
    assert_eq!(lines[4], rule());
}

#[test]
fn test_report_collapses_duplicates() {
    let tmp = TempDir::new().unwrap();
    let output = pccat(&tmp)
        .args([
            "report",
            "--pc",
            "Dell XPS|2020|Dell|8GB RAM,SSD",
            "--pc",
            "Dell XPS|2020|Dell|SSD,8GB RAM",
            "--pc",
            "ThinkPad|2018|Lenovo|",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("Dell XPS").count(), 1);
    assert!(stdout.contains("  2             ThinkPad   2018          Lenovo []"));
}

#[test]
fn test_report_rejects_invalid_year() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .args(["report", "--pc", "X|1980|Acme|"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("invalid year"));
}

#[test]
fn test_report_rejects_malformed_spec() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .args(["report", "--pc", "X|19x9|Acme|"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an integer"));
}

#[test]
fn test_report_empty_prints_nothing() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .arg("report")
        .assert()
        .success()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("nothing to report"));
}

#[test]
fn test_report_to_file() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .args(["report", "--pc", "M1|1999|ManuCorp|A", "-o", "out/pcs.txt"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Report written to:"));

    let saved = fs::read_to_string(tmp.path().join("out/pcs.txt")).unwrap();
    assert!(saved.starts_with(&rule()));
    assert!(saved.contains("ManuCorp [A]"));
}

#[test]
fn test_report_json() {
    let tmp = TempDir::new().unwrap();
    let output = pccat(&tmp)
        .args(["report", "-f", "json", "--pc", "M1|1999|ManuCorp|A,B"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json[0]["model"], "M1");
    assert_eq!(json[0]["year"], 1999);
    assert_eq!(json[0]["components"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_report_json_empty() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .args(["report", "--format", "json"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn test_report_markdown() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .args(["report", "-f", "md", "--pc", "M1|1999|ManuCorp|A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# PCPROG REPORT"))
        .stdout(predicate::str::contains("| ManuCorp"));
}

#[test]
fn test_format_from_environment() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .env("PCCAT_FORMAT", "json")
        .args(["report", "--pc", "M1|1999|ManuCorp|"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

#[test]
fn test_completions() {
    let tmp = TempDir::new().unwrap();
    pccat(&tmp)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pccat"));
}
