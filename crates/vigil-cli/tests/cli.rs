//! Integration tests for the `vigil` binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::json;
use tempfile::TempDir;

fn write_audit(dir: &TempDir) -> std::path::PathBuf {
    let audit = json!([
        {
            "ControlId": "CIS-AUTH-1",
            "Title": "Block basic auth",
            "Severity": "High",
            "Expected": "OAuth2",
            "Actual": "Basic auth",
            "Status": "Fail",
            "Evidence": "Basic authentication enabled on SMTP",
            "Reference": "CIS M365",
            "Timestamp": "2025-12-11T10:00:00"
        },
        {
            "ControlId": "CIS-ADMIN-1",
            "Title": "Limit admins",
            "Severity": "Critical",
            "Expected": "5 max",
            "Actual": "8 found",
            "Status": "Fail",
            "Evidence": "Found 8 users with Global Administrator role",
            "Reference": "CIS M365",
            "Timestamp": "2025-12-11T10:01:00"
        }
    ]);
    let path = dir.path().join("audit.json");
    fs::write(&path, serde_json::to_string(&audit).unwrap()).unwrap();
    path
}

#[test]
fn triage_run_writes_artifacts_and_prints_stats() {
    let dir = TempDir::new().unwrap();
    let audit = write_audit(&dir);
    let output_dir = dir.path().join("reports");

    Command::cargo_bin("vigil")
        .unwrap()
        .arg("--audit")
        .arg(&audit)
        .arg("--output-dir")
        .arg(&output_dir)
        .assert()
        .success()
        .stdout(predicate::str::contains("Total alerts:    2"))
        .stdout(predicate::str::contains("Remediated:      1"))
        .stdout(predicate::str::contains("Escalated:       1"))
        .stdout(predicate::str::contains("dry-run"));

    let entries: Vec<_> = fs::read_dir(&output_dir).unwrap().collect();
    assert_eq!(entries.len(), 2);
}

#[test]
fn summary_only_skips_artifacts() {
    let dir = TempDir::new().unwrap();
    let audit = write_audit(&dir);
    let output_dir = dir.path().join("reports");

    Command::cargo_bin("vigil")
        .unwrap()
        .arg("--audit")
        .arg(&audit)
        .arg("--output-dir")
        .arg(&output_dir)
        .arg("--summary-only")
        .assert()
        .success()
        .stdout(predicate::str::contains("Remediation log").not());

    assert_eq!(fs::read_dir(&output_dir).unwrap().count(), 0);
}

#[test]
fn missing_audit_file_completes_with_zero_alerts() {
    let dir = TempDir::new().unwrap();

    Command::cargo_bin("vigil")
        .unwrap()
        .arg("--audit")
        .arg(dir.path().join("nonexistent.json"))
        .arg("--output-dir")
        .arg(dir.path().join("reports"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Total alerts:    0"));
}

#[test]
fn live_flag_changes_reported_mode() {
    let dir = TempDir::new().unwrap();
    let audit = write_audit(&dir);

    Command::cargo_bin("vigil")
        .unwrap()
        .arg("--audit")
        .arg(&audit)
        .arg("--output-dir")
        .arg(dir.path().join("reports"))
        .arg("--live")
        .assert()
        .success()
        .stdout(predicate::str::contains("Mode:            live"));
}
