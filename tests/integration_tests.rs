use std::io::Write;

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;

fn cmd() -> Command {
    cargo_bin_cmd!("lumapick")
}

#[test]
fn test_cli_defaults_to_yaml_report() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("hue:"))
        .stdout(predicate::str::contains("selection:"))
        .stdout(predicate::str::contains("#ff0000"))
        .stdout(predicate::str::contains("foreground: black"))
        .stdout(predicate::str::contains("kind: none"));
}

#[test]
fn test_cli_selection_in_json() {
    let output = cmd()
        .args([
            "--hue", "0", "--left", "0.5", "--bottom", "0.5", "--format", "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["selection"]["hex"], "#804040");
    assert_eq!(report["selection"]["tint_index"], 128);
    assert_eq!(report["selection"]["foreground"], "white");
    assert_eq!(report["contrast"]["passes"], true);
}

#[test]
fn test_cli_negative_hue_wraps() {
    cmd()
        .args(["--hue", "-120"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0000ff"));
}

#[test]
fn test_cli_clamps_pointer_and_ratio() {
    cmd()
        .args(["--left", "3", "--bottom=-1", "--ratio", "50", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"ratio\": 21.0"))
        .stdout(predicate::str::contains("#ffffff"));
}

#[test]
fn test_cli_contrast_boundary_region() {
    let output = cmd()
        .args([
            "--reference",
            "black",
            "--mode",
            "contrast-boundary",
            "--width",
            "100",
            "--height",
            "100",
            "--format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["overlay"]["path"]["kind"], "region");
    assert_eq!(
        report["overlay"]["path"]["points"].as_array().unwrap().len(),
        512
    );
}

#[test]
fn test_cli_legibility_polyline() {
    cmd()
        .args(["--mode", "legibility"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kind: polyline"));
}

#[test]
fn test_cli_rejects_bad_reference() {
    cmd()
        .args(["--reference", "not-a-color"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not-a-color"));
}

#[test]
fn test_cli_rejects_empty_overlay() {
    cmd()
        .args(["--width", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Overlay size must be positive"));
}

#[test]
fn test_cli_reads_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        "[selection]\nhue = 120.0\n\n[contrast]\nmode = \"legibility\"\n"
    )
    .unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("#00ff00"))
        .stdout(predicate::str::contains("kind: polyline"));
}

#[test]
fn test_cli_flags_override_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[selection]\nhue = 120.0\n").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .args(["--hue", "240"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#0000ff"));
}

#[test]
fn test_cli_missing_config_file_fails() {
    cmd()
        .args(["--config", "/nonexistent/lumapick.toml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load configuration"));
}

#[test]
fn test_cli_generates_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("lumapick"));
}

#[test]
fn test_cli_logs_batch_run_when_log_file_given() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("batch.log");

    cmd()
        .env_remove("RUST_LOG")
        .arg("--log-file")
        .arg(&log)
        .args(["--log-level", "debug", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"selection\""));

    let contents = std::fs::read_to_string(&log).unwrap();
    assert!(contents.contains("report written"), "log was: {contents}");
}
