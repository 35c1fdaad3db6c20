#![allow(clippy::unwrap_used, clippy::expect_used)]

//! CLI smoke tests for the external-frameworks-validator binary

use std::path::Path;
use std::process::{Command, Stdio};

use tempfile::TempDir;

fn run_validator(args: &[&str]) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_external-frameworks-validator"))
        .args(args)
        .env_remove("RUST_LOG")
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .expect("Failed to execute external-frameworks-validator")
}

fn write_config(dir: &TempDir, file_name: &str, content: &str) -> String {
    let path = dir.path().join(file_name);
    std::fs::write(&path, content).unwrap();
    path_str(&path)
}

fn path_str(path: &Path) -> String {
    path.to_str().unwrap().to_owned()
}

#[test]
fn test_valid_config_succeeds() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "frameworks.yaml",
        "externalFrameworks:\n  - name: Job.v1.batch\n  - name: Pod.v1.\n",
    );

    let output = run_validator(&[config.as_str()]);

    assert!(output.status.success(), "valid config should pass");
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("batch/v1, Kind=Job"));
    assert!(stdout.contains("/v1, Kind=Pod"));
}

#[test]
fn test_invalid_config_reports_all_errors() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "frameworks.yaml",
        "externalFrameworks:\n  - name: Job.v1.batch\n  - name: \"\"\n  - name: Job.v1.batch\n",
    );

    let output = run_validator(&[config.as_str(), "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["ok"], serde_json::json!(false));
    let errors = report["errors"].as_array().unwrap();
    assert_eq!(errors.len(), 2);
    assert_eq!(errors[0]["kind"], serde_json::json!("invalid_input"));
    assert_eq!(errors[1]["kind"], serde_json::json!("duplicate_gvk"));
    assert_eq!(
        errors[1]["message"],
        serde_json::json!("duplicate configuration for GVK batch/v1, Kind=Job")
    );
}

#[test]
fn test_json_config_file() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "frameworks.json",
        r#"{"externalFrameworks": [{"name": "???"}]}"#,
    );

    let output = run_validator(&[config.as_str()]);

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("invalid GVK format '???'"));
}

#[test]
fn test_module_section_of_host_config() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "hyperspot.yaml",
        "server:\n  home_dir: /tmp\nmodules:\n  external-frameworks:\n    config:\n      externalFrameworks:\n        - name: RayJob.v1.ray.io\n",
    );

    let output = run_validator(&["--module-section", "--json", config.as_str()]);

    assert!(output.status.success());
    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["adapters"], serde_json::json!(["ray.io/v1, Kind=RayJob"]));
}

#[test]
fn test_unreadable_config_is_usage_error() {
    let dir = TempDir::new().unwrap();
    let missing = path_str(&dir.path().join("missing.yaml"));

    let output = run_validator(&[missing.as_str()]);

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("cannot load"));
}

#[test]
fn test_rejected_entries_logged_to_stderr_by_default() {
    let dir = TempDir::new().unwrap();
    let config = write_config(
        &dir,
        "frameworks.yaml",
        "externalFrameworks:\n  - name: Job.v1.batch\n  - name: Job.v1.batch\n",
    );

    let output = run_validator(&[config.as_str(), "--json"]);

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Duplicate external framework entry"));
    assert!(serde_json::from_slice::<serde_json::Value>(&output.stdout).is_ok());
}
