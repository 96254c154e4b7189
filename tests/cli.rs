//! Integration tests for the extlint binary.
//!
//! These tests verify end-to-end behavior including:
//! - Exit codes for valid and invalid source directories
//! - Aggregated error reporting
//! - Verbose-mode replay of captured debug output

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to create a source directory holding the given manifest.json
fn source_dir(manifest: &str) -> TempDir {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
    fs::write(temp_dir.path().join("manifest.json"), manifest).expect("Failed to write manifest");
    temp_dir
}

/// Helper to get the path to the CLI binary
fn cli() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("extlint"))
}

#[test]
fn test_cli_help() {
    cli()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("manifest.json"));
}

#[test]
fn test_valid_source_dir_exits_zero() {
    let dir = source_dir(
        r#"{
            "name": "the extension",
            "version": "0.0.1",
            "applications": {"gecko": {"id": "basta@example.com"}}
        }"#,
    );

    cli()
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("the extension 0.0.1 looks valid"));
}

#[test]
fn test_invalid_manifest_reports_one_aggregated_error() {
    let dir = source_dir("{}");

    cli()
        .arg(dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("is invalid"))
        .stdout(predicate::str::contains("missing \"name\" property"))
        .stdout(predicate::str::contains("missing \"version\" property"));
}

#[test]
fn test_missing_manifest_file() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    cli()
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Could not read manifest.json file at"));
}

#[test]
fn test_verbose_failure_replays_captured_debug_output() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    cli()
        .arg(temp_dir.path())
        .arg("--verbose")
        .assert()
        .failure()
        .stdout(predicate::str::contains("[manifest.rs][debug] Validating manifest at"))
        .stdout(predicate::str::contains("[main.rs][error]"));
}

#[test]
fn test_non_verbose_failure_replays_bare_messages() {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");

    cli()
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("Validating manifest at"))
        .stdout(predicate::str::contains("[manifest.rs]").not());
}
