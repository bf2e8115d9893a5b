// Integration tests for the agrisk CLI.
//
// These tests use assert_cmd to invoke the binary and verify
// exit codes and stdout/stderr output.

#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to build a Command for the agrisk binary.
fn agrisk() -> Command {
    Command::cargo_bin("agrisk").expect("binary should exist")
}

#[test]
fn cli_version_flag() {
    agrisk()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("agrisk"));
}

#[test]
fn cli_help_flag() {
    agrisk()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Agricultural risk scoring"));
}

#[test]
fn assess_requires_location_and_crop() {
    agrisk()
        .args(["assess", "--location", "Punjab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn batch_requires_input_path() {
    agrisk()
        .arg("batch")
        .assert()
        .failure()
        .stderr(predicate::str::contains("required"));
}

#[test]
fn quiet_conflicts_with_verbose() {
    agrisk()
        .args(["-q", "-v", "tables"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
