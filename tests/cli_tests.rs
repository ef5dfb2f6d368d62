//! Integration tests for the Corso CLI
//!
//! These tests run the actual CLI binary and verify output.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Get the binary to test
fn corso_cmd() -> Command {
    Command::cargo_bin("corso").unwrap()
}

fn write_catalog(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("input_courses.json");
    fs::write(&path, json).unwrap();
    path
}

fn read_order(path: &Path) -> Vec<String> {
    let json: serde_json::Value = serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    json["order"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_help_flag() {
    corso_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("course prerequisite ordering"));
}

#[test]
fn test_order_help() {
    corso_cmd()
        .args(["order", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--output"))
        .stdout(predicate::str::contains("--partial"));
}

// ============================================================================
// order
// ============================================================================

#[test]
fn test_order_diamond_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(
        &temp_dir,
        r#"{
            "courses": [
                {"code": "A", "prerequisites": []},
                {"code": "B", "prerequisites": ["A"]},
                {"code": "C", "prerequisites": ["A"]},
                {"code": "D", "prerequisites": ["B", "C"]}
            ]
        }"#,
    );
    let output = temp_dir.path().join("output_order.json");

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Course order generated"));

    assert_eq!(read_order(&output), ["A", "B", "C", "D"]);
}

#[test]
fn test_order_registers_undeclared_prerequisite() {
    let temp_dir = TempDir::new().unwrap();
    // MATH100 never appears as a course record
    let input = write_catalog(
        &temp_dir,
        r#"{"courses": [{"code": "CS101", "prerequisites": ["MATH100"]}]}"#,
    );
    let output = temp_dir.path().join("order.json");

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success();

    assert_eq!(read_order(&output), ["MATH100", "CS101"]);
}

#[test]
fn test_order_empty_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(&temp_dir, r#"{"courses": []}"#);
    let output = temp_dir.path().join("order.json");

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .success();

    assert!(read_order(&output).is_empty());
}

#[test]
fn test_order_cycle_fails_without_writing() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(
        &temp_dir,
        r#"{
            "courses": [
                {"code": "A", "prerequisites": ["B"]},
                {"code": "B", "prerequisites": ["A"]}
            ]
        }"#,
    );
    let output = temp_dir.path().join("order.json");

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .args(["--output", output.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency"))
        .stderr(predicate::str::contains("A, B"));

    assert!(!output.exists());
}

#[test]
fn test_order_cycle_with_partial_writes_resolved_prefix() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(
        &temp_dir,
        r#"{
            "courses": [
                {"code": "X", "prerequisites": []},
                {"code": "A", "prerequisites": ["B"]},
                {"code": "B", "prerequisites": ["A"]}
            ]
        }"#,
    );
    let output = temp_dir.path().join("order.json");

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .args(["--output", output.to_str().unwrap(), "--partial"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Partial order written"))
        .stderr(predicate::str::contains("Circular dependency"));

    // The failure exit code stands, but the acyclic prefix is persisted
    assert_eq!(read_order(&output), ["X"]);
}

#[test]
fn test_order_duplicate_course_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(
        &temp_dir,
        r#"{"courses": [{"code": "A"}, {"code": "A"}]}"#,
    );

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Duplicate course code 'A'"));
}

#[test]
fn test_order_malformed_json_is_rejected() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(&temp_dir, "{not json");

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON parse error"))
        .stderr(predicate::str::contains("Fix:"));
}

#[test]
fn test_order_missing_input_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("does_not_exist.json");

    corso_cmd()
        .args(["order", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("loading catalog from"));
}

// ============================================================================
// check
// ============================================================================

#[test]
fn test_check_valid_catalog() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(
        &temp_dir,
        r#"{
            "courses": [
                {"code": "CS101", "prerequisites": []},
                {"code": "CS201", "prerequisites": ["CS101"]}
            ]
        }"#,
    );

    corso_cmd()
        .args(["check", input.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Courses: 2"))
        .stdout(predicate::str::contains("Prerequisite edges: 1"))
        .stdout(predicate::str::contains("CS101 -> CS201"));
}

#[test]
fn test_check_self_prerequisite_fails() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_catalog(
        &temp_dir,
        r#"{"courses": [{"code": "A", "prerequisites": ["A"]}]}"#,
    );

    corso_cmd()
        .args(["check", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Circular dependency among 1 course(s): A"));
}
