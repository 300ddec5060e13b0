use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn data_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

fn run_headless(file: &NamedTempFile, tools: &str) -> serde_json::Value {
    let output = Command::cargo_bin("datasnap")
        .unwrap()
        .arg(file.path())
        .arg("--apply")
        .arg(tools)
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn clear_empties_columns() {
    let file = data_file(r#"{"sources": [{"name": "s", "data": {"x": [1, 2], "y": ["a", "b"]}}]}"#);

    let result = run_headless(&file, "clear");

    assert_eq!(
        result,
        serde_json::json!({"sources": [{"name": "s", "data": {"x": [], "y": []}}]})
    );
}

#[test]
fn checkpoint_clear_restore_brings_data_back() {
    let file = data_file(r#"{"x": [1, 2, 3], "img": [[[1.5, 2.5], [3.5, 4.5]]]}"#);

    let result = run_headless(&file, "checkpoint,clear,restore");

    assert_eq!(
        result,
        serde_json::json!({"sources": [{"data": {
            "img": [[[1.5, 2.5], [3.5, 4.5]]],
            "x": [1, 2, 3]
        }}]})
    );
}

#[test]
fn restore_without_checkpoint_changes_nothing() {
    let file = data_file(r#"{"x": [1]}"#);

    let result = run_headless(&file, "restore");

    assert_eq!(result, serde_json::json!({"sources": [{"data": {"x": [1]}}]}));
}

#[test]
fn unknown_tool_is_rejected() {
    let file = data_file(r#"{"x": [1]}"#);

    Command::cargo_bin("datasnap")
        .unwrap()
        .arg(file.path())
        .args(["--apply", "undo"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'undo'"));
}

#[test]
fn apply_needs_a_file() {
    Command::cargo_bin("datasnap")
        .unwrap()
        .args(["--apply", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--apply needs a data file"));
}

#[test]
fn missing_file_is_reported() {
    Command::cargo_bin("datasnap")
        .unwrap()
        .args(["/nonexistent/data.json", "--apply", "clear"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Path not found"));
}

#[test]
fn malformed_source_is_reported() {
    let file = data_file(r#"{"x": 3}"#);

    Command::cargo_bin("datasnap")
        .unwrap()
        .arg(file.path())
        .args(["--apply", "checkpoint"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("column 'x' must be an array"));
}

#[test]
fn restore_without_checkpoint_keeps_integer_images() {
    let input = r#"{"sources": [{"name": "frames", "data": {
        "frame": [0, 1],
        "image": [[[0, 1], [1, 0]], [[1, 1], [0, 0]]]
    }}]}"#;
    let file = data_file(input);

    let result = run_headless(&file, "restore");

    assert_eq!(result, serde_json::from_str::<serde_json::Value>(input).unwrap());
}
