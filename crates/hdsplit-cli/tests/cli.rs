//! End-to-end tests for the hdsplit binary.

use assert_cmd::Command;
use predicates::prelude::*;

const REPORT_DOC: &str = "Report: Daily\nDate: 2024-01-01\n-----\nColumn\nfoo,1\nbar,2\n";

fn hdsplit() -> Command {
    Command::cargo_bin("hdsplit").unwrap()
}

#[test]
fn process_splits_plain_document() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("report.txt");
    std::fs::write(&input, REPORT_DOC).unwrap();

    hdsplit()
        .args(["process", input.to_str().unwrap(), "--format", "jsonl"])
        .assert()
        .success()
        .stdout(predicate::str::contains("foo,1").and(predicate::str::contains("bar,2")));
}

#[test]
fn process_uses_config_extractors() {
    let dir = tempfile::tempdir().unwrap();

    let input = dir.path().join("report.txt");
    std::fs::write(&input, REPORT_DOC).unwrap();

    let config = dir.path().join("config.json");
    std::fs::write(
        &config,
        r#"{
            "keep_original_fields": false,
            "detail_line_field": "line",
            "header_extractors": [
                {"line_number": 2, "regex": "(Date): (\\S+)", "key": "date"}
            ]
        }"#,
    )
    .unwrap();

    hdsplit()
        .args([
            "process",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "--format",
            "jsonl",
        ])
        .assert()
        .success()
        .stdout(
            predicate::str::contains(r#""date":"2024-01-01""#)
                .and(predicate::str::contains(r#""line":"foo,1""#)),
        );
}

#[test]
fn process_record_input_rejects_non_string_field() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("record.json");
    std::fs::write(&input, r#"{"text": 42}"#).unwrap();

    hdsplit()
        .args(["process", input.to_str().unwrap(), "--record"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid input type"));
}

#[test]
fn process_fails_on_missing_input() {
    hdsplit()
        .args(["process", "no-such-file.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn process_rejects_bad_config_pattern() {
    let dir = tempfile::tempdir().unwrap();

    let input = dir.path().join("report.txt");
    std::fs::write(&input, REPORT_DOC).unwrap();

    let config = dir.path().join("config.json");
    std::fs::write(
        &config,
        r#"{"header_extractors": [{"line_number": 1, "regex": "(broken"}]}"#,
    )
    .unwrap();

    hdsplit()
        .args([
            "process",
            input.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid pattern"));
}

#[test]
fn batch_writes_one_output_per_input() {
    let dir = tempfile::tempdir().unwrap();
    let out_dir = dir.path().join("out");

    for name in ["a.txt", "b.txt"] {
        std::fs::write(dir.path().join(name), REPORT_DOC).unwrap();
    }

    let pattern = dir.path().join("*.txt");
    hdsplit()
        .args([
            "batch",
            pattern.to_str().unwrap(),
            "--output-dir",
            out_dir.to_str().unwrap(),
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 successful"));

    assert!(out_dir.join("a.jsonl").exists());
    assert!(out_dir.join("b.jsonl").exists());
}

#[test]
fn config_init_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");

    hdsplit()
        .args(["config", "init", "--output", config.to_str().unwrap()])
        .assert()
        .success();

    assert!(config.exists());

    // init again without --force refuses to overwrite
    hdsplit()
        .args(["config", "init", "--output", config.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("already exists"));
}
