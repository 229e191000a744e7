//! E2E tests for the check and render commands
//!
//! These tests spawn the built binary against generated dataset files.

use std::path::PathBuf;
use std::process::Command;

fn ganttviz_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .parent()
        .unwrap()
        .parent()
        .unwrap()
        .join("target/debug/ganttviz")
}

const THREE_TASKS: &str = r#"{
  "columns": [
    {"displayName": "Task", "role": "taskName"},
    {"displayName": "Start", "role": "startDate"},
    {"displayName": "End", "role": "endDate"},
    {"displayName": "State", "role": "state"}
  ],
  "rows": [
    ["Build", "0", "60", "queued"],
    ["Build", "60", "180", "running"],
    ["Release", "1440", "1500", "done"]
  ]
}"#;

fn write_dataset(dir: &tempfile::TempDir, name: &str, body: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, body).expect("failed to write dataset fixture");
    path
}

/// Run a subcommand and return (exit_code, stdout, stderr)
fn run(args: &[&str]) -> (i32, String, String) {
    let output = Command::new(ganttviz_binary())
        .args(args)
        .output()
        .expect("failed to execute ganttviz");

    let exit_code = output.status.code().unwrap_or(-1);
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();

    (exit_code, stdout, stderr)
}

// =============================================================================
// Check Command Tests
// =============================================================================

#[test]
fn test_check_reports_rows_and_domain() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir, "three.json", THREE_TASKS);

    let (code, stdout, _) = run(&["check", dataset.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok"));
    assert!(stdout.contains("rows:    3"));
    assert!(stdout.contains("[0, 1500] minutes (25 hour ticks)"));
    assert!(stdout.contains("2 categories"));
}

#[test]
fn test_check_rejects_non_numeric_time() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(
        &dir,
        "bad.json",
        r#"{
          "columns": [
            {"displayName": "Task", "role": "taskName"},
            {"displayName": "Start", "role": "startDate"},
            {"displayName": "End", "role": "endDate"},
            {"displayName": "State", "role": "state"}
          ],
          "rows": [["Build", "soon", "60", "queued"]]
        }"#,
    );

    let (code, _, stderr) = run(&["check", dataset.to_str().unwrap()]);
    assert_ne!(code, 0);
    assert!(stderr.contains("soon"));
}

#[test]
fn test_check_rejects_missing_file() {
    let (code, _, stderr) = run(&["check", "/nonexistent/tasks.json"]);
    assert_ne!(code, 0);
    assert!(stderr.contains("cannot read"));
}

// =============================================================================
// Render Command Tests
// =============================================================================

#[test]
fn test_render_writes_svg_to_stdout() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir, "three.json", THREE_TASKS);

    let (code, stdout, _) = run(&["render", dataset.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("<svg"));
    assert_eq!(stdout.matches("class=\"task\"").count(), 3);
}

#[test]
fn test_render_writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir, "three.json", THREE_TASKS);
    let out = dir.path().join("chart.svg");

    let (code, _, _) = run(&[
        "render",
        dataset.to_str().unwrap(),
        "-o",
        out.to_str().unwrap(),
    ]);
    assert_eq!(code, 0);

    let svg = std::fs::read_to_string(&out).unwrap();
    assert!(svg.contains("class=\"gantt\""));
    assert!(svg.contains("class=\"x-axis\""));
}

#[test]
fn test_render_empty_rows_writes_cleared_chart() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(
        &dir,
        "empty.json",
        r#"{
          "columns": [
            {"displayName": "Task", "role": "taskName"},
            {"displayName": "Start", "role": "startDate"},
            {"displayName": "End", "role": "endDate"},
            {"displayName": "State", "role": "state"}
          ],
          "rows": []
        }"#,
    );

    let (code, stdout, _) = run(&["render", dataset.to_str().unwrap()]);
    assert_eq!(code, 0);
    assert!(stdout.contains("<svg"));
    assert!(!stdout.contains("class=\"task\""));
}

#[test]
fn test_render_accepts_legend_flags() {
    let dir = tempfile::tempdir().unwrap();
    let dataset = write_dataset(&dir, "three.json", THREE_TASKS);

    let (code, stdout, _) = run(&[
        "render",
        dataset.to_str().unwrap(),
        "--legend-position",
        "Bottom",
        "--hide-legend",
    ]);
    assert_eq!(code, 0);
    assert!(stdout.contains("<svg"));
}
