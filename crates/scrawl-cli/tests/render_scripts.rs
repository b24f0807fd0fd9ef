//! End-to-end tests running the built `scrawl` binary
//!
//! Each test spawns the real binary with a script or canvas file in a
//! temporary directory and checks the bytes it produces.

use std::io::Write;
use std::process::{Command, Stdio};

fn scrawl() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_scrawl"));
    cmd.env("SCRAWL_LOG_LEVEL", "off");
    cmd
}

#[test]
fn test_render_script_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("script.json");
    let out = dir.path().join("out.txt");
    std::fs::write(
        &script,
        r#"[
            {"op": "rect", "from": [1, 1], "to": [10, 4]},
            {"op": "text", "at": [3, 2], "text": "hello"}
        ]"#,
    )
    .unwrap();

    let status = scrawl()
        .args(["render", script.to_str().unwrap(), "-o", out.to_str().unwrap()])
        .args(["--width", "14", "--height", "6"])
        .status()
        .unwrap();
    assert!(status.success());

    let rendered = std::fs::read_to_string(&out).unwrap();
    assert!(rendered.contains('┌'));
    assert!(rendered.contains("hello"));
    // Right-trimmed rows, so no line reaches the full canvas width
    assert!(rendered.lines().all(|line| line.chars().count() <= 11));
}

#[test]
fn test_render_reads_stdin_writes_stdout() {
    let mut child = scrawl()
        .args(["render", "-", "--width", "8", "--height", "4"])
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(br#"[{"op": "rect", "from": [0, 0], "to": [5, 3]}]"#)
        .unwrap();

    let output = child.wait_with_output().unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains('┌'));
    assert!(text.contains('┘'));
}

#[test]
fn test_render_styled_and_flipped() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("script.json");
    std::fs::write(&script, r#"[{"op": "rect", "from": [0, 0], "to": [4, 2]}]"#).unwrap();

    let output = scrawl()
        .args(["render", script.to_str().unwrap(), "-o", "-"])
        .args(["--width", "8", "--height", "4", "--style", "double"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert!(text.contains('╔'));
    assert!(text.contains('╝'));
}

#[test]
fn test_render_bad_script_fails_with_message() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("script.json");
    std::fs::write(&script, r#"[{"op": "sparkle"}]"#).unwrap();

    let output = scrawl()
        .args(["render", script.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error"));
}

#[test]
fn test_render_operation_errors_name_the_index() {
    let dir = tempfile::tempdir().unwrap();
    let script = dir.path().join("script.json");
    std::fs::write(
        &script,
        r#"[
            {"op": "clear"},
            {"op": "table", "at": [0, 0], "rows": [], "columns": 0}
        ]"#,
    )
    .unwrap();

    let output = scrawl()
        .args(["render", script.to_str().unwrap()])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("operation 2"));
}

#[test]
fn test_show_round_trips_saved_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = dir.path().join("drawing.txt");
    std::fs::write(&canvas, "┌──┐\n│ab│\n└──┘\n").unwrap();

    let output = scrawl()
        .args(["show", canvas.to_str().unwrap(), "--color", "never"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text, "┌──┐\n│ab│\n└──┘\n");
}

#[test]
fn test_show_frame_wraps_content() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = dir.path().join("drawing.txt");
    std::fs::write(&canvas, "ab\n").unwrap();

    let output = scrawl()
        .args(["show", canvas.to_str().unwrap(), "--color", "never", "--frame"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let text = String::from_utf8(output.stdout).unwrap();
    assert_eq!(text, "┌──┐\n│ab│\n└──┘\n");
}

#[test]
fn test_styles_json_lists_builtins() {
    let output = scrawl().args(["styles", "--json"]).output().unwrap();
    assert!(output.status.success());

    let listing: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(listing["total"], 6);
    let names: Vec<&str> = listing["styles"]
        .as_array()
        .unwrap()
        .iter()
        .map(|style| style["name"].as_str().unwrap())
        .collect();
    assert!(names.contains(&"thin"));
    assert!(names.contains(&"double"));
    assert_eq!(
        listing["styles"][0]["glyphs"]["top_left"].as_str(),
        Some("┌")
    );
}

#[test]
fn test_info_reports_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let canvas = dir.path().join("drawing.txt");
    std::fs::write(&canvas, "abc\nd\n").unwrap();

    let output = scrawl()
        .args(["info", canvas.to_str().unwrap(), "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["width"], 3);
    assert_eq!(report["height"], 2);
    assert_eq!(report["filled_cells"], 4);
    assert_eq!(report["widest_row"], 3);
}

#[test]
fn test_missing_input_file_fails() {
    let output = scrawl()
        .args(["show", "/nonexistent/drawing.txt"])
        .output()
        .unwrap();
    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Failed to read"));
}
