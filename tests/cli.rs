//! CLI integration: subcommands, output formats and exit codes.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

use tempfile::NamedTempFile;

// ==================== CLI Helpers ====================

/// Locate the `adjgraph` binary built for this test run.
fn adjgraph_bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_adjgraph"))
}

/// Run the `adjgraph` CLI with the given arguments and return the output.
fn run_adjgraph(args: &[&str]) -> Output {
    Command::new(adjgraph_bin())
        .args(args)
        .output()
        .expect("Failed to run adjgraph")
}

/// Run the CLI feeding `input` on stdin.
fn run_adjgraph_with_input(args: &[&str], input: &str) -> Output {
    let mut child = Command::new(adjgraph_bin())
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to run adjgraph");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "adjgraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

fn assert_exit_code(output: &Output, code: i32) {
    assert_eq!(
        output.status.code(),
        Some(code),
        "stderr: {}",
        String::from_utf8_lossy(&output.stderr)
    );
}

fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn matrix_file(text: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(text.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

/// 1 -> 2, 2 -> 1, vertex 3 isolated.
fn disconnected() -> NamedTempFile {
    matrix_file("0 4 0\n4 0 0\n0 0 0\n")
}

fn cycle() -> NamedTempFile {
    matrix_file("0 1 0\n0 0 1\n1 0 0\n")
}

// ==================== Output Tests ====================

#[test]
fn test_cli_display() {
    let file = cycle();
    let output = run_adjgraph(&[file.path().to_str().unwrap(), "display"]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "Vertex 1: -> 2 NULL\nVertex 2: -> 3 NULL\nVertex 3: -> 1 NULL\n"
    );
}

#[test]
fn test_cli_dijkstra_text() {
    let file = disconnected();
    let output = run_adjgraph(&[file.path().to_str().unwrap(), "dijkstra"]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "Shortest distance from vertex 1 to vertex 1: 0\n\
         Shortest distance from vertex 1 to vertex 2: 4\n\
         Shortest distance from vertex 1 to vertex 3: unreachable\n"
    );
}

#[test]
fn test_cli_bfs_and_dfs_with_start() {
    let file = cycle();
    let path = file.path().to_str().unwrap();

    let output = run_adjgraph(&[path, "bfs", "--start", "2"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "Final BFS Order:\n2 3 1\n");

    let output = run_adjgraph(&[path, "dfs", "--start", "3"]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "3 1 2\n");
}

#[test]
fn test_cli_json_format() {
    let file = disconnected();
    let output = run_adjgraph(&["--format", "json", file.path().to_str().unwrap(), "bfs"]);
    assert_success(&output);

    let value: serde_json::Value = serde_json::from_str(&stdout_str(&output)).unwrap();
    assert_eq!(value["algorithm"], "bfs");
    assert_eq!(value["start"], 1);
    assert_eq!(value["order"], serde_json::json!([1, 2]));
}

#[test]
fn test_cli_rejects_unknown_format() {
    let file = cycle();
    let output = run_adjgraph(&["--format", "jsn", file.path().to_str().unwrap(), "bfs"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("jsn"));
}

#[test]
fn test_cli_menu_is_default() {
    let file = cycle();
    let output = run_adjgraph_with_input(&[file.path().to_str().unwrap()], "2\n5\n");
    assert_success(&output);
    let out = stdout_str(&output);
    assert!(out.contains("Final BFS Order:\n1 2 3\n"));
    assert!(out.ends_with("Program ended\n"));
}

#[test]
fn test_cli_menu_with_start() {
    let file = cycle();
    let output = run_adjgraph_with_input(
        &[file.path().to_str().unwrap(), "menu", "--start", "2"],
        "2\n",
    );
    assert_success(&output);
    assert!(stdout_str(&output).contains("Final BFS Order:\n2 3 1\n"));
}

// ==================== Exit Code Tests ====================

#[test]
fn test_cli_missing_file_exits_1() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("missing.txt");
    let output = run_adjgraph(&[path.to_str().unwrap(), "display"]);
    assert_exit_code(&output, 1);
}

#[test]
fn test_cli_malformed_matrix_exits_2() {
    for text in ["", "\n\n", "0 1 0\n0 0\n1 0 0\n", "0 x\n1 0\n"] {
        let file = matrix_file(text);
        let output = run_adjgraph(&[file.path().to_str().unwrap(), "display"]);
        assert_exit_code(&output, 2);
        assert!(output.stdout.is_empty());
    }
}

#[test]
fn test_cli_vertex_bound_exits_3() {
    let file = cycle();
    let path = file.path().to_str().unwrap();

    let output = run_adjgraph(&["--max-vertices", "2", path, "display"]);
    assert_exit_code(&output, 3);
    assert!(String::from_utf8_lossy(&output.stderr).contains("3 > 2"));

    let output = run_adjgraph(&["--max-vertices", "3", path, "display"]);
    assert_success(&output);
}

#[test]
fn test_cli_start_out_of_range_exits_4() {
    let file = cycle();
    let path = file.path().to_str().unwrap();
    for command in ["bfs", "dfs", "dijkstra", "menu"] {
        let output = run_adjgraph(&[path, command, "--start", "9"]);
        assert_exit_code(&output, 4);
    }
}
