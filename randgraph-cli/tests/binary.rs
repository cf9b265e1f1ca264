//! End-to-end checks of the `randgraph` binary.

use std::fs;
use std::process::{Command, Output};

use rstest::rstest;
use tempfile::TempDir;

fn randgraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_randgraph"))
        .args(args)
        .env("RUST_LOG", "warn")
        .env_remove("RANDGRAPH_LOG_FORMAT")
        .output()
        .expect("binary must launch")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("stdout is UTF-8")
}

#[test]
fn run_prints_report_to_stdout() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("input");
    fs::write(&path, "7 100000 0.5").expect("write input");

    let output = randgraph(&["run", path.to_str().expect("UTF-8 path")]);
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("TEST: n=7, seed=100000, p=0.5\n"));
    assert_eq!(stdout.matches("Total Weight = 35\n").count(), 3);
    assert!(stdout.ends_with(" milliseconds\n\n"));
}

#[test]
fn missing_argument_prints_not_found() {
    let output = randgraph(&["run"]);
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), "Input file not found\n");
}

#[rstest]
#[case::bad_integer("x 1 0.5", "n and seed must be integers\n")]
#[case::small_n("1 1 0.5", "n must be greater than 1\n")]
#[case::bad_probability("4 1 2", "p must be between 0 and 1\n")]
fn invalid_input_prints_one_line(#[case] contents: &str, #[case] expected: &str) {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("input");
    fs::write(&path, contents).expect("write input");

    let output = randgraph(&["run", path.to_str().expect("UTF-8 path")]);
    assert!(!output.status.success());
    assert_eq!(stdout_of(&output), expected);
}

#[test]
fn json_logs_stay_on_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_randgraph"))
        .args(["generate", "-n", "3", "-s", "9", "-p", "1", "--sort", "count"])
        .env("RUST_LOG", "info")
        .env("RANDGRAPH_LOG_FORMAT", "json")
        .output()
        .expect("binary must launch");
    assert!(output.status.success());

    let stdout = stdout_of(&output);
    assert!(stdout.starts_with("TEST: n=3, seed=9, p=1.0\n"));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.lines().any(|line| line.starts_with('{') && line.contains("generated connected graph")));
}

#[test]
fn unsupported_log_format_fails_fast() {
    let output = Command::new(env!("CARGO_BIN_EXE_randgraph"))
        .args(["generate", "-n", "3", "-s", "9", "-p", "1"])
        .env("RANDGRAPH_LOG_FORMAT", "xml")
        .output()
        .expect("binary must launch");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("unsupported log format `xml`"));
}
