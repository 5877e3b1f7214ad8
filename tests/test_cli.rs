//! End-to-end tests for the `pdfstructtohtml` binary.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const BIN: &str = env!("CARGO_BIN_EXE_pdfstructtohtml");
const REPORT: &str = "tests/fixtures/report.json";
const UNTAGGED: &str = "tests/fixtures/untagged.json";
const PROTECTED: &str = "tests/fixtures/protected.json";
const CORRUPT: &str = "tests/fixtures/corrupt.json";

fn run(args: &[&str]) -> Output {
    Command::new(BIN).args(args).output().expect("failed to spawn binary")
}

fn code(output: &Output) -> i32 {
    output.status.code().expect("terminated by signal")
}

#[test]
fn test_convert_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("report.html");

    let output = run(&[REPORT, out_path.to_str().unwrap()]);
    assert_eq!(code(&output), 0, "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(output.stdout.is_empty());

    let html = std::fs::read_to_string(&out_path).unwrap();
    assert!(html.starts_with("<!DOCTYPE html>\n"));
    assert!(html.contains("<h1 style='text-align: center;'>Overview</h1>"));
    assert!(html.ends_with("\n </body>\n</html>\n"));
}

#[test]
fn test_convert_to_stdout() {
    let output = run(&[REPORT]);
    assert_eq!(code(&output), 0);
    let html = String::from_utf8(output.stdout).unwrap();
    assert!(html.contains("<a href='https://example.org'>our site</a>"));
}

#[test]
fn test_read_from_stdin() {
    let mut child = Command::new(BIN)
        .arg("-")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .unwrap();
    let json = std::fs::read(REPORT).unwrap();
    child.stdin.take().unwrap().write_all(&json).unwrap();

    let output = child.wait_with_output().unwrap();
    assert_eq!(code(&output), 0);
    assert!(String::from_utf8(output.stdout).unwrap().contains("<th colspan='2'>Region</th>"));
}

#[test]
fn test_untagged_document_creates_no_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("letter.html");

    let output = run(&[UNTAGGED, out_path.to_str().unwrap()]);
    assert_eq!(code(&output), 4);
    assert!(!out_path.exists());
}

#[test]
fn test_passwords() {
    assert_eq!(code(&run(&[PROTECTED])), 3);
    assert_eq!(code(&run(&["--upw", "wrong", PROTECTED])), 3);
    assert_eq!(code(&run(&["--upw", "user", PROTECTED])), 0);
    assert_eq!(code(&run(&["--opw", "owner", PROTECTED])), 0);
    assert_eq!(code(&run(&["--owner-password", "owner", PROTECTED])), 0);
}

#[test]
fn test_unreadable_input() {
    assert_eq!(code(&run(&[CORRUPT])), 1);
    assert_eq!(code(&run(&["tests/fixtures/missing.json"])), 1);
}

#[test]
fn test_unwritable_output() {
    let dir = tempfile::tempdir().unwrap();
    let out_path = dir.path().join("no-such-dir").join("out.html");

    let output = run(&[REPORT, out_path.to_str().unwrap()]);
    assert_eq!(code(&output), 2);
}

#[test]
fn test_usage_errors() {
    assert_eq!(code(&run(&[])), 99);
    assert_eq!(code(&run(&["--bogus", REPORT])), 99);
    assert_eq!(code(&run(&[REPORT, "a.html", "extra"])), 99);
    assert_eq!(code(&run(&["--help"])), 0);
}
