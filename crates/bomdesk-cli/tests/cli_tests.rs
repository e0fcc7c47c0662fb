// End-to-end sessions against the built binary

use std::io::Write;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

fn run_bomdesk(db: &Path, stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_bomdesk"))
        .arg("--db")
        .arg(db)
        .env("RUST_LOG", "off")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_quit_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = run_bomdesk(&dir.path().join("bomdesk.db"), "7\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Select action:"));
    assert!(stdout.contains("7. quit"));
}

#[test]
fn test_create_then_read_product() {
    let dir = TempDir::new().unwrap();
    let output = run_bomdesk(
        &dir.path().join("bomdesk.db"),
        "1\n1\nWidget\nsmall part\n2\n1\n7\n",
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("[SUCCESS] Product created (1 row)"));
    assert!(stdout.contains("1  | Widget | small part"));
}

#[test]
fn test_bad_input_shows_notice_and_continues() {
    let dir = TempDir::new().unwrap();
    let output = run_bomdesk(&dir.path().join("bomdesk.db"), "4\n2\nnot-a-number\n7\n");

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("!Incorrect input!"));
    assert!(stdout.trim_end().ends_with("Input option number:"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    let dir = TempDir::new().unwrap();
    let output = run_bomdesk(&dir.path().join("bomdesk.db"), "1\n");

    assert!(output.status.success());
}
