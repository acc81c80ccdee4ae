use std::io::Write;
use std::process::{Command, Stdio};

use runcost_lib::{LoadError, RunError, run};

fn answer(input: &str) -> String {
    let mut out = Vec::new();
    run(input.as_bytes(), &mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn single_cell() {
    assert_eq!(answer("1 1\n5\n"), "5\n");
}

#[test]
fn uniform_two_by_two() {
    assert_eq!(answer("2 2\n1 1\n1 1\n"), "1\n");
}

#[test]
fn diagonal_jump() {
    assert_eq!(answer("2 2\n1 2\n2 1\n"), "1\n");
}

#[test]
fn all_zero_three_by_three() {
    assert_eq!(answer("3 3\n0 0 0\n0 0 0\n0 0 0\n"), "0\n");
}

#[test]
fn single_step_pays_the_entered_cell() {
    assert_eq!(answer("1 2\n1 2\n"), "4\n");
    assert_eq!(answer("1 2\n3 1\n"), "2\n");
}

#[test]
fn run_along_a_valley() {
    let input = "\
4 4
2 9 9 9
2 9 9 9
9 2 2 9
9 9 9 2
";
    assert_eq!(answer(input), "2\n");
}

#[test]
fn returns_the_written_cost() {
    let mut out = Vec::new();
    let cost = run("2 2 1 2 2 3".as_bytes(), &mut out).unwrap();
    assert_eq!(cost, 6);
    assert_eq!(out, b"6\n");
}

#[test]
fn load_errors_write_nothing() {
    let mut out = Vec::new();
    let err = run("2 2\n1 -2 3 4".as_bytes(), &mut out).unwrap_err();
    assert!(matches!(
        err,
        RunError::Load(LoadError::InvalidCost { row: 0, col: 1, .. })
    ));
    assert!(out.is_empty());
}

fn spawn(input: &str) -> std::process::Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_runcost"))
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
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn binary_prints_answer() {
    let output = spawn("3 3\n1 9 9\n1 9 9\n1 1 1\n");
    assert!(output.status.success());
    assert_eq!(String::from_utf8_lossy(&output.stdout), "1\n");
}

#[test]
fn binary_rejects_bad_dimensions() {
    let output = spawn("0 4\n");
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("grid dimensions must be positive"), "{stderr}");
}
