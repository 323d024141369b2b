//! End-to-end tests for the `unique_ints` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cmd(dir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_unique_ints"));
    cmd.current_dir(dir.path()).env_remove("RUST_LOG");
    cmd
}

#[test]
fn shows_help() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--all"))
        .stdout(predicate::str::contains("interactive mode"));
}

#[test]
fn creates_default_folders() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .arg("--all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created input folder:"))
        .stdout(predicate::str::contains("Created output folder:"))
        .stdout(predicate::str::contains("No files found in sample_inputs"));

    assert!(dir.path().join("sample_inputs").is_dir());
    assert!(dir.path().join("sample_results").is_dir());
}

#[test]
fn processes_all_files() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("sample_inputs");
    fs::create_dir(&inputs).unwrap();
    fs::write(
        inputs.join("sample_01.txt"),
        "5\n-3\n5\n1024\n-1023\nabc\n7 8\n\n",
    )
    .unwrap();
    fs::write(inputs.join("sample_02.txt"), "  42  \n1023\n").unwrap();

    cmd(&dir)
        .arg("-a")
        .assert()
        .success()
        .stdout(predicate::str::contains("Found 2 files to process"))
        .stdout(predicate::str::contains("- sample_01.txt (Runtime:"))
        .stdout(predicate::str::contains("Results saved in: sample_results"));

    let results = dir.path().join("sample_results");
    assert_eq!(
        fs::read_to_string(results.join("sample_01.txt_results.txt")).unwrap(),
        "-1023\n-3\n5\n"
    );
    assert_eq!(
        fs::read_to_string(results.join("sample_02.txt_results.txt")).unwrap(),
        "42\n1023\n"
    );
}

#[test]
fn processes_specific_file() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("numbers.txt");
    fs::write(&input, "9\n-9\n9\n").unwrap();

    cmd(&dir)
        .args(["--file", "numbers.txt", "--output-dir", "out"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing numbers.txt..."))
        .stdout(predicate::str::contains("✓ Completed successfully!"));

    assert_eq!(
        fs::read_to_string(dir.path().join("out").join("numbers.txt_results.txt")).unwrap(),
        "-9\n9\n"
    );
}

#[test]
fn empty_input_gives_empty_output() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("blank.txt"), "\n  \nfoo\n").unwrap();

    cmd(&dir).args(["-f", "blank.txt"]).assert().success();

    let output = dir.path().join("sample_results").join("blank.txt_results.txt");
    assert_eq!(fs::read_to_string(output).unwrap(), "");
}

#[test]
fn missing_file_fails() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--file", "ghost.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Error: File not found: ghost.txt"));
}

#[test]
fn json_report() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("in");
    fs::create_dir(&inputs).unwrap();
    fs::write(inputs.join("a.txt"), "1\n1\n2\n").unwrap();

    let assert = cmd(&dir)
        .args(["--all", "--input-dir", "in", "--format", "json"])
        .assert()
        .success();

    let json: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout)
        .expect("stdout should be pure JSON");
    assert_eq!(json["files"][0]["status"], "completed");
    assert_eq!(json["files"][0]["distinct"], 2);
    assert!(json["started_at"].is_string());
}

#[test]
fn custom_suffix() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("a.txt"), "3\n").unwrap();

    cmd(&dir)
        .args(["-f", "a.txt", "--suffix", ".sorted"])
        .assert()
        .success();

    assert!(dir.path().join("sample_results").join("a.txt.sorted").is_file());
}

#[test]
fn all_and_file_conflict() {
    let dir = TempDir::new().unwrap();
    cmd(&dir)
        .args(["--all", "--file", "x.txt"])
        .assert()
        .code(2);
}

#[test]
fn interactive_mode_reads_stdin() {
    let dir = TempDir::new().unwrap();
    let inputs = dir.path().join("sample_inputs");
    fs::create_dir(&inputs).unwrap();
    fs::write(inputs.join("a.txt"), "8\n-8\n").unwrap();

    cmd(&dir)
        .write_stdin("4\n1\n3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid choice. Please enter 1, 2, or 3."))
        .stdout(predicate::str::contains("- a.txt (Runtime:"))
        .stdout(predicate::str::contains("Exiting program. Goodbye!"));

    assert_eq!(
        fs::read_to_string(dir.path().join("sample_results").join("a.txt_results.txt")).unwrap(),
        "-8\n8\n"
    );
}
