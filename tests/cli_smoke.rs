// tests/cli_smoke.rs
use std::fs::File;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_photo_datefix"))
}

fn touch(dir: &Path, name: &str) {
    File::create(dir.join(name)).expect("fixture file");
}

#[test]
fn shows_help() {
    bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("photo_datefix"));
}

#[test]
fn missing_directory_exits_with_one() {
    bin()
        .arg("/definitely/not/a/real/path")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("not a directory"));
}

// The smoke tests use `true` as the codec: it accepts any arguments and
// prints nothing, which reads as "tag absent" without needing exiftool
// installed.
#[cfg(unix)]
#[test]
fn dry_run_counts_proposed_updates() {
    let temp = tempfile::TempDir::new().unwrap();
    touch(temp.path(), "07-04-23_1530.jpg");
    touch(temp.path(), "notes.txt");

    bin()
        .args(["--dry-run", "--exiftool", "true"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files with EXIF data updated: 1"))
        .stdout(predicate::str::contains("Files unchanged: 0"));
}

#[cfg(unix)]
#[test]
fn norecurse_ignores_subdirectory_photos() {
    let temp = tempfile::TempDir::new().unwrap();
    touch(temp.path(), "07-04-23_1530.jpg");
    let sub = temp.path().join("album");
    std::fs::create_dir(&sub).unwrap();
    touch(&sub, "12-25-99_1430.jpg");

    bin()
        .args(["--norecurse", "--dry-run", "--exiftool", "true"])
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files with EXIF data updated: 1"));
}

#[cfg(unix)]
#[test]
fn interactive_refusal_leaves_files_unchanged() {
    let temp = tempfile::TempDir::new().unwrap();
    touch(temp.path(), "07-04-23_1530.jpg");

    bin()
        .args(["--interactive", "--exiftool", "true"])
        .arg(temp.path())
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Files unchanged: 1"))
        .stdout(predicate::str::contains("Files with EXIF data updated: 0"));
}

#[cfg(unix)]
#[test]
fn json_summary_is_parseable() {
    let temp = tempfile::TempDir::new().unwrap();
    touch(temp.path(), "07-04-23_1530.jpg");

    let assert = bin()
        .args(["--dry-run", "--noverbose", "--format", "json", "--exiftool", "true"])
        .arg(temp.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).expect("valid JSON summary");
    assert_eq!(json["updated"], 1);
    assert_eq!(json["unchanged"], 0);
}

#[test]
fn empty_directory_reports_zero_counts() {
    let temp = tempfile::TempDir::new().unwrap();

    bin()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Files with EXIF data updated: 0"))
        .stdout(predicate::str::contains("Files unchanged: 0"));
}
