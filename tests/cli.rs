use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn typochk() -> Command {
    Command::cargo_bin("typochk").unwrap()
}

#[test]
fn reports_known_misspellings_and_exits_zero() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "I will recieve and acheive").unwrap();

    typochk()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("typo 'recieve' at line 1, did you mean 'receive'?"))
        .stdout(predicate::str::contains("typo 'acheive' at line 1, did you mean 'achieve'?"));
}

#[test]
fn clean_file_exits_zero_with_no_reports() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "the quick brown fox jumps over the lazy dog").unwrap();

    typochk()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("typo '").not())
        .stdout(predicate::str::contains("No typos found"));
}

#[test]
fn line_numbers_match_physical_lines() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "teh cat").unwrap();
    writeln!(file, "the dog").unwrap();
    writeln!(file).unwrap();
    writeln!(file, "wierd stuff").unwrap();

    typochk()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("typo 'teh' at line 1"))
        .stdout(predicate::str::contains("typo 'wierd' at line 4"));
}

#[test]
fn nonexistent_file_fails_without_reports() {
    typochk()
        .arg("no/such/file.txt")
        .assert()
        .failure()
        .stdout(predicate::str::contains("typo '").not())
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn missing_argument_prints_usage_to_stdout() {
    typochk()
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage: typochk <FILE>"));
}

#[test]
fn extra_arguments_are_rejected_with_usage_on_stdout() {
    typochk()
        .args(["one.txt", "two.txt"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn completion_generation_succeeds_without_a_file() {
    typochk()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("typochk"));
}
