//! Integration tests for the dates and report commands

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::todotags_cmd;

#[test]
fn test_dates_on_marker() {
    let temp = TempDir::new().unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("dates")
        .arg("Dentist due:=2021-01-10")
        .arg("--today")
        .arg("2021-01-05")
        .assert()
        .success()
        .stdout(predicate::str::contains("start: 2021-01-09"))
        .stdout(predicate::str::contains("due: 2021-01-10 (on)"))
        .stdout(predicate::str::contains("active: no"))
        .stdout(predicate::str::contains("days till due: 5"))
        .stdout(predicate::str::contains("length: 1"));
}

#[test]
fn test_dates_malformed_due_is_absent() {
    let temp = TempDir::new().unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("dates")
        .arg("Dentist due:=not-a-date")
        .arg("--today")
        .arg("2021-01-05")
        .assert()
        .success()
        .stdout(predicate::str::contains("due: -"))
        .stdout(predicate::str::contains("(on)").not())
        .stdout(predicate::str::contains("overdue: no"))
        .stdout(predicate::str::contains("days till due: 0"));
}

#[test]
fn test_dates_custom_tag_names() {
    let temp = TempDir::new().unwrap();
    fs::write(
        temp.path().join("todotags.toml"),
        "[tags]\nstart = \"begin\"\ndue = \"deadline\"\n",
    )
    .unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("dates")
        .arg("Ship begin:2021-01-01 deadline:2021-01-05 due:2021-01-02")
        .arg("--today")
        .arg("2021-01-03")
        .assert()
        .success()
        .stdout(predicate::str::contains("start: 2021-01-01"))
        .stdout(predicate::str::contains("due: 2021-01-05"))
        .stdout(predicate::str::contains("length: 4"));
}

#[test]
fn test_dates_invalid_today() {
    let temp = TempDir::new().unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("dates")
        .arg("Buy milk")
        .arg("--today")
        .arg("05-01-2021")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("YYYY-MM-DD"));
}

#[test]
fn test_dates_blank_todo() {
    let temp = TempDir::new().unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("dates")
        .arg("   ")
        .assert()
        .failure()
        .code(4);
}

#[test]
fn test_dates_marker_only_todo() {
    let temp = TempDir::new().unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("dates")
        .arg("(A)")
        .assert()
        .success()
        .stdout(predicate::str::contains("active: yes"));
}

#[test]
fn test_dates_signed_year_due_is_absent() {
    let temp = TempDir::new().unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("dates")
        .arg("Ancient due:=-262143-01-01")
        .arg("--today")
        .arg("2021-01-05")
        .assert()
        .success()
        .stdout(predicate::str::contains("start: -"))
        .stdout(predicate::str::contains("due: -"));
}

fn write_todo(temp: &TempDir) -> std::path::PathBuf {
    fs::write(
        temp.path().join("todotags.toml"),
        "[implied]\n\"@jp\" = \"+work\"\n",
    )
    .unwrap();
    let path = temp.path().join("todo.txt");
    fs::write(
        &path,
        "Pay rent @jp due:2021-01-01\n\
         \n\
         x 2021-01-02 Old chore due:2020-12-01\n\
         (C)\n\
         Plan trip t:2021-02-01\n",
    )
    .unwrap();
    path
}

#[test]
fn test_report_all_tasks() {
    let temp = TempDir::new().unwrap();
    let todo = write_todo(&temp);

    let output = todotags_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(&todo)
        .arg("--today")
        .arg("2021-01-05")
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "overdue  Pay rent @jp due:2021-01-01",
            "         implied: +work",
            "done     x 2021-01-02 Old chore due:2020-12-01",
            "active   (C)",
            "pending  Plan trip t:2021-02-01",
        ]
    );
}

#[test]
fn test_report_overdue_filter() {
    let temp = TempDir::new().unwrap();
    let todo = write_todo(&temp);

    todotags_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(&todo)
        .arg("--today")
        .arg("2021-01-05")
        .arg("--overdue")
        .assert()
        .success()
        .stdout(predicate::str::contains("Pay rent"))
        .stdout(predicate::str::contains("Old chore").not())
        .stdout(predicate::str::contains("Plan trip").not());
}

#[test]
fn test_report_active_filter_empty() {
    let temp = TempDir::new().unwrap();
    let todo = write_todo(&temp);

    todotags_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(&todo)
        .arg("--today")
        .arg("2020-01-01")
        .arg("--active")
        .arg("--overdue")
        .assert()
        .success()
        .stdout(predicate::str::contains("No tasks found"));
}

#[test]
fn test_report_missing_file() {
    let temp = TempDir::new().unwrap();

    todotags_cmd()
        .current_dir(temp.path())
        .arg("report")
        .arg(temp.path().join("todo.txt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error"));
}
