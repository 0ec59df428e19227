use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tasklist_core::db::open_db;
use tasklist_core::{KeyValueStore, SqliteKeyValueStore, DEFAULT_TASKS_KEY};

fn write_corrupt_store(db: &Path) {
    let conn = open_db(db).unwrap();
    SqliteKeyValueStore::new(&conn)
        .set(DEFAULT_TASKS_KEY, "{not json")
        .unwrap();
}

fn read_logs(dir: &Path) -> String {
    fs::read_dir(dir)
        .unwrap()
        .map(|entry| fs::read_to_string(entry.unwrap().path()).unwrap_or_default())
        .collect()
}

#[test]
fn empty_store_shows_placeholder() {
    Command::cargo_bin("tasklist")
        .unwrap()
        .arg("--in-memory")
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task View").and(predicate::str::contains("No tasks")));
}

#[test]
fn tasks_persist_across_sessions() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.sqlite3");

    Command::cargo_bin("tasklist")
        .unwrap()
        .arg("--db")
        .arg(&db)
        .write_stdin("add Write spec\n")
        .assert()
        .success();

    Command::cargo_bin("tasklist")
        .unwrap()
        .arg("--db")
        .arg(&db)
        .write_stdin("list\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Write spec").and(predicate::str::contains("No tasks").not()));
}

#[test]
fn unknown_command_warns_on_stderr() {
    Command::cargo_bin("tasklist")
        .unwrap()
        .arg("--in-memory")
        .write_stdin("frobnicate\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("unknown command `frobnicate`"));
}

#[test]
fn relative_log_dir_is_rejected() {
    Command::cargo_bin("tasklist")
        .unwrap()
        .args(["--in-memory", "--log-dir", "relative/logs"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("absolute"));
}

#[test]
fn fetch_failure_is_written_to_log_file_before_exit() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.sqlite3");
    let logs = dir.path().join("logs");
    write_corrupt_store(&db);

    Command::cargo_bin("tasklist")
        .unwrap()
        .arg("--db")
        .arg(&db)
        .arg("--log-dir")
        .arg(&logs)
        .write_stdin("list\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("error: invalid persisted task data"));

    let written = read_logs(&logs);
    assert!(
        written.contains("event=task_fetch module=view status=error"),
        "log file missing fetch failure: {written}"
    );
}

#[test]
fn fetch_failure_is_logged_to_stderr_without_log_dir() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("tasks.sqlite3");
    write_corrupt_store(&db);

    Command::cargo_bin("tasklist")
        .unwrap()
        .arg("--db")
        .arg(&db)
        .write_stdin("quit\n")
        .assert()
        .success()
        .stderr(
            predicate::str::contains("event=task_fetch module=view status=error")
                .and(predicate::str::contains("error: invalid persisted task data")),
        );
}

#[test]
fn toggle_is_recorded_in_log_file() {
    let dir = tempfile::tempdir().unwrap();
    let logs = dir.path().join("logs");

    Command::cargo_bin("tasklist")
        .unwrap()
        .arg("--in-memory")
        .args(["--log-level", "info", "--log-dir"])
        .arg(&logs)
        .write_stdin("add Water plants\ntoggle 1\n")
        .assert()
        .success();

    let written = read_logs(&logs);
    assert!(written.contains("event=task_create module=view status=ok"));
    assert!(written.contains("event=task_toggle module=view status=ok is_done=true"));
}

#[test]
fn unknown_log_level_fails_fast() {
    Command::cargo_bin("tasklist")
        .unwrap()
        .args(["--in-memory", "--log-level", "verbose"])
        .write_stdin("")
        .assert()
        .failure()
        .stderr(predicate::str::contains("verbose"));
}
