//! Smoke tests to verify command wiring

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_lists_subcommands() {
    let mut cmd = Command::cargo_bin("todolist").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serve"))
        .stdout(predicate::str::contains("migrate"));
}

#[test]
fn test_serve_help() {
    let mut cmd = Command::cargo_bin("todolist").unwrap();
    cmd.arg("serve").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Request timeout in seconds"));
}

#[test]
fn test_serve_rejects_bad_bind_address() {
    let mut cmd = Command::cargo_bin("todolist").unwrap();
    cmd.arg("serve").arg("--bind").arg("not-an-address");

    cmd.assert().failure();
}

#[test]
fn test_migrate_creates_database() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("todo.db");
    let url = format!("sqlite://{}", path.display());

    let mut cmd = Command::cargo_bin("todolist").unwrap();
    cmd.arg("migrate").arg("--database-url").arg(&url);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Database ready"));
    assert!(path.exists());
}
