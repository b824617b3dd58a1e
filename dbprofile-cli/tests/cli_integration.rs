//! Integration tests for the `dbprofile` binary.
//!
//! Each test runs the binary with a cleared environment and a scratch
//! working directory, so no `.env` from the checkout leaks in.

use std::process::{Command, Output};

use tempfile::TempDir;

/// Helper to run the binary with exactly the given variables.
fn run(dir: &TempDir, args: &[&str], vars: &[(&str, &str)]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_dbprofile"))
        .args(args)
        .env_clear()
        .envs(vars.iter().copied())
        .current_dir(dir.path())
        .output()
        .unwrap()
}

/// Helper to parse stdout as JSON.
fn stdout_json(output: &Output) -> serde_json::Value {
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_show_all_prints_both_modes() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir,
        &["show", "--all"],
        &[
            ("DB_HOST", "h1"),
            ("MYSQL_HOST", "h2"),
            ("MYSQL_USER", "u2"),
            ("DB_NAME", "mydb"),
        ],
    );

    let json = stdout_json(&output);
    let object = json.as_object().unwrap();
    assert_eq!(object.len(), 2);

    for mode in ["development", "production"] {
        assert_eq!(json[mode]["client"], "mysql2");
        assert_eq!(
            json[mode]["connection"],
            serde_json::json!({ "host": "h1", "user": "u2", "database": "mydb" })
        );
        assert_eq!(json[mode]["migrations"]["tableName"], "migrations");
        assert_eq!(json[mode]["seeds"]["directory"], "./database/seeds");
    }
}

#[test]
fn test_show_single_profile() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir,
        &["show", "--compact"],
        &[("APP_ENV", "production"), ("MYSQL_PASSWORD", "pw")],
    );

    let json = stdout_json(&output);
    assert_eq!(json["client"], "mysql2");
    assert_eq!(json["connection"], serde_json::json!({ "password": "pw" }));
    assert_eq!(json["migrations"]["directory"], "./database/migrations");
}

#[test]
fn test_env_file_is_read_and_process_wins() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("deploy.env");
    std::fs::write(&path, "DB_HOST=file-host\nDB_NAME=file-db\n").unwrap();

    let output = run(
        &dir,
        &["show", "--env-file", path.to_str().unwrap()],
        &[("DB_HOST", "process-host")],
    );

    let json = stdout_json(&output);
    assert_eq!(json["connection"]["host"], "process-host");
    assert_eq!(json["connection"]["database"], "file-db");
}

#[test]
fn test_dotenv_in_working_directory_is_loaded() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(".env"), "MYSQL_DATABASE_NAME=legacy-db\n").unwrap();

    let output = run(&dir, &["show"], &[]);

    let json = stdout_json(&output);
    assert_eq!(json["connection"]["database"], "legacy-db");
}

#[test]
fn test_env_command_masks_password() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir,
        &["env"],
        &[("DB_PASSWORD", "hunter2"), ("MYSQL_USER", "legacy-user")],
    );

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(!stdout.contains("hunter2"));
    assert!(stdout.contains("MYSQL_USER (legacy)"));
    assert!(stdout.contains("mode      development"));
}

#[test]
fn test_unknown_mode_in_environment_fails() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir, &["show"], &[("NODE_ENV", "staging")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown deployment mode: staging"));
}

#[test]
fn test_check_refuses_incomplete_settings() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir, &["check"], &[("DB_USER", "app")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing host, database"));
}

#[test]
fn test_show_all_ignores_unrelated_mode_variable() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        &dir,
        &["show", "--all"],
        &[("NODE_ENV", "test"), ("DB_HOST", "h1")],
    );

    let json = stdout_json(&output);
    assert_eq!(json.as_object().unwrap().len(), 2);
    assert_eq!(json["development"]["connection"]["host"], "h1");
    assert_eq!(json["production"]["connection"]["host"], "h1");
}

#[test]
fn test_mode_still_required_for_single_profile() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(&dir, &["show"], &[("NODE_ENV", "test")]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Unknown deployment mode: test"));
}

#[test]
fn test_malformed_dotenv_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".env"),
        "DB_HOST=h1\nnot a valid line\nDB_NAME=db\n",
    )
    .unwrap();

    let output = run(&dir, &["show"], &[]);

    let json = stdout_json(&output);
    assert_eq!(json["connection"]["host"], "h1");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("failed to load .env"),
        "expected a warning on stderr, got: {}",
        stderr
    );
}
