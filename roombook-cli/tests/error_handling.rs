//! Integration tests for error handling and exit codes.
//!
//! - Exit code 0: Success
//! - Exit code 1: Semantic rejection
//! - Exit code 2: Store unavailable or lock wait exceeded
//! - Exit code 3: No data directory found
//! - Exit code 4: Invalid arguments
//! - Exit code 5: I/O error
//! - Exit code 7: Configuration error

mod common;

use common::TestEnv;
use predicates::prelude::*;

#[test]
fn test_success_exit_code() {
    let env = TestEnv::new();
    env.command().args(["room", "list"]).assert().code(0);
}

#[test]
fn test_missing_arguments_exit_code() {
    let env = TestEnv::new();

    env.command()
        .args(["room", "create", "--name", "A"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("--capacity"));

    env.command()
        .args(["reservation", "create", "--employee", "1"])
        .assert()
        .code(4);

    env.command()
        .args(["reservation", "list", "--date", "07/01/2025"])
        .assert()
        .code(4);
}

#[test]
fn test_help_is_not_an_error() {
    let env = TestEnv::new();

    env.command()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("reservation"));
}

#[test]
fn test_disable_autoinit_without_database() {
    let env = TestEnv::new();

    env.command()
        .args(["--disable-autoinit", "room", "list"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("roombook init"));

    assert!(!env.database_path().exists());
}

#[test]
fn test_disable_autoinit_from_environment() {
    let env = TestEnv::new();

    env.command()
        .env("ROOMBOOK_DISABLE_AUTOINIT", "true")
        .args(["room", "list"])
        .assert()
        .code(3);
}

#[test]
fn test_invalid_config_file() {
    let env = TestEnv::new();
    env.write_config("maximum_lock_wait_seconds: [not, a, number]\n");

    env.command()
        .args(["room", "list"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let env = TestEnv::new();
    env.write_config("port_range: 5000\n");

    env.command().args(["room", "list"]).assert().code(7);
}

#[test]
fn test_lock_wait_out_of_range() {
    let env = TestEnv::new();

    env.command()
        .args(["--busy-timeout", "0", "room", "list"])
        .assert()
        .code(7)
        .stderr(predicate::str::contains("maximum_lock_wait_seconds"));

    env.command()
        .env("ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS", "7200")
        .args(["room", "list"])
        .assert()
        .code(7);
}

#[test]
fn test_unreadable_store_is_unavailable() {
    let env = TestEnv::new();
    std::fs::create_dir_all(&env.data_dir).unwrap();
    std::fs::write(env.database_path(), "this is not a database\n".repeat(200)).unwrap();

    env.command().args(["room", "list"]).assert().code(2);
}

#[test]
fn test_data_dir_is_a_file() {
    let env = TestEnv::new();
    let file = env.path().join("plain-file");
    std::fs::write(&file, b"x").unwrap();

    env.command_bare()
        .arg("--data-dir")
        .arg(file.join("nested"))
        .args(["room", "list"])
        .assert()
        .code(5);
}
