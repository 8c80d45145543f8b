//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing, including:
//! - Test environment setup with temporary directories
//! - Command builders that ignore the caller's roombook environment
//! - Fixtures that create rooms, employees and reservations

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use std::process::Output;
use tempfile::TempDir;

/// Environment variables that would otherwise leak into the tests.
const ROOMBOOK_ENV: &[&str] = &[
    "ROOMBOOK_DATA_DIR",
    "ROOMBOOK_MAXIMUM_LOCK_WAIT_SECONDS",
    "ROOMBOOK_LIST_ORDER",
    "ROOMBOOK_DISABLE_AUTOINIT",
    "ROOMBOOK_LOG_MODE",
];

/// Test environment with isolated data directory.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the roombook data directory (not created until first use)
    pub data_dir: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create a new test environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let data_dir = temp_dir.path().join("roombook-data");

        Self { temp_dir, data_dir }
    }

    /// A command with only the roombook binary and a clean environment.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("roombook").expect("Failed to find roombook binary");
        for var in ROOMBOOK_ENV {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command with `--data-dir` pointing at this environment.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--data-dir").arg(&self.data_dir);
        cmd
    }

    /// Path to the database file.
    pub fn database_path(&self) -> PathBuf {
        self.data_dir.join("roombook.db")
    }

    /// Path to the configuration file.
    pub fn config_path(&self) -> PathBuf {
        self.data_dir.join("config.yaml")
    }

    /// Write `contents` to the configuration file.
    pub fn write_config(&self, contents: &str) {
        std::fs::create_dir_all(&self.data_dir).expect("Failed to create data dir");
        std::fs::write(self.config_path(), contents).expect("Failed to write config");
    }

    /// Create a room and return its id.
    pub fn add_room(&self, name: &str, capacity: u32) -> i64 {
        let output = self
            .command()
            .args(["room", "create", "--name", name, "--capacity"])
            .arg(capacity.to_string())
            .output()
            .expect("Failed to run room create");
        parse_id(&output)
    }

    /// Create an employee and return their id.
    pub fn add_employee(&self, name: &str) -> i64 {
        let email = format!("{}@example.com", name.to_lowercase());
        let output = self
            .command()
            .args(["employee", "create", "--name", name, "--email", &email])
            .output()
            .expect("Failed to run employee create");
        parse_id(&output)
    }

    /// Run `reservation create` for a room id on 2025-07-01.
    pub fn reserve(&self, room: i64, employee: i64, start: &str, end: &str) -> Output {
        self.command()
            .args(["reservation", "create", "--room"])
            .arg(room.to_string())
            .arg("--employee")
            .arg(employee.to_string())
            .args(["--date", "2025-07-01", "--start", start, "--end", end])
            .output()
            .expect("Failed to run reservation create")
    }

    /// Run `reservation list` with extra arguments and return stdout.
    pub fn list_reservations(&self, extra: &[&str]) -> String {
        let output = self
            .command()
            .args(["reservation", "list"])
            .args(extra)
            .output()
            .expect("Failed to run reservation list");

        assert!(
            output.status.success(),
            "List failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );

        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }

    /// Path of the temporary directory.
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse the id a create command printed on stdout.
///
/// # Panics
/// Panics if the command failed or printed something other than an id.
#[allow(dead_code)]
pub fn parse_id(output: &Output) -> i64 {
    assert!(
        output.status.success(),
        "Command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout)
        .trim()
        .parse()
        .expect("Output is not a valid id")
}

/// Lines of stdout after the table header.
#[allow(dead_code)]
pub fn table_rows(stdout: &str) -> Vec<&str> {
    stdout.lines().skip(1).collect()
}
