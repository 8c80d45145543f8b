//! Utility functions for CLI operations.
//!
//! This module provides the helpers every command shares: data directory
//! resolution, configuration loading, opening the database and asking for
//! confirmation.

use std::io::{self, Write};
use std::path::PathBuf;

use roombook::database::{database_path_in, resolve_data_dir};
use roombook::{Config, ConfigBuilder, Database, DatabaseConfig};

use crate::console::Console;
use crate::error::CliError;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Override the data directory location.
    pub data_dir: Option<PathBuf>,

    /// Override the lock wait (in seconds).
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization.
    pub disable_autoinit: bool,
}

impl GlobalOptions {
    /// Print a status line to stderr unless `--quiet` was given.
    pub fn status(&self, message: impl std::fmt::Display) {
        if !self.quiet {
            eprintln!("{message}");
        }
    }
}

/// Resolve the data directory.
///
/// Priority: `--data-dir` (or `ROOMBOOK_DATA_DIR`) > `~/.roombook`.
pub fn data_dir(global: &GlobalOptions) -> Result<PathBuf, CliError> {
    match &global.data_dir {
        Some(dir) => Ok(dir.clone()),
        None => resolve_data_dir().map_err(|e| CliError::Config(e.to_string())),
    }
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Global options (highest priority)
/// 2. Environment variables
/// 3. The data directory's `config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let overrides = Config {
        maximum_lock_wait_seconds: global.busy_timeout,
        disable_autoinit: global.disable_autoinit.then_some(true),
        ..Config::default()
    };

    ConfigBuilder::new()
        .with_data_dir(data_dir(global)?)
        .with_config(overrides)
        .build()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Open the database with the configured lock wait.
///
/// # Errors
///
/// Returns `NoDataDirectory` if the database doesn't exist and auto-init is
/// disabled.
pub fn open_database(global: &GlobalOptions, config: &Config) -> Result<Database, CliError> {
    let dir = data_dir(global)?;
    let db_path = database_path_in(&dir);

    if !db_path.exists() && config.disable_autoinit() {
        return Err(CliError::NoDataDirectory(dir));
    }

    let db_config = DatabaseConfig::new(db_path).with_busy_timeout(config.lock_wait());
    Database::open(db_config).map_err(CliError::from)
}

/// Ask on stdin whether to go ahead with a deletion.
///
/// Returns `true` without asking when `assume_yes` is set. End of input
/// counts as "no".
pub fn confirm_deletion(assume_yes: bool) -> Result<bool, CliError> {
    if assume_yes {
        return Ok(true);
    }

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stderr());
    match console.confirm("Are you sure? (yes/no): ") {
        Ok(answer) => Ok(answer),
        Err(crate::console::ConsoleError::Closed) => Ok(false),
        Err(crate::console::ConsoleError::Io(e)) => Err(CliError::Io(e)),
    }
}

/// Print a newly assigned id on stdout.
pub fn print_id(id: impl std::fmt::Display) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    writeln!(handle, "{id}")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_data_dir_prefers_flag() {
        let global = GlobalOptions {
            data_dir: Some(PathBuf::from("/tmp/roombook-flag")),
            ..GlobalOptions::default()
        };
        assert_eq!(data_dir(&global).unwrap(), PathBuf::from("/tmp/roombook-flag"));
    }

    #[test]
    fn test_open_database_refuses_without_autoinit() {
        let temp = TempDir::new().unwrap();
        let global = GlobalOptions {
            data_dir: Some(temp.path().join("missing")),
            disable_autoinit: true,
            ..GlobalOptions::default()
        };
        let config = Config {
            disable_autoinit: Some(true),
            ..Config::default()
        };

        let err = open_database(&global, &config).unwrap_err();
        assert!(matches!(err, CliError::NoDataDirectory(_)));
        assert!(!temp.path().join("missing").exists());
    }

    #[test]
    fn test_open_database_autoinit_creates_file() {
        let temp = TempDir::new().unwrap();
        let global = GlobalOptions {
            data_dir: Some(temp.path().join("data")),
            ..GlobalOptions::default()
        };

        open_database(&global, &Config::default()).unwrap();
        assert!(database_path_in(&temp.path().join("data")).exists());
    }

    #[test]
    fn test_confirm_deletion_assume_yes() {
        assert!(confirm_deletion(true).unwrap());
    }
}
