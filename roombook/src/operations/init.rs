//! Data directory and database initialization.
//!
//! This module creates the data directory and database explicitly, with
//! support for dry-run mode and an optional commented configuration file.

use std::fs;
use std::path::PathBuf;

use crate::config::CONFIG_FILE_NAME;
use crate::database::{database_path_in, Database, DatabaseConfig};
use crate::error::{Error, Result};

/// Options for database initialization.
#[derive(Debug, Clone)]
pub struct InitOptions {
    /// Data directory to initialize.
    pub data_dir: PathBuf,
    /// Overwrite existing database if it exists.
    pub overwrite: bool,
    /// Create a default configuration file.
    pub create_config: bool,
    /// Report what would be done without touching the filesystem.
    pub dry_run: bool,
}

impl InitOptions {
    /// Creates new initialization options.
    #[must_use]
    pub fn new(data_dir: PathBuf) -> Self {
        Self {
            data_dir,
            overwrite: false,
            create_config: false,
            dry_run: false,
        }
    }

    /// Sets whether to overwrite existing database.
    #[must_use]
    pub fn with_overwrite(mut self, overwrite: bool) -> Self {
        self.overwrite = overwrite;
        self
    }

    /// Sets whether to create default configuration file.
    #[must_use]
    pub fn with_create_config(mut self, create_config: bool) -> Self {
        self.create_config = create_config;
        self
    }

    /// Sets dry-run mode.
    #[must_use]
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }
}

/// Result of initialization operation.
///
/// In dry-run mode the flags describe what would have happened.
#[derive(Debug)]
pub struct InitResult {
    /// Whether the data directory was created.
    pub data_dir_created: bool,
    /// Whether the database was created or recreated.
    pub database_created: bool,
    /// Whether a configuration file was created.
    pub config_created: bool,
    /// Path to the data directory.
    pub data_dir: PathBuf,
    /// Path to the database file.
    pub database_path: PathBuf,
    /// Whether this was a dry run.
    pub dry_run: bool,
}

/// Default configuration template.
const DEFAULT_CONFIG_TEMPLATE: &str = r"# roombook configuration
# Values here are overridden by ROOMBOOK_* environment variables and
# command-line flags.

# Maximum time to wait for the database lock, in seconds (1-3600, default: 5)
# maximum_lock_wait_seconds: 5

# Reservation list order: chronological or insertion (default: chronological)
# list_order: chronological

# Refuse to create the database implicitly (default: false)
# disable_autoinit: false
";

/// Initializes the data directory and database.
///
/// # Errors
///
/// Returns an error if:
/// - The data directory cannot be created
/// - The database already exists and `overwrite` is false
/// - The database cannot be initialized
/// - The configuration file cannot be written
///
/// # Examples
///
/// ```no_run
/// use roombook::operations::init::{init_database, InitOptions};
/// use std::path::PathBuf;
///
/// let options = InitOptions::new(PathBuf::from("/tmp/roombook-test")).with_create_config(true);
/// let result = init_database(&options).unwrap();
/// println!("Database created: {}", result.database_created);
/// ```
pub fn init_database(options: &InitOptions) -> Result<InitResult> {
    let database_path = database_path_in(&options.data_dir);
    let config_path = options.data_dir.join(CONFIG_FILE_NAME);
    let db_exists = database_path.exists();

    if db_exists && !options.overwrite {
        return Err(Error::Validation {
            field: "database".into(),
            message: format!(
                "database already exists at {}; use --overwrite to replace it",
                database_path.display()
            ),
        });
    }

    let result = InitResult {
        data_dir_created: !options.data_dir.exists(),
        database_created: true,
        config_created: options.create_config && !config_path.exists(),
        data_dir: options.data_dir.clone(),
        database_path: database_path.clone(),
        dry_run: options.dry_run,
    };

    if options.dry_run {
        return Ok(result);
    }

    if result.data_dir_created {
        fs::create_dir_all(&options.data_dir)?;
    }

    if db_exists {
        remove_database_files(&database_path)?;
    }

    let db = Database::open(DatabaseConfig::new(&database_path))?;
    db.verify_integrity()?;
    log::debug!("initialized database at {}", database_path.display());

    if result.config_created {
        fs::write(&config_path, DEFAULT_CONFIG_TEMPLATE)?;
    }

    Ok(result)
}

/// Removes a database file together with its WAL side files.
fn remove_database_files(database_path: &std::path::Path) -> Result<()> {
    fs::remove_file(database_path)?;
    for suffix in ["-wal", "-shm"] {
        let mut side = database_path.as_os_str().to_owned();
        side.push(suffix);
        match fs::remove_file(PathBuf::from(side)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => return Err(e.into()),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, ConfigLoader};
    use crate::database::DATABASE_FILE_NAME;
    use crate::model::RoomDraft;
    use tempfile::TempDir;

    #[test]
    fn test_init_fresh_directory() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("roombook");

        let result = init_database(&InitOptions::new(data_dir.clone())).unwrap();

        assert!(result.data_dir_created);
        assert!(result.database_created);
        assert!(!result.config_created);
        assert!(data_dir.join(DATABASE_FILE_NAME).exists());
    }

    #[test]
    fn test_init_with_config_parses() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("roombook");

        let result =
            init_database(&InitOptions::new(data_dir.clone()).with_create_config(true)).unwrap();
        assert!(result.config_created);

        let content = fs::read_to_string(data_dir.join(CONFIG_FILE_NAME)).unwrap();
        assert!(content.contains("maximum_lock_wait_seconds"));
        let parsed = ConfigLoader::parse(&content).unwrap();
        assert_eq!(parsed, Config::default());
    }

    #[test]
    fn test_init_fails_without_overwrite() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("roombook");
        init_database(&InitOptions::new(data_dir.clone())).unwrap();

        match init_database(&InitOptions::new(data_dir)) {
            Err(Error::Validation { field, message }) => {
                assert_eq!(field, "database");
                assert!(message.contains("--overwrite"));
            }
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_init_with_overwrite_starts_empty() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("roombook");
        init_database(&InitOptions::new(data_dir.clone())).unwrap();
        {
            let db = Database::open(DatabaseConfig::new(database_path_in(&data_dir))).unwrap();
            Database::create_room(db.connection(), &RoomDraft::new("A", 1, "").unwrap()).unwrap();
        }

        let result = init_database(&InitOptions::new(data_dir.clone()).with_overwrite(true)).unwrap();
        assert!(!result.data_dir_created);

        let db = Database::open(DatabaseConfig::new(database_path_in(&data_dir))).unwrap();
        assert!(Database::list_rooms(db.connection()).unwrap().is_empty());
    }

    #[test]
    fn test_init_dry_run_touches_nothing() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("roombook");

        let result = init_database(
            &InitOptions::new(data_dir.clone())
                .with_create_config(true)
                .with_dry_run(true),
        )
        .unwrap();

        assert!(result.dry_run);
        assert!(result.data_dir_created);
        assert!(result.config_created);
        assert!(!data_dir.exists());
    }

    #[test]
    fn test_init_config_not_overwritten() {
        let temp = TempDir::new().unwrap();
        let data_dir = temp.path().join("roombook");
        fs::create_dir_all(&data_dir).unwrap();
        let config_path = data_dir.join(CONFIG_FILE_NAME);
        fs::write(&config_path, "list_order: insertion\n").unwrap();

        let result =
            init_database(&InitOptions::new(data_dir.clone()).with_create_config(true)).unwrap();
        assert!(!result.config_created);
        assert_eq!(
            fs::read_to_string(&config_path).unwrap(),
            "list_order: insertion\n"
        );
    }
}
