//! Init command implementation.
//!
//! This module implements the `init` command for explicitly initializing
//! the roombook data directory and database.

use crate::error::CliError;
use crate::utils::{data_dir, GlobalOptions};
use clap::Args;
use roombook::operations::{init_database, InitOptions};

/// Initialize the roombook data directory and database.
#[derive(Args)]
pub struct InitCommand {
    /// Overwrite existing database
    #[arg(long)]
    pub overwrite: bool,

    /// Create a commented default configuration file
    #[arg(long)]
    pub with_config: bool,

    /// Preview actions without executing
    #[arg(long)]
    pub dry_run: bool,
}

impl InitCommand {
    /// Execute the init command.
    ///
    /// `--disable-autoinit` has no effect here: creating the database is the
    /// point of the command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let dir = data_dir(global)?;

        let options = InitOptions::new(dir)
            .with_overwrite(self.overwrite)
            .with_create_config(self.with_config)
            .with_dry_run(self.dry_run);

        let result = init_database(&options)?;

        if result.dry_run {
            println!("Dry-run mode: no changes will be made");
            println!();
            println!("Would initialize roombook in: {}", result.data_dir.display());
            if result.data_dir_created {
                println!("  - Create data directory: {}", result.data_dir.display());
            }
            if self.overwrite && result.database_path.exists() {
                println!("  - Recreate database: {}", result.database_path.display());
            } else {
                println!("  - Create database: {}", result.database_path.display());
            }
            if result.config_created {
                println!("  - Create default configuration file");
            }
            return Ok(());
        }

        println!("Initialized roombook in: {}", result.data_dir.display());

        if result.data_dir_created {
            println!("  - Created data directory");
        }

        if result.database_created {
            if self.overwrite {
                println!("  - Recreated database");
            } else {
                println!("  - Created database");
            }
        }

        if result.config_created {
            println!("  - Created default configuration file");
        } else if self.with_config {
            println!("  - Configuration file already exists (not overwritten)");
        }

        Ok(())
    }
}
