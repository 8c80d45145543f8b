//! Menu command implementation.

use std::io;

use clap::Args;

use crate::console::{Console, Menu};
use crate::error::CliError;
use crate::utils::{load_configuration, open_database, GlobalOptions};

/// Open the interactive menu (the default when no command is given).
#[derive(Args, Default)]
pub struct MenuCommand {}

impl MenuCommand {
    /// Execute the menu command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let mut db = open_database(global, &config)?;

        let stdin = io::stdin();
        let stdout = io::stdout();
        let console = Console::new(stdin.lock(), stdout.lock());

        Menu::new(console, &mut db, config.list_order()).run()?;
        Ok(())
    }
}
