//! Main entry point for the roombook CLI.
//!
//! This is the command-line interface for the roombook reservation system.
//! Without a command it opens the interactive menu; the subcommands cover
//! the same operations for scripts:
//! - `room`, `employee`: Manage the records reservations refer to
//! - `reservation`: Create, list, update and cancel reservations
//! - `init`: Create the data directory and database explicitly

mod cli;
mod commands;
mod console;
mod error;
mod format;
mod utils;

use clap::Parser;
use cli::Cli;
use commands::MenuCommand;
use utils::GlobalOptions;

/// Exit code for arguments clap rejects.
const INVALID_ARGUMENTS_EXIT: i32 = 4;

fn main() {
    // Parse CLI arguments; help and version are not errors
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            let code = if e.use_stderr() {
                INVALID_ARGUMENTS_EXIT
            } else {
                0
            };
            std::process::exit(code);
        }
    };

    // Initialize logging based on verbosity
    let _logger = roombook::init_logger(cli.verbose, cli.quiet);

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        data_dir: cli.data_dir,
        busy_timeout: cli.busy_timeout,
        disable_autoinit: cli.disable_autoinit,
    };

    let result = match cli.command {
        None => MenuCommand::default().execute(&global),
        Some(cli::Command::Init(cmd)) => cmd.execute(&global),
        Some(cli::Command::Menu(cmd)) => cmd.execute(&global),
        Some(cli::Command::Room(cmd)) => cmd.execute(&global),
        Some(cli::Command::Employee(cmd)) => cmd.execute(&global),
        Some(cli::Command::Reservation(cmd)) => cmd.execute(&global),
        Some(cli::Command::Completions(cmd)) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
