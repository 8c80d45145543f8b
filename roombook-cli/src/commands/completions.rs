//! Shell completion generation command.
//!
//! This module provides the `completions` command which generates shell completion
//! scripts for bash, zsh, fish, and PowerShell.

use crate::cli::Cli;
use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::{Args, CommandFactory};
use clap_complete::{generate, Shell};
use std::io;

/// Name of the installed binary.
const BIN_NAME: &str = "roombook";

/// Generate shell completion scripts
#[derive(Args)]
pub struct CompletionsCommand {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

impl CompletionsCommand {
    /// Execute the completions command.
    pub fn execute(&self, global: &GlobalOptions) -> Result<(), CliError> {
        let mut cmd = Cli::command();

        match self.shell {
            Shell::Bash => {
                global.status("# Install with:");
                global.status(
                    "#   roombook completions bash > ~/.local/share/bash-completion/completions/roombook",
                );
            }
            Shell::Zsh => {
                global.status("# Install with:");
                global.status("#   roombook completions zsh > ~/.zsh/completions/_roombook");
                global.status("# Make sure ~/.zsh/completions is in your $fpath");
            }
            Shell::Fish => {
                global.status("# Install with:");
                global.status(
                    "#   roombook completions fish > ~/.config/fish/completions/roombook.fish",
                );
            }
            Shell::PowerShell => {
                global.status("# Run:");
                global.status("#   roombook completions powershell | Out-String | Invoke-Expression");
            }
            _ => {}
        }

        generate(self.shell, &mut cmd, BIN_NAME, &mut io::stdout());

        Ok(())
    }
}
