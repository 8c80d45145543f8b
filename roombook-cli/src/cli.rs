//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, EmployeeCommand, InitCommand, MenuCommand, ReservationCommand,
    RoomCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Manage meeting rooms, employees, and conflict-free room reservations.
///
/// Without a command, the interactive menu opens.
#[derive(Parser)]
#[command(name = "roombook")]
#[command(version, about = "Manage meeting rooms and room reservations", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Override the data directory location
    #[arg(long, value_name = "PATH", global = true, env = "ROOMBOOK_DATA_DIR")]
    pub data_dir: Option<PathBuf>,

    /// Override the maximum lock wait (in seconds)
    #[arg(long, value_name = "SECONDS", global = true)]
    pub busy_timeout: Option<u64>,

    /// Disable automatic database initialization
    #[arg(long, global = true)]
    pub disable_autoinit: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Initialize the data directory and database
    Init(InitCommand),

    /// Open the interactive menu
    Menu(MenuCommand),

    /// Manage rooms
    Room(RoomCommand),

    /// Manage employees
    Employee(EmployeeCommand),

    /// Manage reservations
    Reservation(ReservationCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
