//! Library exports for roombook-cli.
//!
//! This module exports the CLI structure and the interactive console so
//! they can be driven from tests and documentation tooling.

pub mod cli;
pub mod commands;
pub mod console;
pub mod error;
pub mod format;
pub mod utils;

pub use cli::Cli;
