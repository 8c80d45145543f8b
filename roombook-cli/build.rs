//! Build script for roombook-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Build scripts cannot depend on the crate being built, so the command
//! structure is declared again here.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep in step with src/cli.rs.
fn build_cli() -> Command {
    Command::new("roombook")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Manage meeting rooms and room reservations")
        .long_about(
            "Manage meeting rooms, employees, and room reservations. A reservation is only \
             stored when its room and employee exist and it does not overlap another \
             reservation of the same room. Without a command, the interactive menu opens.",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("data-dir")
                .long("data-dir")
                .help("Override the data directory location")
                .value_name("PATH")
                .global(true)
                .env("ROOMBOOK_DATA_DIR"),
        )
        .arg(
            Arg::new("busy-timeout")
                .long("busy-timeout")
                .help("Override the maximum lock wait (in seconds)")
                .value_name("SECONDS")
                .global(true),
        )
        .arg(
            Arg::new("disable-autoinit")
                .long("disable-autoinit")
                .help("Disable automatic database initialization")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .subcommands(vec![
            Command::new("init")
                .about("Initialize the data directory and database")
                .long_about("Create the data directory, the database and optionally a config file"),
            Command::new("menu")
                .about("Open the interactive menu")
                .long_about("Manage reservations, employees and rooms through numbered menus"),
            Command::new("room")
                .about("Manage rooms")
                .long_about("Create, list, update and delete meeting rooms"),
            Command::new("employee")
                .about("Manage employees")
                .long_about("Create, list, update and delete employees"),
            Command::new("reservation")
                .about("Manage reservations")
                .long_about("Create, list, update and cancel room reservations"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("roombook.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
