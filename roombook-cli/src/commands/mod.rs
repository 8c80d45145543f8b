//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `init`: Create the data directory and database
//! - `menu`: Open the interactive menu
//! - `room`: Create, list, update and delete rooms
//! - `employee`: Create, list, update and delete employees
//! - `reservation`: Create, list, update and delete reservations
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod employee;
pub mod init;
pub mod menu;
pub mod reservation;
pub mod room;

pub use completions::CompletionsCommand;
pub use employee::EmployeeCommand;
pub use init::InitCommand;
pub use menu::MenuCommand;
pub use reservation::ReservationCommand;
pub use room::RoomCommand;
