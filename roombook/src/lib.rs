#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # roombook
//!
//! A library for managing meeting rooms, employees, and room reservations.
//!
//! The central concern of the library is reservation admission: a reservation
//! is only stored when its room and employee exist and its time window does
//! not overlap any other reservation of the same room on the same date.
//!
//! ## Core Types
//!
//! - [`TimeSlot`]: A date plus a half-open `[start, end)` time window
//! - [`Room`], [`Employee`] and [`Reservation`]: Stored records
//! - [`ReservationStore`]: The queries the admission logic runs against
//! - [`ReservationManager`]: Transactional create, update, delete and list
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use roombook::TimeSlot;
//!
//! let morning = TimeSlot::parse("2025-07-01", "09:00", "10:00").unwrap();
//! let overlapping = TimeSlot::parse("2025-07-01", "09:30", "10:30").unwrap();
//! let touching = TimeSlot::parse("2025-07-01", "10:00", "11:00").unwrap();
//!
//! assert!(morning.overlaps(&overlapping));
//! assert!(!morning.overlaps(&touching));
//! ```

pub mod config;
pub mod conflict;
pub mod database;
pub mod error;
pub mod logging;
pub mod model;
pub mod operations;
pub mod store;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder};
pub use conflict::has_conflict;
pub use database::{Database, DatabaseConfig};
pub use error::{Error, Result};
pub use logging::{init_logger, LogLevel, Logger};
pub use model::{
    Employee, EmployeeDraft, EmployeeId, Reservation, ReservationDetails, ReservationId,
    ReservationRequest, Room, RoomDraft, RoomId, RoomRef, TimeSlot,
};
pub use operations::{
    CreateOptions, CreatePlan, DeleteOptions, DeletePlan, ExecutionResult, ListOrder,
    OperationPlan, PlanAction, PlanExecutor, ReservationManager, UpdateOptions, UpdatePlan,
};
pub use store::ReservationStore;
