//! Error types for the roombook library.
//!
//! This module provides the error hierarchy shared by every operation in the
//! library, using `thiserror` for ergonomic error handling. The console layer
//! matches on these variants to decide what to tell the operator.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use crate::model::{EmployeeId, ReservationId, RoomId, RoomRef};

/// Result type alias for operations that may fail with a roombook error.
///
/// # Examples
///
/// ```
/// use roombook::{Error, Result};
///
/// fn example_operation() -> Result<i64> {
///     Ok(42)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the roombook library.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested time window is empty or reversed.
    #[error("invalid interval on {date}: start {start} must be before end {end}")]
    InvalidInterval {
        /// The date of the requested window.
        date: NaiveDate,
        /// The requested start time.
        start: NaiveTime,
        /// The requested end time.
        end: NaiveTime,
    },

    /// The referenced room does not exist.
    #[error("room not found: {room}")]
    RoomNotFound {
        /// The room reference that could not be resolved.
        room: RoomRef,
    },

    /// The referenced employee does not exist.
    #[error("employee not found: {id}")]
    EmployeeNotFound {
        /// The missing employee id.
        id: EmployeeId,
    },

    /// The referenced reservation does not exist.
    #[error("reservation not found: {id}")]
    ReservationNotFound {
        /// The missing reservation id.
        id: ReservationId,
    },

    /// The requested window overlaps an existing reservation, or the overlap
    /// check could not be completed.
    #[error("scheduling conflict: {details}")]
    SchedulingConflict {
        /// Details about the conflict.
        details: String,
    },

    /// The underlying store could not be reached or returned an error.
    #[error("store unavailable: {source}")]
    StoreUnavailable {
        /// The underlying database error.
        #[from]
        source: rusqlite::Error,
    },

    /// A room cannot be deleted while reservations reference it.
    #[error("room {id} is referenced by {reservations} reservation(s)")]
    RoomInUse {
        /// The room that was to be deleted.
        id: RoomId,
        /// Number of reservations referencing the room.
        reservations: u64,
    },

    /// An employee cannot be deleted while reservations reference them.
    #[error("employee {id} is referenced by {reservations} reservation(s)")]
    EmployeeInUse {
        /// The employee that was to be deleted.
        id: EmployeeId,
        /// Number of reservations referencing the employee.
        reservations: u64,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The data directory was not found and auto-initialization is disabled.
    #[error("data directory not found: {}", path.display())]
    DataDirectoryNotFound {
        /// The expected path to the data directory.
        path: PathBuf,
    },

    /// Database corruption was detected.
    #[error("database corruption detected: {details}")]
    DatabaseCorruption {
        /// Details about the corruption.
        details: String,
    },

    /// An unsupported schema version was encountered.
    #[error("unsupported schema version: expected {expected}, found {found}")]
    UnsupportedSchemaVersion {
        /// The expected schema version.
        expected: i32,
        /// The schema version found in the database.
        found: i32,
    },
}

impl From<crate::model::ValidationError> for Error {
    fn from(err: crate::model::ValidationError) -> Self {
        Self::Validation {
            field: err.field,
            message: err.message,
        }
    }
}

impl Error {
    /// Check if error indicates that a referenced record does not exist.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::Error;
    /// use roombook::model::ReservationId;
    ///
    /// let err = Error::ReservationNotFound { id: ReservationId::new(7) };
    /// assert!(err.is_not_found());
    /// ```
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::RoomNotFound { .. }
                | Self::EmployeeNotFound { .. }
                | Self::ReservationNotFound { .. }
        )
    }

    /// Check if error is a scheduling conflict.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::SchedulingConflict { .. })
    }

    /// Check if error came from the store being unreachable or failing.
    ///
    /// Such errors are always safe to retry: every write runs in a
    /// transaction, so a failed operation leaves no partial state behind.
    #[must_use]
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. })
    }
}
