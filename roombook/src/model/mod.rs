//! Domain records for rooms, employees and reservations.
//!
//! Every type here validates its own invariants on construction, so a value
//! that exists is a value the store may accept.

mod employee;
mod ids;
mod reservation;
mod room;
mod slot;

#[cfg(test)]
mod proptests;

use std::fmt;

pub use employee::{Employee, EmployeeDraft};
pub use ids::{EmployeeId, ReservationId, RoomId};
pub use reservation::{Reservation, ReservationDetails, ReservationRequest, RoomRef};
pub use room::{Room, RoomDraft};
pub use slot::{parse_date, parse_time, TimeSlot, DATE_FORMAT, TIME_FORMAT};

/// Error type for a field that failed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The field that failed validation.
    pub field: String,
    /// The reason the value was rejected.
    pub message: String,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid {}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

/// Trims `value` and rejects it when nothing is left.
pub(crate) fn required_text(field: &str, value: &str) -> Result<String, ValidationError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(ValidationError::new(field, "must not be empty"))
    } else {
        Ok(trimmed.to_string())
    }
}
