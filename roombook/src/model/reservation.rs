//! Reservations and the requests that create them.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::{EmployeeId, ReservationId, RoomId, TimeSlot};
use crate::error::Result;

/// A stored reservation of one room by one employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Store-assigned identifier.
    pub id: ReservationId,
    /// The reserved room.
    pub room_id: RoomId,
    /// The employee holding the reservation.
    pub employee_id: EmployeeId,
    /// The reserved window.
    pub slot: TimeSlot,
}

/// A room given either by id or by name.
///
/// Names resolve to the lowest id among rooms with exactly that name.
///
/// # Examples
///
/// ```
/// use roombook::{RoomId, RoomRef};
///
/// assert_eq!(RoomRef::parse("12"), RoomRef::Id(RoomId::new(12)));
/// assert_eq!(RoomRef::parse(" Sala A "), RoomRef::Name("Sala A".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum RoomRef {
    /// A room id.
    Id(RoomId),
    /// An exact room name.
    Name(String),
}

impl RoomRef {
    /// Interprets operator input: all digits is an id, anything else a name.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(id) = input.parse() {
                return Self::Id(id);
            }
        }
        Self::Name(input.to_string())
    }
}

impl From<RoomId> for RoomRef {
    fn from(id: RoomId) -> Self {
        Self::Id(id)
    }
}

impl fmt::Display for RoomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "id {id}"),
            Self::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// The fields of a reservation as submitted for create or update.
///
/// Building a request already rejects empty or reversed windows, so the
/// manager only has references and overlaps left to check.
///
/// # Examples
///
/// ```
/// use roombook::{EmployeeId, ReservationRequest, RoomId};
///
/// let request = ReservationRequest::new(
///     RoomId::new(1).into(),
///     EmployeeId::new(1),
///     "2025-07-01",
///     "09:00",
///     "10:00",
/// )
/// .unwrap();
/// assert_eq!(request.slot.start_text(), "09:00:00");
///
/// assert!(ReservationRequest::new(
///     RoomId::new(1).into(),
///     EmployeeId::new(1),
///     "2025-07-01",
///     "10:00",
///     "09:00",
/// )
/// .is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReservationRequest {
    /// The room to reserve.
    pub room: RoomRef,
    /// The employee making the reservation.
    pub employee_id: EmployeeId,
    /// The requested window.
    pub slot: TimeSlot,
}

impl ReservationRequest {
    /// Builds a request from operator text.
    ///
    /// # Errors
    ///
    /// Returns a validation error for unparseable dates or times and
    /// [`crate::Error::InvalidInterval`] when start is not before end.
    pub fn new(
        room: RoomRef,
        employee_id: EmployeeId,
        date: &str,
        start: &str,
        end: &str,
    ) -> Result<Self> {
        Ok(Self::from_slot(
            room,
            employee_id,
            TimeSlot::parse(date, start, end)?,
        ))
    }

    /// Builds a request from an already validated slot.
    #[must_use]
    pub const fn from_slot(room: RoomRef, employee_id: EmployeeId, slot: TimeSlot) -> Self {
        Self {
            room,
            employee_id,
            slot,
        }
    }
}

/// A reservation joined with the names of its room and employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetails {
    /// Reservation id.
    pub id: ReservationId,
    /// Reserved room id.
    pub room_id: RoomId,
    /// Reserved room name.
    pub room_name: String,
    /// Holding employee id.
    pub employee_id: EmployeeId,
    /// Holding employee name.
    pub employee_name: String,
    /// Date as `YYYY-MM-DD`.
    pub date: String,
    /// Start time as `HH:MM:SS`.
    pub start_time: String,
    /// End time as `HH:MM:SS`.
    pub end_time: String,
}
