//! The queries reservation admission runs against.
//!
//! Planning code only sees this trait, so it can be driven by a real
//! SQLite connection, by an open transaction (through deref), or by a mock
//! in tests.

use crate::error::Result;
use crate::model::{EmployeeId, Reservation, ReservationDetails, ReservationId, RoomId, TimeSlot};
use crate::operations::ListOrder;

/// Read and write access to reservations and their references.
#[cfg_attr(test, mockall::automock)]
pub trait ReservationStore {
    /// Returns `true` if a room with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn room_exists(&self, id: RoomId) -> Result<bool>;

    /// Returns `true` if an employee with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn employee_exists(&self, id: EmployeeId) -> Result<bool>;

    /// Finds the lowest room id whose name equals `name` exactly.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn find_room_id_by_name(&self, name: &str) -> Result<Option<RoomId>>;

    /// Returns `true` if a reservation with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn reservation_exists(&self, id: ReservationId) -> Result<bool>;

    /// Counts reservations of `room` whose window overlaps `slot`, ignoring
    /// `exclude`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn count_overlapping(
        &self,
        room: RoomId,
        slot: &TimeSlot,
        exclude: Option<ReservationId>,
    ) -> Result<u64>;

    /// Inserts a reservation and returns its new id.
    ///
    /// # Errors
    ///
    /// Returns a scheduling conflict if the store-level overlap guard
    /// rejects the row, or a store error.
    fn insert_reservation(
        &self,
        room: RoomId,
        employee: EmployeeId,
        slot: &TimeSlot,
    ) -> Result<ReservationId>;

    /// Replaces every field of an existing reservation. Returns `false` if
    /// no row has that id.
    ///
    /// # Errors
    ///
    /// Returns a scheduling conflict if the store-level overlap guard
    /// rejects the row, or a store error.
    fn replace_reservation(&self, reservation: &Reservation) -> Result<bool>;

    /// Deletes a reservation. Returns `false` if no row has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    fn delete_reservation(&self, id: ReservationId) -> Result<bool>;

    /// Lists every reservation joined with room and employee names.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be queried.
    fn list_reservation_details(&self, order: ListOrder) -> Result<Vec<ReservationDetails>>;
}
