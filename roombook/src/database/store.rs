//! [`ReservationStore`] backed by a `SQLite` connection.
//!
//! Implementing the trait for `Connection` also covers open transactions,
//! which deref to their connection.

use rusqlite::Connection;

use crate::error::Result;
use crate::model::{EmployeeId, Reservation, ReservationDetails, ReservationId, RoomId, TimeSlot};
use crate::operations::ListOrder;
use crate::store::ReservationStore;

use super::connection::Database;

impl ReservationStore for Connection {
    fn room_exists(&self, id: RoomId) -> Result<bool> {
        Database::room_exists(self, id)
    }

    fn employee_exists(&self, id: EmployeeId) -> Result<bool> {
        Database::employee_exists(self, id)
    }

    fn find_room_id_by_name(&self, name: &str) -> Result<Option<RoomId>> {
        Database::find_room_id_by_name(self, name)
    }

    fn reservation_exists(&self, id: ReservationId) -> Result<bool> {
        Database::reservation_exists(self, id)
    }

    fn count_overlapping(
        &self,
        room: RoomId,
        slot: &TimeSlot,
        exclude: Option<ReservationId>,
    ) -> Result<u64> {
        Database::count_overlapping(self, room, slot, exclude)
    }

    fn insert_reservation(
        &self,
        room: RoomId,
        employee: EmployeeId,
        slot: &TimeSlot,
    ) -> Result<ReservationId> {
        Database::insert_reservation(self, room, employee, slot)
    }

    fn replace_reservation(&self, reservation: &Reservation) -> Result<bool> {
        Database::replace_reservation(self, reservation)
    }

    fn delete_reservation(&self, id: ReservationId) -> Result<bool> {
        Database::delete_reservation(self, id)
    }

    fn list_reservation_details(&self, order: ListOrder) -> Result<Vec<ReservationDetails>> {
        Database::list_reservation_details(self, order)
    }
}
