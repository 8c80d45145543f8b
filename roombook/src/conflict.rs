//! Overlap detection for reservation admission.

use crate::model::{ReservationId, RoomId, TimeSlot};
use crate::store::ReservationStore;

/// Returns `true` if another reservation of `room` overlaps `slot`.
///
/// The reservation named by `exclude` is ignored, which lets an update be
/// checked against everything except its own current row. Windows that only
/// touch do not conflict.
///
/// A store error is logged and reported as a conflict: when the check
/// cannot be completed the reservation must not be admitted.
///
/// # Examples
///
/// ```
/// use roombook::{has_conflict, Database, EmployeeDraft, RoomDraft, TimeSlot};
/// use roombook::store::ReservationStore;
///
/// let db = Database::open_in_memory().unwrap();
/// let conn = db.connection();
/// let room = Database::create_room(conn, &RoomDraft::new("Sala A", 8, "").unwrap()).unwrap();
/// let ana = Database::create_employee(
///     conn,
///     &EmployeeDraft::new("Ana", "ana@example.com", "").unwrap(),
/// )
/// .unwrap();
///
/// let booked = TimeSlot::parse("2025-07-01", "09:00", "10:00").unwrap();
/// conn.insert_reservation(room, ana, &booked).unwrap();
///
/// let later = TimeSlot::parse("2025-07-01", "10:00", "11:00").unwrap();
/// assert!(has_conflict(conn, room, &booked, None));
/// assert!(!has_conflict(conn, room, &later, None));
/// ```
pub fn has_conflict<S: ReservationStore + ?Sized>(
    store: &S,
    room: RoomId,
    slot: &TimeSlot,
    exclude: Option<ReservationId>,
) -> bool {
    match store.count_overlapping(room, slot, exclude) {
        Ok(count) => {
            log::debug!("room {room} on {slot}: {count} overlapping reservation(s)");
            count > 0
        }
        Err(e) => {
            log::warn!("overlap check failed for room {room} on {slot}, treating as conflict: {e}");
            true
        }
    }
}
