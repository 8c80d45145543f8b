//! Reservation records.

use chrono::{NaiveDate, NaiveTime};
use rusqlite::{params, Connection, ErrorCode, OptionalExtension};

use crate::error::{Error, Result};
use crate::model::{
    EmployeeId, Reservation, ReservationDetails, ReservationId, RoomId, TimeSlot, DATE_FORMAT,
    TIME_FORMAT,
};
use crate::operations::ListOrder;

use super::connection::Database;
use super::query_count;
use super::schema::OVERLAP_ABORT_MESSAGE;

const SELECT_RESERVATION: &str = r"
    SELECT id, room_id, employee_id, date, start_time, end_time
    FROM reservations
    WHERE id = ?1
";

const COUNT_RESERVATION: &str = "SELECT COUNT(*) FROM reservations WHERE id = ?1";

const COUNT_OVERLAPPING: &str = r"
    SELECT COUNT(*) FROM reservations
    WHERE room_id = ?1 AND date = ?2 AND start_time < ?3 AND end_time > ?4
";

const COUNT_OVERLAPPING_EXCLUDING: &str = r"
    SELECT COUNT(*) FROM reservations
    WHERE room_id = ?1 AND date = ?2 AND start_time < ?3 AND end_time > ?4 AND id <> ?5
";

const INSERT_RESERVATION: &str = r"
    INSERT INTO reservations (room_id, employee_id, date, start_time, end_time)
    VALUES (?1, ?2, ?3, ?4, ?5)
";

const UPDATE_RESERVATION: &str = r"
    UPDATE reservations
    SET room_id = ?2, employee_id = ?3, date = ?4, start_time = ?5, end_time = ?6
    WHERE id = ?1
";

const DELETE_RESERVATION: &str = "DELETE FROM reservations WHERE id = ?1";

const SELECT_DETAILS: &str = r"
    SELECT r.id, r.room_id, ro.name, r.employee_id, e.name, r.date, r.start_time, r.end_time
    FROM reservations r
    JOIN rooms ro ON ro.id = r.room_id
    JOIN employees e ON e.id = r.employee_id
";

/// Rebuilds a slot from its stored text columns.
fn stored_slot(date: &str, start: &str, end: &str) -> Result<TimeSlot> {
    let corrupt = |what: &str, value: &str| Error::DatabaseCorruption {
        details: format!("stored {what} '{value}' is malformed"),
    };
    let date = NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|_| corrupt("date", date))?;
    let start =
        NaiveTime::parse_from_str(start, TIME_FORMAT).map_err(|_| corrupt("start time", start))?;
    let end = NaiveTime::parse_from_str(end, TIME_FORMAT).map_err(|_| corrupt("end time", end))?;
    TimeSlot::new(date, start, end)
}

/// Turns an abort from the overlap triggers into a scheduling conflict.
fn map_write_error(err: rusqlite::Error, room: RoomId, slot: &TimeSlot) -> Error {
    match &err {
        rusqlite::Error::SqliteFailure(failure, Some(message))
            if failure.code == ErrorCode::ConstraintViolation
                && message.contains(OVERLAP_ABORT_MESSAGE) =>
        {
            Error::SchedulingConflict {
                details: format!("room {room} already has a reservation overlapping {slot}"),
            }
        }
        _ => err.into(),
    }
}

impl Database {
    /// Gets a reservation by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or the stored row is malformed.
    pub fn get_reservation(conn: &Connection, id: ReservationId) -> Result<Option<Reservation>> {
        let row = conn
            .query_row(SELECT_RESERVATION, [id], |row| {
                Ok((
                    row.get::<_, ReservationId>(0)?,
                    row.get::<_, RoomId>(1)?,
                    row.get::<_, EmployeeId>(2)?,
                    row.get::<_, String>(3)?,
                    row.get::<_, String>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })
            .optional()?;

        row.map(|(id, room_id, employee_id, date, start, end)| {
            Ok(Reservation {
                id,
                room_id,
                employee_id,
                slot: stored_slot(&date, &start, &end)?,
            })
        })
        .transpose()
    }

    /// Returns `true` if a reservation with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn reservation_exists(conn: &Connection, id: ReservationId) -> Result<bool> {
        Ok(query_count(conn, COUNT_RESERVATION, [id])? > 0)
    }

    /// Counts reservations of `room` on the slot's date whose window
    /// intersects the slot, skipping `exclude`.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_overlapping(
        conn: &Connection,
        room: RoomId,
        slot: &TimeSlot,
        exclude: Option<ReservationId>,
    ) -> Result<u64> {
        let date = slot.date_text();
        let start = slot.start_text();
        let end = slot.end_text();
        match exclude {
            None => query_count(conn, COUNT_OVERLAPPING, params![room, date, end, start]),
            Some(id) => query_count(
                conn,
                COUNT_OVERLAPPING_EXCLUDING,
                params![room, date, end, start, id],
            ),
        }
    }

    /// Inserts a reservation and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulingConflict`] if the insert would overlap an
    /// existing reservation, or a store error.
    pub fn insert_reservation(
        conn: &Connection,
        room: RoomId,
        employee: EmployeeId,
        slot: &TimeSlot,
    ) -> Result<ReservationId> {
        conn.execute(
            INSERT_RESERVATION,
            params![
                room,
                employee,
                slot.date_text(),
                slot.start_text(),
                slot.end_text()
            ],
        )
        .map_err(|e| map_write_error(e, room, slot))?;
        Ok(ReservationId::new(conn.last_insert_rowid()))
    }

    /// Replaces every field of a reservation. Returns `false` if no row has
    /// its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchedulingConflict`] if the new window would overlap
    /// another reservation, or a store error.
    pub fn replace_reservation(conn: &Connection, reservation: &Reservation) -> Result<bool> {
        let slot = &reservation.slot;
        let rows = conn
            .execute(
                UPDATE_RESERVATION,
                params![
                    reservation.id,
                    reservation.room_id,
                    reservation.employee_id,
                    slot.date_text(),
                    slot.start_text(),
                    slot.end_text()
                ],
            )
            .map_err(|e| map_write_error(e, reservation.room_id, slot))?;
        Ok(rows > 0)
    }

    /// Deletes a reservation. Returns `false` if no row has that id.
    ///
    /// # Errors
    ///
    /// Returns an error if the delete fails.
    pub fn delete_reservation(conn: &Connection, id: ReservationId) -> Result<bool> {
        Ok(conn.execute(DELETE_RESERVATION, [id])? > 0)
    }

    /// Lists every reservation with its room and employee names.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_reservation_details(
        conn: &Connection,
        order: ListOrder,
    ) -> Result<Vec<ReservationDetails>> {
        let sql = format!("{SELECT_DETAILS} ORDER BY {}", order.sql_order_by());
        let mut stmt = conn.prepare(&sql)?;
        let details = stmt
            .query_map([], |row| {
                Ok(ReservationDetails {
                    id: row.get(0)?,
                    room_id: row.get(1)?,
                    room_name: row.get(2)?,
                    employee_id: row.get(3)?,
                    employee_name: row.get(4)?,
                    date: row.get(5)?,
                    start_time: row.get(6)?,
                    end_time: row.get(7)?,
                })
            })?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(details)
    }
}
