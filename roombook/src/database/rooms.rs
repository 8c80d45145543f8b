//! Room records.

use rusqlite::{params, Connection, OptionalExtension};

use crate::error::{Error, Result};
use crate::model::{Room, RoomDraft, RoomId};

use super::connection::Database;
use super::query_count;

const INSERT_ROOM: &str = "INSERT INTO rooms (name, capacity, resources) VALUES (?1, ?2, ?3)";

const SELECT_ROOM: &str = "SELECT id, name, capacity, resources FROM rooms WHERE id = ?1";

const SELECT_ALL_ROOMS: &str = "SELECT id, name, capacity, resources FROM rooms ORDER BY id";

const UPDATE_ROOM: &str = "UPDATE rooms SET name = ?2, capacity = ?3, resources = ?4 WHERE id = ?1";

const DELETE_ROOM: &str = "DELETE FROM rooms WHERE id = ?1";

const COUNT_ROOM: &str = "SELECT COUNT(*) FROM rooms WHERE id = ?1";

const SELECT_ROOM_ID_BY_NAME: &str = "SELECT id FROM rooms WHERE name = ?1 ORDER BY id LIMIT 1";

const COUNT_ROOM_RESERVATIONS: &str = "SELECT COUNT(*) FROM reservations WHERE room_id = ?1";

fn row_to_room(row: &rusqlite::Row<'_>) -> rusqlite::Result<Room> {
    Ok(Room {
        id: row.get(0)?,
        name: row.get(1)?,
        capacity: row.get(2)?,
        resources: row.get(3)?,
    })
}

impl Database {
    /// Stores a new room and returns its id.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn create_room(conn: &Connection, draft: &RoomDraft) -> Result<RoomId> {
        conn.execute(
            INSERT_ROOM,
            params![draft.name(), draft.capacity(), draft.resources()],
        )?;
        let id = RoomId::new(conn.last_insert_rowid());
        log::debug!("created room {id} '{}'", draft.name());
        Ok(id)
    }

    /// Gets a room by id.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn get_room(conn: &Connection, id: RoomId) -> Result<Option<Room>> {
        Ok(conn.query_row(SELECT_ROOM, [id], row_to_room).optional()?)
    }

    /// Lists all rooms in id order.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn list_rooms(conn: &Connection) -> Result<Vec<Room>> {
        let mut stmt = conn.prepare(SELECT_ALL_ROOMS)?;
        let rooms = stmt
            .query_map([], row_to_room)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rooms)
    }

    /// Replaces the fields of a room. Returns `false` if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the update fails.
    pub fn update_room(conn: &Connection, id: RoomId, draft: &RoomDraft) -> Result<bool> {
        let rows = conn.execute(
            UPDATE_ROOM,
            params![id, draft.name(), draft.capacity(), draft.resources()],
        )?;
        Ok(rows > 0)
    }

    /// Returns `true` if a room with this id exists.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn room_exists(conn: &Connection, id: RoomId) -> Result<bool> {
        Ok(query_count(conn, COUNT_ROOM, [id])? > 0)
    }

    /// Finds the lowest room id whose name equals `name` after trimming.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_room_id_by_name(conn: &Connection, name: &str) -> Result<Option<RoomId>> {
        Ok(conn
            .query_row(SELECT_ROOM_ID_BY_NAME, [name.trim()], |row| row.get(0))
            .optional()?)
    }

    /// Deletes a room that no reservation references.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`] if the room does not exist,
    /// [`Error::RoomInUse`] if reservations reference it, or a store error.
    pub fn delete_room(&mut self, id: RoomId) -> Result<()> {
        self.with_immediate_transaction(|tx| {
            if !Self::room_exists(tx, id)? {
                return Err(Error::RoomNotFound { room: id.into() });
            }
            let reservations = query_count(tx, COUNT_ROOM_RESERVATIONS, [id])?;
            if reservations > 0 {
                return Err(Error::RoomInUse { id, reservations });
            }
            tx.execute(DELETE_ROOM, [id])?;
            log::debug!("deleted room {id}");
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::test_util::{create_test_database, seed_employee, seed_room};
    use crate::model::TimeSlot;
    use crate::store::ReservationStore;

    #[test]
    fn test_create_and_get_room() {
        let db = create_test_database();
        let draft = RoomDraft::new("Sala A", 8, "projector").unwrap();
        let id = Database::create_room(db.connection(), &draft).unwrap();

        let room = Database::get_room(db.connection(), id).unwrap().unwrap();
        assert_eq!(room, draft.into_room(id));
    }

    #[test]
    fn test_get_missing_room() {
        let db = create_test_database();
        assert!(Database::get_room(db.connection(), RoomId::new(42))
            .unwrap()
            .is_none());
    }

    #[test]
    fn test_list_rooms_in_id_order() {
        let db = create_test_database();
        let b = seed_room(&db, "B");
        let a = seed_room(&db, "A");

        let ids: Vec<RoomId> = Database::list_rooms(db.connection())
            .unwrap()
            .into_iter()
            .map(|room| room.id)
            .collect();
        assert_eq!(ids, vec![b, a]);
    }

    #[test]
    fn test_update_room() {
        let db = create_test_database();
        let id = seed_room(&db, "Sala A");
        let draft = RoomDraft::new("Sala Azul", 20, "video").unwrap();

        assert!(Database::update_room(db.connection(), id, &draft).unwrap());
        let room = Database::get_room(db.connection(), id).unwrap().unwrap();
        assert_eq!(room.name, "Sala Azul");
        assert_eq!(room.capacity, 20);

        assert!(!Database::update_room(db.connection(), RoomId::new(99), &draft).unwrap());
    }

    #[test]
    fn test_find_room_by_name_prefers_lowest_id() {
        let db = create_test_database();
        let first = seed_room(&db, "Sala A");
        seed_room(&db, "Sala A");

        assert_eq!(
            Database::find_room_id_by_name(db.connection(), " Sala A ").unwrap(),
            Some(first)
        );
        assert_eq!(
            Database::find_room_id_by_name(db.connection(), "sala a").unwrap(),
            None
        );
    }

    #[test]
    fn test_delete_room() {
        let mut db = create_test_database();
        let id = seed_room(&db, "Sala A");

        db.delete_room(id).unwrap();
        assert!(!Database::room_exists(db.connection(), id).unwrap());

        let err = db.delete_room(id).unwrap_err();
        assert!(matches!(err, Error::RoomNotFound { .. }));
    }

    #[test]
    fn test_delete_room_in_use() {
        let mut db = create_test_database();
        let room = seed_room(&db, "Sala A");
        let employee = seed_employee(&db, "Ana");
        let slot = TimeSlot::parse("2025-07-01", "09:00", "10:00").unwrap();
        db.connection()
            .insert_reservation(room, employee, &slot)
            .unwrap();

        let err = db.delete_room(room).unwrap_err();
        assert!(matches!(
            err,
            Error::RoomInUse {
                reservations: 1,
                ..
            }
        ));
        assert!(Database::room_exists(db.connection(), room).unwrap());
    }
}
