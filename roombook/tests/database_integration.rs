//! Integration tests for the database layer.
//!
//! These tests exercise the full database stack including auto-creation,
//! schema versioning, reopening and the store-level overlap guard.

mod common;

use rusqlite::Connection;
use tempfile::tempdir;

use common::{create_test_database, seed_employee, seed_room, temp_database_path};
use roombook::database::{Database, DatabaseConfig, CURRENT_SCHEMA_VERSION};
use roombook::{
    EmployeeDraft, Error, ListOrder, ReservationManager, ReservationRequest, RoomDraft, TimeSlot,
};

#[test]
fn test_database_auto_creation() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("subdir").join("roombook.db");

    assert!(!db_path.parent().unwrap().exists());

    let _db = Database::open(DatabaseConfig::new(&db_path)).unwrap();

    assert!(db_path.exists());
}

#[test]
fn test_open_without_auto_create_fails_on_missing_file() {
    let dir = tempdir().unwrap();
    let db_path = dir.path().join("missing.db");

    let result = Database::open(DatabaseConfig::new(&db_path).without_auto_create());
    assert!(result.is_err());
    assert!(!db_path.exists());
}

#[test]
fn test_schema_version_compatibility() {
    let db_path = temp_database_path();

    Database::open(DatabaseConfig::new(&db_path)).unwrap();
    Database::open(DatabaseConfig::new(&db_path)).unwrap();

    {
        let conn = Connection::open(&db_path).unwrap();
        conn.execute(
            "UPDATE metadata SET value = '999' WHERE key = 'schema_version'",
            [],
        )
        .unwrap();
    }

    match Database::open(DatabaseConfig::new(&db_path)) {
        Err(Error::UnsupportedSchemaVersion { expected, found }) => {
            assert_eq!(expected, CURRENT_SCHEMA_VERSION);
            assert_eq!(found, 999);
        }
        other => panic!("expected schema version error, got {other:?}"),
    }
}

#[test]
fn test_database_reopening_keeps_records() {
    let db_path = temp_database_path();

    let (room, ana) = {
        let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
        let room = seed_room(&db, "A");
        let ana = seed_employee(&db, "Ana");
        let request =
            ReservationRequest::new(room.into(), ana, "2025-07-01", "09:00", "10:00").unwrap();
        ReservationManager::new(&mut db).create(request).unwrap();
        (room, ana)
    };

    let mut db = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    assert_eq!(
        Database::get_room(db.connection(), room).unwrap().unwrap().name,
        "A"
    );
    assert_eq!(
        Database::get_employee(db.connection(), ana).unwrap().unwrap().email,
        "ana@example.com"
    );

    let listed = ReservationManager::new(&mut db)
        .list(ListOrder::Insertion)
        .unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].date, "2025-07-01");
}

#[test]
fn test_read_only_open_sees_data_but_cannot_write() {
    let db_path = temp_database_path();
    let writer = Database::open(DatabaseConfig::new(&db_path)).unwrap();
    seed_room(&writer, "A");

    let db = Database::open(DatabaseConfig::new(&db_path).read_only()).unwrap();
    assert_eq!(Database::list_rooms(db.connection()).unwrap().len(), 1);

    let draft = RoomDraft::new("B", 2, "").unwrap();
    let err = Database::create_room(db.connection(), &draft).unwrap_err();
    assert!(err.is_store_unavailable());
}

#[test]
fn test_store_guard_rejects_overlapping_raw_insert() {
    let db = create_test_database();
    let room = seed_room(&db, "A");
    let ana = seed_employee(&db, "Ana");

    let slot = TimeSlot::parse("2025-07-01", "09:00", "10:00").unwrap();
    Database::insert_reservation(db.connection(), room, ana, &slot).unwrap();

    // Bypass the admission checks entirely.
    let raw = db.connection().execute(
        "INSERT INTO reservations (room_id, employee_id, date, start_time, end_time)
         VALUES (?1, ?2, '2025-07-01', '09:59:00', '11:00:00')",
        [room.value(), ana.value()],
    );
    assert!(raw.is_err());

    let overlapping = TimeSlot::parse("2025-07-01", "09:30", "10:30").unwrap();
    let err = Database::insert_reservation(db.connection(), room, ana, &overlapping).unwrap_err();
    assert!(err.is_conflict());
}

#[test]
fn test_verify_integrity_on_fresh_and_used_database() {
    let db = create_test_database();
    db.verify_integrity().unwrap();

    seed_room(&db, "A");
    let draft = EmployeeDraft::new("Bo", "bo@example.com", "").unwrap();
    Database::create_employee(db.connection(), &draft).unwrap();
    db.verify_integrity().unwrap();
}

#[test]
fn test_room_and_employee_updates() {
    let db = create_test_database();
    let room = seed_room(&db, "A");
    let ana = seed_employee(&db, "Ana");

    let renamed = RoomDraft::new("A2", 12, "whiteboard").unwrap();
    assert!(Database::update_room(db.connection(), room, &renamed).unwrap());
    let stored = Database::get_room(db.connection(), room).unwrap().unwrap();
    assert_eq!(stored.name, "A2");
    assert_eq!(stored.capacity, 12);

    let moved = EmployeeDraft::new("Ana", "ana@corp.example", "Sales").unwrap();
    assert!(Database::update_employee(db.connection(), ana, &moved).unwrap());
    let stored = Database::get_employee(db.connection(), ana).unwrap().unwrap();
    assert_eq!(stored.department, "Sales");

    let missing = roombook::RoomId::new(404);
    assert!(!Database::update_room(db.connection(), missing, &renamed).unwrap());
}
