//! Common test utilities for integration tests.
//!
//! Fixture helpers that open throwaway databases and seed the rooms and
//! employees reservations refer to.

use std::path::PathBuf;

use roombook::database::{Database, DatabaseConfig};
use roombook::{EmployeeDraft, EmployeeId, ReservationRequest, RoomDraft, RoomId};

/// Returns a database path inside a temporary directory that outlives the
/// test.
#[allow(dead_code)]
pub fn temp_database_path() -> PathBuf {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("roombook.db");
    // Keep the directory alive for the rest of the test process.
    std::mem::forget(dir);
    path
}

/// Creates a file-backed test database.
#[allow(dead_code)]
pub fn create_test_database() -> Database {
    Database::open(DatabaseConfig::new(temp_database_path())).unwrap()
}

/// Stores a room and returns its id.
#[allow(dead_code)]
pub fn seed_room(db: &Database, name: &str) -> RoomId {
    let draft = RoomDraft::new(name, 8, "projector").unwrap();
    Database::create_room(db.connection(), &draft).unwrap()
}

/// Stores an employee and returns their id.
#[allow(dead_code)]
pub fn seed_employee(db: &Database, name: &str) -> EmployeeId {
    let email = format!("{}@example.com", name.to_lowercase());
    let draft = EmployeeDraft::new(name, &email, "Engineering").unwrap();
    Database::create_employee(db.connection(), &draft).unwrap()
}

/// Builds a request for `room` on 2025-07-01.
#[allow(dead_code)]
pub fn request(room: RoomId, employee: EmployeeId, start: &str, end: &str) -> ReservationRequest {
    ReservationRequest::new(room.into(), employee, "2025-07-01", start, end).unwrap()
}

/// Counts stored reservations without going through the library.
#[allow(dead_code)]
pub fn reservation_rows(db: &Database) -> i64 {
    db.connection()
        .query_row("SELECT COUNT(*) FROM reservations", [], |row| row.get(0))
        .unwrap()
}
