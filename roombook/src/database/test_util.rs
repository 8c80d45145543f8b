//! Shared test utilities for database unit tests.

use tempfile::tempdir;

use crate::database::{Database, DatabaseConfig};
use crate::model::{EmployeeDraft, EmployeeId, RoomDraft, RoomId};

/// Creates a temporary file-backed test database.
///
/// # Panics
///
/// Panics if the temporary directory or database cannot be created.
#[must_use]
pub fn create_test_database() -> Database {
    let dir = tempdir().unwrap();
    let path = dir.path().join("test.db");
    let db = Database::open(DatabaseConfig::new(path)).unwrap();

    // Keep the directory alive for the lifetime of the test process.
    std::mem::forget(dir);

    db
}

/// Stores a room with the given name and capacity 10.
///
/// # Panics
///
/// Panics if the room cannot be stored.
pub fn seed_room(db: &Database, name: &str) -> RoomId {
    let draft = RoomDraft::new(name, 10, "").unwrap();
    Database::create_room(db.connection(), &draft).unwrap()
}

/// Stores an employee with the given name and a derived email address.
///
/// # Panics
///
/// Panics if the employee cannot be stored.
pub fn seed_employee(db: &Database, name: &str) -> EmployeeId {
    let email = format!("{}@example.com", name.to_lowercase().replace(' ', "."));
    let draft = EmployeeDraft::new(name, &email, "").unwrap();
    Database::create_employee(db.connection(), &draft).unwrap()
}
