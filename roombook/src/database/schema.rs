//! Database schema definitions and SQL constants.
//!
//! Dates are stored as `YYYY-MM-DD` text and times as `HH:MM:SS` text, so
//! plain string comparison orders them correctly.

/// Current schema version for the database.
///
/// This version is stored in the metadata table and is used to ensure
/// compatibility between the database and the application.
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Message raised by the overlap triggers.
pub const OVERLAP_ABORT_MESSAGE: &str = "reservation overlaps an existing reservation";

/// SQL statement to create the metadata table.
pub const CREATE_METADATA_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS metadata (
        key TEXT PRIMARY KEY NOT NULL,
        value TEXT NOT NULL
    )";

/// SQL statement to create the rooms table.
pub const CREATE_ROOMS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS rooms (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        capacity INTEGER NOT NULL CHECK (capacity > 0),
        resources TEXT NOT NULL
    )";

/// SQL statement to create the employees table.
pub const CREATE_EMPLOYEES_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        email TEXT NOT NULL,
        department TEXT NOT NULL
    )";

/// SQL statement to create the reservations table.
///
/// Rooms and employees cannot be deleted while a reservation references
/// them, and every stored window is non-empty.
pub const CREATE_RESERVATIONS_TABLE: &str = r"
    CREATE TABLE IF NOT EXISTS reservations (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        room_id INTEGER NOT NULL REFERENCES rooms(id) ON DELETE RESTRICT,
        employee_id INTEGER NOT NULL REFERENCES employees(id) ON DELETE RESTRICT,
        date TEXT NOT NULL,
        start_time TEXT NOT NULL,
        end_time TEXT NOT NULL,
        CHECK (start_time < end_time)
    )";

/// SQL statement to create the index that serves the overlap query.
pub const CREATE_ROOM_DATE_INDEX: &str =
    "CREATE INDEX IF NOT EXISTS idx_reservations_room_date ON reservations(room_id, date)";

/// Rejects inserts that overlap a reservation of the same room and date.
pub const CREATE_NO_OVERLAP_INSERT_TRIGGER: &str = r"
    CREATE TRIGGER IF NOT EXISTS trg_reservations_no_overlap_insert
    BEFORE INSERT ON reservations
    WHEN EXISTS (
        SELECT 1 FROM reservations r
        WHERE r.room_id = NEW.room_id
          AND r.date = NEW.date
          AND r.start_time < NEW.end_time
          AND r.end_time > NEW.start_time
    )
    BEGIN
        SELECT RAISE(ABORT, 'reservation overlaps an existing reservation');
    END";

/// Rejects updates that overlap another reservation of the same room and
/// date. The updated row never conflicts with itself.
pub const CREATE_NO_OVERLAP_UPDATE_TRIGGER: &str = r"
    CREATE TRIGGER IF NOT EXISTS trg_reservations_no_overlap_update
    BEFORE UPDATE OF room_id, date, start_time, end_time ON reservations
    WHEN EXISTS (
        SELECT 1 FROM reservations r
        WHERE r.id <> OLD.id
          AND r.room_id = NEW.room_id
          AND r.date = NEW.date
          AND r.start_time < NEW.end_time
          AND r.end_time > NEW.start_time
    )
    BEGIN
        SELECT RAISE(ABORT, 'reservation overlaps an existing reservation');
    END";

/// SQL statement to select the schema version from the metadata table.
pub const SELECT_SCHEMA_VERSION: &str = "SELECT value FROM metadata WHERE key = 'schema_version'";

/// SQL statement to insert or update the schema version in the metadata table.
pub const INSERT_SCHEMA_VERSION: &str =
    "INSERT OR REPLACE INTO metadata (key, value) VALUES ('schema_version', ?)";
