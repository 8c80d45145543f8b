//! Database layer for rooms, employees and reservations.
//!
//! This module provides the `SQLite` storage layer: connection management,
//! schema versioning, record CRUD, and the [`crate::ReservationStore`]
//! implementation the admission logic runs against.
//!
//! # Examples
//!
//! ```no_run
//! use roombook::database::{Database, DatabaseConfig};
//! use roombook::RoomDraft;
//!
//! let db = Database::open(DatabaseConfig::new("/tmp/roombook.db")).unwrap();
//! let id = Database::create_room(db.connection(), &RoomDraft::new("Sala A", 8, "").unwrap())
//!     .unwrap();
//!
//! for room in Database::list_rooms(db.connection()).unwrap() {
//!     println!("{} {}", room.id, room.name);
//! }
//! # let _ = id;
//! ```

mod config;
mod connection;
mod employees;
pub mod migrations;
mod reservations;
mod rooms;
mod schema;
mod store;
mod transaction;

#[cfg(test)]
pub(crate) mod test_util;

use rusqlite::{Connection, Params};

use crate::error::Result;

// Re-export public API
pub use config::{
    database_path_in, default_data_dir, resolve_data_dir, resolve_database_path, DatabaseConfig,
    DATABASE_FILE_NAME, DATA_DIR_ENV, DEFAULT_BUSY_TIMEOUT,
};
pub use connection::Database;
pub use migrations::{check_schema_compatibility, get_schema_version, initialize_schema};
pub use schema::CURRENT_SCHEMA_VERSION;

/// Runs a `SELECT COUNT(*)` query.
fn query_count<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<u64> {
    let count: i64 = conn.query_row(sql, params, |row| row.get(0))?;
    Ok(u64::try_from(count).unwrap_or_default())
}
