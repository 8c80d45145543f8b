//! Transaction management utilities.
//!
//! Every write that depends on a prior read runs inside an immediate
//! transaction. `BEGIN IMMEDIATE` takes the database's single write lock up
//! front, so the read and the write cannot interleave with another writer in
//! any thread or process.

use rusqlite::{Transaction, TransactionBehavior};

use crate::error::Result;

use super::connection::Database;

impl Database {
    /// Begins an immediate transaction.
    ///
    /// Waits at most the configured busy timeout for the write lock.
    ///
    /// # Errors
    ///
    /// Returns a store error if the lock cannot be acquired in time.
    pub fn begin_immediate(&mut self) -> Result<Transaction<'_>> {
        Ok(self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?)
    }

    /// Runs `f` inside an immediate transaction, committing only on success.
    ///
    /// # Errors
    ///
    /// Returns the error of `f`, after rolling back, or a store error if
    /// the transaction cannot begin or commit.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{Database, RoomDraft};
    ///
    /// let mut db = Database::open_in_memory().unwrap();
    /// let id = db
    ///     .with_immediate_transaction(|tx| {
    ///         Database::create_room(tx, &RoomDraft::new("Sala A", 4, "").unwrap())
    ///     })
    ///     .unwrap();
    /// assert!(Database::room_exists(db.connection(), id).unwrap());
    /// ```
    pub fn with_immediate_transaction<T, F>(&mut self, f: F) -> Result<T>
    where
        F: FnOnce(&Transaction<'_>) -> Result<T>,
    {
        let tx = self.begin_immediate()?;
        let value = f(&tx)?;
        tx.commit()?;
        Ok(value)
    }
}
