//! Transactional reservation lifecycle.
//!
//! Each write operation plans and executes inside one immediate
//! transaction, so the reads that admit a reservation and the write that
//! stores it see the same database state even with several processes
//! sharing the file.

use rusqlite::Connection;

use crate::database::Database;
use crate::error::{Error, Result};
use crate::model::{ReservationDetails, ReservationId, ReservationRequest};

use super::create::{CreateOptions, CreatePlan};
use super::delete::{DeleteOptions, DeletePlan};
use super::executor::{ExecutionResult, PlanExecutor};
use super::list::{list_reservations, ListOrder, ReservationFilter};
use super::plan::OperationPlan;
use super::update::{UpdateOptions, UpdatePlan};

/// Creates, updates, deletes and lists reservations.
///
/// # Examples
///
/// ```
/// use roombook::{Database, EmployeeDraft, ReservationManager, ReservationRequest, RoomDraft};
///
/// let mut db = Database::open_in_memory().unwrap();
/// let room = Database::create_room(db.connection(), &RoomDraft::new("A", 6, "").unwrap()).unwrap();
/// let ana = Database::create_employee(
///     db.connection(),
///     &EmployeeDraft::new("Ana", "ana@example.com", "").unwrap(),
/// )
/// .unwrap();
///
/// let mut manager = ReservationManager::new(&mut db);
/// let request = |start, end| {
///     ReservationRequest::new(room.into(), ana, "2025-07-01", start, end).unwrap()
/// };
///
/// manager.create(request("09:00", "10:00")).unwrap();
/// assert!(manager.create(request("09:30", "10:30")).unwrap_err().is_conflict());
/// manager.create(request("10:00", "11:00")).unwrap();
/// ```
pub struct ReservationManager<'a> {
    db: &'a mut Database,
}

impl<'a> ReservationManager<'a> {
    /// Creates a manager over an open database.
    pub fn new(db: &'a mut Database) -> Self {
        Self { db }
    }

    /// Creates a reservation and returns its id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`], [`Error::EmployeeNotFound`] or
    /// [`Error::SchedulingConflict`] when the reservation is not admitted,
    /// or a store error. Nothing is written on error.
    pub fn create(&mut self, request: ReservationRequest) -> Result<ReservationId> {
        self.execute_create(request, false)?
            .reservation_id
            .ok_or_else(|| Error::DatabaseCorruption {
                details: "insert reported no reservation id".into(),
            })
    }

    /// Replaces every field of reservation `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if `id` does not exist, then
    /// the same errors as [`Self::create`]. Nothing is written on error.
    pub fn update(&mut self, id: ReservationId, request: ReservationRequest) -> Result<()> {
        self.execute_update(id, request, false).map(|_| ())
    }

    /// Deletes reservation `id`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if `id` does not exist.
    pub fn delete(&mut self, id: ReservationId) -> Result<()> {
        self.execute_delete(id, false).map(|_| ())
    }

    /// Lists every reservation with room and employee names.
    ///
    /// # Errors
    ///
    /// Returns a store error if the listing fails.
    pub fn list(&self, order: ListOrder) -> Result<Vec<ReservationDetails>> {
        self.list_filtered(order, &ReservationFilter::default())
    }

    /// Lists reservations passing `filter`.
    ///
    /// # Errors
    ///
    /// Returns a store error if the listing fails.
    pub fn list_filtered(
        &self,
        order: ListOrder,
        filter: &ReservationFilter,
    ) -> Result<Vec<ReservationDetails>> {
        list_reservations(self.db.connection(), order, filter)
    }

    /// Plans and, unless `dry_run`, applies a create.
    ///
    /// # Errors
    ///
    /// See [`Self::create`]. A dry run reports the same admission errors.
    pub fn execute_create(
        &mut self,
        request: ReservationRequest,
        dry_run: bool,
    ) -> Result<ExecutionResult> {
        let planner = CreatePlan::new(CreateOptions::new(request));
        self.run(dry_run, |conn| planner.build_plan(conn))
    }

    /// Plans and, unless `dry_run`, applies an update.
    ///
    /// # Errors
    ///
    /// See [`Self::update`].
    pub fn execute_update(
        &mut self,
        id: ReservationId,
        request: ReservationRequest,
        dry_run: bool,
    ) -> Result<ExecutionResult> {
        let planner = UpdatePlan::new(UpdateOptions::new(id, request));
        self.run(dry_run, |conn| planner.build_plan(conn))
    }

    /// Plans and, unless `dry_run`, applies a delete.
    ///
    /// # Errors
    ///
    /// See [`Self::delete`].
    pub fn execute_delete(&mut self, id: ReservationId, dry_run: bool) -> Result<ExecutionResult> {
        let planner = DeletePlan::new(DeleteOptions::new(id));
        self.run(dry_run, |conn| planner.build_plan(conn))
    }

    fn run<F>(&mut self, dry_run: bool, build: F) -> Result<ExecutionResult>
    where
        F: FnOnce(&Connection) -> Result<OperationPlan>,
    {
        let tx = self.db.begin_immediate()?;
        let plan = build(&*tx)?;
        log::debug!("planned: {}", plan.description);

        let mut executor = PlanExecutor::new(&*tx);
        if dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan)?;

        if dry_run {
            tx.rollback()?;
        } else {
            tx.commit()?;
        }
        Ok(result)
    }
}
