//! Plan execution engine.
//!
//! This module implements the executor that takes operation plans
//! and applies them to a [`ReservationStore`].

use crate::error::{Error, Result};
use crate::model::ReservationId;
use crate::store::ReservationStore;

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
#[derive(Debug, Clone)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan.
    pub warnings: Vec<String>,

    /// The id assigned to a newly created reservation, if any.
    pub reservation_id: Option<ReservationId>,
}

impl ExecutionResult {
    fn new(plan: &OperationPlan, dry_run: bool, reservation_id: Option<ReservationId>) -> Self {
        Self {
            success: true,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            reservation_id,
        }
    }
}

/// Executes operation plans against a store.
///
/// The executor can run in normal mode (applying changes) or dry-run mode
/// (reporting the actions without writing anything).
///
/// # Examples
///
/// ```
/// use roombook::{OperationPlan, PlanExecutor};
/// use roombook::Database;
///
/// let db = Database::open_in_memory().unwrap();
/// let plan = OperationPlan::new("Nothing to do");
///
/// let result = PlanExecutor::new(db.connection()).dry_run().execute(&plan).unwrap();
/// assert!(result.dry_run);
/// assert!(result.actions_taken.is_empty());
/// ```
pub struct PlanExecutor<'a, S: ReservationStore + ?Sized> {
    store: &'a S,
    dry_run: bool,
}

impl<'a, S: ReservationStore + ?Sized> PlanExecutor<'a, S> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(store: &'a S) -> Self {
        Self {
            store,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// # Errors
    ///
    /// Returns an error if any action fails. A replace or delete whose row
    /// has vanished fails with [`Error::ReservationNotFound`].
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        if self.dry_run {
            log::debug!("dry run: {}", plan.description);
            return Ok(ExecutionResult::new(plan, true, None));
        }

        let mut created = None;
        for action in &plan.actions {
            if let Some(id) = self.execute_action(action)? {
                created = Some(id);
            }
        }

        Ok(ExecutionResult::new(plan, false, created))
    }

    fn execute_action(&mut self, action: &PlanAction) -> Result<Option<ReservationId>> {
        log::debug!("executing: {}", action.description());
        match action {
            PlanAction::CreateReservation {
                room_id,
                employee_id,
                slot,
            } => {
                let id = self.store.insert_reservation(*room_id, *employee_id, slot)?;
                Ok(Some(id))
            }
            PlanAction::ReplaceReservation(reservation) => {
                if self.store.replace_reservation(reservation)? {
                    Ok(None)
                } else {
                    Err(Error::ReservationNotFound { id: reservation.id })
                }
            }
            PlanAction::DeleteReservation(id) => {
                if self.store.delete_reservation(*id)? {
                    Ok(None)
                } else {
                    Err(Error::ReservationNotFound { id: *id })
                }
            }
        }
    }
}
