//! Update operation planning.

use crate::error::{Error, Result};
use crate::model::{Reservation, ReservationId, ReservationRequest};
use crate::store::ReservationStore;

use super::create::admit;
use super::plan::{OperationPlan, PlanAction};

/// Options for an update operation.
#[derive(Debug, Clone)]
pub struct UpdateOptions {
    /// The reservation to replace.
    pub id: ReservationId,
    /// The replacement fields.
    pub request: ReservationRequest,
}

impl UpdateOptions {
    /// Creates options replacing reservation `id` with `request`.
    #[must_use]
    pub const fn new(id: ReservationId, request: ReservationRequest) -> Self {
        Self { id, request }
    }
}

/// An update plan generator.
///
/// An update is validated exactly like a create, except that the
/// reservation being replaced is ignored by the overlap check.
pub struct UpdatePlan {
    options: UpdateOptions,
}

impl UpdatePlan {
    /// Creates a new update plan with the given options.
    #[must_use]
    pub const fn new(options: UpdateOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this update request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if the reservation does not
    /// exist, then the same admission errors as a create.
    pub fn build_plan<S: ReservationStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let UpdateOptions { id, request } = &self.options;

        if !store.reservation_exists(*id)? {
            return Err(Error::ReservationNotFound { id: *id });
        }

        let room_id = admit(store, request, Some(*id))?;

        Ok(OperationPlan::new(format!("Update reservation {id}")).add_action(
            PlanAction::ReplaceReservation(Reservation {
                id: *id,
                room_id,
                employee_id: request.employee_id,
                slot: request.slot,
            }),
        ))
    }
}
