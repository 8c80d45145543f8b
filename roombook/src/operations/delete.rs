//! Delete operation planning.

use crate::error::{Error, Result};
use crate::model::ReservationId;
use crate::store::ReservationStore;

use super::plan::{OperationPlan, PlanAction};

/// Options for a delete operation.
#[derive(Debug, Clone, Copy)]
pub struct DeleteOptions {
    /// The reservation to delete.
    pub id: ReservationId,
}

impl DeleteOptions {
    /// Creates options deleting reservation `id`.
    #[must_use]
    pub const fn new(id: ReservationId) -> Self {
        Self { id }
    }
}

/// A delete plan generator.
///
/// Deleting is not idempotent: a missing id is an error on every call.
pub struct DeletePlan {
    options: DeleteOptions,
}

impl DeletePlan {
    /// Creates a new delete plan with the given options.
    #[must_use]
    pub const fn new(options: DeleteOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this delete request.
    ///
    /// # Errors
    ///
    /// Returns [`Error::ReservationNotFound`] if the reservation does not
    /// exist, or a store error.
    pub fn build_plan<S: ReservationStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let id = self.options.id;
        if !store.reservation_exists(id)? {
            return Err(Error::ReservationNotFound { id });
        }
        Ok(OperationPlan::new(format!("Delete reservation {id}"))
            .add_action(PlanAction::DeleteReservation(id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MockReservationStore;

    #[test]
    fn test_existing_reservation() {
        let mut store = MockReservationStore::new();
        store.expect_reservation_exists().returning(|_| Ok(true));
        store.expect_count_overlapping().never();

        let plan = DeletePlan::new(DeleteOptions::new(ReservationId::new(2)))
            .build_plan(&store)
            .unwrap();
        assert_eq!(
            plan.actions,
            vec![PlanAction::DeleteReservation(ReservationId::new(2))]
        );
    }

    #[test]
    fn test_missing_reservation() {
        let mut store = MockReservationStore::new();
        store.expect_reservation_exists().returning(|_| Ok(false));

        let err = DeletePlan::new(DeleteOptions::new(ReservationId::new(2)))
            .build_plan(&store)
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
