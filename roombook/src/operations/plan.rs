//! Plan types for reservation operations.
//!
//! This module defines the plan structures that describe what actions
//! will be taken during an operation, without actually performing them.

use crate::model::{EmployeeId, Reservation, ReservationId, RoomId, TimeSlot};

/// A single action to be taken during plan execution.
///
/// Each action corresponds to one write against the store. Actions are only
/// emitted after every admission check for them has passed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Insert a new reservation.
    CreateReservation {
        /// The resolved room.
        room_id: RoomId,
        /// The employee holding the reservation.
        employee_id: EmployeeId,
        /// The reserved window.
        slot: TimeSlot,
    },

    /// Replace every field of an existing reservation.
    ReplaceReservation(Reservation),

    /// Delete a reservation.
    DeleteReservation(ReservationId),
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{PlanAction, ReservationId};
    ///
    /// let action = PlanAction::DeleteReservation(ReservationId::new(3));
    /// assert_eq!(action.description(), "Delete reservation 3");
    /// ```
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CreateReservation {
                room_id,
                employee_id,
                slot,
            } => format!("Reserve room {room_id} for employee {employee_id} on {slot}"),
            Self::ReplaceReservation(r) => format!(
                "Update reservation {} to room {} for employee {} on {}",
                r.id, r.room_id, r.employee_id, r.slot
            ),
            Self::DeleteReservation(id) => format!("Delete reservation {id}"),
        }
    }
}

/// A complete operation plan describing all actions to be taken.
///
/// Plans are generated during the planning phase and can be inspected,
/// logged, or executed. They include a description, a sequence of actions,
/// and any warnings that should be communicated to the user.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Delete reservation 3");
    /// assert_eq!(plan.description, "Delete reservation 3");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }
}
