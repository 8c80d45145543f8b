//! Create operation planning.
//!
//! Admission runs in a fixed order: the window was already validated when
//! the request was built, then the room is resolved, the employee is looked
//! up, and finally the overlap check runs. The first failing step decides
//! the error.

use crate::conflict::has_conflict;
use crate::error::{Error, Result};
use crate::model::{ReservationId, ReservationRequest, RoomId, RoomRef};
use crate::store::ReservationStore;

use super::plan::{OperationPlan, PlanAction};

/// Options for a create operation.
#[derive(Debug, Clone)]
pub struct CreateOptions {
    /// The reservation to create.
    pub request: ReservationRequest,
}

impl CreateOptions {
    /// Creates options for the given request.
    #[must_use]
    pub const fn new(request: ReservationRequest) -> Self {
        Self { request }
    }
}

/// A create plan generator.
pub struct CreatePlan {
    options: CreateOptions,
}

impl CreatePlan {
    /// Creates a new create plan with the given options.
    #[must_use]
    pub const fn new(options: CreateOptions) -> Self {
        Self { options }
    }

    /// Builds an operation plan for this create request.
    ///
    /// This method only reads from the store.
    ///
    /// # Errors
    ///
    /// Returns [`Error::RoomNotFound`], [`Error::EmployeeNotFound`] or
    /// [`Error::SchedulingConflict`] when admission fails, or a store error
    /// if a reference lookup cannot be completed.
    ///
    /// # Examples
    ///
    /// ```
    /// use roombook::{CreateOptions, CreatePlan, Database, EmployeeId, ReservationRequest, RoomId};
    ///
    /// let db = Database::open_in_memory().unwrap();
    /// let request = ReservationRequest::new(
    ///     RoomId::new(1).into(),
    ///     EmployeeId::new(1),
    ///     "2025-07-01",
    ///     "09:00",
    ///     "10:00",
    /// )
    /// .unwrap();
    ///
    /// let err = CreatePlan::new(CreateOptions::new(request))
    ///     .build_plan(db.connection())
    ///     .unwrap_err();
    /// assert!(err.is_not_found());
    /// ```
    pub fn build_plan<S: ReservationStore + ?Sized>(&self, store: &S) -> Result<OperationPlan> {
        let request = &self.options.request;
        let room_id = admit(store, request, None)?;

        Ok(OperationPlan::new(format!(
            "Create reservation of room {room_id} on {}",
            request.slot
        ))
        .add_action(PlanAction::CreateReservation {
            room_id,
            employee_id: request.employee_id,
            slot: request.slot,
        }))
    }
}

/// Resolves a room reference to an existing room id.
///
/// # Errors
///
/// Returns [`Error::RoomNotFound`] if no room matches, or a store error.
pub fn resolve_room<S: ReservationStore + ?Sized>(store: &S, room: &RoomRef) -> Result<RoomId> {
    let found = match room {
        RoomRef::Id(id) => store.room_exists(*id)?.then_some(*id),
        RoomRef::Name(name) => store.find_room_id_by_name(name)?,
    };
    found.ok_or_else(|| Error::RoomNotFound { room: room.clone() })
}

/// Runs the reference and overlap checks shared by create and update.
pub(super) fn admit<S: ReservationStore + ?Sized>(
    store: &S,
    request: &ReservationRequest,
    exclude: Option<ReservationId>,
) -> Result<RoomId> {
    let room_id = resolve_room(store, &request.room)?;

    if !store.employee_exists(request.employee_id)? {
        return Err(Error::EmployeeNotFound {
            id: request.employee_id,
        });
    }

    if has_conflict(store, room_id, &request.slot, exclude) {
        log::debug!("rejected room {room_id} on {}: conflict", request.slot);
        return Err(Error::SchedulingConflict {
            details: format!(
                "room {room_id} already has a reservation overlapping {}",
                request.slot
            ),
        });
    }

    Ok(room_id)
}
