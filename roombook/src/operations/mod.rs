//! Reservation operations using the plan-execute pattern.
//!
//! Operations are split into two phases:
//! 1. **Planning**: validates the request against the store and builds a plan
//! 2. **Execution**: applies the plan's actions to the store
//!
//! Planning only reads, so running both phases inside one immediate
//! transaction (as [`ReservationManager`] does) makes check-then-write atomic.
//!
//! # Examples
//!
//! ```
//! use roombook::operations::{CreateOptions, CreatePlan, PlanExecutor};
//! use roombook::{Database, EmployeeDraft, ReservationRequest, RoomDraft};
//!
//! let mut db = Database::open_in_memory().unwrap();
//! let room = Database::create_room(db.connection(), &RoomDraft::new("A", 4, "").unwrap()).unwrap();
//! let ana = Database::create_employee(
//!     db.connection(),
//!     &EmployeeDraft::new("Ana", "ana@example.com", "Sales").unwrap(),
//! )
//! .unwrap();
//!
//! let request =
//!     ReservationRequest::new(room.into(), ana, "2025-07-01", "09:00", "10:00").unwrap();
//!
//! let tx = db.begin_immediate().unwrap();
//! let plan = CreatePlan::new(CreateOptions::new(request)).build_plan(&*tx).unwrap();
//! let result = PlanExecutor::new(&*tx).execute(&plan).unwrap();
//! tx.commit().unwrap();
//!
//! assert!(result.success);
//! assert!(result.reservation_id.is_some());
//! ```

pub mod create;
pub mod delete;
pub mod executor;
pub mod init;
pub mod list;
pub mod manager;
pub mod plan;
pub mod update;

#[cfg(test)]
mod proptests;

pub use create::{resolve_room, CreateOptions, CreatePlan};
pub use delete::{DeleteOptions, DeletePlan};
pub use executor::{ExecutionResult, PlanExecutor};
pub use init::{init_database, InitOptions, InitResult};
pub use list::{list_reservations, ListOrder, ReservationFilter};
pub use manager::ReservationManager;
pub use plan::{OperationPlan, PlanAction};
pub use update::{UpdateOptions, UpdatePlan};
