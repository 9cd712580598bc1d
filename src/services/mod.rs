//! Service layer for business logic and orchestration.
//!
//! Services sit between the HTTP handlers and the repository. They carry the
//! pieces of behavior that do not belong to storage: calendar window
//! computation, the completion pipeline's timestamp injection, and catalog
//! seeding. Everything takes the owning `UserId` explicitly; no operation
//! infers identity from ambient state.

pub mod calendar;
pub mod catalog;
pub mod completion;
pub mod scheduling;
pub mod templates;
pub mod workout_logs;

pub use calendar::{list_month, month_window};
pub use catalog::seed_default_catalog;
pub use completion::{complete, complete_at};
