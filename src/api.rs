//! Public API surface for the RepCurve backend.
//!
//! This file consolidates the identifier newtypes and re-exports the domain
//! types used across the repository, service, and HTTP layers. All types
//! derive Serialize/Deserialize for JSON serialization.

pub use crate::models::catalog::{default_catalog, Exercise, ExerciseCategory, NewExercise};
pub use crate::models::log::{
    epley_1rm, ExerciseLog, ExerciseLogDetail, ExerciseLogInput, SetLog, SetLogInput, SetLogView,
    WorkoutLog, WorkoutLogDetail, WorkoutLogInput,
};
pub use crate::models::schedule::{DateRange, ScheduleInput, ScheduledWorkout, ScheduledWorkoutView};
pub use crate::models::template::{
    TemplateDetail, TemplateExercise, TemplateExerciseDetail, TemplateExerciseInput, TemplateInput,
    WorkoutTemplate,
};

use serde::{Deserialize, Serialize};

use crate::define_id_type;

define_id_type!(i64, UserId);
define_id_type!(i64, ExerciseId);
define_id_type!(i64, TemplateId);
define_id_type!(i64, TemplateExerciseId);
define_id_type!(i64, ScheduledWorkoutId);
define_id_type!(i64, WorkoutLogId);
define_id_type!(i64, ExerciseLogId);
define_id_type!(i64, SetLogId);

/// Minimal identity row for an authenticated user.
///
/// Credential handling lives outside this crate; the core only needs a stable
/// id to partition every read and write by owner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub username: String,
}
