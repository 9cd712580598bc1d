//! Data Transfer Objects for the HTTP API.
//!
//! The domain views already derive Serialize/Deserialize and are re-exported
//! as-is; this module adds the request/response wrappers specific to the
//! REST surface.

use serde::{Deserialize, Serialize};

// Re-export domain types that are already serializable
pub use crate::api::{
    Exercise, ExerciseCategory, ScheduleInput, ScheduledWorkoutView, TemplateDetail, TemplateInput,
    User, WorkoutLogDetail, WorkoutLogInput,
};

use crate::db::repository::CompletionOutcome;

/// Request body for registering a user (collaborator seam; no credentials).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
}

/// Response for user registration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterResponse {
    pub user: User,
    /// Opaque token to present as `Authorization: Bearer <token>`
    pub token: String,
}

/// Query parameters for the calendar endpoint.
///
/// Kept as raw strings so non-integer input surfaces as a validation error
/// with field detail rather than a generic deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CalendarQuery {
    #[serde(default)]
    pub year: Option<String>,
    #[serde(default)]
    pub month: Option<String>,
}

/// Query parameters for range-filtered listings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RangeQuery {
    #[serde(default)]
    pub start_date: Option<chrono::NaiveDate>,
    #[serde(default)]
    pub end_date: Option<chrono::NaiveDate>,
}

impl RangeQuery {
    pub fn into_range(self) -> crate::api::DateRange {
        crate::api::DateRange::new(self.start_date, self.end_date)
    }
}

/// Request body for completing a scheduled workout.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CompleteRequest {
    #[serde(default)]
    pub workout_log: Option<WorkoutLogInput>,
}

/// Response for completing a scheduled workout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionResponse {
    pub scheduled_workout: ScheduledWorkoutView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workout_log: Option<WorkoutLogDetail>,
}

impl From<CompletionOutcome> for CompletionResponse {
    fn from(outcome: CompletionOutcome) -> Self {
        Self {
            scheduled_workout: outcome.scheduled_workout,
            workout_log: outcome.workout_log,
        }
    }
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status of the service
    pub status: String,
    /// Status of the backing store
    pub database: String,
}

/// API information banner.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoResponse {
    pub name: String,
    pub version: String,
    pub description: String,
}
