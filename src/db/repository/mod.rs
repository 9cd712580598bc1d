//! Repository traits for abstracting store operations.
//!
//! These traits define the interface for all persistence operations,
//! allowing different storage backends to be swapped via dependency
//! injection. Every user-owned read and write takes the owning `UserId`
//! explicitly; implementations must apply the ownership check before any
//! mutation, and must report foreign-owned rows as not-found.
//!
//! # Thread Safety
//! Implementations must be `Send + Sync` to work with async Rust and allow
//! sharing across threads.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::api::{
    DateRange, Exercise, ExerciseId, NewExercise, ScheduleInput, ScheduledWorkoutId,
    ScheduledWorkoutView, TemplateDetail, TemplateId, TemplateInput, User, UserId, WorkoutLogDetail,
    WorkoutLogId, WorkoutLogInput,
};

pub mod error;

pub use error::{ErrorContext, FieldViolation, RepositoryError, RepositoryResult};

/// Result of completing a scheduled workout.
#[derive(Debug, Clone)]
pub struct CompletionOutcome {
    /// The schedule entry with `is_completed` applied.
    pub scheduled_workout: ScheduledWorkoutView,
    /// The log aggregate, when a payload was supplied.
    pub workout_log: Option<WorkoutLogDetail>,
}

/// User identity rows. Owned by the auth collaborator; the core only needs
/// them as the partitioning key for ownership checks.
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Check if the store is reachable and healthy.
    async fn health_check(&self) -> RepositoryResult<bool>;

    /// Create a user row and return it with its assigned id.
    async fn create_user(&self, username: &str) -> RepositoryResult<User>;

    /// Fetch a user by id.
    async fn get_user(&self, user: UserId) -> RepositoryResult<User>;
}

/// The exercise catalog: read-mostly reference data.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// Insert a catalog entry unless one with the same name exists.
    ///
    /// # Returns
    /// The entry and whether it was created by this call (`false` when an
    /// entry with that name already existed).
    async fn ensure_exercise(&self, exercise: &NewExercise) -> RepositoryResult<(Exercise, bool)>;

    /// List the whole catalog, ordered by name.
    async fn list_exercises(&self) -> RepositoryResult<Vec<Exercise>>;

    /// Fetch a catalog entry by id.
    async fn get_exercise(&self, id: ExerciseId) -> RepositoryResult<Exercise>;
}

/// User-owned workout templates with their ordered exercise entries.
#[async_trait]
pub trait TemplateRepository: Send + Sync {
    /// Create a template with its exercise entries.
    ///
    /// # Errors
    /// * `Validation` - an entry references an unknown exercise
    /// * `Conflict` - the same exercise appears twice in the template
    async fn create_template(
        &self,
        user: UserId,
        input: &TemplateInput,
    ) -> RepositoryResult<TemplateDetail>;

    /// List the caller's templates, newest first.
    async fn list_templates(&self, user: UserId) -> RepositoryResult<Vec<TemplateDetail>>;

    /// Fetch one of the caller's templates.
    async fn get_template(&self, user: UserId, id: TemplateId) -> RepositoryResult<TemplateDetail>;

    /// Delete one of the caller's templates.
    ///
    /// Cascades to the template's exercise entries and to schedule entries
    /// referencing it. Workout logs produced from those schedule entries are
    /// kept as history with their schedule link cleared.
    async fn delete_template(&self, user: UserId, id: TemplateId) -> RepositoryResult<()>;
}

/// Schedule entries and the completion transition.
#[async_trait]
pub trait ScheduleRepository: Send + Sync {
    /// Schedule a template onto a calendar date for the caller.
    ///
    /// # Errors
    /// * `NotFound` - the template is absent or owned by another user
    /// * `Conflict` - the (user, scheduled_date, template) triple exists
    async fn create_scheduled_workout(
        &self,
        user: UserId,
        input: &ScheduleInput,
    ) -> RepositoryResult<ScheduledWorkoutView>;

    /// List the caller's schedule entries within `range`, ordered by
    /// `scheduled_date` descending (ties broken by id).
    async fn list_scheduled_workouts(
        &self,
        user: UserId,
        range: &DateRange,
    ) -> RepositoryResult<Vec<ScheduledWorkoutView>>;

    /// Fetch one of the caller's schedule entries.
    async fn get_scheduled_workout(
        &self,
        user: UserId,
        id: ScheduledWorkoutId,
    ) -> RepositoryResult<ScheduledWorkoutView>;

    /// Mark a schedule entry completed, optionally creating its log.
    ///
    /// Both steps commit in a single transactional scope: when the supplied
    /// payload fails validation, the completion flag is left untouched.
    /// Completing an already-completed entry re-applies the flag without
    /// error.
    ///
    /// When a payload is present, its `scheduled_workout`, `workout_name`,
    /// and `date` fields are overridden with the schedule entry's id, the
    /// template's current name, and `completed_at` before validation.
    async fn complete_scheduled_workout(
        &self,
        user: UserId,
        id: ScheduledWorkoutId,
        payload: Option<&WorkoutLogInput>,
        completed_at: DateTime<Utc>,
    ) -> RepositoryResult<CompletionOutcome>;
}

/// The workout log aggregate.
#[async_trait]
pub trait WorkoutLogRepository: Send + Sync {
    /// Create a full log aggregate (workout -> exercises -> sets) from one
    /// submission.
    ///
    /// The three-level creation is all-or-nothing: validation, referential
    /// checks, and uniqueness checks all run before the first row is
    /// written, and a failure at any level leaves no rows behind. Entries
    /// are persisted in the order supplied; `order` and `set_number` are
    /// caller-supplied and never renumbered.
    ///
    /// # Errors
    /// * `Validation` - missing/malformed fields or unknown exercise ids
    /// * `Conflict` - duplicate `set_number` within one exercise log
    async fn create_workout_log(
        &self,
        user: UserId,
        input: &WorkoutLogInput,
    ) -> RepositoryResult<WorkoutLogDetail>;

    /// List the caller's logs whose date falls within `range`, newest first.
    async fn list_workout_logs(
        &self,
        user: UserId,
        range: &DateRange,
    ) -> RepositoryResult<Vec<WorkoutLogDetail>>;

    /// Fetch one of the caller's logs as a fully populated aggregate.
    async fn get_workout_log(
        &self,
        user: UserId,
        id: WorkoutLogId,
    ) -> RepositoryResult<WorkoutLogDetail>;
}

/// Combination trait for a full repository implementation.
pub trait FullRepository:
    UserRepository + CatalogRepository + TemplateRepository + ScheduleRepository + WorkoutLogRepository
{
}

impl<T> FullRepository for T where
    T: UserRepository
        + CatalogRepository
        + TemplateRepository
        + ScheduleRepository
        + WorkoutLogRepository
{
}
