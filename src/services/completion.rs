//! Completion pipeline: mark a schedule entry done and optionally build its
//! log aggregate in the same operation.

use chrono::{DateTime, Utc};

use crate::api::{ScheduledWorkoutId, UserId, WorkoutLogInput};
use crate::db::repository::{CompletionOutcome, RepositoryResult, ScheduleRepository};
use crate::db::FullRepository;

/// Complete a scheduled workout at the current instant.
///
/// When a payload is supplied, the produced log is linked to the schedule
/// entry, named after the template, and stamped with the completion time;
/// caller-supplied values for those three fields are ignored. The flag flip
/// and the log creation commit together: a rejected payload leaves the
/// entry not completed.
pub async fn complete(
    repo: &dyn FullRepository,
    user: UserId,
    id: ScheduledWorkoutId,
    payload: Option<&WorkoutLogInput>,
) -> RepositoryResult<CompletionOutcome> {
    complete_at(repo, user, id, payload, Utc::now()).await
}

/// Complete a scheduled workout at an explicit instant.
pub async fn complete_at(
    repo: &dyn FullRepository,
    user: UserId,
    id: ScheduledWorkoutId,
    payload: Option<&WorkoutLogInput>,
    completed_at: DateTime<Utc>,
) -> RepositoryResult<CompletionOutcome> {
    log::info!(
        "completing scheduled workout {} for user {} (with log: {})",
        id,
        user,
        payload.is_some()
    );
    repo.complete_scheduled_workout(user, id, payload, completed_at)
        .await
}
