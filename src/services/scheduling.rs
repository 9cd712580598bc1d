//! Scheduler services: binding templates to calendar dates.

use crate::api::{DateRange, ScheduleInput, ScheduledWorkoutId, ScheduledWorkoutView, UserId};
use crate::db::repository::{RepositoryResult, ScheduleRepository};
use crate::db::FullRepository;

pub async fn schedule(
    repo: &dyn FullRepository,
    user: UserId,
    input: &ScheduleInput,
) -> RepositoryResult<ScheduledWorkoutView> {
    log::debug!(
        "scheduling template {} on {} for user {}",
        input.template,
        input.scheduled_date,
        user
    );
    repo.create_scheduled_workout(user, input).await
}

/// List the caller's schedule entries, `scheduled_date` descending.
pub async fn list(
    repo: &dyn FullRepository,
    user: UserId,
    range: &DateRange,
) -> RepositoryResult<Vec<ScheduledWorkoutView>> {
    repo.list_scheduled_workouts(user, range).await
}

pub async fn get(
    repo: &dyn FullRepository,
    user: UserId,
    id: ScheduledWorkoutId,
) -> RepositoryResult<ScheduledWorkoutView> {
    repo.get_scheduled_workout(user, id).await
}
