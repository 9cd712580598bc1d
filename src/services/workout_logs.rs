//! Log aggregate services: nested creation and reads.

use crate::api::{DateRange, UserId, WorkoutLogDetail, WorkoutLogId, WorkoutLogInput};
use crate::db::repository::{RepositoryResult, WorkoutLogRepository};
use crate::db::FullRepository;

/// Create a full workout log aggregate from one submission.
///
/// The repository performs the whole three-level creation as a single
/// transactional unit; see `WorkoutLogRepository::create_workout_log`.
pub async fn create_workout_log(
    repo: &dyn FullRepository,
    user: UserId,
    input: &WorkoutLogInput,
) -> RepositoryResult<WorkoutLogDetail> {
    log::debug!(
        "storing workout log '{}' ({} exercise logs) for user {}",
        input.workout_name,
        input.exercise_logs.len(),
        user
    );
    repo.create_workout_log(user, input).await
}

pub async fn list_workout_logs(
    repo: &dyn FullRepository,
    user: UserId,
    range: &DateRange,
) -> RepositoryResult<Vec<WorkoutLogDetail>> {
    repo.list_workout_logs(user, range).await
}

pub async fn get_workout_log(
    repo: &dyn FullRepository,
    user: UserId,
    id: WorkoutLogId,
) -> RepositoryResult<WorkoutLogDetail> {
    repo.get_workout_log(user, id).await
}
