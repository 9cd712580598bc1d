//! Calendar query: range-filtered read view over schedule entries.

use chrono::{Datelike, NaiveDate, Utc};

use crate::api::{DateRange, ScheduledWorkoutView, UserId};
use crate::db::repository::{FieldViolation, RepositoryError, RepositoryResult, ScheduleRepository};
use crate::db::FullRepository;

/// Compute the inclusive [first day, last day] window of a calendar month.
///
/// The last day is derived by taking day 1 of the following month and
/// stepping back one day, which carries December into the next January.
pub fn month_window(year: i32, month: u32) -> RepositoryResult<(NaiveDate, NaiveDate)> {
    let first = NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(|| {
        let field = if (1..=12).contains(&month) { "year" } else { "month" };
        RepositoryError::validation_fields(vec![FieldViolation::new(
            field,
            "Invalid year or month",
        )])
    })?;

    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| RepositoryError::internal("month window overflowed the calendar"))?;

    let last = next_first
        .pred_opt()
        .ok_or_else(|| RepositoryError::internal("month window overflowed the calendar"))?;

    Ok((first, last))
}

/// List the caller's schedule entries for one calendar month,
/// `scheduled_date` descending. Missing year/month default to the current
/// UTC date's.
pub async fn list_month(
    repo: &dyn FullRepository,
    user: UserId,
    year: Option<i32>,
    month: Option<u32>,
) -> RepositoryResult<Vec<ScheduledWorkoutView>> {
    let today = Utc::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());
    let month = month.unwrap_or_else(|| today.month());

    let (first, last) = month_window(year, month)?;
    log::debug!("calendar query for user {}: {} .. {}", user, first, last);

    repo.list_scheduled_workouts(user, &DateRange::between(first, last))
        .await
}
