//! Scheduled workouts: a template bound to a calendar date for a user.
//!
//! The (user, scheduled_date, template) triple is unique; completion flips
//! `is_completed` exactly once per logical completion and the entry remains
//! afterward as a historical record.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ScheduledWorkoutId, TemplateId, UserId};

/// A schedule entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWorkout {
    pub id: ScheduledWorkoutId,
    pub user: UserId,
    pub template: TemplateId,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
    pub is_completed: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for scheduling a template onto a date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduleInput {
    pub template: TemplateId,
    pub scheduled_date: NaiveDate,
    #[serde(default)]
    pub notes: String,
}

/// Schedule entry enriched with the template name at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduledWorkoutView {
    #[serde(flatten)]
    pub entry: ScheduledWorkout,
    pub template_name: String,
}

/// Inclusive date-range filter for listings. Either bound may be open.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct DateRange {
    pub start: Option<NaiveDate>,
    pub end: Option<NaiveDate>,
}

impl DateRange {
    /// Unbounded range matching every date.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn new(start: Option<NaiveDate>, end: Option<NaiveDate>) -> Self {
        Self { start, end }
    }

    /// Closed range, both endpoints inclusive.
    pub fn between(start: NaiveDate, end: NaiveDate) -> Self {
        Self {
            start: Some(start),
            end: Some(end),
        }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        if let Some(start) = self.start {
            if date < start {
                return false;
            }
        }
        if let Some(end) = self.end {
            if date > end {
                return false;
            }
        }
        true
    }
}
