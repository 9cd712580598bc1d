//! The workout log aggregate: what was actually performed.
//!
//! A `WorkoutLog` owns an ordered list of `ExerciseLog`s, each owning an
//! ordered list of `SetLog`s. The whole subtree is created in one logical
//! operation and is append-only afterward.
//!
//! `workout_name` is denormalized onto the log at creation time so renaming
//! a template never rewrites history. `exercise_name` on the other hand is
//! resolved from the catalog at read time and never stored. The estimated
//! one-rep-max is always recomputed from (weight, reps), never persisted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ExerciseId, ExerciseLogId, ScheduledWorkoutId, SetLogId, UserId, WorkoutLogId};
use crate::models::validation::{FieldViolation, Violations};

/// Epley formula: estimated one-rep-max from a (weight, reps) pair.
pub fn epley_1rm(weight: f64, reps: u32) -> f64 {
    weight * (1.0 + reps as f64 / 30.0)
}

/// Root of the aggregate; one performed workout session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLog {
    pub id: WorkoutLogId,
    pub user: UserId,
    /// Schedule entry that produced this log; `None` for standalone logs.
    pub scheduled_workout: Option<ScheduledWorkoutId>,
    pub workout_name: String,
    pub date: DateTime<Utc>,
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub notes: String,
    pub created_at: DateTime<Utc>,
}

/// One exercise performed within a workout log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLog {
    pub id: ExerciseLogId,
    pub workout_log: WorkoutLogId,
    pub exercise: ExerciseId,
    pub order: u32,
    #[serde(default)]
    pub notes: String,
}

/// One set performed within an exercise log.
///
/// `set_number` is caller-supplied and unique within its exercise log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLog {
    pub id: SetLogId,
    pub exercise_log: ExerciseLogId,
    pub set_number: u32,
    pub reps: u32,
    pub weight: f64,
    /// Rate of perceived exertion, 1-10.
    pub rpe: Option<u8>,
    #[serde(default)]
    pub notes: String,
}

impl SetLog {
    /// Estimated one-rep-max for this set (Epley). Computed, never stored.
    pub fn estimated_1rm(&self) -> f64 {
        epley_1rm(self.weight, self.reps)
    }
}

// ==================== Creation inputs ====================

/// Nested submission for creating a full workout log aggregate.
///
/// `workout_name` and `date` are required; they are declared with defaults
/// here so the completion pipeline can inject them after deserialization,
/// with `validate` rejecting submissions where they are still missing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WorkoutLogInput {
    #[serde(default)]
    pub workout_name: String,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub scheduled_workout: Option<ScheduledWorkoutId>,
    #[serde(default)]
    pub duration_minutes: Option<u32>,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub exercise_logs: Vec<ExerciseLogInput>,
}

/// One exercise entry of a nested submission, with its set entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseLogInput {
    pub exercise: ExerciseId,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub notes: String,
    #[serde(default)]
    pub set_logs: Vec<SetLogInput>,
}

/// One set entry of a nested submission.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SetLogInput {
    pub set_number: u32,
    pub reps: u32,
    pub weight: f64,
    #[serde(default)]
    pub rpe: Option<u8>,
    #[serde(default)]
    pub notes: String,
}

impl WorkoutLogInput {
    /// Field-level validation of the whole submission.
    ///
    /// Checks every level before any persistence is attempted and reports
    /// all violations at once. Referential checks (exercise ids) and
    /// uniqueness checks (set numbers) are the store's responsibility.
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Violations::new();

        if self.workout_name.trim().is_empty() {
            violations.push("workout_name", "This field is required.");
        }
        if self.date.is_none() {
            violations.push("date", "This field is required.");
        }

        for (i, exercise_log) in self.exercise_logs.iter().enumerate() {
            for (j, set_log) in exercise_log.set_logs.iter().enumerate() {
                let path = format!("exercise_logs[{}].set_logs[{}]", i, j);
                if let Some(rpe) = set_log.rpe {
                    if !(1..=10).contains(&rpe) {
                        violations.push(format!("{}.rpe", path), "RPE must be between 1 and 10.");
                    }
                }
                if !set_log.weight.is_finite() || set_log.weight < 0.0 {
                    violations.push(
                        format!("{}.weight", path),
                        "Weight must be a non-negative number.",
                    );
                }
            }
        }

        violations.into_result()
    }
}

/// Set log enriched with its computed estimate for serialization.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SetLogView {
    #[serde(flatten)]
    pub set: SetLog,
    pub estimated_1rm: f64,
}

impl From<SetLog> for SetLogView {
    fn from(set: SetLog) -> Self {
        let estimated_1rm = set.estimated_1rm();
        Self { set, estimated_1rm }
    }
}

/// Exercise log enriched with catalog data and its ordered sets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExerciseLogDetail {
    #[serde(flatten)]
    pub entry: ExerciseLog,
    pub exercise_name: String,
    pub set_logs: Vec<SetLogView>,
}

/// The fully populated aggregate as returned by every read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutLogDetail {
    #[serde(flatten)]
    pub log: WorkoutLog,
    pub exercise_logs: Vec<ExerciseLogDetail>,
}
