//! Workout templates: user-owned, reusable workout definitions.
//!
//! A template is an ordered list of catalog exercises with target set/rep
//! schemes. The through-relation (`TemplateExercise`) is unique per
//! (template, exercise) pair; display order is the caller-supplied `order`
//! value with the row id as a deterministic tie-break.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::api::{ExerciseId, TemplateExerciseId, TemplateId, UserId};
use crate::models::catalog::ExerciseCategory;

/// Default rest period between sets, in seconds.
pub const DEFAULT_REST_SECONDS: u32 = 180;

fn default_rest_seconds() -> u32 {
    DEFAULT_REST_SECONDS
}

/// A reusable workout definition owned by one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutTemplate {
    pub id: TemplateId,
    pub user: UserId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// One exercise entry inside a template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExercise {
    pub id: TemplateExerciseId,
    pub template: TemplateId,
    pub exercise: ExerciseId,
    pub target_sets: u32,
    pub target_reps: u32,
    pub target_weight: Option<f64>,
    pub rest_seconds: u32,
    pub order: u32,
    #[serde(default)]
    pub notes: String,
}

/// Input for creating a template, including its ordered exercise entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateInput {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub exercises: Vec<TemplateExerciseInput>,
}

/// Input for one exercise entry of a template.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateExerciseInput {
    pub exercise: ExerciseId,
    pub target_sets: u32,
    pub target_reps: u32,
    #[serde(default)]
    pub target_weight: Option<f64>,
    #[serde(default = "default_rest_seconds")]
    pub rest_seconds: u32,
    #[serde(default)]
    pub order: u32,
    #[serde(default)]
    pub notes: String,
}

/// Template exercise entry enriched with catalog data at read time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateExerciseDetail {
    #[serde(flatten)]
    pub entry: TemplateExercise,
    pub exercise_name: String,
    pub exercise_category: ExerciseCategory,
}

/// A template with its ordered exercise entries.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateDetail {
    #[serde(flatten)]
    pub template: WorkoutTemplate,
    pub template_exercises: Vec<TemplateExerciseDetail>,
}
