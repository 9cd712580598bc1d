//! Exercise catalog: the fixed vocabulary of exercises available to
//! templates and logs.
//!
//! Catalog rows are read-mostly reference data. They are never deleted while
//! referenced, and names are treated as unique in practice (seeding is
//! idempotent by name) without a hard constraint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::api::ExerciseId;

/// Lift category an exercise belongs to.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExerciseCategory {
    Squat,
    Bench,
    Deadlift,
    Accessory,
}

impl ExerciseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Squat => "squat",
            Self::Bench => "bench",
            Self::Deadlift => "deadlift",
            Self::Accessory => "accessory",
        }
    }
}

impl fmt::Display for ExerciseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExerciseCategory {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "squat" => Ok(Self::Squat),
            "bench" => Ok(Self::Bench),
            "deadlift" => Ok(Self::Deadlift),
            "accessory" => Ok(Self::Accessory),
            other => Err(format!("Unknown exercise category: {}", other)),
        }
    }
}

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub id: ExerciseId,
    pub name: String,
    pub category: ExerciseCategory,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
}

/// Input for inserting a catalog entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewExercise {
    pub name: String,
    pub category: ExerciseCategory,
    #[serde(default)]
    pub description: String,
}

impl NewExercise {
    pub fn new(
        name: impl Into<String>,
        category: ExerciseCategory,
        description: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
        }
    }
}

/// The default powerlifting catalog seeded on first startup.
pub fn default_catalog() -> Vec<NewExercise> {
    use ExerciseCategory::*;

    vec![
        // Squat variations
        NewExercise::new("Back Squat", Squat, "Standard barbell back squat"),
        NewExercise::new("Front Squat", Squat, "Barbell front squat"),
        NewExercise::new("Goblet Squat", Squat, "Dumbbell goblet squat"),
        NewExercise::new("Bulgarian Split Squat", Squat, "Single leg split squat"),
        // Bench press variations
        NewExercise::new("Bench Press", Bench, "Standard barbell bench press"),
        NewExercise::new("Incline Bench Press", Bench, "Incline barbell bench press"),
        NewExercise::new("Dumbbell Bench Press", Bench, "Dumbbell bench press"),
        NewExercise::new("Close Grip Bench Press", Bench, "Close grip barbell bench press"),
        // Deadlift variations
        NewExercise::new("Deadlift", Deadlift, "Standard barbell deadlift"),
        NewExercise::new("Romanian Deadlift", Deadlift, "Romanian deadlift"),
        NewExercise::new("Sumo Deadlift", Deadlift, "Sumo stance deadlift"),
        NewExercise::new("Trap Bar Deadlift", Deadlift, "Hex/trap bar deadlift"),
        // Accessory exercises
        NewExercise::new("Overhead Press", Accessory, "Standing barbell overhead press"),
        NewExercise::new("Pull-ups", Accessory, "Bodyweight pull-ups"),
        NewExercise::new("Dips", Accessory, "Bodyweight or weighted dips"),
        NewExercise::new("Barbell Rows", Accessory, "Bent over barbell rows"),
        NewExercise::new("Lateral Raises", Accessory, "Dumbbell lateral raises"),
        NewExercise::new("Bicep Curls", Accessory, "Barbell or dumbbell bicep curls"),
        NewExercise::new("Tricep Extensions", Accessory, "Overhead tricep extensions"),
        NewExercise::new("Leg Press", Accessory, "Machine leg press"),
        NewExercise::new("Leg Curls", Accessory, "Hamstring leg curls"),
        NewExercise::new("Calf Raises", Accessory, "Standing or seated calf raises"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_round_trips_through_str() {
        for cat in [
            ExerciseCategory::Squat,
            ExerciseCategory::Bench,
            ExerciseCategory::Deadlift,
            ExerciseCategory::Accessory,
        ] {
            assert_eq!(cat.as_str().parse::<ExerciseCategory>().unwrap(), cat);
        }
        assert!("cardio".parse::<ExerciseCategory>().is_err());
    }

    #[test]
    fn category_serializes_lowercase() {
        let json = serde_json::to_string(&ExerciseCategory::Deadlift).unwrap();
        assert_eq!(json, "\"deadlift\"");
    }

    #[test]
    fn default_catalog_has_unique_names() {
        let catalog = default_catalog();
        let mut names: Vec<&str> = catalog.iter().map(|e| e.name.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), catalog.len());
    }
}
