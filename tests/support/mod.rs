//! Shared fixtures for integration tests.
#![allow(dead_code)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use repcurve::api::*;
use repcurve::db::repositories::LocalRepository;
use repcurve::db::repository::{CatalogRepository, TemplateRepository, UserRepository};
use repcurve::services;

pub fn d(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

pub fn ts(year: i32, month: u32, day: u32, hour: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, 0, 0).unwrap()
}

/// Repository with the default exercise catalog seeded.
pub async fn seeded_repo() -> LocalRepository {
    let repo = LocalRepository::new();
    services::seed_default_catalog(&repo).await.unwrap();
    repo
}

pub async fn create_user(repo: &LocalRepository, username: &str) -> UserId {
    repo.create_user(username).await.unwrap().id
}

/// Look up a seeded catalog entry by name.
pub async fn exercise_id(repo: &LocalRepository, name: &str) -> ExerciseId {
    repo.list_exercises()
        .await
        .unwrap()
        .into_iter()
        .find(|e| e.name == name)
        .unwrap_or_else(|| panic!("exercise '{}' not seeded", name))
        .id
}

/// A two-exercise template ("Back Squat" then "Bench Press") for `user`.
pub async fn squat_bench_template(
    repo: &LocalRepository,
    user: UserId,
    name: &str,
) -> TemplateDetail {
    let squat = exercise_id(repo, "Back Squat").await;
    let bench = exercise_id(repo, "Bench Press").await;

    let input = TemplateInput {
        name: name.to_string(),
        description: String::new(),
        exercises: vec![
            TemplateExerciseInput {
                exercise: squat,
                target_sets: 3,
                target_reps: 5,
                target_weight: Some(140.0),
                rest_seconds: 180,
                order: 1,
                notes: String::new(),
            },
            TemplateExerciseInput {
                exercise: bench,
                target_sets: 3,
                target_reps: 5,
                target_weight: Some(100.0),
                rest_seconds: 180,
                order: 2,
                notes: String::new(),
            },
        ],
    };

    repo.create_template(user, &input).await.unwrap()
}

pub fn set_input(set_number: u32, reps: u32, weight: f64) -> SetLogInput {
    SetLogInput {
        set_number,
        reps,
        weight,
        rpe: None,
        notes: String::new(),
    }
}

pub fn exercise_log_input(
    exercise: ExerciseId,
    order: u32,
    set_logs: Vec<SetLogInput>,
) -> ExerciseLogInput {
    ExerciseLogInput {
        exercise,
        order,
        notes: String::new(),
        set_logs,
    }
}

pub fn log_input(
    workout_name: &str,
    date: DateTime<Utc>,
    exercise_logs: Vec<ExerciseLogInput>,
) -> WorkoutLogInput {
    WorkoutLogInput {
        workout_name: workout_name.to_string(),
        date: Some(date),
        scheduled_workout: None,
        duration_minutes: None,
        notes: String::new(),
        exercise_logs,
    }
}
