//! Tests for the workout log aggregate: nested creation, ordering,
//! atomicity, and the computed one-rep-max estimate.

mod support;

use repcurve::api::*;
use repcurve::db::repository::{RepositoryError, WorkoutLogRepository};
use support::*;

// =========================================================
// Nested creation
// =========================================================

#[tokio::test]
async fn creates_all_three_levels_in_submitted_order() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let squat = exercise_id(&repo, "Back Squat").await;
    let bench = exercise_id(&repo, "Bench Press").await;

    let input = log_input(
        "Heavy Day",
        ts(2024, 3, 10, 18),
        vec![
            exercise_log_input(
                squat,
                1,
                vec![
                    set_input(1, 5, 140.0),
                    set_input(2, 5, 145.0),
                    set_input(3, 3, 150.0),
                ],
            ),
            exercise_log_input(bench, 2, vec![set_input(1, 5, 100.0), set_input(2, 5, 102.5)]),
        ],
    );

    let detail = repo.create_workout_log(user, &input).await.unwrap();

    assert_eq!(detail.log.workout_name, "Heavy Day");
    assert_eq!(detail.log.user, user);
    assert!(detail.log.scheduled_workout.is_none());
    assert_eq!(detail.exercise_logs.len(), 2);
    assert_eq!(detail.exercise_logs[0].entry.exercise, squat);
    assert_eq!(detail.exercise_logs[1].entry.exercise, bench);
    assert_eq!(detail.exercise_logs[0].set_logs.len(), 3);
    assert_eq!(detail.exercise_logs[1].set_logs.len(), 2);

    assert_eq!(repo.workout_log_count(), 1);
    assert_eq!(repo.exercise_log_count(), 2);
    assert_eq!(repo.set_log_count(), 5);
}

#[tokio::test]
async fn set_numbers_are_caller_supplied_not_renumbered() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let squat = exercise_id(&repo, "Back Squat").await;

    // Submitted out of order and with a gap; the store must keep the
    // numbers as given, merely sorting reads by set_number.
    let input = log_input(
        "Gappy",
        ts(2024, 3, 10, 18),
        vec![exercise_log_input(
            squat,
            1,
            vec![set_input(4, 2, 150.0), set_input(1, 8, 120.0)],
        )],
    );

    let detail = repo.create_workout_log(user, &input).await.unwrap();
    let sets = &detail.exercise_logs[0].set_logs;
    let numbers: Vec<u32> = sets.iter().map(|s| s.set.set_number).collect();
    assert_eq!(numbers, vec![1, 4]);
    // Each set keeps the data it was submitted with.
    assert_eq!(sets[0].set.reps, 8);
    assert_eq!(sets[1].set.reps, 2);
}

#[tokio::test]
async fn read_resolves_exercise_name_from_catalog() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let deadlift = exercise_id(&repo, "Deadlift").await;

    let input = log_input(
        "Pull Day",
        ts(2024, 5, 1, 7),
        vec![exercise_log_input(deadlift, 1, vec![set_input(1, 3, 180.0)])],
    );
    let created = repo.create_workout_log(user, &input).await.unwrap();

    let fetched = repo.get_workout_log(user, created.log.id).await.unwrap();
    assert_eq!(fetched.exercise_logs[0].exercise_name, "Deadlift");
    assert_eq!(fetched, created);
}

// =========================================================
// Estimated one-rep-max
// =========================================================

#[tokio::test]
async fn estimated_1rm_is_recomputed_from_weight_and_reps() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let bench = exercise_id(&repo, "Bench Press").await;

    let input = log_input(
        "Bench",
        ts(2024, 6, 2, 9),
        vec![exercise_log_input(
            bench,
            1,
            vec![set_input(1, 5, 100.0), set_input(2, 1, 120.0), set_input(3, 30, 60.0)],
        )],
    );
    let detail = repo.create_workout_log(user, &input).await.unwrap();

    for view in &detail.exercise_logs[0].set_logs {
        assert_eq!(
            view.estimated_1rm,
            view.set.weight * (1.0 + view.set.reps as f64 / 30.0)
        );
        assert_eq!(view.estimated_1rm, epley_1rm(view.set.weight, view.set.reps));
    }
    // 30 reps doubles the estimate under Epley.
    assert_eq!(detail.exercise_logs[0].set_logs[2].estimated_1rm, 120.0);
}

// =========================================================
// Atomicity
// =========================================================

#[tokio::test]
async fn duplicate_set_number_fails_with_conflict_and_leaves_no_rows() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let squat = exercise_id(&repo, "Back Squat").await;
    let bench = exercise_id(&repo, "Bench Press").await;

    let input = log_input(
        "Broken",
        ts(2024, 3, 10, 18),
        vec![
            exercise_log_input(squat, 1, vec![set_input(1, 5, 140.0), set_input(2, 5, 140.0)]),
            // Duplicate set_number in the second exercise log.
            exercise_log_input(bench, 2, vec![set_input(1, 5, 100.0), set_input(1, 5, 100.0)]),
        ],
    );

    let err = repo.create_workout_log(user, &input).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Conflict { .. }));

    // No fragment of the aggregate survives.
    assert_eq!(repo.workout_log_count(), 0);
    assert_eq!(repo.exercise_log_count(), 0);
    assert_eq!(repo.set_log_count(), 0);
}

#[tokio::test]
async fn unknown_exercise_reference_fails_validation_and_leaves_no_rows() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let squat = exercise_id(&repo, "Back Squat").await;

    let input = log_input(
        "Ghost",
        ts(2024, 3, 10, 18),
        vec![
            exercise_log_input(squat, 1, vec![set_input(1, 5, 140.0)]),
            exercise_log_input(ExerciseId::new(9999), 2, vec![set_input(1, 5, 60.0)]),
        ],
    );

    let err = repo.create_workout_log(user, &input).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Validation { .. }));
    assert_eq!(err.violations()[0].field, "exercise_logs[1].exercise");

    assert_eq!(repo.workout_log_count(), 0);
    assert_eq!(repo.exercise_log_count(), 0);
    assert_eq!(repo.set_log_count(), 0);
}

#[tokio::test]
async fn missing_required_fields_are_reported_together() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;

    let err = repo
        .create_workout_log(user, &WorkoutLogInput::default())
        .await
        .unwrap_err();

    let fields: Vec<&str> = err.violations().iter().map(|v| v.field.as_str()).collect();
    assert!(fields.contains(&"workout_name"));
    assert!(fields.contains(&"date"));
    assert_eq!(repo.workout_log_count(), 0);
}

#[tokio::test]
async fn rpe_outside_range_is_rejected() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let squat = exercise_id(&repo, "Back Squat").await;

    let mut input = log_input(
        "RPE",
        ts(2024, 3, 10, 18),
        vec![exercise_log_input(squat, 1, vec![set_input(1, 5, 140.0)])],
    );
    input.exercise_logs[0].set_logs[0].rpe = Some(11);

    let err = repo.create_workout_log(user, &input).await.unwrap_err();
    assert!(matches!(err, RepositoryError::Validation { .. }));
    assert_eq!(repo.set_log_count(), 0);
}

// =========================================================
// Reads and scoping
// =========================================================

#[tokio::test]
async fn logs_are_invisible_to_other_users() {
    let repo = seeded_repo().await;
    let alice = create_user(&repo, "alice").await;
    let bob = create_user(&repo, "bob").await;
    let squat = exercise_id(&repo, "Back Squat").await;

    let input = log_input(
        "Private",
        ts(2024, 3, 10, 18),
        vec![exercise_log_input(squat, 1, vec![set_input(1, 5, 140.0)])],
    );
    let created = repo.create_workout_log(alice, &input).await.unwrap();

    let err = repo.get_workout_log(bob, created.log.id).await.unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
    assert!(repo
        .list_workout_logs(bob, &DateRange::all())
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn listing_filters_by_date_and_orders_newest_first() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let squat = exercise_id(&repo, "Back Squat").await;

    for (day, name) in [(1, "first"), (15, "mid"), (28, "last")] {
        let input = log_input(
            name,
            ts(2024, 4, day, 10),
            vec![exercise_log_input(squat, 1, vec![set_input(1, 5, 100.0)])],
        );
        repo.create_workout_log(user, &input).await.unwrap();
    }

    let all = repo.list_workout_logs(user, &DateRange::all()).await.unwrap();
    let names: Vec<&str> = all.iter().map(|l| l.log.workout_name.as_str()).collect();
    assert_eq!(names, vec!["last", "mid", "first"]);

    let mid_only = repo
        .list_workout_logs(user, &DateRange::between(d(2024, 4, 10), d(2024, 4, 20)))
        .await
        .unwrap();
    assert_eq!(mid_only.len(), 1);
    assert_eq!(mid_only[0].log.workout_name, "mid");
}
