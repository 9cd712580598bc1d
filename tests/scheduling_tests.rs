//! Tests for the scheduler: uniqueness of the (user, date, template)
//! triple, ownership scoping, and range-filtered listings.

mod support;

use repcurve::api::*;
use repcurve::db::repository::{RepositoryError, ScheduleRepository};
use support::*;

fn schedule_input(template: TemplateId, date: chrono::NaiveDate) -> ScheduleInput {
    ScheduleInput {
        template,
        scheduled_date: date,
        notes: String::new(),
    }
}

#[tokio::test]
async fn schedules_a_template_onto_a_date() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let template = squat_bench_template(&repo, user, "Heavy Day").await;

    let view = repo
        .create_scheduled_workout(user, &schedule_input(template.template.id, d(2024, 3, 10)))
        .await
        .unwrap();

    assert_eq!(view.entry.scheduled_date, d(2024, 3, 10));
    assert!(!view.entry.is_completed);
    assert_eq!(view.template_name, "Heavy Day");
}

#[tokio::test]
async fn duplicate_triple_conflicts_without_mutation() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let template = squat_bench_template(&repo, user, "Heavy Day").await;
    let input = schedule_input(template.template.id, d(2024, 3, 10));

    repo.create_scheduled_workout(user, &input).await.unwrap();
    let err = repo.create_scheduled_workout(user, &input).await.unwrap_err();

    assert!(matches!(err, RepositoryError::Conflict { .. }));
    assert_eq!(repo.scheduled_workout_count(), 1);
}

#[tokio::test]
async fn same_template_on_other_dates_and_other_templates_coexist() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let heavy = squat_bench_template(&repo, user, "Heavy Day").await;
    let light = squat_bench_template(&repo, user, "Light Day").await;

    repo.create_scheduled_workout(user, &schedule_input(heavy.template.id, d(2024, 3, 10)))
        .await
        .unwrap();
    // Differs by date only.
    repo.create_scheduled_workout(user, &schedule_input(heavy.template.id, d(2024, 3, 12)))
        .await
        .unwrap();
    // Differs by template only.
    repo.create_scheduled_workout(user, &schedule_input(light.template.id, d(2024, 3, 10)))
        .await
        .unwrap();

    assert_eq!(repo.scheduled_workout_count(), 3);
}

#[tokio::test]
async fn different_users_schedule_independently() {
    let repo = seeded_repo().await;
    let alice = create_user(&repo, "alice").await;
    let bob = create_user(&repo, "bob").await;
    let alice_template = squat_bench_template(&repo, alice, "Heavy Day").await;
    let bob_template = squat_bench_template(&repo, bob, "Heavy Day").await;

    repo.create_scheduled_workout(alice, &schedule_input(alice_template.template.id, d(2024, 3, 10)))
        .await
        .unwrap();
    repo.create_scheduled_workout(bob, &schedule_input(bob_template.template.id, d(2024, 3, 10)))
        .await
        .unwrap();

    assert_eq!(
        repo.list_scheduled_workouts(alice, &DateRange::all())
            .await
            .unwrap()
            .len(),
        1
    );
}

#[tokio::test]
async fn scheduling_another_users_template_reads_as_not_found() {
    let repo = seeded_repo().await;
    let alice = create_user(&repo, "alice").await;
    let bob = create_user(&repo, "bob").await;
    let alice_template = squat_bench_template(&repo, alice, "Heavy Day").await;

    let err = repo
        .create_scheduled_workout(bob, &schedule_input(alice_template.template.id, d(2024, 3, 10)))
        .await
        .unwrap_err();

    // Indistinguishable from a nonexistent template.
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn foreign_entries_read_as_not_found() {
    let repo = seeded_repo().await;
    let alice = create_user(&repo, "alice").await;
    let bob = create_user(&repo, "bob").await;
    let template = squat_bench_template(&repo, alice, "Heavy Day").await;

    let view = repo
        .create_scheduled_workout(alice, &schedule_input(template.template.id, d(2024, 3, 10)))
        .await
        .unwrap();

    let err = repo
        .get_scheduled_workout(bob, view.entry.id)
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));

    let err = repo
        .get_scheduled_workout(alice, ScheduledWorkoutId::new(9999))
        .await
        .unwrap_err();
    assert!(matches!(err, RepositoryError::NotFound { .. }));
}

#[tokio::test]
async fn listing_is_range_filtered_and_date_descending() {
    let repo = seeded_repo().await;
    let user = create_user(&repo, "lifter").await;
    let template = squat_bench_template(&repo, user, "Heavy Day").await;

    for day in [5, 20, 12] {
        repo.create_scheduled_workout(user, &schedule_input(template.template.id, d(2024, 7, day)))
            .await
            .unwrap();
    }

    let all = repo
        .list_scheduled_workouts(user, &DateRange::all())
        .await
        .unwrap();
    let days: Vec<u32> = all
        .iter()
        .map(|v| chrono::Datelike::day(&v.entry.scheduled_date))
        .collect();
    assert_eq!(days, vec![20, 12, 5]);

    // Bounds are inclusive on both ends.
    let bounded = repo
        .list_scheduled_workouts(user, &DateRange::between(d(2024, 7, 5), d(2024, 7, 12)))
        .await
        .unwrap();
    let days: Vec<u32> = bounded
        .iter()
        .map(|v| chrono::Datelike::day(&v.entry.scheduled_date))
        .collect();
    assert_eq!(days, vec![12, 5]);
}
