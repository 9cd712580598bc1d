//! In-memory local repository implementation.
//!
//! This module provides a local implementation of all repository traits
//! suitable for unit testing and local development. All data is stored in
//! memory using HashMap structures behind a single `RwLock`, providing fast,
//! deterministic, and isolated execution.
//!
//! The single write lock doubles as the transactional scope required by the
//! nested aggregate creation: every check runs before the first row is
//! inserted, and a writer's rows become visible to readers only when the
//! lock is released, so readers never observe a partially created
//! aggregate.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::RwLock;
use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use crate::api::*;
use crate::db::repository::*;
use crate::models::validation::Violations;

/// In-memory local repository.
///
/// Cloning is cheap and clones share the same underlying store, matching the
/// shared-database semantics of the production backend.
#[derive(Clone, Default)]
pub struct LocalRepository {
    data: Arc<RwLock<LocalData>>,
}

struct LocalData {
    users: HashMap<UserId, User>,
    exercises: HashMap<ExerciseId, Exercise>,
    templates: HashMap<TemplateId, WorkoutTemplate>,
    template_exercises: HashMap<TemplateExerciseId, TemplateExercise>,
    scheduled_workouts: HashMap<ScheduledWorkoutId, ScheduledWorkout>,
    workout_logs: HashMap<WorkoutLogId, WorkoutLog>,
    exercise_logs: HashMap<ExerciseLogId, ExerciseLog>,
    set_logs: HashMap<SetLogId, SetLog>,

    // ID counters
    next_user_id: i64,
    next_exercise_id: i64,
    next_template_id: i64,
    next_template_exercise_id: i64,
    next_scheduled_workout_id: i64,
    next_workout_log_id: i64,
    next_exercise_log_id: i64,
    next_set_log_id: i64,

    // Connection health
    is_healthy: bool,
}

impl Default for LocalData {
    fn default() -> Self {
        Self {
            users: HashMap::new(),
            exercises: HashMap::new(),
            templates: HashMap::new(),
            template_exercises: HashMap::new(),
            scheduled_workouts: HashMap::new(),
            workout_logs: HashMap::new(),
            exercise_logs: HashMap::new(),
            set_logs: HashMap::new(),
            next_user_id: 1,
            next_exercise_id: 1,
            next_template_id: 1,
            next_template_exercise_id: 1,
            next_scheduled_workout_id: 1,
            next_workout_log_id: 1,
            next_exercise_log_id: 1,
            next_set_log_id: 1,
            is_healthy: true,
        }
    }
}

fn next_id(counter: &mut i64) -> i64 {
    let id = *counter;
    *counter += 1;
    id
}

fn ensure_healthy(data: &LocalData) -> RepositoryResult<()> {
    if !data.is_healthy {
        return Err(RepositoryError::connection("Store is not healthy"));
    }
    Ok(())
}

fn ensure_user(data: &LocalData, user: UserId) -> RepositoryResult<()> {
    if !data.users.contains_key(&user) {
        return Err(RepositoryError::not_found_with_context(
            format!("user {} not found", user),
            ErrorContext::default().with_entity("user").with_entity_id(user),
        ));
    }
    Ok(())
}

impl LocalRepository {
    /// Create a new empty local repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the health status for testing connection failures.
    pub fn set_healthy(&self, healthy: bool) {
        self.data.write().is_healthy = healthy;
    }

    /// Clear all data from the repository.
    pub fn clear(&self) {
        let mut data = self.data.write();
        let is_healthy = data.is_healthy;
        *data = LocalData {
            is_healthy,
            ..Default::default()
        };
    }

    /// Number of catalog entries stored.
    pub fn exercise_count(&self) -> usize {
        self.data.read().exercises.len()
    }

    /// Number of workout log rows stored.
    pub fn workout_log_count(&self) -> usize {
        self.data.read().workout_logs.len()
    }

    /// Number of exercise log rows stored.
    pub fn exercise_log_count(&self) -> usize {
        self.data.read().exercise_logs.len()
    }

    /// Number of set log rows stored.
    pub fn set_log_count(&self) -> usize {
        self.data.read().set_logs.len()
    }

    /// Number of schedule entries stored.
    pub fn scheduled_workout_count(&self) -> usize {
        self.data.read().scheduled_workouts.len()
    }
}

// ==================== Read-side assembly ====================

fn template_detail(data: &LocalData, template: &WorkoutTemplate) -> RepositoryResult<TemplateDetail> {
    let mut entries: Vec<&TemplateExercise> = data
        .template_exercises
        .values()
        .filter(|e| e.template == template.id)
        .collect();
    // Caller-supplied order is a display hint; the row id breaks ties
    // deterministically.
    entries.sort_by_key(|e| (e.order, e.id));

    let mut details = Vec::with_capacity(entries.len());
    for entry in entries {
        let exercise = data.exercises.get(&entry.exercise).ok_or_else(|| {
            RepositoryError::internal(format!(
                "catalog entry {} missing for template entry {}",
                entry.exercise, entry.id
            ))
        })?;
        details.push(TemplateExerciseDetail {
            entry: entry.clone(),
            exercise_name: exercise.name.clone(),
            exercise_category: exercise.category,
        });
    }

    Ok(TemplateDetail {
        template: template.clone(),
        template_exercises: details,
    })
}

fn schedule_view(data: &LocalData, entry: &ScheduledWorkout) -> RepositoryResult<ScheduledWorkoutView> {
    let template = data.templates.get(&entry.template).ok_or_else(|| {
        RepositoryError::internal(format!(
            "template {} missing for scheduled workout {}",
            entry.template, entry.id
        ))
    })?;
    Ok(ScheduledWorkoutView {
        entry: entry.clone(),
        template_name: template.name.clone(),
    })
}

fn workout_log_detail(data: &LocalData, log: &WorkoutLog) -> RepositoryResult<WorkoutLogDetail> {
    let mut entries: Vec<&ExerciseLog> = data
        .exercise_logs
        .values()
        .filter(|e| e.workout_log == log.id)
        .collect();
    entries.sort_by_key(|e| (e.order, e.id));

    let mut exercise_logs = Vec::with_capacity(entries.len());
    for entry in entries {
        let exercise = data.exercises.get(&entry.exercise).ok_or_else(|| {
            RepositoryError::internal(format!(
                "catalog entry {} missing for exercise log {}",
                entry.exercise, entry.id
            ))
        })?;

        let mut sets: Vec<&SetLog> = data
            .set_logs
            .values()
            .filter(|s| s.exercise_log == entry.id)
            .collect();
        sets.sort_by_key(|s| (s.set_number, s.id));

        exercise_logs.push(ExerciseLogDetail {
            entry: entry.clone(),
            // Resolved from the catalog at read time, never denormalized.
            exercise_name: exercise.name.clone(),
            set_logs: sets.into_iter().map(|s| SetLogView::from(s.clone())).collect(),
        });
    }

    Ok(WorkoutLogDetail {
        log: log.clone(),
        exercise_logs,
    })
}

// ==================== Write-side staging ====================

/// Create a full workout log aggregate inside an already-held write lock.
///
/// Every check (field validation, catalog references, set-number
/// uniqueness) runs before the first insertion, so a failure leaves the
/// store untouched.
fn stage_workout_log(
    data: &mut LocalData,
    user: UserId,
    input: &WorkoutLogInput,
    created_at: DateTime<Utc>,
) -> RepositoryResult<WorkoutLogId> {
    input
        .validate()
        .map_err(RepositoryError::validation_fields)?;

    let mut violations = Violations::new();
    for (i, exercise_log) in input.exercise_logs.iter().enumerate() {
        if !data.exercises.contains_key(&exercise_log.exercise) {
            violations.push(
                format!("exercise_logs[{}].exercise", i),
                format!("Unknown exercise id {}.", exercise_log.exercise),
            );
        }
    }
    violations
        .into_result()
        .map_err(RepositoryError::validation_fields)?;

    for (i, exercise_log) in input.exercise_logs.iter().enumerate() {
        let mut seen = HashSet::new();
        for set_log in &exercise_log.set_logs {
            if !seen.insert(set_log.set_number) {
                return Err(RepositoryError::conflict_with_context(
                    format!(
                        "duplicate set_number {} in exercise_logs[{}]",
                        set_log.set_number, i
                    ),
                    ErrorContext::new("create_workout_log").with_entity("set_log"),
                ));
            }
        }
    }

    // All checks passed; commit the three levels.
    // `date` is guaranteed present by validate() above.
    let date = input
        .date
        .ok_or_else(|| RepositoryError::internal("validated input lost its date"))?;

    let log_id = WorkoutLogId::new(next_id(&mut data.next_workout_log_id));
    data.workout_logs.insert(
        log_id,
        WorkoutLog {
            id: log_id,
            user,
            scheduled_workout: input.scheduled_workout,
            workout_name: input.workout_name.clone(),
            date,
            duration_minutes: input.duration_minutes,
            notes: input.notes.clone(),
            created_at,
        },
    );

    for exercise_log in &input.exercise_logs {
        let entry_id = ExerciseLogId::new(next_id(&mut data.next_exercise_log_id));
        data.exercise_logs.insert(
            entry_id,
            ExerciseLog {
                id: entry_id,
                workout_log: log_id,
                exercise: exercise_log.exercise,
                order: exercise_log.order,
                notes: exercise_log.notes.clone(),
            },
        );

        for set_log in &exercise_log.set_logs {
            let set_id = SetLogId::new(next_id(&mut data.next_set_log_id));
            data.set_logs.insert(
                set_id,
                SetLog {
                    id: set_id,
                    exercise_log: entry_id,
                    set_number: set_log.set_number,
                    reps: set_log.reps,
                    weight: set_log.weight,
                    rpe: set_log.rpe,
                    notes: set_log.notes.clone(),
                },
            );
        }
    }

    Ok(log_id)
}

// ==================== Trait implementations ====================

#[async_trait]
impl UserRepository for LocalRepository {
    async fn health_check(&self) -> RepositoryResult<bool> {
        Ok(self.data.read().is_healthy)
    }

    async fn create_user(&self, username: &str) -> RepositoryResult<User> {
        let mut data = self.data.write();
        ensure_healthy(&data)?;

        if username.trim().is_empty() {
            return Err(RepositoryError::validation_fields(vec![FieldViolation::new(
                "username",
                "This field is required.",
            )]));
        }
        if data.users.values().any(|u| u.username == username) {
            return Err(RepositoryError::conflict(format!(
                "username '{}' is already taken",
                username
            )));
        }

        let id = UserId::new(next_id(&mut data.next_user_id));
        let user = User {
            id,
            username: username.to_string(),
        };
        data.users.insert(id, user.clone());
        Ok(user)
    }

    async fn get_user(&self, user: UserId) -> RepositoryResult<User> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        data.users
            .get(&user)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("user {} not found", user)))
    }
}

#[async_trait]
impl CatalogRepository for LocalRepository {
    async fn ensure_exercise(&self, exercise: &NewExercise) -> RepositoryResult<(Exercise, bool)> {
        let mut data = self.data.write();
        ensure_healthy(&data)?;

        if let Some(existing) = data.exercises.values().find(|e| e.name == exercise.name) {
            return Ok((existing.clone(), false));
        }

        let id = ExerciseId::new(next_id(&mut data.next_exercise_id));
        let row = Exercise {
            id,
            name: exercise.name.clone(),
            category: exercise.category,
            description: exercise.description.clone(),
            created_at: Utc::now(),
        };
        data.exercises.insert(id, row.clone());
        Ok((row, true))
    }

    async fn list_exercises(&self) -> RepositoryResult<Vec<Exercise>> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        let mut exercises: Vec<Exercise> = data.exercises.values().cloned().collect();
        exercises.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(exercises)
    }

    async fn get_exercise(&self, id: ExerciseId) -> RepositoryResult<Exercise> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        data.exercises
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::not_found(format!("exercise {} not found", id)))
    }
}

#[async_trait]
impl TemplateRepository for LocalRepository {
    async fn create_template(
        &self,
        user: UserId,
        input: &TemplateInput,
    ) -> RepositoryResult<TemplateDetail> {
        let mut data = self.data.write();
        ensure_healthy(&data)?;
        ensure_user(&data, user)?;

        let mut violations = Violations::new();
        if input.name.trim().is_empty() {
            violations.push("name", "This field is required.");
        }
        for (i, entry) in input.exercises.iter().enumerate() {
            if !data.exercises.contains_key(&entry.exercise) {
                violations.push(
                    format!("exercises[{}].exercise", i),
                    format!("Unknown exercise id {}.", entry.exercise),
                );
            }
        }
        violations
            .into_result()
            .map_err(RepositoryError::validation_fields)?;

        let mut seen = HashSet::new();
        for entry in &input.exercises {
            if !seen.insert(entry.exercise) {
                return Err(RepositoryError::conflict_with_context(
                    format!("exercise {} appears twice in the template", entry.exercise),
                    ErrorContext::new("create_template").with_entity("template_exercise"),
                ));
            }
        }

        let id = TemplateId::new(next_id(&mut data.next_template_id));
        let template = WorkoutTemplate {
            id,
            user,
            name: input.name.clone(),
            description: input.description.clone(),
            created_at: Utc::now(),
        };
        data.templates.insert(id, template.clone());

        for entry in &input.exercises {
            let entry_id = TemplateExerciseId::new(next_id(&mut data.next_template_exercise_id));
            data.template_exercises.insert(
                entry_id,
                TemplateExercise {
                    id: entry_id,
                    template: id,
                    exercise: entry.exercise,
                    target_sets: entry.target_sets,
                    target_reps: entry.target_reps,
                    target_weight: entry.target_weight,
                    rest_seconds: entry.rest_seconds,
                    order: entry.order,
                    notes: entry.notes.clone(),
                },
            );
        }

        template_detail(&data, &template)
    }

    async fn list_templates(&self, user: UserId) -> RepositoryResult<Vec<TemplateDetail>> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        ensure_user(&data, user)?;

        let mut templates: Vec<&WorkoutTemplate> =
            data.templates.values().filter(|t| t.user == user).collect();
        templates.sort_by(|a, b| b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)));

        templates
            .into_iter()
            .map(|t| template_detail(&data, t))
            .collect()
    }

    async fn get_template(&self, user: UserId, id: TemplateId) -> RepositoryResult<TemplateDetail> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        match data.templates.get(&id) {
            Some(template) if template.user == user => template_detail(&data, template),
            // Absent and foreign-owned are indistinguishable to the caller.
            _ => Err(RepositoryError::not_found(format!(
                "workout template {} not found",
                id
            ))),
        }
    }

    async fn delete_template(&self, user: UserId, id: TemplateId) -> RepositoryResult<()> {
        let mut data = self.data.write();
        ensure_healthy(&data)?;

        match data.templates.get(&id) {
            Some(template) if template.user == user => {}
            _ => {
                return Err(RepositoryError::not_found(format!(
                    "workout template {} not found",
                    id
                )))
            }
        }

        data.templates.remove(&id);
        data.template_exercises.retain(|_, e| e.template != id);

        // Cascade to schedule entries; logs keep their history with the
        // schedule link cleared.
        let removed: HashSet<ScheduledWorkoutId> = data
            .scheduled_workouts
            .values()
            .filter(|s| s.template == id)
            .map(|s| s.id)
            .collect();
        data.scheduled_workouts.retain(|_, s| s.template != id);
        for log in data.workout_logs.values_mut() {
            if let Some(sw) = log.scheduled_workout {
                if removed.contains(&sw) {
                    log.scheduled_workout = None;
                }
            }
        }

        Ok(())
    }
}

#[async_trait]
impl ScheduleRepository for LocalRepository {
    async fn create_scheduled_workout(
        &self,
        user: UserId,
        input: &ScheduleInput,
    ) -> RepositoryResult<ScheduledWorkoutView> {
        let mut data = self.data.write();
        ensure_healthy(&data)?;
        ensure_user(&data, user)?;

        match data.templates.get(&input.template) {
            Some(template) if template.user == user => {}
            _ => {
                return Err(RepositoryError::not_found(format!(
                    "workout template {} not found",
                    input.template
                )))
            }
        }

        let duplicate = data.scheduled_workouts.values().any(|s| {
            s.user == user && s.scheduled_date == input.scheduled_date && s.template == input.template
        });
        if duplicate {
            return Err(RepositoryError::conflict_with_context(
                format!(
                    "template {} is already scheduled on {}",
                    input.template, input.scheduled_date
                ),
                ErrorContext::new("create_scheduled_workout").with_entity("scheduled_workout"),
            ));
        }

        let id = ScheduledWorkoutId::new(next_id(&mut data.next_scheduled_workout_id));
        let entry = ScheduledWorkout {
            id,
            user,
            template: input.template,
            scheduled_date: input.scheduled_date,
            notes: input.notes.clone(),
            is_completed: false,
            created_at: Utc::now(),
        };
        data.scheduled_workouts.insert(id, entry.clone());

        schedule_view(&data, &entry)
    }

    async fn list_scheduled_workouts(
        &self,
        user: UserId,
        range: &DateRange,
    ) -> RepositoryResult<Vec<ScheduledWorkoutView>> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        ensure_user(&data, user)?;

        let mut entries: Vec<&ScheduledWorkout> = data
            .scheduled_workouts
            .values()
            .filter(|s| s.user == user && range.contains(s.scheduled_date))
            .collect();
        entries.sort_by(|a, b| {
            b.scheduled_date
                .cmp(&a.scheduled_date)
                .then(a.id.cmp(&b.id))
        });

        entries.into_iter().map(|s| schedule_view(&data, s)).collect()
    }

    async fn get_scheduled_workout(
        &self,
        user: UserId,
        id: ScheduledWorkoutId,
    ) -> RepositoryResult<ScheduledWorkoutView> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        match data.scheduled_workouts.get(&id) {
            Some(entry) if entry.user == user => schedule_view(&data, entry),
            _ => Err(RepositoryError::not_found(format!(
                "scheduled workout {} not found",
                id
            ))),
        }
    }

    async fn complete_scheduled_workout(
        &self,
        user: UserId,
        id: ScheduledWorkoutId,
        payload: Option<&WorkoutLogInput>,
        completed_at: DateTime<Utc>,
    ) -> RepositoryResult<CompletionOutcome> {
        let mut data = self.data.write();
        ensure_healthy(&data)?;

        let template_id = match data.scheduled_workouts.get(&id) {
            Some(entry) if entry.user == user => entry.template,
            _ => {
                return Err(RepositoryError::not_found(format!(
                    "scheduled workout {} not found",
                    id
                )))
            }
        };
        let template_name = data
            .templates
            .get(&template_id)
            .map(|t| t.name.clone())
            .ok_or_else(|| {
                RepositoryError::internal(format!(
                    "template {} missing for scheduled workout {}",
                    template_id, id
                ))
            })?;

        // Stage the log (if any) before touching the flag, so a rejected
        // payload leaves the entry untouched.
        let log_id = match payload {
            Some(payload) => {
                let mut input = payload.clone();
                // The caller cannot rename, backdate, or relink a log
                // produced through completion.
                input.scheduled_workout = Some(id);
                input.workout_name = template_name;
                input.date = Some(completed_at);
                Some(stage_workout_log(&mut data, user, &input, completed_at)?)
            }
            None => None,
        };

        if let Some(entry) = data.scheduled_workouts.get_mut(&id) {
            entry.is_completed = true;
        }

        let entry = data
            .scheduled_workouts
            .get(&id)
            .cloned()
            .ok_or_else(|| RepositoryError::internal("completed entry vanished mid-commit"))?;
        let scheduled_workout = schedule_view(&data, &entry)?;
        let workout_log = match log_id {
            Some(log_id) => {
                let log = data
                    .workout_logs
                    .get(&log_id)
                    .cloned()
                    .ok_or_else(|| RepositoryError::internal("staged log vanished mid-commit"))?;
                Some(workout_log_detail(&data, &log)?)
            }
            None => None,
        };

        Ok(CompletionOutcome {
            scheduled_workout,
            workout_log,
        })
    }
}

#[async_trait]
impl WorkoutLogRepository for LocalRepository {
    async fn create_workout_log(
        &self,
        user: UserId,
        input: &WorkoutLogInput,
    ) -> RepositoryResult<WorkoutLogDetail> {
        let mut data = self.data.write();
        ensure_healthy(&data)?;
        ensure_user(&data, user)?;

        let log_id = stage_workout_log(&mut data, user, input, Utc::now())?;
        let log = data
            .workout_logs
            .get(&log_id)
            .cloned()
            .ok_or_else(|| RepositoryError::internal("staged log vanished mid-commit"))?;
        workout_log_detail(&data, &log)
    }

    async fn list_workout_logs(
        &self,
        user: UserId,
        range: &DateRange,
    ) -> RepositoryResult<Vec<WorkoutLogDetail>> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        ensure_user(&data, user)?;

        let mut logs: Vec<&WorkoutLog> = data
            .workout_logs
            .values()
            .filter(|l| l.user == user && range.contains(l.date.date_naive()))
            .collect();
        logs.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));

        logs.into_iter().map(|l| workout_log_detail(&data, l)).collect()
    }

    async fn get_workout_log(
        &self,
        user: UserId,
        id: WorkoutLogId,
    ) -> RepositoryResult<WorkoutLogDetail> {
        let data = self.data.read();
        ensure_healthy(&data)?;
        match data.workout_logs.get(&id) {
            Some(log) if log.user == user => workout_log_detail(&data, log),
            _ => Err(RepositoryError::not_found(format!(
                "workout log {} not found",
                id
            ))),
        }
    }
}
