//! HTTP handlers for the REST API.
//!
//! Each handler resolves the caller through the `AuthUser` extractor and
//! delegates to the service layer for business logic.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use super::auth::AuthUser;
use super::dto::{
    CalendarQuery, CompleteRequest, CompletionResponse, HealthResponse, InfoResponse,
    RangeQuery, RegisterRequest, RegisterResponse,
};
use super::error::AppError;
use super::state::AppState;
use crate::api::{
    DateRange, Exercise, ExerciseId, ScheduleInput, ScheduledWorkoutId, ScheduledWorkoutView,
    TemplateDetail, TemplateId, TemplateInput, WorkoutLogDetail, WorkoutLogId, WorkoutLogInput,
};
use crate::db::repository::{FieldViolation, RepositoryError, UserRepository};
use crate::services;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health & Info
// =============================================================================

/// GET /health
///
/// Health check endpoint to verify the service is running and the store is
/// accessible.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let database = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database,
    }))
}

/// GET /info
pub async fn api_info() -> Json<InfoResponse> {
    Json(InfoResponse {
        name: "RepCurve API".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        description: "API for tracking powerlifting training".to_string(),
    })
}

// =============================================================================
// Auth collaborator seam
// =============================================================================

/// POST /auth/register
///
/// Create a user and issue an opaque token. Credential mechanics live
/// outside this crate; this endpoint only provides the identity the core
/// operations are partitioned by.
pub async fn register(
    State(state): State<AppState>,
    Json(request): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), AppError> {
    let user = state.repository.create_user(&request.username).await?;
    let token = state.tokens.issue(user.id);
    Ok((StatusCode::CREATED, Json(RegisterResponse { user, token })))
}

// =============================================================================
// Exercise catalog
// =============================================================================

/// GET /exercises
pub async fn list_exercises(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
) -> HandlerResult<Vec<Exercise>> {
    let exercises = services::catalog::list_exercises(state.repository.as_ref()).await?;
    Ok(Json(exercises))
}

/// GET /exercises/{exercise_id}
pub async fn get_exercise(
    State(state): State<AppState>,
    AuthUser(_user): AuthUser,
    Path(exercise_id): Path<i64>,
) -> HandlerResult<Exercise> {
    let exercise =
        services::catalog::get_exercise(state.repository.as_ref(), ExerciseId::new(exercise_id))
            .await?;
    Ok(Json(exercise))
}

// =============================================================================
// Workout templates
// =============================================================================

/// POST /workout-templates
pub async fn create_template(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<TemplateInput>,
) -> Result<(StatusCode, Json<TemplateDetail>), AppError> {
    let template =
        services::templates::create_template(state.repository.as_ref(), user, &input).await?;
    Ok((StatusCode::CREATED, Json(template)))
}

/// GET /workout-templates
pub async fn list_templates(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
) -> HandlerResult<Vec<TemplateDetail>> {
    let templates = services::templates::list_templates(state.repository.as_ref(), user).await?;
    Ok(Json(templates))
}

/// GET /workout-templates/{template_id}
pub async fn get_template(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(template_id): Path<i64>,
) -> HandlerResult<TemplateDetail> {
    let template = services::templates::get_template(
        state.repository.as_ref(),
        user,
        TemplateId::new(template_id),
    )
    .await?;
    Ok(Json(template))
}

/// DELETE /workout-templates/{template_id}
pub async fn delete_template(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(template_id): Path<i64>,
) -> Result<StatusCode, AppError> {
    services::templates::delete_template(
        state.repository.as_ref(),
        user,
        TemplateId::new(template_id),
    )
    .await?;
    Ok(StatusCode::NO_CONTENT)
}

// =============================================================================
// Scheduler
// =============================================================================

/// POST /scheduled-workouts
pub async fn create_scheduled_workout(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<ScheduleInput>,
) -> Result<(StatusCode, Json<ScheduledWorkoutView>), AppError> {
    let entry = services::scheduling::schedule(state.repository.as_ref(), user, &input).await?;
    Ok((StatusCode::CREATED, Json(entry)))
}

/// GET /scheduled-workouts?start_date=&end_date=
pub async fn list_scheduled_workouts(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<Vec<ScheduledWorkoutView>> {
    let entries =
        services::scheduling::list(state.repository.as_ref(), user, &query.into_range()).await?;
    Ok(Json(entries))
}

/// GET /scheduled-workouts/{scheduled_workout_id}
pub async fn get_scheduled_workout(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(scheduled_workout_id): Path<i64>,
) -> HandlerResult<ScheduledWorkoutView> {
    let entry = services::scheduling::get(
        state.repository.as_ref(),
        user,
        ScheduledWorkoutId::new(scheduled_workout_id),
    )
    .await?;
    Ok(Json(entry))
}

/// POST /scheduled-workouts/{scheduled_workout_id}/complete
///
/// Mark a scheduled workout as completed and optionally create its workout
/// log in the same operation. The body is optional; when present, its
/// `workout_log` payload is handed to the completion pipeline.
pub async fn complete_scheduled_workout(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(scheduled_workout_id): Path<i64>,
    body: Option<Json<CompleteRequest>>,
) -> HandlerResult<CompletionResponse> {
    let payload = body.and_then(|Json(request)| request.workout_log);
    let outcome = services::completion::complete(
        state.repository.as_ref(),
        user,
        ScheduledWorkoutId::new(scheduled_workout_id),
        payload.as_ref(),
    )
    .await?;
    Ok(Json(outcome.into()))
}

// =============================================================================
// Calendar
// =============================================================================

fn parse_query_int<T: std::str::FromStr>(
    value: Option<&str>,
    field: &str,
    violations: &mut Vec<FieldViolation>,
) -> Option<T> {
    let raw = value?;
    match raw.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(_) => {
            violations.push(FieldViolation::new(field, "Invalid year or month"));
            None
        }
    }
}

/// GET /calendar?year=&month=
///
/// Scheduled workouts for a calendar month; defaults to the current month.
pub async fn calendar_workouts(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<CalendarQuery>,
) -> HandlerResult<Vec<ScheduledWorkoutView>> {
    let mut violations = Vec::new();
    let year: Option<i32> = parse_query_int(query.year.as_deref(), "year", &mut violations);
    let month: Option<u32> = parse_query_int(query.month.as_deref(), "month", &mut violations);
    if !violations.is_empty() {
        return Err(RepositoryError::validation_fields(violations).into());
    }

    let entries =
        services::calendar::list_month(state.repository.as_ref(), user, year, month).await?;
    Ok(Json(entries))
}

// =============================================================================
// Workout logs
// =============================================================================

/// POST /workout-logs
///
/// Create a full workout log aggregate from one nested submission.
pub async fn create_workout_log(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Json(input): Json<WorkoutLogInput>,
) -> Result<(StatusCode, Json<WorkoutLogDetail>), AppError> {
    let log =
        services::workout_logs::create_workout_log(state.repository.as_ref(), user, &input).await?;
    Ok((StatusCode::CREATED, Json(log)))
}

/// GET /workout-logs?start_date=&end_date=
pub async fn list_workout_logs(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Query(query): Query<RangeQuery>,
) -> HandlerResult<Vec<WorkoutLogDetail>> {
    let range: DateRange = query.into_range();
    let logs =
        services::workout_logs::list_workout_logs(state.repository.as_ref(), user, &range).await?;
    Ok(Json(logs))
}

/// GET /workout-logs/{workout_log_id}
pub async fn get_workout_log(
    State(state): State<AppState>,
    AuthUser(user): AuthUser,
    Path(workout_log_id): Path<i64>,
) -> HandlerResult<WorkoutLogDetail> {
    let log = services::workout_logs::get_workout_log(
        state.repository.as_ref(),
        user,
        WorkoutLogId::new(workout_log_id),
    )
    .await?;
    Ok(Json(log))
}
