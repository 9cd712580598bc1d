//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/info", get(handlers::api_info))
        // Auth collaborator seam
        .route("/auth/register", post(handlers::register))
        // Exercise catalog
        .route("/exercises", get(handlers::list_exercises))
        .route("/exercises/{exercise_id}", get(handlers::get_exercise))
        // Workout templates
        .route(
            "/workout-templates",
            get(handlers::list_templates).post(handlers::create_template),
        )
        .route(
            "/workout-templates/{template_id}",
            get(handlers::get_template).delete(handlers::delete_template),
        )
        // Scheduler
        .route(
            "/scheduled-workouts",
            get(handlers::list_scheduled_workouts).post(handlers::create_scheduled_workout),
        )
        .route(
            "/scheduled-workouts/{scheduled_workout_id}",
            get(handlers::get_scheduled_workout),
        )
        .route(
            "/scheduled-workouts/{scheduled_workout_id}/complete",
            post(handlers::complete_scheduled_workout),
        )
        // Calendar
        .route("/calendar", get(handlers::calendar_workouts))
        // Workout logs
        .route(
            "/workout-logs",
            get(handlers::list_workout_logs).post(handlers::create_workout_log),
        )
        .route("/workout-logs/{workout_log_id}", get(handlers::get_workout_log))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
