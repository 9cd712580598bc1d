//! # RepCurve Rust Backend
//!
//! Backend for tracking structured strength-training activity: reusable
//! workout templates, calendar scheduling, and nested performance logs. The
//! service exposes a REST API via Axum and persists through a swappable
//! repository layer.
//!
//! ## Features
//!
//! - **Exercise Catalog**: Fixed vocabulary of powerlifting exercises
//! - **Workout Templates**: User-owned, ordered exercise plans with targets
//! - **Scheduler**: Templates bound to calendar dates with completion state
//! - **Workout Logs**: Atomically created three-level logs
//!   (workout -> exercises -> sets) with computed estimated one-rep-max
//! - **Completion Pipeline**: Completing a schedule entry with optional log
//!   creation in one transactional step
//! - **Calendar Query**: Month-bounded schedule views
//! - **HTTP API**: RESTful endpoints for clients
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: Identifier newtypes and the consolidated domain type surface
//! - [`models`]: Domain entities, creation inputs, and input validation
//! - [`db`]: Repository pattern and persistence layer
//! - [`services`]: Business logic and orchestration
//! - [`http`]: Axum-based HTTP server and request handlers

// Allow large error types - RepositoryError contains rich context for debugging
#![allow(clippy::result_large_err)]

pub mod api;

pub mod db;
pub mod models;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
