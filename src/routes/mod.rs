// ABOUTME: HTTP transport adapter: Axum routers over the aggregate services
// ABOUTME: Handlers bind input, call one service, and let AppError map the status
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! REST routes.
//!
//! The handlers contain no business logic: each one deserializes its input,
//! calls a single service function, and projects the result through
//! [`views`](crate::views). Failure kinds become HTTP statuses through
//! `AppError`'s `IntoResponse` implementation.

use std::sync::Arc;

use axum::Router;

use crate::database_plugins::SqliteDatabase;

/// Health check routes
pub mod health;

/// Student REST endpoints, including student-scoped workout endpoints
pub mod students;

/// Workout REST endpoints
pub mod workouts;

/// Build the full application router
pub fn router(database: Arc<SqliteDatabase>) -> Router {
    Router::new()
        .merge(health::HealthRoutes::routes())
        .merge(students::StudentRoutes::routes(database.clone()))
        .merge(workouts::WorkoutRoutes::routes(database))
}
