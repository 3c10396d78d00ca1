// ABOUTME: Route handlers for the workout REST API
// ABOUTME: Unscoped workout CRUD addressed by workout id alone
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Workout routes.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use uuid::Uuid;

use crate::database_plugins::SqliteDatabase;
use crate::errors::AppError;
use crate::models::{WorkoutCreateInput, WorkoutUpdateInput};
use crate::services::workouts;
use crate::views::WorkoutView;

/// Workout routes handler
pub struct WorkoutRoutes;

impl WorkoutRoutes {
    /// Create all workout routes
    pub fn routes(database: Arc<SqliteDatabase>) -> Router {
        Router::new()
            .route("/api/workouts", post(Self::handle_create))
            .route("/api/workouts/:id", get(Self::handle_get))
            .route("/api/workouts/:id", put(Self::handle_update))
            .route("/api/workouts/:id", delete(Self::handle_delete))
            .with_state(database)
    }

    /// Handle POST /api/workouts - Create a workout for a student
    async fn handle_create(
        State(database): State<Arc<SqliteDatabase>>,
        Json(input): Json<WorkoutCreateInput>,
    ) -> Result<Response, AppError> {
        let workout = workouts::create_workout(database.as_ref(), input).await?;
        Ok((StatusCode::CREATED, Json(WorkoutView::from(&workout))).into_response())
    }

    /// Handle GET /api/workouts/:id - Fetch one workout with exercises
    async fn handle_get(
        State(database): State<Arc<SqliteDatabase>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let workout = workouts::get_workout(database.as_ref(), id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {id}")))?;
        Ok((StatusCode::OK, Json(WorkoutView::from(&workout))).into_response())
    }

    /// Handle PUT /api/workouts/:id - Update name, description and exercises
    async fn handle_update(
        State(database): State<Arc<SqliteDatabase>>,
        Path(id): Path<Uuid>,
        Json(input): Json<WorkoutUpdateInput>,
    ) -> Result<Response, AppError> {
        let workout = workouts::update_workout(database.as_ref(), id, input).await?;
        Ok((StatusCode::OK, Json(WorkoutView::from(&workout))).into_response())
    }

    /// Handle DELETE /api/workouts/:id - Delete a workout and its exercises
    async fn handle_delete(
        State(database): State<Arc<SqliteDatabase>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        workouts::delete_workout(database.as_ref(), id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
