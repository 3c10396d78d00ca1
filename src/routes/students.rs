// ABOUTME: Route handlers for the student REST API
// ABOUTME: Covers student CRUD and the student-scoped workout endpoints
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Student routes.
//!
//! The student-scoped workout endpoints (`/api/students/:id/workouts/...`)
//! re-assert ownership on the server for every mutating call; a prior
//! scoped read is never trusted.

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use uuid::Uuid;

use crate::database_plugins::SqliteDatabase;
use crate::errors::AppError;
use crate::models::{StudentCreateInput, StudentUpdateInput, WorkoutUpdateInput};
use crate::services::{students, workouts};
use crate::views::{StudentView, WorkoutView};

/// Student routes handler
pub struct StudentRoutes;

impl StudentRoutes {
    /// Create all student routes
    pub fn routes(database: Arc<SqliteDatabase>) -> Router {
        Router::new()
            .route("/api/students", post(Self::handle_create))
            .route("/api/students", get(Self::handle_list))
            .route("/api/students/by-email/:email", get(Self::handle_get_by_email))
            .route("/api/students/:id", get(Self::handle_get))
            .route("/api/students/:id", put(Self::handle_update))
            .route("/api/students/:id", delete(Self::handle_delete))
            .route("/api/students/:id/workouts", get(Self::handle_list_workouts))
            .route(
                "/api/students/:id/workouts/:workout_id",
                get(Self::handle_get_workout_scoped),
            )
            .route(
                "/api/students/:id/workouts/:workout_id",
                put(Self::handle_update_workout_scoped),
            )
            .route(
                "/api/students/:id/workouts/:workout_id",
                delete(Self::handle_delete_workout_scoped),
            )
            .with_state(database)
    }

    /// Handle POST /api/students - Register a student
    async fn handle_create(
        State(database): State<Arc<SqliteDatabase>>,
        Json(input): Json<StudentCreateInput>,
    ) -> Result<Response, AppError> {
        let student = students::create_student(database.as_ref(), input).await?;
        let view = StudentView::from(&student);
        Ok((StatusCode::CREATED, Json(view)).into_response())
    }

    /// Handle GET /api/students - List all students
    async fn handle_list(
        State(database): State<Arc<SqliteDatabase>>,
    ) -> Result<Response, AppError> {
        let students = students::list_students(database.as_ref()).await?;
        let views: Vec<StudentView> = students.iter().map(StudentView::from).collect();
        Ok((StatusCode::OK, Json(views)).into_response())
    }

    /// Handle GET /api/students/:id - Fetch one student with workouts
    async fn handle_get(
        State(database): State<Arc<SqliteDatabase>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let student = students::get_student(database.as_ref(), id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Student {id}")))?;
        Ok((StatusCode::OK, Json(StudentView::from(&student))).into_response())
    }

    /// Handle GET /api/students/by-email/:email
    async fn handle_get_by_email(
        State(database): State<Arc<SqliteDatabase>>,
        Path(email): Path<String>,
    ) -> Result<Response, AppError> {
        let student = students::get_student_by_email(database.as_ref(), &email)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Student with email '{email}'")))?;
        Ok((StatusCode::OK, Json(StudentView::from(&student))).into_response())
    }

    /// Handle PUT /api/students/:id - Partial update
    async fn handle_update(
        State(database): State<Arc<SqliteDatabase>>,
        Path(id): Path<Uuid>,
        Json(input): Json<StudentUpdateInput>,
    ) -> Result<Response, AppError> {
        let student = students::update_student(database.as_ref(), id, input).await?;
        Ok((StatusCode::OK, Json(StudentView::from(&student))).into_response())
    }

    /// Handle DELETE /api/students/:id - Cascade delete
    async fn handle_delete(
        State(database): State<Arc<SqliteDatabase>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        students::delete_student(database.as_ref(), id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }

    /// Handle GET /api/students/:id/workouts - List a student's workouts
    async fn handle_list_workouts(
        State(database): State<Arc<SqliteDatabase>>,
        Path(id): Path<Uuid>,
    ) -> Result<Response, AppError> {
        let workouts = workouts::list_workouts_of_student(database.as_ref(), id).await?;
        let views: Vec<WorkoutView> = workouts.iter().map(WorkoutView::from).collect();
        Ok((StatusCode::OK, Json(views)).into_response())
    }

    /// Handle GET /api/students/:id/workouts/:workout_id - Ownership-scoped fetch
    async fn handle_get_workout_scoped(
        State(database): State<Arc<SqliteDatabase>>,
        Path((id, workout_id)): Path<(Uuid, Uuid)>,
    ) -> Result<Response, AppError> {
        let workout = workouts::get_workout_scoped_to_student(database.as_ref(), workout_id, id)
            .await?
            .ok_or_else(|| AppError::not_found(format!("Workout {workout_id}")))?;
        Ok((StatusCode::OK, Json(WorkoutView::from(&workout))).into_response())
    }

    /// Handle PUT /api/students/:id/workouts/:workout_id - Scoped update
    async fn handle_update_workout_scoped(
        State(database): State<Arc<SqliteDatabase>>,
        Path((id, workout_id)): Path<(Uuid, Uuid)>,
        Json(input): Json<WorkoutUpdateInput>,
    ) -> Result<Response, AppError> {
        let workout =
            workouts::update_workout_scoped(database.as_ref(), workout_id, id, input).await?;
        Ok((StatusCode::OK, Json(WorkoutView::from(&workout))).into_response())
    }

    /// Handle DELETE /api/students/:id/workouts/:workout_id - Scoped delete
    async fn handle_delete_workout_scoped(
        State(database): State<Arc<SqliteDatabase>>,
        Path((id, workout_id)): Path<(Uuid, Uuid)>,
    ) -> Result<Response, AppError> {
        workouts::delete_workout_scoped(database.as_ref(), workout_id, id).await?;
        Ok(StatusCode::NO_CONTENT.into_response())
    }
}
