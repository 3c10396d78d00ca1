// ABOUTME: Storage abstraction consumed by the aggregate services
// ABOUTME: Capability trait for student/workout CRUD with cascade guarantees
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Database abstraction layer.
//!
//! The aggregate services depend on this trait, never on a concrete
//! backend. Implementations guarantee that saving an aggregate with its
//! owned children is atomic from the caller's point of view, and that a
//! delete removes owned children; they perform no business validation.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::AppResult;
use crate::models::{Student, Workout};

pub mod sqlite;

pub use sqlite::SqliteDatabase;

/// Core storage abstraction trait
///
/// All database implementations must implement this trait to provide a
/// consistent interface for the service layer.
#[async_trait]
pub trait DatabaseProvider: Send + Sync + Clone {
    /// Create a new database connection
    async fn new(database_url: &str) -> AppResult<Self>
    where
        Self: Sized;

    /// Run database migrations to set up schema
    async fn migrate(&self) -> AppResult<()>;

    // ================================
    // Students
    // ================================

    /// Check whether a student exists
    async fn student_exists(&self, student_id: Uuid) -> AppResult<bool>;

    /// Load a student aggregate (with owned workouts and exercises)
    async fn get_student(&self, student_id: Uuid) -> AppResult<Option<Student>>;

    /// Load a student by email, compared case-insensitively
    async fn get_student_by_email(&self, email: &str) -> AppResult<Option<Student>>;

    /// Load a student by digit-only national ID, exact match
    async fn get_student_by_national_id(&self, national_id: &str)
        -> AppResult<Option<Student>>;

    /// Load every student aggregate
    async fn list_students(&self) -> AppResult<Vec<Student>>;

    /// Persist a new student
    async fn create_student(&self, student: &Student) -> AppResult<()>;

    /// Persist changes to an existing student's identity fields
    async fn update_student(&self, student: &Student) -> AppResult<()>;

    /// Delete a student and, transitively, every owned workout and exercise
    async fn delete_student(&self, student_id: Uuid) -> AppResult<()>;

    // ================================
    // Workouts
    // ================================

    /// Load a workout (with its exercises, insertion-ordered)
    async fn get_workout(&self, workout_id: Uuid) -> AppResult<Option<Workout>>;

    /// Load all workouts owned by a student
    async fn get_workouts_for_student(&self, student_id: Uuid) -> AppResult<Vec<Workout>>;

    /// Persist a new workout together with its exercises, atomically
    async fn create_workout(&self, workout: &Workout) -> AppResult<()>;

    /// Persist a workout, replacing its entire exercise list, atomically
    async fn update_workout(&self, workout: &Workout) -> AppResult<()>;

    /// Delete a workout and every owned exercise
    async fn delete_workout(&self, workout_id: Uuid) -> AppResult<()>;
}
