// ABOUTME: SQLite implementation of the storage abstraction
// ABOUTME: Thin delegation to the raw database layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! SQLite database implementation of [`DatabaseProvider`].

use async_trait::async_trait;
use uuid::Uuid;

use super::DatabaseProvider;
use crate::errors::AppResult;
use crate::models::{Student, Workout};

/// SQLite database implementation
#[derive(Clone)]
pub struct SqliteDatabase {
    /// The underlying database instance
    inner: crate::database::Database,
}

impl SqliteDatabase {
    /// Get a reference to the inner database for advanced operations
    pub fn inner(&self) -> &crate::database::Database {
        &self.inner
    }
}

#[async_trait]
impl DatabaseProvider for SqliteDatabase {
    async fn new(database_url: &str) -> AppResult<Self> {
        let inner = crate::database::Database::new(database_url).await?;
        Ok(Self { inner })
    }

    async fn migrate(&self) -> AppResult<()> {
        self.inner.migrate().await
    }

    async fn student_exists(&self, student_id: Uuid) -> AppResult<bool> {
        self.inner.student_exists(student_id).await
    }

    async fn get_student(&self, student_id: Uuid) -> AppResult<Option<Student>> {
        self.inner.get_student(student_id).await
    }

    async fn get_student_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        self.inner.get_student_by_email(email).await
    }

    async fn get_student_by_national_id(
        &self,
        national_id: &str,
    ) -> AppResult<Option<Student>> {
        self.inner.get_student_by_national_id(national_id).await
    }

    async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.inner.list_students().await
    }

    async fn create_student(&self, student: &Student) -> AppResult<()> {
        self.inner.insert_student(student).await
    }

    async fn update_student(&self, student: &Student) -> AppResult<()> {
        self.inner.update_student(student).await
    }

    async fn delete_student(&self, student_id: Uuid) -> AppResult<()> {
        self.inner.delete_student(student_id).await
    }

    async fn get_workout(&self, workout_id: Uuid) -> AppResult<Option<Workout>> {
        self.inner.get_workout(workout_id).await
    }

    async fn get_workouts_for_student(&self, student_id: Uuid) -> AppResult<Vec<Workout>> {
        self.inner.get_workouts_for_student(student_id).await
    }

    async fn create_workout(&self, workout: &Workout) -> AppResult<()> {
        self.inner.insert_workout(workout).await
    }

    async fn update_workout(&self, workout: &Workout) -> AppResult<()> {
        self.inner.update_workout(workout).await
    }

    async fn delete_workout(&self, workout_id: Uuid) -> AppResult<()> {
        self.inner.delete_workout(workout_id).await
    }
}
