// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides common database and seed-data helpers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate,
    clippy::module_name_repetitions,
    clippy::uninlined_format_args
)]
//! Shared test utilities for `gymtime_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use anyhow::Result;
use gymtime_server::{
    database_plugins::{DatabaseProvider, SqliteDatabase},
    models::{ExerciseInput, Student, StudentCreateInput, Workout, WorkoutCreateInput},
    services::{students, workouts},
};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Once};
use uuid::Uuid;

static INIT_LOGGER: Once = Once::new();
static SEED_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup (in-memory, migrated)
pub async fn create_test_database() -> Result<Arc<SqliteDatabase>> {
    init_test_logging();
    let database = SqliteDatabase::new("sqlite::memory:").await?;
    database.migrate().await?;
    Ok(Arc::new(database))
}

/// Register a student with unique email and national id
pub async fn seed_student(database: &SqliteDatabase) -> Result<Student> {
    let seq = SEED_COUNTER.fetch_add(1, Ordering::Relaxed);
    let student = students::create_student(
        database,
        StudentCreateInput {
            name: "Ana Souza".into(),
            email: format!("ana.{seq}@example.com"),
            phone: Some("(11) 98888-7777".into()),
            national_id: format!("{seq:011}"),
        },
    )
    .await?;
    Ok(student)
}

/// Register a student with explicit identifiers
pub async fn seed_student_with(
    database: &SqliteDatabase,
    email: &str,
    national_id: &str,
) -> Result<Student> {
    let student = students::create_student(
        database,
        StudentCreateInput {
            name: "Ana Souza".into(),
            email: email.into(),
            phone: None,
            national_id: national_id.into(),
        },
    )
    .await?;
    Ok(student)
}

/// Create a workout with two exercises for the given student
pub async fn seed_workout(database: &SqliteDatabase, student_id: Uuid) -> Result<Workout> {
    let workout = workouts::create_workout(
        database,
        WorkoutCreateInput {
            name: "Treino A".into(),
            description: Some("Upper body".into()),
            student_id,
            exercises: vec![
                ExerciseInput {
                    name: "Supino reto".into(),
                    sets_reps: Some("4x10".into()),
                },
                ExerciseInput {
                    name: "Remada curvada".into(),
                    sets_reps: Some("3x12".into()),
                },
            ],
        },
    )
    .await?;
    Ok(workout)
}
