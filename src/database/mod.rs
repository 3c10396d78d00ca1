// ABOUTME: SQLite storage layer for the gym roster
// ABOUTME: Owns the connection pool and dispatches schema migrations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! # Database Management
//!
//! This module provides the raw SQLite storage for students, workouts and
//! exercises. Aggregate saves run inside a single transaction and deletes
//! cascade to owned children explicitly; nothing here performs business
//! validation.

mod students;
mod workouts;

use sqlx::sqlite::SqlitePoolOptions;
use sqlx::{Pool, Sqlite, SqlitePool};

use crate::errors::{AppError, AppResult};

/// Database manager for aggregate storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    pub async fn new(database_url: &str) -> AppResult<Self> {
        let pool = if database_url.contains(":memory:") {
            // An in-memory database exists per connection; more than one
            // pool member would each see its own empty database.
            SqlitePoolOptions::new()
                .max_connections(1)
                .connect(database_url)
                .await
        } else if database_url.starts_with("sqlite:") {
            // Ensure SQLite creates the database file if it doesn't exist
            SqlitePool::connect(&format!("{database_url}?mode=rwc")).await
        } else {
            SqlitePool::connect(database_url).await
        }
        .map_err(|e| AppError::database("Failed to connect to database").with_source(e))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Get a reference to the database pool for advanced operations
    pub fn pool(&self) -> &Pool<Sqlite> {
        &self.pool
    }

    /// Run database migrations
    pub async fn migrate(&self) -> AppResult<()> {
        self.migrate_students().await?;
        self.migrate_workouts().await?;
        Ok(())
    }
}

/// Wrap an unexpected driver error opaquely, keeping the raw text in the
/// source chain only
pub(crate) fn storage_error(context: &'static str) -> impl FnOnce(sqlx::Error) -> AppError {
    move |e| AppError::database(context).with_source(e)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    pub(crate) async fn create_test_db() -> AppResult<Database> {
        // In-memory database - each connection gets its own isolated instance
        Database::new("sqlite::memory:").await
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let db = create_test_db().await.unwrap();
        db.migrate().await.unwrap();
        db.migrate().await.unwrap();
    }
}
