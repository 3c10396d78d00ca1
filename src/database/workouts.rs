// ABOUTME: Workout and exercise table operations with atomic aggregate saves
// ABOUTME: Exercise lists are written wholesale; deletes cascade explicitly
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

use chrono::{DateTime, Utc};
use sqlx::Row;
use uuid::Uuid;

use super::{storage_error, Database};
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, Workout};

impl Database {
    /// Create the workouts and exercises tables
    pub(super) async fn migrate_workouts(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS workouts (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                description TEXT,
                created_at DATETIME NOT NULL,
                updated_at DATETIME NOT NULL,
                student_id TEXT NOT NULL REFERENCES students(id)
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(storage_error("Failed to create workouts table"))?;

        // position preserves insertion order; there is no user-facing rank
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS exercises (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                sets_reps TEXT,
                workout_id TEXT NOT NULL REFERENCES workouts(id),
                position INTEGER NOT NULL
            )
            ",
        )
        .execute(self.pool())
        .await
        .map_err(storage_error("Failed to create exercises table"))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_workouts_student_id ON workouts(student_id)",
        )
        .execute(self.pool())
        .await
        .map_err(storage_error("Failed to create workouts student index"))?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_exercises_workout_id ON exercises(workout_id)",
        )
        .execute(self.pool())
        .await
        .map_err(storage_error("Failed to create exercises workout index"))?;

        Ok(())
    }

    /// Insert a workout together with its exercises, atomically
    pub async fn insert_workout(&self, workout: &Workout) -> AppResult<()> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        sqlx::query(
            r"
            INSERT INTO workouts (id, name, description, created_at, updated_at, student_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            ",
        )
        .bind(workout.id.to_string())
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(workout.created_at)
        .bind(workout.updated_at)
        .bind(workout.student_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(storage_error("Failed to insert workout"))?;

        insert_exercises(&mut tx, workout).await?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit workout insert"))?;
        Ok(())
    }

    /// Update a workout and replace its entire exercise list, atomically.
    ///
    /// The previous exercise rows are removed; whatever the model carries is
    /// the new complete list. There is no merge of individual exercises.
    pub async fn update_workout(&self, workout: &Workout) -> AppResult<()> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        let result = sqlx::query(
            r"
            UPDATE workouts SET
                name = $2,
                description = $3,
                updated_at = $4
            WHERE id = $1
            ",
        )
        .bind(workout.id.to_string())
        .bind(&workout.name)
        .bind(&workout.description)
        .bind(workout.updated_at)
        .execute(&mut *tx)
        .await
        .map_err(storage_error("Failed to update workout"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {}", workout.id)));
        }

        sqlx::query("DELETE FROM exercises WHERE workout_id = $1")
            .bind(workout.id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error("Failed to clear workout exercises"))?;

        insert_exercises(&mut tx, workout).await?;

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit workout update"))?;
        Ok(())
    }

    /// Load a workout with its exercises in insertion order
    pub async fn get_workout(&self, workout_id: Uuid) -> AppResult<Option<Workout>> {
        let row = sqlx::query("SELECT * FROM workouts WHERE id = $1")
            .bind(workout_id.to_string())
            .fetch_optional(self.pool())
            .await
            .map_err(storage_error("Failed to load workout"))?;

        match row {
            Some(row) => {
                let mut workout = row_to_workout(&row)?;
                workout.exercises = self.get_exercises_for_workout(workout.id).await?;
                Ok(Some(workout))
            }
            None => Ok(None),
        }
    }

    /// Load all workouts owned by a student, each with its exercises
    pub async fn get_workouts_for_student(&self, student_id: Uuid) -> AppResult<Vec<Workout>> {
        let rows = sqlx::query(
            "SELECT * FROM workouts WHERE student_id = $1 ORDER BY created_at, id",
        )
        .bind(student_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(storage_error("Failed to list workouts"))?;

        let mut workouts = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut workout = row_to_workout(row)?;
            workout.exercises = self.get_exercises_for_workout(workout.id).await?;
            workouts.push(workout);
        }
        Ok(workouts)
    }

    /// Delete a workout and its exercises, atomically
    pub async fn delete_workout(&self, workout_id: Uuid) -> AppResult<()> {
        let mut tx = self
            .pool()
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        sqlx::query("DELETE FROM exercises WHERE workout_id = $1")
            .bind(workout_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error("Failed to delete workout exercises"))?;

        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(workout_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error("Failed to delete workout"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Workout {workout_id}")));
        }

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit workout deletion"))?;
        Ok(())
    }

    async fn get_exercises_for_workout(&self, workout_id: Uuid) -> AppResult<Vec<Exercise>> {
        let rows = sqlx::query(
            "SELECT * FROM exercises WHERE workout_id = $1 ORDER BY position",
        )
        .bind(workout_id.to_string())
        .fetch_all(self.pool())
        .await
        .map_err(storage_error("Failed to list exercises"))?;

        rows.iter().map(row_to_exercise).collect()
    }
}

/// Write a workout's exercises inside an open transaction
async fn insert_exercises(
    tx: &mut sqlx::Transaction<'_, sqlx::Sqlite>,
    workout: &Workout,
) -> AppResult<()> {
    for (position, exercise) in workout.exercises.iter().enumerate() {
        sqlx::query(
            r"
            INSERT INTO exercises (id, name, sets_reps, workout_id, position)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(exercise.id.to_string())
        .bind(&exercise.name)
        .bind(&exercise.sets_reps)
        .bind(workout.id.to_string())
        .bind(position as i64)
        .execute(&mut **tx)
        .await
        .map_err(storage_error("Failed to insert exercise"))?;
    }
    Ok(())
}

fn row_to_workout(row: &sqlx::sqlite::SqliteRow) -> AppResult<Workout> {
    let id = parse_id(row, "id")?;
    let student_id = parse_id(row, "student_id")?;

    let created_at: DateTime<Utc> = row
        .try_get("created_at")
        .map_err(storage_error("Failed to read workout created_at"))?;
    let updated_at: DateTime<Utc> = row
        .try_get("updated_at")
        .map_err(storage_error("Failed to read workout updated_at"))?;

    Ok(Workout {
        id,
        name: row
            .try_get("name")
            .map_err(storage_error("Failed to read workout name"))?,
        description: row
            .try_get("description")
            .map_err(storage_error("Failed to read workout description"))?,
        created_at,
        updated_at,
        student_id,
        exercises: Vec::new(),
    })
}

fn row_to_exercise(row: &sqlx::sqlite::SqliteRow) -> AppResult<Exercise> {
    Ok(Exercise {
        id: parse_id(row, "id")?,
        name: row
            .try_get("name")
            .map_err(storage_error("Failed to read exercise name"))?,
        sets_reps: row
            .try_get("sets_reps")
            .map_err(storage_error("Failed to read exercise sets_reps"))?,
        workout_id: parse_id(row, "workout_id")?,
    })
}

fn parse_id(row: &sqlx::sqlite::SqliteRow, column: &str) -> AppResult<Uuid> {
    let raw: String = row
        .try_get(column)
        .map_err(|e| AppError::database("Failed to read id column").with_source(e))?;
    Uuid::parse_str(&raw)
        .map_err(|e| AppError::database("Corrupt id in storage").with_source(e))
}
