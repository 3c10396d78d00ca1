// ABOUTME: Student table operations: schema, row CRUD, aggregate loads
// ABOUTME: Translates unique-constraint races into the duplicate failure kinds
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

use sqlx::Row;
use uuid::Uuid;

use super::{storage_error, Database};
use crate::errors::{AppError, AppResult};
use crate::models::Student;

impl Database {
    /// Create the students table and its uniqueness indexes
    pub(super) async fn migrate_students(&self) -> AppResult<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS students (
                id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                email TEXT NOT NULL,
                phone TEXT,
                national_id TEXT NOT NULL,
                created_at DATETIME DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(storage_error("Failed to create students table"))?;

        // Case-insensitive email uniqueness lives in the schema so that two
        // racing creates still cannot both commit (the service-level guard
        // runs first but holds no lock).
        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_students_email_ci ON students(LOWER(email))",
        )
        .execute(&self.pool)
        .await
        .map_err(storage_error("Failed to create students email index"))?;

        sqlx::query(
            "CREATE UNIQUE INDEX IF NOT EXISTS idx_students_national_id ON students(national_id)",
        )
        .execute(&self.pool)
        .await
        .map_err(storage_error("Failed to create students national_id index"))?;

        Ok(())
    }

    /// Insert a new student row
    pub async fn insert_student(&self, student: &Student) -> AppResult<()> {
        sqlx::query(
            r"
            INSERT INTO students (id, name, email, phone, national_id)
            VALUES ($1, $2, $3, $4, $5)
            ",
        )
        .bind(student.id.to_string())
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(&student.national_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_student_unique_violation(&e, student).unwrap_or_else(|| {
            AppError::database("Failed to insert student").with_source(e)
        }))?;

        Ok(())
    }

    /// Update an existing student row's identity fields
    pub async fn update_student(&self, student: &Student) -> AppResult<()> {
        let result = sqlx::query(
            r"
            UPDATE students SET
                name = $2,
                email = $3,
                phone = $4,
                national_id = $5
            WHERE id = $1
            ",
        )
        .bind(student.id.to_string())
        .bind(&student.name)
        .bind(&student.email)
        .bind(&student.phone)
        .bind(&student.national_id)
        .execute(&self.pool)
        .await
        .map_err(|e| map_student_unique_violation(&e, student).unwrap_or_else(|| {
            AppError::database("Failed to update student").with_source(e)
        }))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Student {}", student.id)));
        }
        Ok(())
    }

    /// Check whether a student row exists
    pub async fn student_exists(&self, student_id: Uuid) -> AppResult<bool> {
        let row = sqlx::query("SELECT 1 FROM students WHERE id = $1")
            .bind(student_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to check student existence"))?;
        Ok(row.is_some())
    }

    /// Load a student aggregate with its workouts and exercises
    pub async fn get_student(&self, student_id: Uuid) -> AppResult<Option<Student>> {
        let row = sqlx::query("SELECT * FROM students WHERE id = $1")
            .bind(student_id.to_string())
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to load student"))?;

        match row {
            Some(row) => {
                let mut student = row_to_student(&row)?;
                student.workouts = self.get_workouts_for_student(student.id).await?;
                Ok(Some(student))
            }
            None => Ok(None),
        }
    }

    /// Load a student aggregate by email, compared case-insensitively
    pub async fn get_student_by_email(&self, email: &str) -> AppResult<Option<Student>> {
        let row = sqlx::query("SELECT * FROM students WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to load student by email"))?;

        match row {
            Some(row) => {
                let mut student = row_to_student(&row)?;
                student.workouts = self.get_workouts_for_student(student.id).await?;
                Ok(Some(student))
            }
            None => Ok(None),
        }
    }

    /// Load a student aggregate by digit-only national ID, exact match
    pub async fn get_student_by_national_id(&self, national_id: &str) -> AppResult<Option<Student>> {
        let row = sqlx::query("SELECT * FROM students WHERE national_id = $1")
            .bind(national_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(storage_error("Failed to load student by national ID"))?;

        match row {
            Some(row) => {
                let mut student = row_to_student(&row)?;
                student.workouts = self.get_workouts_for_student(student.id).await?;
                Ok(Some(student))
            }
            None => Ok(None),
        }
    }

    /// Load every student aggregate
    pub async fn list_students(&self) -> AppResult<Vec<Student>> {
        let rows = sqlx::query("SELECT * FROM students")
            .fetch_all(&self.pool)
            .await
            .map_err(storage_error("Failed to list students"))?;

        let mut students = Vec::with_capacity(rows.len());
        for row in &rows {
            let mut student = row_to_student(row)?;
            student.workouts = self.get_workouts_for_student(student.id).await?;
            students.push(student);
        }
        Ok(students)
    }

    /// Delete a student and everything it owns, in one transaction.
    ///
    /// The cascade is explicit: exercises of owned workouts first, then the
    /// workouts, then the student row itself.
    pub async fn delete_student(&self, student_id: Uuid) -> AppResult<()> {
        let mut tx = self
            .pool
            .begin()
            .await
            .map_err(storage_error("Failed to begin transaction"))?;

        sqlx::query(
            r"
            DELETE FROM exercises WHERE workout_id IN
                (SELECT id FROM workouts WHERE student_id = $1)
            ",
        )
        .bind(student_id.to_string())
        .execute(&mut *tx)
        .await
        .map_err(storage_error("Failed to delete student's exercises"))?;

        sqlx::query("DELETE FROM workouts WHERE student_id = $1")
            .bind(student_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error("Failed to delete student's workouts"))?;

        let result = sqlx::query("DELETE FROM students WHERE id = $1")
            .bind(student_id.to_string())
            .execute(&mut *tx)
            .await
            .map_err(storage_error("Failed to delete student"))?;

        if result.rows_affected() == 0 {
            return Err(AppError::not_found(format!("Student {student_id}")));
        }

        tx.commit()
            .await
            .map_err(storage_error("Failed to commit student deletion"))?;
        Ok(())
    }
}

/// Map a student row to the model, workouts left empty for the caller
fn row_to_student(row: &sqlx::sqlite::SqliteRow) -> AppResult<Student> {
    let id_str: String = row
        .try_get("id")
        .map_err(storage_error("Failed to read student id"))?;
    let id = Uuid::parse_str(&id_str)
        .map_err(|e| AppError::database("Corrupt student id in storage").with_source(e))?;

    Ok(Student {
        id,
        name: row
            .try_get("name")
            .map_err(storage_error("Failed to read student name"))?,
        email: row
            .try_get("email")
            .map_err(storage_error("Failed to read student email"))?,
        phone: row
            .try_get("phone")
            .map_err(storage_error("Failed to read student phone"))?,
        national_id: row
            .try_get("national_id")
            .map_err(storage_error("Failed to read student national ID"))?,
        workouts: Vec::new(),
    })
}

/// Translate a unique-constraint violation into the matching duplicate kind.
///
/// A race between two creates can slip past the uniqueness guard and land
/// here; the constraint failure must surface as the same failure kind the
/// guard itself would have raised.
fn map_student_unique_violation(err: &sqlx::Error, student: &Student) -> Option<AppError> {
    let db_err = match err {
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => db_err,
        _ => return None,
    };

    let message = db_err.message();
    if message.contains("email") {
        Some(AppError::duplicate_email(&student.email))
    } else if message.contains("national_id") {
        Some(AppError::duplicate_national_id(&student.national_id))
    } else {
        None
    }
}
