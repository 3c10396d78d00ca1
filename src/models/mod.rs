// ABOUTME: Domain aggregates for the gym roster: Student, Workout, Exercise
// ABOUTME: Also defines the input shapes the aggregate services accept
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Common data models for the student/workout/exercise hierarchy.
//!
//! Ownership is one-directional: a [`Student`] holds its [`Workout`]s by
//! value and a [`Workout`] holds its [`Exercise`]s by value. The reverse
//! references (`Workout::student_id`, `Exercise::workout_id`) are plain
//! denormalized ids used for lookups only, never for lifecycle decisions.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Bounds for student names (inclusive, characters)
pub const STUDENT_NAME_MIN: usize = 2;
/// Upper bound for student names
pub const STUDENT_NAME_MAX: usize = 100;
/// Bounds for workout names (inclusive, characters)
pub const WORKOUT_NAME_MIN: usize = 3;
/// Upper bound for workout names
pub const WORKOUT_NAME_MAX: usize = 100;
/// Upper bound for workout descriptions
pub const WORKOUT_DESCRIPTION_MAX: usize = 500;
/// Upper bound for exercise names
pub const EXERCISE_NAME_MAX: usize = 150;
/// Upper bound for the free-text sets/reps description
pub const EXERCISE_SETS_REPS_MAX: usize = 100;

/// A gym student, the root of the aggregate hierarchy.
///
/// Email is unique across all students (case-insensitive); the national ID
/// is unique and stored digit-only, exactly 11 digits. The phone, when
/// present, is stored digit-only with 10 or 11 digits.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Student {
    /// Unique student identifier, server-generated, never reused
    pub id: Uuid,
    /// Full name
    pub name: String,
    /// Email address, unique case-insensitively
    pub email: String,
    /// Optional phone, digit-only
    pub phone: Option<String>,
    /// National ID, digit-only, exactly 11 digits
    pub national_id: String,
    /// Workouts owned by this student; deleted with it
    pub workouts: Vec<Workout>,
}

impl Student {
    /// Create a new student with no workouts
    #[must_use]
    pub fn new(name: String, email: String, phone: Option<String>, national_id: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            phone,
            national_id,
            workouts: Vec::new(),
        }
    }
}

/// A workout plan owned by exactly one student.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Workout {
    /// Unique workout identifier, server-generated
    pub id: Uuid,
    /// Workout name, 3 to 100 characters
    pub name: String,
    /// Optional free-text description, up to 500 characters
    pub description: Option<String>,
    /// Set exactly once at creation, immutable thereafter
    pub created_at: DateTime<Utc>,
    /// Bumped on creation and on every subsequent mutation
    pub updated_at: DateTime<Utc>,
    /// Owning student id; set at creation, not reassignable
    pub student_id: Uuid,
    /// Exercises in insertion order; replaced wholesale on update
    pub exercises: Vec<Exercise>,
}

impl Workout {
    /// Create a new workout bound to a student, with both timestamps at "now"
    #[must_use]
    pub fn new(name: String, description: Option<String>, student_id: Uuid) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: now,
            updated_at: now,
            student_id,
            exercises: Vec::new(),
        }
    }

    /// Record a mutation by bumping `updated_at`
    pub fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

/// A single exercise inside a workout.
///
/// Exercises have no independent lifecycle: they are created, replaced and
/// destroyed only as part of a workout mutation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Exercise {
    /// Unique exercise identifier, server-generated
    pub id: Uuid,
    /// Exercise name, non-empty, up to 150 characters
    pub name: String,
    /// Optional free-text sets/reps description, e.g. "3x10"
    pub sets_reps: Option<String>,
    /// Owning workout id
    pub workout_id: Uuid,
}

impl Exercise {
    /// Create a new exercise bound to a workout
    #[must_use]
    pub fn new(name: String, sets_reps: Option<String>, workout_id: Uuid) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            sets_reps,
            workout_id,
        }
    }
}

/// Input for creating a student
#[derive(Debug, Clone, Deserialize)]
pub struct StudentCreateInput {
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Optional phone; masks are stripped before storage
    pub phone: Option<String>,
    /// National ID; masks are stripped before storage
    pub national_id: String,
}

/// Partial input for updating a student.
///
/// Fields left `None` are untouched. A phone submitted as an empty string
/// clears the stored phone; an absent phone field leaves it as is.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StudentUpdateInput {
    /// Replacement name, applied when present and non-blank
    pub name: Option<String>,
    /// Replacement email, re-validated for uniqueness when it differs
    pub email: Option<String>,
    /// Replacement phone; `Some("")` clears it
    pub phone: Option<String>,
    /// Replacement national ID, re-validated for uniqueness when it differs
    pub national_id: Option<String>,
}

/// Input for creating a workout together with its exercises
#[derive(Debug, Clone, Deserialize)]
pub struct WorkoutCreateInput {
    /// Workout name
    pub name: String,
    /// Optional description
    pub description: Option<String>,
    /// Owning student; must exist
    pub student_id: Uuid,
    /// Initial exercise list; blank-named entries are silently skipped
    #[serde(default)]
    pub exercises: Vec<ExerciseInput>,
}

/// Partial input for updating a workout.
///
/// The exercise list is always replaced wholesale, never merged.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WorkoutUpdateInput {
    /// Replacement name, applied when present and non-blank
    pub name: Option<String>,
    /// Replacement description; `Some("")` clears it
    pub description: Option<String>,
    /// Full replacement for the exercise list
    #[serde(default)]
    pub exercises: Vec<ExerciseInput>,
}

/// One exercise entry inside a workout create/update input
#[derive(Debug, Clone, Deserialize)]
pub struct ExerciseInput {
    /// Exercise name; a blank name drops the entry without error
    pub name: String,
    /// Optional free-text sets/reps description
    pub sets_reps: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_new_student_owns_nothing() {
        let student = Student::new(
            "Ana Silva".into(),
            "ana@x.com".into(),
            None,
            "12345678901".into(),
        );
        assert!(student.workouts.is_empty());
        assert!(student.phone.is_none());
    }

    #[test]
    fn test_new_workout_timestamps_match() {
        let workout = Workout::new("Treino A".into(), None, Uuid::new_v4());
        assert_eq!(workout.created_at, workout.updated_at);
    }

    #[test]
    fn test_touch_moves_only_updated_at() {
        let mut workout = Workout::new("Treino A".into(), None, Uuid::new_v4());
        let created = workout.created_at;
        workout.touch();
        assert_eq!(workout.created_at, created);
        assert!(workout.updated_at >= created);
    }
}
