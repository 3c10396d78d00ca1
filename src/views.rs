// ABOUTME: Read-only response projections of the aggregate graph
// ABOUTME: Breaks the owns-relationships so serialized output is acyclic
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! View projection.
//!
//! The mutable aggregates reference each other in both directions (parent
//! holds children by value, children carry an owner id). Serializing that
//! graph as-is would nest the owning student inside every workout, so the
//! views flatten it: a [`WorkoutView`] carries `student_id` as a plain
//! value and an [`ExerciseView`] carries no back-reference at all.
//!
//! These conversions are pure and total. They never fail and never panic.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Exercise, Student, Workout};

/// Flat response shape for a student, including owned workouts
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentView {
    /// Student identifier
    pub id: Uuid,
    /// Full name
    pub name: String,
    /// Email address
    pub email: String,
    /// Digit-only phone, absent when the student has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    /// Digit-only national ID
    pub national_id: String,
    /// Owned workouts; empty when the student has none
    pub workouts: Vec<WorkoutView>,
}

/// Flat response shape for a workout, including owned exercises
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkoutView {
    /// Workout identifier
    pub id: Uuid,
    /// Workout name
    pub name: String,
    /// Optional description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Creation timestamp, immutable
    pub created_at: DateTime<Utc>,
    /// Last mutation timestamp
    pub updated_at: DateTime<Utc>,
    /// Owning student id as a plain value, never a nested object
    pub student_id: Uuid,
    /// Exercises in insertion order
    pub exercises: Vec<ExerciseView>,
}

/// Flat response shape for an exercise
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExerciseView {
    /// Exercise identifier
    pub id: Uuid,
    /// Exercise name
    pub name: String,
    /// Optional sets/reps description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sets_reps: Option<String>,
}

impl From<&Exercise> for ExerciseView {
    fn from(exercise: &Exercise) -> Self {
        Self {
            id: exercise.id,
            name: exercise.name.clone(),
            sets_reps: exercise.sets_reps.clone(),
        }
    }
}

impl From<&Workout> for WorkoutView {
    fn from(workout: &Workout) -> Self {
        Self {
            id: workout.id,
            name: workout.name.clone(),
            description: workout.description.clone(),
            created_at: workout.created_at,
            updated_at: workout.updated_at,
            student_id: workout.student_id,
            exercises: workout.exercises.iter().map(ExerciseView::from).collect(),
        }
    }
}

impl From<&Student> for StudentView {
    fn from(student: &Student) -> Self {
        Self {
            id: student.id,
            name: student.name.clone(),
            email: student.email.clone(),
            phone: student.phone.clone(),
            national_id: student.national_id.clone(),
            workouts: student.workouts.iter().map(WorkoutView::from).collect(),
        }
    }
}

impl From<Student> for StudentView {
    fn from(student: Student) -> Self {
        Self::from(&student)
    }
}

impl From<Workout> for WorkoutView {
    fn from(workout: Workout) -> Self {
        Self::from(&workout)
    }
}

impl From<Exercise> for ExerciseView {
    fn from(exercise: Exercise) -> Self {
        Self::from(&exercise)
    }
}
