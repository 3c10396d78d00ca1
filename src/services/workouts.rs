// ABOUTME: Workout aggregate service: creation, full-replacement update, scoped lookup
// ABOUTME: Blank-named exercise entries are silently dropped on ingest
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

use tracing::{debug, info};
use uuid::Uuid;

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{Exercise, ExerciseInput, Workout, WorkoutCreateInput, WorkoutUpdateInput,
    EXERCISE_NAME_MAX, EXERCISE_SETS_REPS_MAX, WORKOUT_DESCRIPTION_MAX, WORKOUT_NAME_MAX,
    WORKOUT_NAME_MIN};

/// Create a workout bound to an existing student.
///
/// Fails with `NotFound` when the student does not exist; nothing is
/// persisted in that case. Exercise entries whose name is blank are skipped
/// without error, a deliberate lenient-ingest policy inherited from the
/// roster's bulk-entry forms.
pub async fn create_workout<DB: DatabaseProvider>(
    database: &DB,
    input: WorkoutCreateInput,
) -> AppResult<Workout> {
    debug!(student_id = %input.student_id, "creating workout");

    if !database.student_exists(input.student_id).await? {
        return Err(AppError::not_found(format!("Student {}", input.student_id)));
    }

    let name = validated_name(&input.name)?;
    let description = validated_description(input.description)?;

    let mut workout = Workout::new(name, description, input.student_id);
    workout.exercises = build_exercises(workout.id, input.exercises)?;

    database.create_workout(&workout).await?;

    info!(workout_id = %workout.id, student_id = %workout.student_id, "workout created");
    Ok(workout)
}

/// List all workouts owned by a student, failing with `NotFound` when the
/// student does not exist (an empty list means "exists, owns nothing")
pub async fn list_workouts_of_student<DB: DatabaseProvider>(
    database: &DB,
    student_id: Uuid,
) -> AppResult<Vec<Workout>> {
    if !database.student_exists(student_id).await? {
        return Err(AppError::not_found(format!("Student {student_id}")));
    }
    database.get_workouts_for_student(student_id).await
}

/// Look up a workout by id
pub async fn get_workout<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
) -> AppResult<Option<Workout>> {
    database.get_workout(workout_id).await
}

/// Look up a workout only if it belongs to the given student.
///
/// Returns `None` both when the workout is missing and when it belongs to a
/// different student; callers cannot tell the two cases apart. Mutating
/// paths re-run this ownership check server-side instead of trusting a
/// prior read.
pub async fn get_workout_scoped_to_student<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
    student_id: Uuid,
) -> AppResult<Option<Workout>> {
    Ok(database
        .get_workout(workout_id)
        .await?
        .filter(|workout| workout.student_id == student_id))
}

/// Apply a partial update to a workout; the exercise list is always
/// replaced wholesale.
///
/// The current exercise collection is discarded and rebuilt from the input
/// with the same lenient blank-name skip as creation. `updated_at` is
/// bumped; `created_at` never changes.
pub async fn update_workout<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
    input: WorkoutUpdateInput,
) -> AppResult<Workout> {
    debug!(%workout_id, "updating workout");

    let mut workout = database
        .get_workout(workout_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Workout {workout_id}")))?;

    if let Some(name) = input.name.as_deref().filter(|n| !n.trim().is_empty()) {
        workout.name = validated_name(name)?;
    }

    // Description present in the input always replaces, empty clears it
    if let Some(description) = input.description {
        workout.description = validated_description(Some(description))?;
    }

    workout.exercises = build_exercises(workout.id, input.exercises)?;
    workout.touch();

    database.update_workout(&workout).await?;

    info!(%workout_id, "workout updated");
    Ok(workout)
}

/// Update a workout only after re-asserting it belongs to `student_id`
pub async fn update_workout_scoped<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
    student_id: Uuid,
    input: WorkoutUpdateInput,
) -> AppResult<Workout> {
    assert_ownership(database, workout_id, student_id).await?;
    update_workout(database, workout_id, input).await
}

/// Delete a workout and every owned exercise
pub async fn delete_workout<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
) -> AppResult<()> {
    database.delete_workout(workout_id).await?;

    info!(%workout_id, "workout deleted");
    Ok(())
}

/// Delete a workout only after re-asserting it belongs to `student_id`
pub async fn delete_workout_scoped<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
    student_id: Uuid,
) -> AppResult<()> {
    assert_ownership(database, workout_id, student_id).await?;
    delete_workout(database, workout_id).await
}

/// Fail with `NotFound` when the workout is missing and `OwnershipMismatch`
/// when it belongs to another student
async fn assert_ownership<DB: DatabaseProvider>(
    database: &DB,
    workout_id: Uuid,
    student_id: Uuid,
) -> AppResult<()> {
    let workout = database
        .get_workout(workout_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Workout {workout_id}")))?;

    if workout.student_id != student_id {
        return Err(AppError::ownership_mismatch(workout_id));
    }
    Ok(())
}

/// Materialize exercise inputs, skipping blank-named entries silently
fn build_exercises(workout_id: Uuid, entries: Vec<ExerciseInput>) -> AppResult<Vec<Exercise>> {
    let mut exercises = Vec::with_capacity(entries.len());
    for entry in entries {
        let name = entry.name.trim();
        if name.is_empty() {
            continue;
        }
        if name.chars().count() > EXERCISE_NAME_MAX {
            return Err(AppError::invalid_input(format!(
                "Exercise name must have at most {EXERCISE_NAME_MAX} characters"
            )));
        }

        let sets_reps = entry
            .sets_reps
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty());
        if let Some(ref sets_reps) = sets_reps {
            if sets_reps.chars().count() > EXERCISE_SETS_REPS_MAX {
                return Err(AppError::invalid_input(format!(
                    "Sets/reps must have at most {EXERCISE_SETS_REPS_MAX} characters"
                )));
            }
        }

        exercises.push(Exercise::new(name.to_owned(), sets_reps, workout_id));
    }
    Ok(exercises)
}

fn validated_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.chars().count() < WORKOUT_NAME_MIN || name.chars().count() > WORKOUT_NAME_MAX {
        return Err(AppError::invalid_input(format!(
            "Workout name must have between {WORKOUT_NAME_MIN} and {WORKOUT_NAME_MAX} characters"
        )));
    }
    Ok(name.to_owned())
}

fn validated_description(raw: Option<String>) -> AppResult<Option<String>> {
    match raw {
        None => Ok(None),
        Some(description) => {
            let description = description.trim().to_owned();
            if description.chars().count() > WORKOUT_DESCRIPTION_MAX {
                return Err(AppError::invalid_input(format!(
                    "Description must have at most {WORKOUT_DESCRIPTION_MAX} characters"
                )));
            }
            if description.is_empty() {
                Ok(None)
            } else {
                Ok(Some(description))
            }
        }
    }
}
