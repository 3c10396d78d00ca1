// ABOUTME: Integration tests for the workout service layer
// ABOUTME: Covers exercise ordering, full-replacement updates, ownership scoping, and cascades
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

mod common;

use anyhow::Result;
use gymtime_server::errors::ErrorCode;
use gymtime_server::models::{ExerciseInput, WorkoutCreateInput, WorkoutUpdateInput};
use gymtime_server::services::workouts;
use uuid::Uuid;

fn exercise(name: &str, sets_reps: Option<&str>) -> ExerciseInput {
    ExerciseInput {
        name: name.into(),
        sets_reps: sets_reps.map(Into::into),
    }
}

#[tokio::test]
async fn test_create_workout_preserves_exercise_order() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;

    let workout = workouts::create_workout(
        database.as_ref(),
        WorkoutCreateInput {
            name: "Treino B".into(),
            description: None,
            student_id: student.id,
            exercises: vec![
                exercise("Agachamento", Some("5x5")),
                exercise("Leg press", Some("4x12")),
                exercise("Panturrilha", None),
            ],
        },
    )
    .await?;

    let names: Vec<&str> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Agachamento", "Leg press", "Panturrilha"]);

    // Order survives a round trip through storage
    let fetched = workouts::get_workout(database.as_ref(), workout.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("workout not persisted"))?;
    let names: Vec<&str> = fetched.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Agachamento", "Leg press", "Panturrilha"]);
    Ok(())
}

#[tokio::test]
async fn test_create_workout_for_missing_student_is_not_found() -> Result<()> {
    let database = common::create_test_database().await?;

    let err = workouts::create_workout(
        database.as_ref(),
        WorkoutCreateInput {
            name: "Orphan".into(),
            description: None,
            student_id: Uuid::new_v4(),
            exercises: vec![],
        },
    )
    .await
    .expect_err("workout for unknown student must fail");
    assert_eq!(err.code, ErrorCode::NotFound);
    Ok(())
}

#[tokio::test]
async fn test_blank_exercise_names_are_skipped_silently() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;

    let workout = workouts::create_workout(
        database.as_ref(),
        WorkoutCreateInput {
            name: "Treino C".into(),
            description: None,
            student_id: student.id,
            exercises: vec![
                exercise("Rosca direta", Some("3x12")),
                exercise("   ", Some("4x10")),
                exercise("", None),
                exercise("Triceps testa", Some("3x12")),
            ],
        },
    )
    .await?;

    let names: Vec<&str> = workout.exercises.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, ["Rosca direta", "Triceps testa"]);
    Ok(())
}

#[tokio::test]
async fn test_update_replaces_exercise_list_wholesale() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), student.id).await?;
    let old_ids: Vec<Uuid> = workout.exercises.iter().map(|e| e.id).collect();

    let updated = workouts::update_workout(
        database.as_ref(),
        workout.id,
        WorkoutUpdateInput {
            name: None,
            description: None,
            exercises: vec![exercise("Barra fixa", Some("3xMax"))],
        },
    )
    .await?;

    assert_eq!(updated.exercises.len(), 1);
    assert_eq!(updated.exercises[0].name, "Barra fixa");
    // Replacement mints new rows, old exercise ids are gone
    assert!(!old_ids.contains(&updated.exercises[0].id));

    let fetched = workouts::get_workout(database.as_ref(), workout.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("workout vanished"))?;
    assert_eq!(fetched.exercises.len(), 1);
    Ok(())
}

#[tokio::test]
async fn test_update_with_empty_list_clears_exercises() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), student.id).await?;

    let updated = workouts::update_workout(
        database.as_ref(),
        workout.id,
        WorkoutUpdateInput::default(),
    )
    .await?;
    assert!(updated.exercises.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_update_bumps_updated_at_but_not_created_at() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), student.id).await?;

    // Ensure the clock moves past the creation instant
    tokio::time::sleep(std::time::Duration::from_millis(5)).await;

    let updated = workouts::update_workout(
        database.as_ref(),
        workout.id,
        WorkoutUpdateInput {
            name: Some("Treino A v2".into()),
            ..WorkoutUpdateInput::default()
        },
    )
    .await?;

    assert_eq!(updated.created_at, workout.created_at);
    assert!(updated.updated_at > workout.updated_at);
    Ok(())
}

#[tokio::test]
async fn test_update_blank_name_keeps_existing_name() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), student.id).await?;

    let updated = workouts::update_workout(
        database.as_ref(),
        workout.id,
        WorkoutUpdateInput {
            name: Some("   ".into()),
            ..WorkoutUpdateInput::default()
        },
    )
    .await?;
    assert_eq!(updated.name, workout.name);
    Ok(())
}

#[tokio::test]
async fn test_update_empty_description_clears_it() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), student.id).await?;
    assert!(workout.description.is_some());

    let updated = workouts::update_workout(
        database.as_ref(),
        workout.id,
        WorkoutUpdateInput {
            description: Some(String::new()),
            ..WorkoutUpdateInput::default()
        },
    )
    .await?;
    assert_eq!(updated.description, None);
    Ok(())
}

#[tokio::test]
async fn test_scoped_read_hides_other_students_workout() -> Result<()> {
    let database = common::create_test_database().await?;
    let owner = common::seed_student(database.as_ref()).await?;
    let stranger = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), owner.id).await?;

    let scoped =
        workouts::get_workout_scoped_to_student(database.as_ref(), workout.id, stranger.id)
            .await?;
    assert!(scoped.is_none());

    let scoped = workouts::get_workout_scoped_to_student(database.as_ref(), workout.id, owner.id)
        .await?;
    assert!(scoped.is_some());
    Ok(())
}

#[tokio::test]
async fn test_scoped_update_by_non_owner_is_ownership_mismatch() -> Result<()> {
    let database = common::create_test_database().await?;
    let owner = common::seed_student(database.as_ref()).await?;
    let stranger = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), owner.id).await?;

    let err = workouts::update_workout_scoped(
        database.as_ref(),
        workout.id,
        stranger.id,
        WorkoutUpdateInput {
            name: Some("Hijacked".into()),
            ..WorkoutUpdateInput::default()
        },
    )
    .await
    .expect_err("non-owner must not update");
    assert_eq!(err.code, ErrorCode::OwnershipMismatch);

    let unchanged = workouts::get_workout(database.as_ref(), workout.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("workout vanished"))?;
    assert_eq!(unchanged.name, workout.name);
    Ok(())
}

#[tokio::test]
async fn test_scoped_delete_by_non_owner_leaves_workout() -> Result<()> {
    let database = common::create_test_database().await?;
    let owner = common::seed_student(database.as_ref()).await?;
    let stranger = common::seed_student(database.as_ref()).await?;
    let workout = common::seed_workout(database.as_ref(), owner.id).await?;

    let err = workouts::delete_workout_scoped(database.as_ref(), workout.id, stranger.id)
        .await
        .expect_err("non-owner must not delete");
    assert_eq!(err.code, ErrorCode::OwnershipMismatch);
    assert!(workouts::get_workout(database.as_ref(), workout.id)
        .await?
        .is_some());

    workouts::delete_workout_scoped(database.as_ref(), workout.id, owner.id).await?;
    assert!(workouts::get_workout(database.as_ref(), workout.id)
        .await?
        .is_none());
    Ok(())
}

#[tokio::test]
async fn test_list_workouts_of_missing_student_is_not_found() -> Result<()> {
    let database = common::create_test_database().await?;

    let err = workouts::list_workouts_of_student(database.as_ref(), Uuid::new_v4())
        .await
        .expect_err("unknown student must be NotFound");
    assert_eq!(err.code, ErrorCode::NotFound);
    Ok(())
}

#[tokio::test]
async fn test_list_workouts_empty_for_student_without_plans() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;

    let listed = workouts::list_workouts_of_student(database.as_ref(), student.id).await?;
    assert!(listed.is_empty());
    Ok(())
}

#[tokio::test]
async fn test_delete_workout_does_not_touch_siblings() -> Result<()> {
    let database = common::create_test_database().await?;
    let student = common::seed_student(database.as_ref()).await?;
    let first = common::seed_workout(database.as_ref(), student.id).await?;
    let second = common::seed_workout(database.as_ref(), student.id).await?;

    workouts::delete_workout(database.as_ref(), first.id).await?;

    assert!(workouts::get_workout(database.as_ref(), first.id)
        .await?
        .is_none());
    let survivor = workouts::get_workout(database.as_ref(), second.id)
        .await?
        .ok_or_else(|| anyhow::anyhow!("sibling deleted"))?;
    assert_eq!(survivor.exercises.len(), 2);
    Ok(())
}
