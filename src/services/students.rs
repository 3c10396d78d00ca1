// ABOUTME: Student aggregate service: creation, partial update, lookup, cascade deletion
// ABOUTME: Validates everything before the first write ever happens
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

use tracing::{debug, info};
use uuid::Uuid;

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::models::{Student, StudentCreateInput, StudentUpdateInput, STUDENT_NAME_MAX,
    STUDENT_NAME_MIN};
use crate::normalize;
use crate::services::uniqueness;

/// Create a new student with an empty workout set.
///
/// Phone and national ID are normalized to digits first, then both
/// uniqueness guards run with no exclusion. Nothing is persisted unless
/// every check passes.
pub async fn create_student<DB: DatabaseProvider>(
    database: &DB,
    input: StudentCreateInput,
) -> AppResult<Student> {
    debug!(email = %input.email, "creating student");

    let name = validated_name(&input.name)?;
    let email = validated_email(&input.email)?;
    let phone = validated_phone(input.phone.as_deref().unwrap_or_default())?;

    let national_id = normalize::normalize_national_id(&input.national_id);
    uniqueness::assert_email_available(database, &email, None).await?;
    uniqueness::assert_national_id_available(database, &national_id, None).await?;

    let student = Student::new(name, email, phone, national_id);
    database.create_student(&student).await?;

    info!(student_id = %student.id, "student created");
    Ok(student)
}

/// Look up a student by id
pub async fn get_student<DB: DatabaseProvider>(
    database: &DB,
    student_id: Uuid,
) -> AppResult<Option<Student>> {
    database.get_student(student_id).await
}

/// Look up a student by email, case-insensitively
pub async fn get_student_by_email<DB: DatabaseProvider>(
    database: &DB,
    email: &str,
) -> AppResult<Option<Student>> {
    database.get_student_by_email(email).await
}

/// List every student. Ordering is whatever the storage returns; callers
/// must not rely on it.
pub async fn list_students<DB: DatabaseProvider>(database: &DB) -> AppResult<Vec<Student>> {
    database.list_students().await
}

/// Apply a partial update to a student.
///
/// Fields absent from the input are untouched. Email and national ID are
/// re-validated for uniqueness only when the submitted value differs from
/// the stored one, so re-submitting the current value never conflicts with
/// the student's own row. A phone present in the input replaces the stored
/// value even when it normalizes to absent, which is how a phone is
/// cleared.
pub async fn update_student<DB: DatabaseProvider>(
    database: &DB,
    student_id: Uuid,
    input: StudentUpdateInput,
) -> AppResult<Student> {
    debug!(%student_id, "updating student");

    let mut student = database
        .get_student(student_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Student {student_id}")))?;

    if let Some(name) = input.name.as_deref().filter(|n| !n.trim().is_empty()) {
        student.name = validated_name(name)?;
    }

    if let Some(email) = input.email.as_deref().filter(|e| !e.trim().is_empty()) {
        if !email.eq_ignore_ascii_case(&student.email) {
            let email = validated_email(email)?;
            uniqueness::assert_email_available(database, &email, Some(student_id)).await?;
            student.email = email;
        }
    }

    if let Some(raw) = input
        .national_id
        .as_deref()
        .filter(|n| !n.trim().is_empty())
    {
        let national_id = normalize::normalize_national_id(raw);
        if national_id != student.national_id {
            uniqueness::assert_national_id_available(database, &national_id, Some(student_id))
                .await?;
            student.national_id = national_id;
        }
    }

    // Phone present in the input always replaces, an empty value clears it
    if let Some(raw) = input.phone.as_deref() {
        student.phone = validated_phone(raw)?;
    }

    database.update_student(&student).await?;

    info!(%student_id, "student updated");
    Ok(student)
}

/// Delete a student and, transitively, every owned workout and exercise
pub async fn delete_student<DB: DatabaseProvider>(
    database: &DB,
    student_id: Uuid,
) -> AppResult<()> {
    if !database.student_exists(student_id).await? {
        return Err(AppError::not_found(format!("Student {student_id}")));
    }
    database.delete_student(student_id).await?;

    info!(%student_id, "student deleted");
    Ok(())
}

fn validated_name(raw: &str) -> AppResult<String> {
    let name = raw.trim();
    if name.chars().count() < STUDENT_NAME_MIN || name.chars().count() > STUDENT_NAME_MAX {
        return Err(AppError::invalid_input(format!(
            "Name must have between {STUDENT_NAME_MIN} and {STUDENT_NAME_MAX} characters"
        )));
    }
    Ok(name.to_owned())
}

/// Minimal shape check; full email validation belongs to the transport layer
fn validated_email(raw: &str) -> AppResult<String> {
    let email = raw.trim();
    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(AppError::invalid_input("Invalid email format"));
    }
    Ok(email.to_owned())
}

fn validated_phone(raw: &str) -> AppResult<Option<String>> {
    match normalize::normalize_phone(raw) {
        Some(digits) if !normalize::phone_length_ok(&digits) => Err(AppError::invalid_phone()),
        other => Ok(other),
    }
}
