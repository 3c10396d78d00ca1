// ABOUTME: Uniqueness guard for student identity fields
// ABOUTME: Email compared case-insensitively, national ID by exact digits
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Uniqueness enforcement for email and national ID.
//!
//! Both guards accept an optional excluded student id so an update can
//! re-submit the entity's own current value without tripping a false
//! conflict against its own row. The guards run before any write; a race
//! that slips past them is caught by the schema's unique indexes and
//! surfaces as the same failure kind (see `database::students`).

use uuid::Uuid;

use crate::database_plugins::DatabaseProvider;
use crate::errors::{AppError, AppResult};
use crate::normalize;

/// Fail with `DuplicateEmail` if a different student already uses `email`.
///
/// Comparison is case-insensitive. When `excluding` is set, a match on that
/// student's own row is not a conflict.
pub async fn assert_email_available<DB: DatabaseProvider>(
    database: &DB,
    email: &str,
    excluding: Option<Uuid>,
) -> AppResult<()> {
    if let Some(existing) = database.get_student_by_email(email).await? {
        if excluding != Some(existing.id) {
            return Err(AppError::duplicate_email(email));
        }
    }
    Ok(())
}

/// Fail with `InvalidNationalId` when `national_id` is not exactly 11
/// digits, or with `DuplicateNationalId` if a different student uses it.
///
/// Expects the digit-only form produced by
/// [`normalize_national_id`](crate::normalize::normalize_national_id).
pub async fn assert_national_id_available<DB: DatabaseProvider>(
    database: &DB,
    national_id: &str,
    excluding: Option<Uuid>,
) -> AppResult<()> {
    if !normalize::national_id_length_ok(national_id) {
        return Err(AppError::invalid_national_id());
    }

    if let Some(existing) = database.get_student_by_national_id(national_id).await? {
        if excluding != Some(existing.id) {
            return Err(AppError::duplicate_national_id(national_id));
        }
    }
    Ok(())
}
