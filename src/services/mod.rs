// ABOUTME: Domain service layer for transport-agnostic business logic
// ABOUTME: Aggregate orchestration for students and workouts plus uniqueness enforcement
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Aggregate services.
//!
//! All business rules live here, as free async functions generic over
//! [`DatabaseProvider`](crate::database_plugins::DatabaseProvider). Every
//! function validates first and writes second; a failed validation never
//! leaves a partial write behind.

/// Student aggregate orchestration: create, partial update, lookup, cascade delete
pub mod students;

/// Email and national-ID exclusivity enforcement
pub mod uniqueness;

/// Workout aggregate orchestration, including full exercise-list replacement
pub mod workouts;
