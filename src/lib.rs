// ABOUTME: Main library entry point for the GymTime roster platform
// ABOUTME: Provides student, workout, and exercise management over a REST API
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

#![deny(unsafe_code)]

//! # GymTime Server
//!
//! A roster management service for gyms: students, their workout plans, and the
//! exercises inside each plan, exposed over a REST API.
//!
//! ## Features
//!
//! - **Student registry**: Unique email (case-insensitive) and national id
//! - **Workout plans**: Ordered exercise lists with full-replacement updates
//! - **Cascade deletes**: Removing a student removes their workouts and exercises
//! - **Identity normalization**: Phone and national id stored digits-only
//!
//! ## Architecture
//!
//! - **Models**: Students, workouts, and exercises with their input types
//! - **Services**: Validation, uniqueness guards, and orchestration
//! - **Database**: `SQLite` persistence behind the `DatabaseProvider` trait
//! - **Routes**: Axum handlers mapping service errors to HTTP statuses
//! - **Views**: Flat response projections decoupled from storage
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gymtime_server::config::environment::ServerConfig;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ServerConfig::from_env()?;
//!     println!("GymTime server configured with port: HTTP={}", config.http_port);
//!     Ok(())
//! }
//! ```

// ── Public API ──────────────────────────────────────────────────────────
// These modules are used by the server binary (src/bin/) and integration
// tests (tests/). They must remain `pub` for those consumers.

/// Configuration management from environment variables
pub mod config;

/// `SQLite` persistence layer
pub mod database;

/// Database abstraction trait and its `SQLite` implementation
pub mod database_plugins;

/// Error types and HTTP status mapping
pub mod errors;

/// Structured logging setup
pub mod logging;

/// Domain entities and request input types
pub mod models;

/// Identity normalization helpers (phone, national id)
pub mod normalize;

/// `HTTP` route handlers
pub mod routes;

/// Business logic and validation
pub mod services;

/// Response projections for the REST API
pub mod views;
