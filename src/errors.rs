// ABOUTME: Unified error handling system with standard error codes
// ABOUTME: Maps business failure kinds to HTTP statuses and JSON error bodies
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! # Unified Error Handling System
//!
//! Every service operation returns [`AppResult`]. The error carries a typed
//! [`ErrorCode`] (the business failure kind) plus a human-readable message;
//! the transport layer never inspects messages, only the code. Storage-layer
//! failures are wrapped opaquely: the raw driver error lives in the source
//! chain and is never serialized into a response body.

use std::fmt;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Standard error codes used throughout the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Referenced student or workout id does not exist
    #[serde(rename = "NOT_FOUND")]
    NotFound,
    /// Another student already uses this email (case-insensitive)
    #[serde(rename = "DUPLICATE_EMAIL")]
    DuplicateEmail,
    /// Another student already uses this national ID
    #[serde(rename = "DUPLICATE_NATIONAL_ID")]
    DuplicateNationalId,
    /// National ID is not exactly 11 digits after normalization
    #[serde(rename = "INVALID_NATIONAL_ID")]
    InvalidNationalId,
    /// Phone is present but not 10 or 11 digits after normalization
    #[serde(rename = "INVALID_PHONE")]
    InvalidPhone,
    /// Workout id resolved but does not belong to the asserted student
    #[serde(rename = "OWNERSHIP_MISMATCH")]
    OwnershipMismatch,
    /// A submitted field fails format or length validation
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput,
    /// Storage operation failed for a reason the guards did not anticipate
    #[serde(rename = "DATABASE_ERROR")]
    DatabaseError,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 400 Bad Request
            Self::InvalidNationalId | Self::InvalidPhone | Self::InvalidInput => {
                StatusCode::BAD_REQUEST
            }

            // 404 Not Found. OwnershipMismatch answers 404 so a caller cannot
            // distinguish "missing" from "owned by someone else".
            Self::NotFound | Self::OwnershipMismatch => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::DuplicateEmail | Self::DuplicateNationalId => StatusCode::CONFLICT,

            // 500 Internal Server Error
            Self::DatabaseError | Self::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get a user-friendly description of this error
    pub fn description(&self) -> &'static str {
        match self {
            Self::NotFound => "The requested resource was not found",
            Self::DuplicateEmail => "A student with this email is already registered",
            Self::DuplicateNationalId => "A student with this national ID is already registered",
            Self::InvalidNationalId => "The national ID must contain exactly 11 digits",
            Self::InvalidPhone => "The phone number must contain 10 or 11 digits",
            Self::OwnershipMismatch => "The workout does not belong to this student",
            Self::InvalidInput => "The provided input is invalid",
            Self::DatabaseError => "Database operation failed",
            Self::InternalError => "An internal server error occurred",
        }
    }
}

/// Unified error type for the application
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new `AppError` with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            source: None,
        }
    }

    /// Add a source error for error chaining
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    /// Resource not found
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::NotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Email already registered to another student
    pub fn duplicate_email(email: &str) -> Self {
        Self::new(
            ErrorCode::DuplicateEmail,
            format!("Email '{email}' is already registered"),
        )
    }

    /// National ID already registered to another student
    pub fn duplicate_national_id(national_id: &str) -> Self {
        Self::new(
            ErrorCode::DuplicateNationalId,
            format!("National ID '{national_id}' is already registered"),
        )
    }

    /// National ID fails the 11-digit requirement
    pub fn invalid_national_id() -> Self {
        Self::new(
            ErrorCode::InvalidNationalId,
            "National ID must contain exactly 11 digits",
        )
    }

    /// Phone fails the 10-or-11-digit requirement
    pub fn invalid_phone() -> Self {
        Self::new(
            ErrorCode::InvalidPhone,
            "Phone must contain 10 or 11 digits, or be left blank",
        )
    }

    /// Workout exists but belongs to a different student
    pub fn ownership_mismatch(workout_id: uuid::Uuid) -> Self {
        Self::new(
            ErrorCode::OwnershipMismatch,
            format!("Workout {workout_id} does not belong to this student"),
        )
    }

    /// Invalid input
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// Database error with an opaque message; the raw driver error goes in
    /// the source chain, never in the message
    pub fn database(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DatabaseError, message)
    }

    /// Internal server error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// HTTP error response format
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Error payload
    pub error: ErrorResponseDetails,
}

/// Body of an HTTP error response
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponseDetails {
    /// Typed error code
    pub code: ErrorCode,
    /// Human-readable message
    pub message: String,
}

impl From<&AppError> for ErrorResponse {
    fn from(error: &AppError) -> Self {
        Self {
            error: ErrorResponseDetails {
                code: error.code,
                message: error.message.clone(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.http_status();
        if status.is_server_error() {
            tracing::error!(code = ?self.code, error = %self, "request failed");
        }
        (status, Json(ErrorResponse::from(&self))).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::NotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorCode::DuplicateEmail.http_status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ErrorCode::InvalidNationalId.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::OwnershipMismatch.http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            ErrorCode::DatabaseError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_response_serialization() {
        let error = AppError::duplicate_email("ana@x.com");
        let response = ErrorResponse::from(&error);

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("DUPLICATE_EMAIL"));
        assert!(json.contains("ana@x.com"));
    }

    #[test]
    fn test_database_error_hides_source_text() {
        let io = std::io::Error::other("disk exploded at /var/db");
        let error = AppError::database("Failed to save student").with_source(io);

        let json = serde_json::to_string(&ErrorResponse::from(&error)).unwrap();
        assert!(!json.contains("disk exploded"));
        assert!(error.source.is_some());
    }
}
