// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variable parsing with sensible defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Environment-based configuration management.
//!
//! All settings come from environment variables (optionally seeded from a
//! `.env` file) with defaults suitable for local development.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::{info, warn};

/// Default HTTP port when `HTTP_PORT` is unset
pub const DEFAULT_HTTP_PORT: u16 = 8081;

/// Default database URL when `DATABASE_URL` is unset
pub const DEFAULT_DATABASE_URL: &str = "sqlite:./data/gymtime.db";

/// Strongly typed log level configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Informational messages and above
    #[default]
    Info,
    /// Debug output and above
    Debug,
    /// Everything
    Trace,
}

impl LogLevel {
    /// Convert to `tracing::Level`
    pub fn to_tracing_level(&self) -> tracing::Level {
        match self {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }

    /// Parse from string with fallback
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => LogLevel::Error,
            "warn" => LogLevel::Warn,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Database connection configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database connection URL (sqlite file path or `sqlite::memory:`)
    pub url: String,
    /// Run schema migrations on startup
    pub auto_migrate: bool,
}

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP port for the REST API
    pub http_port: u16,
    /// Logging verbosity
    pub log_level: LogLevel,
    /// Database settings
    pub database: DatabaseConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        // Load .env file if it exists
        if let Err(e) = dotenvy::dotenv() {
            warn!("No .env file found or failed to load: {}", e);
        }

        let config = Self {
            http_port: env_var_or("HTTP_PORT", &DEFAULT_HTTP_PORT.to_string())?
                .parse()
                .context("Invalid HTTP_PORT value")?,
            log_level: LogLevel::from_str_or_default(&env_var_or("RUST_LOG", "info")?),
            database: DatabaseConfig {
                url: env_var_or("DATABASE_URL", DEFAULT_DATABASE_URL)?,
                auto_migrate: env_var_or("AUTO_MIGRATE", "true")?
                    .parse()
                    .context("Invalid AUTO_MIGRATE value")?,
            },
        };

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for basic sanity
    fn validate(&self) -> Result<()> {
        if self.database.url.trim().is_empty() {
            anyhow::bail!("DATABASE_URL must not be empty");
        }
        Ok(())
    }

    /// Summary string for startup logging
    pub fn summary(&self) -> String {
        format!(
            "http_port={}, log_level={}, database_url={}",
            self.http_port, self.log_level, self.database.url
        )
    }
}

/// Get environment variable or default value
fn env_var_or(key: &str, default: &str) -> Result<String> {
    Ok(env::var(key).unwrap_or_else(|_| default.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_from_str() {
        assert_eq!(LogLevel::from_str_or_default("error"), LogLevel::Error);
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("bogus"), LogLevel::Info);
    }

    #[test]
    fn test_log_level_display_roundtrip() {
        for level in [
            LogLevel::Error,
            LogLevel::Warn,
            LogLevel::Info,
            LogLevel::Debug,
            LogLevel::Trace,
        ] {
            assert_eq!(LogLevel::from_str_or_default(&level.to_string()), level);
        }
    }

    #[test]
    fn test_validate_rejects_empty_database_url() {
        let config = ServerConfig {
            http_port: DEFAULT_HTTP_PORT,
            log_level: LogLevel::Info,
            database: DatabaseConfig {
                url: "  ".into(),
                auto_migrate: true,
            },
        };
        assert!(config.validate().is_err());
    }
}
