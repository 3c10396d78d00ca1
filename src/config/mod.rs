// ABOUTME: Configuration module for server settings
// ABOUTME: Re-exports the environment-backed configuration types
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

//! Server configuration loaded from the process environment.

pub mod environment;

pub use environment::{LogLevel, ServerConfig};
