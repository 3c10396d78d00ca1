// ABOUTME: Shared test helpers for integration tests
// ABOUTME: Exports the Axum request/response testing utilities
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 GymTime

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

pub mod axum_test;
