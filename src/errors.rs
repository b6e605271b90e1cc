// ABOUTME: Re-exports the shared error types from brainstorm-core
// ABOUTME: Gives server modules a single crate::errors import path
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Error Handling
//!
//! `AppError`, `ErrorCode` and `DatabaseError` live in `brainstorm-core` so the
//! domain crate and the server share one error vocabulary.

pub use brainstorm_core::errors::{
    AppError, AppResult, DatabaseError, ErrorCode, ErrorResponse, ErrorResponseDetails,
};
pub use brainstorm_core::validation::ValidationErrors;
