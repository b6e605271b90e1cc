// ABOUTME: Domain service layer for session and idea business rules
// ABOUTME: Produces transport-neutral outcomes that the HTTP adapters render
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Domain service layer
//!
//! Services validate input, talk to the [`SessionRepository`](crate::database::repositories::SessionRepository)
//! and report what happened as an [`Outcome`]. Storage failures travel separately
//! as `AppError`, so every `Outcome` is a response the client is meant to see.

/// Listing and adding ideas within a session
pub mod ideas;

/// Listing, creating, and fetching sessions
pub mod sessions;

pub use ideas::IdeasService;
pub use sessions::SessionsService;

use brainstorm_core::models::SessionId;
use brainstorm_core::validation::ValidationErrors;

/// Result of a service operation that did not hit a storage failure
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome<T> {
    /// The operation completed and produced a value
    Success(T),
    /// Input failed validation; storage was not touched
    Invalid(ValidationErrors),
    /// The referenced session does not exist
    SessionNotFound(SessionId),
}

/// Errors reported when a request carried no body at all
#[must_use]
pub fn missing_body() -> ValidationErrors {
    ValidationErrors::single("model", "A request body is required.")
}
