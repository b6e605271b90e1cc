// ABOUTME: Core types for the brainstorm sessions API
// ABOUTME: Foundation crate with error handling, domain entities, and client models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Brainstorm Core
//!
//! Foundation crate providing shared types for the brainstorm sessions API.
//! This crate is designed to change infrequently, enabling incremental
//! compilation benefits in the workspace.
//!
//! ## Modules
//!
//! - **errors**: Unified error handling with `AppError`, `ErrorCode`, and `DatabaseError`
//! - **models**: Domain entities (`BrainstormSession`, `Idea`) and client-facing shapes
//! - **validation**: Field-level validation errors for inbound request models

/// Unified error handling system with standard error codes and HTTP responses
pub mod errors;

/// Domain entities and client models
pub mod models;

/// Field-level validation errors for request models
pub mod validation;
