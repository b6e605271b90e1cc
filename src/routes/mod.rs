// ABOUTME: Route module organization for the brainstorm server HTTP endpoints
// ABOUTME: Groups idea, session, and health routes plus the shared response adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Route module for the brainstorm server
//!
//! Each domain module contains route definitions and thin handlers that
//! delegate to the service layer.

/// Health check and readiness routes
pub mod health;
/// Idea listing and creation routes
pub mod ideas;
/// `ObjectResult` and `ActionResult` response adapters
pub mod results;
/// Session listing, creation, and detail routes
pub mod sessions;

pub use health::HealthRoutes;
pub use ideas::{IdeasController, IdeasRoutes};
pub use results::{ActionResult, ObjectResult};
pub use sessions::{SessionsController, SessionsRoutes};
