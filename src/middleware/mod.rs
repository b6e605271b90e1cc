// ABOUTME: HTTP middleware for request tracing and cross-origin access
// ABOUTME: Provides span-per-request tracing and CORS configuration layers
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

/// CORS layer built from server configuration
pub mod cors;
/// Request spans via `tower-http`
pub mod tracing;

// CORS configuration
pub use cors::setup_cors;

// Request tracing
pub use tracing::{create_request_span, with_request_tracing, REQUEST_ID_HEADER};
