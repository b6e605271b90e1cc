// ABOUTME: Configuration management module for centralized server settings
// ABOUTME: Handles environment-based server, storage, and CORS configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Configuration module for the brainstorm server
//!
//! Configuration is environment-only: every setting comes from an environment
//! variable with a default, and the binary can override a few of them from the
//! command line.

/// Storage location configuration
pub mod database;
/// Environment and server configuration
pub mod environment;

pub use database::{DatabaseConfig, DatabaseUrl};
pub use environment::{CorsConfig, Environment, ServerConfig};
