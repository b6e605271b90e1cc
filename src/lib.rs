// ABOUTME: Main library entry point for the brainstorm sessions API
// ABOUTME: Wires configuration, storage, services, and HTTP routes into one crate
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![deny(unsafe_code)]

//! # Brainstorm Server
//!
//! An HTTP API for brainstorming: sessions hold an ordered list of ideas, and
//! clients list ideas of a session or append new ones.
//!
//! ## Architecture
//!
//! - **Models** (`brainstorm-core`): sessions, ideas, request and response shapes
//! - **Database**: the `SessionRepository` trait with `SQLite` and in-memory stores
//! - **Services**: validation and read-modify-write of sessions
//! - **Routes**: axum handlers rendering service outcomes as HTTP responses
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use brainstorm_server::config::environment::ServerConfig;
//! use brainstorm_server::errors::AppResult;
//! use brainstorm_server::server::{prepare_repository, BrainstormServer};
//!
//! #[tokio::main]
//! async fn main() -> AppResult<()> {
//!     let config = ServerConfig::from_env()?;
//!     let repository = prepare_repository(&config).await?;
//!     BrainstormServer::new(config, repository).run().await
//! }
//! ```

/// Environment-based configuration
pub mod config;

/// Application constants
pub mod constants;

/// Session storage
pub mod database;

/// Error types shared with `brainstorm-core`
pub mod errors;

/// Structured logging setup
pub mod logging;

/// HTTP middleware layers
pub mod middleware;

/// HTTP routes and response adapters
pub mod routes;

/// Server assembly and startup
pub mod server;

/// Session and idea business rules
pub mod services;

pub use brainstorm_core::models;
