// ABOUTME: System-wide constants and configuration defaults for the brainstorm API
// ABOUTME: Contains service names, route paths, environment variable names, and defaults
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Constants Module
//!
//! Application constants grouped by concern.

/// Service identity used in logs
pub mod service_names {
    /// Name reported by the server binary
    pub const BRAINSTORM_SERVER: &str = "brainstorm-server";
}

/// HTTP route paths
pub mod routes {
    /// Legacy "list ideas" endpoint prefix
    pub const IDEAS_FOR_SESSION: &str = "/api/ideas/forsession";
    /// Typed "list ideas" endpoint prefix, also the `Location` target of typed creates
    pub const IDEAS_FOR_SESSION_TYPED: &str = "/api/ideas/forsessionactionresult";
    /// Legacy "create idea" endpoint
    pub const IDEAS_CREATE: &str = "/api/ideas/create";
    /// Typed "create idea" endpoint
    pub const IDEAS_CREATE_TYPED: &str = "/api/ideas/createactionresult";
    /// Session collection endpoint
    pub const SESSIONS: &str = "/api/sessions";
}

/// Environment variable names
pub mod env_vars {
    /// HTTP listen port
    pub const HTTP_PORT: &str = "HTTP_PORT";
    /// Storage location (`sqlite:` URL or `memory`)
    pub const DATABASE_URL: &str = "DATABASE_URL";
    /// Run schema creation at startup
    pub const AUTO_MIGRATE: &str = "AUTO_MIGRATE";
    /// Insert demo sessions into an empty store at startup
    pub const SEED_DEMO_DATA: &str = "SEED_DEMO_DATA";
    /// Comma-separated CORS origins, or `*`
    pub const CORS_ALLOWED_ORIGINS: &str = "CORS_ALLOWED_ORIGINS";
    /// Deployment environment name
    pub const ENVIRONMENT: &str = "ENVIRONMENT";
}

/// Configuration defaults
pub mod defaults {
    /// Default HTTP listen port
    pub const HTTP_PORT: u16 = 8081;
    /// Default storage location
    pub const DATABASE_URL: &str = "sqlite:./data/brainstorm.db";
    /// Default bind address
    pub const BIND_ADDRESS: &str = "0.0.0.0";
}
