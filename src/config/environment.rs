// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Environment-based configuration management

use super::database::{DatabaseConfig, DatabaseUrl};
use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::env;
use std::fmt::{Display, Formatter, Result as FmtResult};
use tracing::info;

/// Environment type for deployment-specific behavior
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Automated test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Self::Development => write!(f, "development"),
            Self::Production => write!(f, "production"),
            Self::Testing => write!(f, "testing"),
        }
    }
}

/// CORS configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CorsConfig {
    /// Allowed origins; `["*"]` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec!["*".into()],
        }
    }
}

impl CorsConfig {
    /// True when every origin is accepted
    #[must_use]
    pub fn allows_any(&self) -> bool {
        self.allowed_origins.iter().any(|origin| origin == "*")
    }
}

/// Main server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// HTTP listen port
    pub http_port: u16,
    /// Storage configuration
    pub database: DatabaseConfig,
    /// Insert demo sessions into an empty store at startup
    pub seed_demo_data: bool,
    /// CORS settings
    pub cors: CorsConfig,
    /// Deployment environment
    pub environment: Environment,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            http_port: defaults::HTTP_PORT,
            database: DatabaseConfig::default(),
            seed_demo_data: false,
            cors: CorsConfig::default(),
            environment: Environment::default(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds a value that cannot be parsed
    pub fn from_env() -> AppResult<Self> {
        info!("Loading configuration from environment variables");
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if any variable holds a value that cannot be parsed
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let http_port = match lookup(env_vars::HTTP_PORT) {
            Some(value) => value.trim().parse::<u16>().map_err(|e| {
                AppError::new(
                    ErrorCode::ConfigInvalid,
                    format!("Invalid {} value '{value}'", env_vars::HTTP_PORT),
                )
                .with_source(e)
            })?,
            None => defaults::HTTP_PORT,
        };

        let seed_demo_data = lookup(env_vars::SEED_DEMO_DATA)
            .map_or(Ok(false), |v| parse_bool(env_vars::SEED_DEMO_DATA, &v))?;

        let cors = lookup(env_vars::CORS_ALLOWED_ORIGINS)
            .map(|v| CorsConfig {
                allowed_origins: parse_origins(&v),
            })
            .filter(|cors| !cors.allowed_origins.is_empty())
            .unwrap_or_default();

        let environment = lookup(env_vars::ENVIRONMENT)
            .map(|v| Environment::from_str_or_default(&v))
            .unwrap_or_default();

        Ok(Self {
            http_port,
            database: DatabaseConfig::from_lookup(&lookup)?,
            seed_demo_data,
            cors,
            environment,
        })
    }

    /// Override the storage location
    ///
    /// # Errors
    ///
    /// Returns an error if the URL cannot be parsed
    pub fn with_database_url(mut self, url: &str) -> AppResult<Self> {
        self.database.url = DatabaseUrl::parse_url(url)?;
        Ok(self)
    }

    /// Get a summary of the configuration for logging
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Brainstorm Server Configuration:\n\
             - HTTP Port: {}\n\
             - Database: {}\n\
             - Auto Migrate: {}\n\
             - Seed Demo Data: {}\n\
             - CORS Origins: {}\n\
             - Environment: {}",
            self.http_port,
            self.database.url,
            self.database.auto_migrate,
            self.seed_demo_data,
            self.cors.allowed_origins.join(", "),
            self.environment,
        )
    }
}

/// Parse a boolean flag, accepting `true/false`, `1/0`, `yes/no`
pub(crate) fn parse_bool(key: &str, value: &str) -> AppResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(AppError::new(
            ErrorCode::ConfigInvalid,
            format!("Invalid {key} value '{other}'"),
        )),
    }
}

/// Parse comma-separated CORS origins
fn parse_origins(origins_str: &str) -> Vec<String> {
    if origins_str.trim() == "*" {
        vec!["*".to_owned()]
    } else {
        origins_str
            .split(',')
            .map(|s| s.trim().to_owned())
            .filter(|s| !s.is_empty())
            .collect()
    }
}
