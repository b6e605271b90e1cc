// ABOUTME: Storage configuration types for SQLite and in-memory session stores
// ABOUTME: Parses DATABASE_URL into a typed location and controls startup migration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use crate::constants::{defaults, env_vars};
use crate::errors::{AppError, AppResult, ErrorCode};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};
use std::path::PathBuf;

/// Type-safe storage location
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DatabaseUrl {
    /// `SQLite` database with file path
    SQLite {
        /// Path to `SQLite` database file
        path: PathBuf,
    },
    /// In-memory `SQLite` (for testing)
    Memory,
    /// Plain in-process map, no SQL involved
    InProcess,
}

impl DatabaseUrl {
    /// Parse from string with validation
    ///
    /// Accepts `sqlite:<path>`, `sqlite::memory:`, `memory`, or a bare file path.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is empty or names an unsupported scheme
    pub fn parse_url(s: &str) -> AppResult<Self> {
        let s = s.trim();
        if s.is_empty() {
            return Err(AppError::new(
                ErrorCode::ConfigInvalid,
                "Database URL cannot be empty",
            ));
        }

        if s == "memory" {
            Ok(Self::InProcess)
        } else if let Some(path_str) = s.strip_prefix("sqlite:") {
            if path_str == ":memory:" {
                Ok(Self::Memory)
            } else {
                Ok(Self::SQLite {
                    path: PathBuf::from(path_str.trim_start_matches("//")),
                })
            }
        } else if s.contains("://") {
            Err(AppError::new(
                ErrorCode::ConfigInvalid,
                format!("Unsupported database URL scheme: {s}"),
            ))
        } else {
            // Fallback: treat as SQLite file path
            Ok(Self::SQLite {
                path: PathBuf::from(s),
            })
        }
    }

    /// Convert to a `SQLx` connection string (`None` for the in-process store)
    #[must_use]
    pub fn to_connection_string(&self) -> Option<String> {
        match self {
            Self::SQLite { path } => Some(format!("sqlite:{}", path.display())),
            Self::Memory => Some("sqlite::memory:".into()),
            Self::InProcess => None,
        }
    }

    /// Check if this is an in-memory `SQLite` database
    #[must_use]
    pub const fn is_memory(&self) -> bool {
        matches!(self, Self::Memory)
    }
}

impl Default for DatabaseUrl {
    fn default() -> Self {
        Self::SQLite {
            path: PathBuf::from(
                defaults::DATABASE_URL
                    .strip_prefix("sqlite:")
                    .unwrap_or(defaults::DATABASE_URL),
            ),
        }
    }
}

impl Display for DatabaseUrl {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self.to_connection_string() {
            Some(url) => write!(f, "{url}"),
            None => write!(f, "memory"),
        }
    }
}

/// Storage connection and management configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Storage location
    pub url: DatabaseUrl,
    /// Create the schema on startup
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: DatabaseUrl::default(),
            auto_migrate: true,
        }
    }
}

impl DatabaseConfig {
    /// Load storage configuration through a variable lookup
    ///
    /// # Errors
    ///
    /// Returns an error if `DATABASE_URL` or `AUTO_MIGRATE` is invalid
    pub fn from_lookup(lookup: &impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let url = lookup(env_vars::DATABASE_URL)
            .map_or_else(|| Ok(DatabaseUrl::default()), |v| DatabaseUrl::parse_url(&v))?;
        let auto_migrate = lookup(env_vars::AUTO_MIGRATE)
            .map_or(Ok(true), |v| super::environment::parse_bool(env_vars::AUTO_MIGRATE, &v))?;

        Ok(Self { url, auto_migrate })
    }
}
