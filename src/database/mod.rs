// ABOUTME: SQLite connection management and schema migrations for session storage
// ABOUTME: Owns the sqlx pool shared by the SQLite session repository
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Database Management
//!
//! SQLite-backed storage for brainstorm sessions. The [`Database`] handle owns the
//! connection pool and schema; row-level operations live in the `sessions`
//! submodule and are exposed to the rest of the server through
//! [`repositories::SessionRepository`].

mod sessions;

/// Repository trait and its SQLite and in-memory implementations
pub mod repositories;
/// Demo data for empty stores
pub mod seed;

use crate::config::DatabaseUrl;
use crate::errors::DatabaseError;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::fs;
use tracing::{debug, info};

/// Pool settings for a `SQLite` location
///
/// Every in-memory connection is its own database, so the in-memory pool holds
/// exactly one connection and never lets it idle out or expire.
fn pool_options(url: &DatabaseUrl) -> SqlitePoolOptions {
    if url.is_memory() {
        SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(5)
    }
}

/// Database manager for session storage
#[derive(Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Open a connection pool for a `SQLite` location
    ///
    /// File databases are created if missing, including their parent directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the location is not `SQLite`-backed or the pool cannot connect
    pub async fn new(url: &DatabaseUrl) -> Result<Self, DatabaseError> {
        let connection_string =
            url.to_connection_string()
                .ok_or_else(|| DatabaseError::ConnectionError {
                    context: format!("{url} is not a SQLite location"),
                })?;

        if let DatabaseUrl::SQLite { path } = url {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| DatabaseError::ConnectionError {
                    context: format!("Failed to create {}: {e}", parent.display()),
                })?;
            }
        }

        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if url.is_memory() {
            connection_string
        } else {
            format!("{connection_string}?mode=rwc")
        };

        let options = pool_options(url);
        let max_connections = options.get_max_connections();

        let pool = options
            .connect(&connection_options)
            .await
            .map_err(|e| DatabaseError::ConnectionError {
                context: format!("Failed to open {url}: {e}"),
            })?;

        debug!(database.url = %url, max_connections, "Opened SQLite pool");
        Ok(Self { pool })
    }

    /// Get a reference to the database pool for advanced operations
    #[must_use]
    pub const fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Create the session tables if they do not exist
    ///
    /// # Errors
    ///
    /// Returns an error if a schema statement fails
    pub async fn migrate(&self) -> Result<(), DatabaseError> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS brainstorm_sessions (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                date_created TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationError {
            context: format!("brainstorm_sessions: {e}"),
        })?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS ideas (
                session_id INTEGER NOT NULL REFERENCES brainstorm_sessions(id) ON DELETE CASCADE,
                position INTEGER NOT NULL,
                name TEXT NOT NULL,
                description TEXT NOT NULL,
                date_created TEXT NOT NULL,
                PRIMARY KEY (session_id, position)
            )
            ",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationError {
            context: format!("ideas: {e}"),
        })?;

        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_brainstorm_sessions_created ON brainstorm_sessions(date_created)",
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DatabaseError::MigrationError {
            context: format!("idx_brainstorm_sessions_created: {e}"),
        })?;

        info!("Session schema is up to date");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_pool_keeps_its_only_connection() {
        let options = pool_options(&DatabaseUrl::Memory);

        assert_eq!(options.get_max_connections(), 1);
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);
    }

    #[test]
    fn test_file_pool_allows_several_connections() {
        let url = DatabaseUrl::SQLite {
            path: "data/sessions.db".into(),
        };

        assert_eq!(pool_options(&url).get_max_connections(), 5);
    }

    #[tokio::test]
    async fn test_open_memory_database_uses_pinned_pool() {
        let db = Database::new(&DatabaseUrl::Memory).await.unwrap();
        db.migrate().await.unwrap();

        let options = db.pool().options();
        assert_eq!(options.get_min_connections(), 1);
        assert_eq!(options.get_idle_timeout(), None);
        assert_eq!(options.get_max_lifetime(), None);

        let tables: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'brainstorm_sessions'",
        )
        .fetch_one(db.pool())
        .await
        .unwrap();
        assert_eq!(tables, 1);
    }
}
