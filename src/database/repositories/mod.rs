// ABOUTME: Session repository trait and the factory that selects its backing store
// ABOUTME: Controllers depend on the trait object so storage can be swapped or mocked
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Session Repositories
//!
//! [`SessionRepository`] is the only storage seam the HTTP layer sees. Two
//! implementations exist: [`SqliteSessionRepository`] for durable storage and
//! [`InMemorySessionRepository`] for tests and throwaway runs.

mod in_memory;
mod session_repository;

pub use in_memory::InMemorySessionRepository;
pub use session_repository::SqliteSessionRepository;

use super::Database;
use crate::config::{DatabaseConfig, DatabaseUrl};
use crate::errors::DatabaseError;
use async_trait::async_trait;
use brainstorm_core::models::{BrainstormSession, SessionId};
use std::sync::Arc;
use tracing::info;

/// Storage for brainstorm sessions and their ideas
///
/// Sessions are always read and written whole. `update` replaces the stored
/// state of an existing session, ideas included.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SessionRepository: Send + Sync {
    /// Fetch a session with all of its ideas; `Ok(None)` when no such session exists
    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DatabaseError>;

    /// Fetch every session, newest `date_created` first
    async fn list(&self) -> Result<Vec<BrainstormSession>, DatabaseError>;

    /// Store a new session and return its assigned id
    async fn add(&self, session: &BrainstormSession) -> Result<SessionId, DatabaseError>;

    /// Overwrite an existing session; `DatabaseError::NotFound` if it was never added
    async fn update(&self, session: &BrainstormSession) -> Result<(), DatabaseError>;
}

/// Shared handle used by routes and services
pub type SharedSessionRepository = Arc<dyn SessionRepository>;

/// Build the repository selected by the storage configuration
///
/// # Errors
///
/// Returns an error if the `SQLite` pool cannot be opened or migrated
pub async fn connect_repository(
    config: &DatabaseConfig,
) -> Result<SharedSessionRepository, DatabaseError> {
    if config.url == DatabaseUrl::InProcess {
        info!("Using in-memory session repository");
        return Ok(Arc::new(InMemorySessionRepository::new()));
    }

    let database = Database::new(&config.url).await?;
    if config.auto_migrate {
        database.migrate().await?;
    }

    info!(database.url = %config.url, "Using SQLite session repository");
    Ok(Arc::new(SqliteSessionRepository::new(database)))
}
