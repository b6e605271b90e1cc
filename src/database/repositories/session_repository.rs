// ABOUTME: SQLite implementation of SessionRepository
// ABOUTME: Delegates to Database session operations and records timing for each call
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SessionRepository;
use crate::database::Database;
use crate::errors::DatabaseError;
use crate::logging::AppLogger;
use async_trait::async_trait;
use brainstorm_core::models::{BrainstormSession, SessionId};
use std::time::Instant;

/// `SQLite` implementation of `SessionRepository`
#[derive(Clone)]
pub struct SqliteSessionRepository {
    db: Database,
}

impl SqliteSessionRepository {
    /// Create a new `SessionRepository` with the given database connection
    #[must_use]
    pub const fn new(db: Database) -> Self {
        Self { db }
    }

    /// Underlying database handle
    #[must_use]
    pub const fn database(&self) -> &Database {
        &self.db
    }
}

/// Log the outcome and duration of a storage call, passing the result through
fn timed<T>(
    operation: &str,
    started: Instant,
    result: Result<T, DatabaseError>,
) -> Result<T, DatabaseError> {
    let duration_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);
    AppLogger::log_database_operation(
        operation,
        "brainstorm_sessions",
        result.is_ok(),
        duration_ms,
    );
    result
}

#[async_trait]
impl SessionRepository for SqliteSessionRepository {
    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DatabaseError> {
        let started = Instant::now();
        timed("get_by_id", started, self.db.session_get(id).await)
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DatabaseError> {
        let started = Instant::now();
        timed("list", started, self.db.session_list().await)
    }

    async fn add(&self, session: &BrainstormSession) -> Result<SessionId, DatabaseError> {
        let started = Instant::now();
        timed("add", started, self.db.session_insert(session).await)
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DatabaseError> {
        let started = Instant::now();
        timed("update", started, self.db.session_replace(session).await)
    }
}
