// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides quiet logging, repository builders, and fixture sessions
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence
#![allow(
    dead_code,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::must_use_candidate
)]
//! Shared test utilities for `brainstorm_server`

use anyhow::Result;
use async_trait::async_trait;
use brainstorm_server::{
    config::{environment::ServerConfig, DatabaseUrl},
    database::{
        repositories::{
            InMemorySessionRepository, SessionRepository, SharedSessionRepository,
            SqliteSessionRepository,
        },
        Database,
    },
    errors::DatabaseError,
    models::{BrainstormSession, Idea, SessionId},
    server::build_router,
};
use chrono::{DateTime, TimeZone, Utc};
use std::sync::{Arc, Once};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        // Check for TEST_LOG environment variable to control test logging level
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            Ok("WARN" | "ERROR") | _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Fixed timestamp helper
pub fn at(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0).unwrap()
}

/// Migrated in-memory `SQLite` database
pub async fn create_test_database() -> Result<Database> {
    init_test_logging();
    let database = Database::new(&DatabaseUrl::Memory).await?;
    database.migrate().await?;
    Ok(database)
}

/// `SQLite`-backed repository over an in-memory database
pub async fn create_sqlite_repository() -> Result<SqliteSessionRepository> {
    Ok(SqliteSessionRepository::new(create_test_database().await?))
}

/// Empty in-process repository
pub fn create_in_memory_repository() -> InMemorySessionRepository {
    init_test_logging();
    InMemorySessionRepository::new()
}

/// Session "Test One" dated 2016-07-02 holding one idea named "One"
pub fn test_session() -> BrainstormSession {
    let mut session = BrainstormSession::with_id(0, "Test One", at(2016, 7, 2));
    session.add_idea(Idea {
        name: "One".to_owned(),
        description: "One description".to_owned(),
        date_created: at(2016, 7, 2),
    });
    session
}

/// Repository pre-loaded with [`test_session`]; returns the repository and the session id
pub async fn repository_with_test_session() -> Result<(SharedSessionRepository, i64)> {
    let repository: SharedSessionRepository = Arc::new(create_in_memory_repository());
    let id = repository.add(&test_session()).await?;
    Ok((repository, id))
}

/// Full application router over `repository` with default configuration
pub fn test_router(repository: &SharedSessionRepository) -> axum::Router {
    build_router(repository, &ServerConfig::default())
}

/// Repository whose every call fails, for storage error propagation
pub struct FailingRepository;

#[async_trait]
impl SessionRepository for FailingRepository {
    async fn get_by_id(&self, _id: SessionId) -> Result<Option<BrainstormSession>, DatabaseError> {
        Err(DatabaseError::ConnectionError {
            context: "database is locked".to_owned(),
        })
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DatabaseError> {
        Err(DatabaseError::ConnectionError {
            context: "database is locked".to_owned(),
        })
    }

    async fn add(&self, _session: &BrainstormSession) -> Result<SessionId, DatabaseError> {
        Err(DatabaseError::QueryError {
            context: "read-only".to_owned(),
        })
    }

    async fn update(&self, _session: &BrainstormSession) -> Result<(), DatabaseError> {
        Err(DatabaseError::QueryError {
            context: "read-only".to_owned(),
        })
    }
}
