// ABOUTME: Integration tests for the SQLite and in-memory session repositories
// ABOUTME: Checks fetch, list ordering, add, full-overwrite update, and file persistence
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
#![allow(missing_docs)]

mod common;

use brainstorm_server::{
    config::{DatabaseConfig, DatabaseUrl},
    database::{
        repositories::{connect_repository, SessionRepository, SqliteSessionRepository},
        seed::seed_demo_sessions,
        Database,
    },
    errors::DatabaseError,
    models::{BrainstormSession, Idea},
};
use common::{at, create_in_memory_repository, create_sqlite_repository, test_session};
use tempfile::TempDir;

/// Run the same behavioral checks against any repository
async fn exercise_repository(repository: &dyn SessionRepository) {
    // Unknown ids are absent, not errors
    assert!(repository.get_by_id(999).await.unwrap().is_none());

    let older = repository
        .add(&BrainstormSession::with_id(0, "Older", at(2016, 7, 1)))
        .await
        .unwrap();
    let newer = repository.add(&test_session()).await.unwrap();
    assert_ne!(older, newer);

    // Full session comes back, ideas included
    let fetched = repository.get_by_id(newer).await.unwrap().unwrap();
    assert_eq!(fetched.id, newer);
    assert_eq!(fetched.name, "Test One");
    assert_eq!(fetched.date_created, at(2016, 7, 2));
    assert_eq!(fetched.ideas(), test_session().ideas());

    // Newest first
    let names: Vec<String> = repository
        .list()
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Test One".to_owned(), "Older".to_owned()]);

    // Update overwrites the whole session, preserving idea order
    let mut session = fetched;
    session.add_idea(Idea::new("Two", "second"));
    session.add_idea(Idea::new("Three", "third"));
    repository.update(&session).await.unwrap();

    let updated = repository.get_by_id(newer).await.unwrap().unwrap();
    let idea_names: Vec<&str> = updated.ideas().iter().map(|i| i.name.as_str()).collect();
    assert_eq!(idea_names, vec!["One", "Two", "Three"]);
    assert_eq!(updated, session);

    // Updating a session that was never added
    let ghost = BrainstormSession::with_id(4242, "Ghost", at(2016, 1, 1));
    let error = repository.update(&ghost).await.unwrap_err();
    assert!(matches!(error, DatabaseError::NotFound { .. }));
}

// ============================================================================
// Behavior shared by both implementations
// ============================================================================

#[tokio::test]
async fn test_sqlite_repository_semantics() {
    let repository = create_sqlite_repository().await.unwrap();
    exercise_repository(&repository).await;
}

#[tokio::test]
async fn test_in_memory_repository_semantics() {
    let repository = create_in_memory_repository();
    exercise_repository(&repository).await;
}

// ============================================================================
// SQLite specifics
// ============================================================================

#[tokio::test]
async fn test_sqlite_add_persists_initial_ideas() {
    let repository = create_sqlite_repository().await.unwrap();
    let mut session = BrainstormSession::with_id(0, "Seeded", at(2016, 8, 1));
    session.add_idea(Idea::new("A", "a"));
    session.add_idea(Idea::new("B", "b"));

    let id = repository.add(&session).await.unwrap();
    let stored = repository.get_by_id(id).await.unwrap().unwrap();

    assert_eq!(stored.idea_count(), 2);
    assert_eq!(stored.ideas()[0].name, "A");
    assert_eq!(stored.ideas()[1].name, "B");
}

#[tokio::test]
async fn test_sqlite_file_database_survives_reopen() {
    common::init_test_logging();
    let dir = TempDir::new().unwrap();
    let url = DatabaseUrl::SQLite {
        path: dir.path().join("nested").join("brainstorm.db"),
    };

    let id = {
        let database = Database::new(&url).await.unwrap();
        database.migrate().await.unwrap();
        let repository = SqliteSessionRepository::new(database);
        let id = repository.add(&test_session()).await.unwrap();
        repository.database().pool().close().await;
        id
    };

    let database = Database::new(&url).await.unwrap();
    database.migrate().await.unwrap();
    let repository = SqliteSessionRepository::new(database);

    let stored = repository.get_by_id(id).await.unwrap().unwrap();
    assert_eq!(stored.name, "Test One");
    assert_eq!(stored.idea_count(), 1);
}

#[tokio::test]
async fn test_missing_schema_surfaces_as_error() {
    common::init_test_logging();
    let database = Database::new(&DatabaseUrl::Memory).await.unwrap();
    let repository = SqliteSessionRepository::new(database);

    assert!(repository.list().await.is_err());
}

// ============================================================================
// Repository selection and seeding
// ============================================================================

#[tokio::test]
async fn test_connect_repository_selects_backend() {
    common::init_test_logging();
    for url in [DatabaseUrl::InProcess, DatabaseUrl::Memory] {
        let config = DatabaseConfig {
            url,
            auto_migrate: true,
        };
        let repository = connect_repository(&config).await.unwrap();

        assert_eq!(seed_demo_sessions(repository.as_ref()).await.unwrap(), 2);
        let sessions = repository.list().await.unwrap();
        assert_eq!(sessions[0].name, "Test Session 1");
        assert_eq!(sessions[0].idea_count(), 2);
    }
}
