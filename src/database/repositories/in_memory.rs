// ABOUTME: In-process SessionRepository backed by a lock-protected ordered map
// ABOUTME: Mirrors the SQLite repository's id assignment, ordering, and not-found rules
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::SessionRepository;
use crate::errors::DatabaseError;
use async_trait::async_trait;
use brainstorm_core::models::{BrainstormSession, SessionId};
use std::cmp::Reverse;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Store {
    sessions: BTreeMap<SessionId, BrainstormSession>,
    last_id: SessionId,
}

/// Session repository that keeps everything in process memory
#[derive(Default)]
pub struct InMemorySessionRepository {
    store: RwLock<Store>,
}

impl InMemorySessionRepository {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionRepository for InMemorySessionRepository {
    async fn get_by_id(&self, id: SessionId) -> Result<Option<BrainstormSession>, DatabaseError> {
        Ok(self.store.read().await.sessions.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<BrainstormSession>, DatabaseError> {
        let mut sessions: Vec<BrainstormSession> =
            self.store.read().await.sessions.values().cloned().collect();
        sessions.sort_by_key(|s| Reverse((s.date_created, s.id)));
        Ok(sessions)
    }

    async fn add(&self, session: &BrainstormSession) -> Result<SessionId, DatabaseError> {
        let mut store = self.store.write().await;
        store.last_id += 1;
        let id = store.last_id;

        let mut stored = session.clone();
        stored.id = id;
        store.sessions.insert(id, stored);
        Ok(id)
    }

    async fn update(&self, session: &BrainstormSession) -> Result<(), DatabaseError> {
        let mut store = self.store.write().await;
        match store.sessions.get_mut(&session.id) {
            Some(existing) => {
                existing.clone_from(session);
                Ok(())
            }
            None => Err(DatabaseError::NotFound {
                entity_type: "Session",
                entity_id: session.id.to_string(),
            }),
        }
    }
}
