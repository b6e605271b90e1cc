// ABOUTME: Session service for listing, creating, and fetching brainstorm sessions
// ABOUTME: Projects sessions into summaries and validates new session requests
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{missing_body, Outcome};
use crate::database::repositories::SharedSessionRepository;
use crate::errors::AppResult;
use brainstorm_core::models::{BrainstormSession, NewSessionModel, SessionId, SessionSummary};
use tracing::info;

/// Session operations over a session repository
#[derive(Clone)]
pub struct SessionsService {
    repository: SharedSessionRepository,
}

impl SessionsService {
    /// Create a service backed by `repository`
    #[must_use]
    pub fn new(repository: SharedSessionRepository) -> Self {
        Self { repository }
    }

    /// Summaries of every session, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn list_sessions(&self) -> AppResult<Vec<SessionSummary>> {
        let sessions = self.repository.list().await?;
        Ok(sessions.iter().map(SessionSummary::from).collect())
    }

    /// Create an empty session
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn create_session(
        &self,
        model: Option<NewSessionModel>,
    ) -> AppResult<Outcome<BrainstormSession>> {
        let Some(model) = model else {
            return Ok(Outcome::Invalid(missing_body()));
        };
        let name = match model.validate() {
            Ok(name) => name,
            Err(errors) => return Ok(Outcome::Invalid(errors)),
        };

        let mut session = BrainstormSession::new(name);
        session.id = self.repository.add(&session).await?;

        info!(session.id = session.id, session.name = %session.name, "Created session");
        Ok(Outcome::Success(session))
    }

    /// One session with all of its ideas
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn get_session(&self, id: SessionId) -> AppResult<Outcome<BrainstormSession>> {
        Ok(self
            .repository
            .get_by_id(id)
            .await?
            .map_or(Outcome::SessionNotFound(id), Outcome::Success))
    }
}
