// ABOUTME: Idea service listing and appending ideas within brainstorm sessions
// ABOUTME: Validates new ideas before storage access and persists sessions whole
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::{missing_body, Outcome};
use crate::database::repositories::SharedSessionRepository;
use crate::errors::AppResult;
use brainstorm_core::models::{BrainstormSession, Idea, IdeaDto, NewIdeaModel, SessionId};
use tracing::{debug, info};

/// Idea operations over a session repository
#[derive(Clone)]
pub struct IdeasService {
    repository: SharedSessionRepository,
}

impl IdeasService {
    /// Create a service backed by `repository`
    #[must_use]
    pub fn new(repository: SharedSessionRepository) -> Self {
        Self { repository }
    }

    /// Ideas of a session, in insertion order
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn ideas_for_session(
        &self,
        session_id: SessionId,
    ) -> AppResult<Outcome<Vec<IdeaDto>>> {
        let Some(session) = self.repository.get_by_id(session_id).await? else {
            debug!(session.id = session_id, "Session not found");
            return Ok(Outcome::SessionNotFound(session_id));
        };

        Ok(Outcome::Success(IdeaDto::from_session(&session)))
    }

    /// Append an idea to a session and persist the session
    ///
    /// The model is validated before the repository is touched. On success the
    /// session is fetched once and updated once; nothing is written otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn create_idea(
        &self,
        model: Option<NewIdeaModel>,
    ) -> AppResult<Outcome<BrainstormSession>> {
        let Some(model) = model else {
            return Ok(Outcome::Invalid(missing_body()));
        };
        let valid = match model.validate() {
            Ok(valid) => valid,
            Err(errors) => {
                debug!(%errors, "Rejected new idea");
                return Ok(Outcome::Invalid(errors));
            }
        };

        let Some(mut session) = self.repository.get_by_id(valid.session_id).await? else {
            debug!(session.id = valid.session_id, "Session not found");
            return Ok(Outcome::SessionNotFound(valid.session_id));
        };

        session.add_idea(Idea::new(valid.name, valid.description));
        self.repository.update(&session).await?;

        info!(
            session.id = session.id,
            idea.count = session.idea_count(),
            "Added idea to session"
        );
        Ok(Outcome::Success(session))
    }
}
