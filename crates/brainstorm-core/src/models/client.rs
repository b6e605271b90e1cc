// ABOUTME: Client-facing request and response shapes for the brainstorm API
// ABOUTME: IdeaDto/SessionSummary projections and validated NewIdea/NewSession request models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::session::{BrainstormSession, Idea, SessionId};
use crate::validation::ValidationErrors;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Read-only projection of an idea for API responses
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDto {
    /// 1-based position of the idea within its session
    pub id: i64,
    /// Idea title
    pub name: String,
    /// Idea description
    pub description: String,
    /// When the idea was added
    pub date_created: DateTime<Utc>,
}

impl IdeaDto {
    /// Project a single idea found at `index` (0-based) in its session
    #[must_use]
    pub fn project(index: usize, idea: &Idea) -> Self {
        Self {
            id: i64::try_from(index).map_or(i64::MAX, |i| i + 1),
            name: idea.name.clone(),
            description: idea.description.clone(),
            date_created: idea.date_created,
        }
    }

    /// Project every idea of a session, preserving insertion order
    #[must_use]
    pub fn from_session(session: &BrainstormSession) -> Vec<Self> {
        session
            .ideas()
            .iter()
            .enumerate()
            .map(|(index, idea)| Self::project(index, idea))
            .collect()
    }
}

/// Session listing entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    /// Session id
    pub id: SessionId,
    /// Session name
    pub name: String,
    /// When the session was created
    pub date_created: DateTime<Utc>,
    /// Number of ideas in the session
    pub idea_count: usize,
}

impl From<&BrainstormSession> for SessionSummary {
    fn from(session: &BrainstormSession) -> Self {
        Self {
            id: session.id,
            name: session.name.clone(),
            date_created: session.date_created,
            idea_count: session.idea_count(),
        }
    }
}

/// Request body for adding an idea to a session
///
/// Every field is optional on the wire so that missing fields surface as
/// validation errors instead of deserialization failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewIdeaModel {
    /// Target session
    #[serde(default)]
    pub session_id: Option<SessionId>,
    /// Idea title (required)
    #[serde(default)]
    pub name: Option<String>,
    /// Idea description (required)
    #[serde(default)]
    pub description: Option<String>,
}

/// A `NewIdeaModel` that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidNewIdea {
    /// Target session
    pub session_id: SessionId,
    /// Idea title
    pub name: String,
    /// Idea description
    pub description: String,
}

impl NewIdeaModel {
    /// Build a fully populated model
    pub fn new(
        session_id: SessionId,
        name: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            session_id: Some(session_id),
            name: Some(name.into()),
            description: Some(description.into()),
        }
    }

    /// Check required fields
    ///
    /// # Errors
    ///
    /// Returns every failing field when `sessionId`, `name` or `description` is
    /// missing, or when a text field is blank
    pub fn validate(&self) -> Result<ValidNewIdea, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        if self.session_id.is_none() {
            errors.add("sessionId", "The sessionId field is required.");
        }
        errors.require_text("name", self.name.as_deref());
        errors.require_text("description", self.description.as_deref());
        errors.into_result()?;

        match (self.session_id, &self.name, &self.description) {
            (Some(session_id), Some(name), Some(description)) => Ok(ValidNewIdea {
                session_id,
                name: name.clone(),
                description: description.clone(),
            }),
            _ => Err(ValidationErrors::single("model", "The request model is incomplete.")),
        }
    }
}

/// Request body for creating a session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewSessionModel {
    /// Session name (required)
    #[serde(default)]
    pub session_name: Option<String>,
}

impl NewSessionModel {
    /// Build a populated model
    pub fn new(session_name: impl Into<String>) -> Self {
        Self {
            session_name: Some(session_name.into()),
        }
    }

    /// Check required fields and return the trimmed session name
    ///
    /// # Errors
    ///
    /// Returns a `sessionName` error when the name is missing or blank
    pub fn validate(&self) -> Result<String, ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.require_text("sessionName", self.session_name.as_deref());
        errors.into_result()?;

        Ok(self
            .session_name
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_owned())
    }
}
