// ABOUTME: Brainstorm session and idea entities persisted by the session repository
// ABOUTME: A session owns an append-only, insertion-ordered collection of ideas
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Storage-assigned session identifier
pub type SessionId = i64;

/// A single brainstorming idea, owned by exactly one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Idea {
    /// Short idea title
    pub name: String,
    /// Free-form description
    pub description: String,
    /// When the idea was added
    pub date_created: DateTime<Utc>,
}

impl Idea {
    /// Create an idea stamped with the current time
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            date_created: Utc::now(),
        }
    }
}

/// A named brainstorming session and its ideas
///
/// The idea collection is private: callers read it through [`Self::ideas`] and grow
/// it through [`Self::add_idea`], so it can never shrink or be reordered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrainstormSession {
    /// Storage-assigned id (0 until the session has been added)
    pub id: SessionId,
    /// Display name
    pub name: String,
    /// When the session was created
    pub date_created: DateTime<Utc>,
    #[serde(default)]
    ideas: Vec<Idea>,
}

impl BrainstormSession {
    /// Create an unsaved session with no ideas, stamped with the current time
    pub fn new(name: impl Into<String>) -> Self {
        Self::with_id(0, name, Utc::now())
    }

    /// Create an empty session with a known id and creation time
    pub fn with_id(id: SessionId, name: impl Into<String>, date_created: DateTime<Utc>) -> Self {
        Self {
            id,
            name: name.into(),
            date_created,
            ideas: Vec::new(),
        }
    }

    /// Rebuild a session from stored state; `ideas` must already be in insertion order
    #[must_use]
    pub fn from_parts(
        id: SessionId,
        name: String,
        date_created: DateTime<Utc>,
        ideas: Vec<Idea>,
    ) -> Self {
        Self {
            id,
            name,
            date_created,
            ideas,
        }
    }

    /// Ideas in insertion order
    #[must_use]
    pub fn ideas(&self) -> &[Idea] {
        &self.ideas
    }

    /// Number of ideas in the session
    #[must_use]
    pub fn idea_count(&self) -> usize {
        self.ideas.len()
    }

    /// Append an idea to the end of the session
    ///
    /// No validation happens here; persistence is a separate repository call.
    pub fn add_idea(&mut self, idea: Idea) {
        self.ideas.push(idea);
    }
}
