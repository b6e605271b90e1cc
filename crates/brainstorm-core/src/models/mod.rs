// ABOUTME: Domain entities and client-facing models for brainstorm sessions
// ABOUTME: Re-exports BrainstormSession, Idea, IdeaDto and the request models
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Data Models
//!
//! - `BrainstormSession` / `Idea`: persisted entities. A session owns its ideas and
//!   only ever grows them through [`BrainstormSession::add_idea`].
//! - `IdeaDto` / `SessionSummary`: read-only projections built per response.
//! - `NewIdeaModel` / `NewSessionModel`: inbound request bodies with validation.

mod client;
mod session;

pub use client::{IdeaDto, NewIdeaModel, NewSessionModel, SessionSummary, ValidNewIdea};
pub use session::{BrainstormSession, Idea, SessionId};
