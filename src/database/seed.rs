// ABOUTME: Demo session seeding for freshly created stores
// ABOUTME: Inserts two sample sessions when the repository holds no sessions yet
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::repositories::SessionRepository;
use crate::errors::DatabaseError;
use brainstorm_core::models::{BrainstormSession, Idea};
use chrono::{DateTime, TimeZone, Utc};
use tracing::{debug, info};

fn demo_date(year: i32, month: u32, day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, 0, 0, 0)
        .single()
        .unwrap_or_else(Utc::now)
}

/// The sessions inserted into an empty store
#[must_use]
pub fn demo_sessions() -> Vec<BrainstormSession> {
    let mut first = BrainstormSession::with_id(0, "Test Session 1", demo_date(2016, 8, 1));
    first.add_idea(Idea {
        name: "Awesome idea".into(),
        description: "Totally awesome idea".into(),
        date_created: demo_date(2016, 8, 1),
    });
    first.add_idea(Idea {
        name: "Another idea".into(),
        description: "Second idea for the first session".into(),
        date_created: demo_date(2016, 8, 1),
    });

    let second = BrainstormSession::with_id(0, "Test Session 2", demo_date(2016, 7, 1));

    vec![first, second]
}

/// Insert the demo sessions if the repository is empty
///
/// Returns how many sessions were inserted (zero when data already exists).
///
/// # Errors
///
/// Returns an error if listing or inserting sessions fails
pub async fn seed_demo_sessions(repository: &dyn SessionRepository) -> Result<usize, DatabaseError> {
    if !repository.list().await?.is_empty() {
        debug!("Session store already has data, skipping demo seed");
        return Ok(0);
    }

    let sessions = demo_sessions();
    for session in &sessions {
        let id = repository.add(session).await?;
        debug!(session.id = id, session.name = %session.name, "Seeded demo session");
    }

    info!(count = sessions.len(), "Seeded demo sessions");
    Ok(sessions.len())
}
