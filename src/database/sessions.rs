// ABOUTME: SQL operations for brainstorm sessions and their ideas
// ABOUTME: Reads whole sessions and rewrites them transactionally on update
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::Database;
use crate::errors::DatabaseError;
use brainstorm_core::models::{BrainstormSession, Idea, SessionId};
use chrono::{DateTime, SecondsFormat, Utc};
use sqlx::{sqlite::SqliteRow, Row, Sqlite, Transaction};

/// Fixed-width RFC 3339 so that text ordering matches time ordering
fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

fn parse_timestamp(column: &str, value: &str) -> Result<DateTime<Utc>, DatabaseError> {
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|e| DatabaseError::InvalidData {
            context: format!("{column} '{value}': {e}"),
        })
}

impl Database {
    /// Load one session with its ideas
    pub(crate) async fn session_get(
        &self,
        id: SessionId,
    ) -> Result<Option<BrainstormSession>, DatabaseError> {
        let row = sqlx::query(
            r"
            SELECT id, name, date_created
            FROM brainstorm_sessions
            WHERE id = $1
            ",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        match row {
            Some(row) => Ok(Some(self.session_from_row(&row).await?)),
            None => Ok(None),
        }
    }

    /// Load every session, newest first
    pub(crate) async fn session_list(&self) -> Result<Vec<BrainstormSession>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT id, name, date_created
            FROM brainstorm_sessions
            ORDER BY date_created DESC, id DESC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let mut sessions = Vec::with_capacity(rows.len());
        for row in &rows {
            sessions.push(self.session_from_row(row).await?);
        }
        Ok(sessions)
    }

    /// Insert a new session and any ideas it already carries
    pub(crate) async fn session_insert(
        &self,
        session: &BrainstormSession,
    ) -> Result<SessionId, DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r"
            INSERT INTO brainstorm_sessions (name, date_created)
            VALUES ($1, $2)
            ",
        )
        .bind(&session.name)
        .bind(format_timestamp(&session.date_created))
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        Self::insert_ideas(&mut tx, id, session.ideas()).await?;
        tx.commit().await?;

        Ok(id)
    }

    /// Overwrite a stored session with the given state
    pub(crate) async fn session_replace(
        &self,
        session: &BrainstormSession,
    ) -> Result<(), DatabaseError> {
        let mut tx = self.pool.begin().await?;

        let updated = sqlx::query(
            r"
            UPDATE brainstorm_sessions
            SET name = $1, date_created = $2
            WHERE id = $3
            ",
        )
        .bind(&session.name)
        .bind(format_timestamp(&session.date_created))
        .bind(session.id)
        .execute(&mut *tx)
        .await?
        .rows_affected();

        if updated == 0 {
            return Err(DatabaseError::NotFound {
                entity_type: "Session",
                entity_id: session.id.to_string(),
            });
        }

        sqlx::query("DELETE FROM ideas WHERE session_id = $1")
            .bind(session.id)
            .execute(&mut *tx)
            .await?;

        Self::insert_ideas(&mut tx, session.id, session.ideas()).await?;
        tx.commit().await?;

        Ok(())
    }

    async fn insert_ideas(
        tx: &mut Transaction<'_, Sqlite>,
        session_id: SessionId,
        ideas: &[Idea],
    ) -> Result<(), DatabaseError> {
        for (position, idea) in (0_i64..).zip(ideas) {
            sqlx::query(
                r"
                INSERT INTO ideas (session_id, position, name, description, date_created)
                VALUES ($1, $2, $3, $4, $5)
                ",
            )
            .bind(session_id)
            .bind(position)
            .bind(&idea.name)
            .bind(&idea.description)
            .bind(format_timestamp(&idea.date_created))
            .execute(&mut **tx)
            .await?;
        }
        Ok(())
    }

    async fn session_from_row(&self, row: &SqliteRow) -> Result<BrainstormSession, DatabaseError> {
        let id: SessionId = row.try_get("id")?;
        let name: String = row.try_get("name")?;
        let date_created: String = row.try_get("date_created")?;
        let date_created = parse_timestamp("brainstorm_sessions.date_created", &date_created)?;

        let ideas = self.session_ideas(id).await?;
        Ok(BrainstormSession::from_parts(id, name, date_created, ideas))
    }

    async fn session_ideas(&self, session_id: SessionId) -> Result<Vec<Idea>, DatabaseError> {
        let rows = sqlx::query(
            r"
            SELECT name, description, date_created
            FROM ideas
            WHERE session_id = $1
            ORDER BY position ASC
            ",
        )
        .bind(session_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(Self::row_to_idea).collect()
    }

    fn row_to_idea(row: &SqliteRow) -> Result<Idea, DatabaseError> {
        let date_created: String = row.try_get("date_created")?;
        Ok(Idea {
            name: row.try_get("name")?,
            description: row.try_get("description")?,
            date_created: parse_timestamp("ideas.date_created", &date_created)?,
        })
    }
}
