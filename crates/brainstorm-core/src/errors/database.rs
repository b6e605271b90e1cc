// ABOUTME: Structured error types for session storage operations
// ABOUTME: Provides domain-specific storage errors with context for better error handling
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use thiserror::Error;

/// Errors raised by `SessionRepository` implementations
#[derive(Debug, Error)]
pub enum DatabaseError {
    /// The storage backend could not be reached
    #[error("Database connection failed: {context}")]
    ConnectionError {
        /// What was being attempted
        context: String,
    },

    /// A query or statement failed
    #[error("Database query failed: {context}")]
    QueryError {
        /// What was being attempted
        context: String,
    },

    /// Schema creation or migration failed
    #[error("Database migration failed: {context}")]
    MigrationError {
        /// What was being attempted
        context: String,
    },

    /// A write targeted a row that does not exist
    #[error("{entity_type} {entity_id} not found")]
    NotFound {
        /// Kind of record
        entity_type: &'static str,
        /// Identifier that was looked up
        entity_id: String,
    },

    /// A stored value could not be decoded into the domain type
    #[error("Invalid stored data: {context}")]
    InvalidData {
        /// What was being decoded
        context: String,
    },
}

#[cfg(feature = "database-errors")]
impl From<sqlx::Error> for DatabaseError {
    fn from(error: sqlx::Error) -> Self {
        match error {
            sqlx::Error::PoolTimedOut | sqlx::Error::PoolClosed | sqlx::Error::Io(_) => {
                Self::ConnectionError {
                    context: error.to_string(),
                }
            }
            sqlx::Error::ColumnDecode { .. } | sqlx::Error::Decode(_) => Self::InvalidData {
                context: error.to_string(),
            },
            other => Self::QueryError {
                context: other.to_string(),
            },
        }
    }
}
