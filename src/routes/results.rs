// ABOUTME: Response adapters turning service outcomes into HTTP responses
// ABOUTME: ObjectResult carries untyped JSON, ActionResult keeps the payload type
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Two ways of rendering a [`Outcome`]:
//!
//! - [`ObjectResult`] erases the payload into a status code plus a JSON value,
//!   matching the legacy endpoints.
//! - [`ActionResult`] keeps the payload type and can express `201 Created`
//!   with a `Location` header.

use crate::errors::{AppResult, ValidationErrors};
use crate::services::Outcome;
use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use brainstorm_core::models::SessionId;
use serde::Serialize;
use serde_json::Value;

/// Untyped response: a status code and any JSON body
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectResult {
    /// HTTP status
    pub status: StatusCode,
    /// Serialized payload
    pub value: Value,
}

impl ObjectResult {
    /// Render an outcome: `200` with the value, `400` with errors, `404` with the id
    ///
    /// # Errors
    ///
    /// Returns an error if the success value cannot be serialized
    pub fn from_outcome<T: Serialize>(outcome: Outcome<T>) -> AppResult<Self> {
        Ok(match outcome {
            Outcome::Success(value) => Self {
                status: StatusCode::OK,
                value: serde_json::to_value(value)?,
            },
            Outcome::Invalid(errors) => Self::bad_request(&errors)?,
            Outcome::SessionNotFound(id) => Self {
                status: StatusCode::NOT_FOUND,
                value: Value::from(id),
            },
        })
    }

    /// `400 Bad Request` with field errors
    ///
    /// # Errors
    ///
    /// Returns an error if the errors cannot be serialized
    pub fn bad_request(errors: &ValidationErrors) -> AppResult<Self> {
        Ok(Self {
            status: StatusCode::BAD_REQUEST,
            value: serde_json::to_value(errors)?,
        })
    }
}

impl IntoResponse for ObjectResult {
    fn into_response(self) -> Response {
        (self.status, Json(self.value)).into_response()
    }
}

/// Typed response for a payload `T`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionResult<T> {
    /// `200 OK`
    Ok(T),
    /// `201 Created` with a `Location` header
    Created {
        /// URL of the created resource's view
        location: String,
        /// Created resource
        value: T,
    },
    /// `400 Bad Request` with field errors
    BadRequest(ValidationErrors),
    /// `404 Not Found` carrying the requested session id
    NotFound(SessionId),
}

impl<T> ActionResult<T> {
    /// Render an outcome with `200 OK` on success
    pub fn ok(outcome: Outcome<T>) -> Self {
        Self::render(outcome, Self::Ok)
    }

    /// Render an outcome with `201 Created` on success, using `location` for the header
    pub fn created(outcome: Outcome<T>, location: impl FnOnce(&T) -> String) -> Self {
        Self::render(outcome, |value| Self::Created {
            location: location(&value),
            value,
        })
    }

    fn render(outcome: Outcome<T>, on_success: impl FnOnce(T) -> Self) -> Self {
        match outcome {
            Outcome::Success(value) => on_success(value),
            Outcome::Invalid(errors) => Self::BadRequest(errors),
            Outcome::SessionNotFound(id) => Self::NotFound(id),
        }
    }

    /// HTTP status this result renders with
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Ok(_) => StatusCode::OK,
            Self::Created { .. } => StatusCode::CREATED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl<T: Serialize> IntoResponse for ActionResult<T> {
    fn into_response(self) -> Response {
        let status = self.status();
        match self {
            Self::Ok(value) => (status, Json(value)).into_response(),
            Self::Created { location, value } => {
                (status, [(header::LOCATION, location)], Json(value)).into_response()
            }
            Self::BadRequest(errors) => (status, Json(errors)).into_response(),
            Self::NotFound(id) => (status, Json(id)).into_response(),
        }
    }
}
