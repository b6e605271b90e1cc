// ABOUTME: Idea route handlers for listing and adding ideas within a session
// ABOUTME: Exposes each operation as a legacy untyped endpoint and a typed endpoint
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Idea routes
//!
//! | Method | Path | Success |
//! |--------|------|---------|
//! | GET | `/api/ideas/forsession/:session_id` | `200` ideas |
//! | GET | `/api/ideas/forsessionactionresult/:session_id` | `200` ideas |
//! | POST | `/api/ideas/create` | `200` session |
//! | POST | `/api/ideas/createactionresult` | `201` session + `Location` |
//!
//! Unknown sessions answer `404` with the session id as the body, invalid input
//! answers `400` with field errors.

use super::results::{ActionResult, ObjectResult};
use crate::constants::routes;
use crate::database::repositories::SharedSessionRepository;
use crate::errors::{AppError, AppResult, ValidationErrors};
use crate::services::IdeasService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use brainstorm_core::models::{BrainstormSession, IdeaDto, NewIdeaModel, SessionId};
use tracing::debug;

/// Handlers for idea endpoints
#[derive(Clone)]
pub struct IdeasController {
    service: IdeasService,
}

impl IdeasController {
    /// Create a controller over `repository`
    #[must_use]
    pub fn new(repository: SharedSessionRepository) -> Self {
        Self {
            service: IdeasService::new(repository),
        }
    }

    /// Ideas for a session as an untyped result
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn for_session(&self, session_id: SessionId) -> AppResult<ObjectResult> {
        ObjectResult::from_outcome(self.service.ideas_for_session(session_id).await?)
    }

    /// Ideas for a session as a typed result
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn for_session_action_result(
        &self,
        session_id: SessionId,
    ) -> AppResult<ActionResult<Vec<IdeaDto>>> {
        Ok(ActionResult::ok(
            self.service.ideas_for_session(session_id).await?,
        ))
    }

    /// Add an idea and return the updated session with `200 OK`
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn create(&self, model: Option<NewIdeaModel>) -> AppResult<ObjectResult> {
        ObjectResult::from_outcome(self.service.create_idea(model).await?)
    }

    /// Add an idea and return the updated session with `201 Created`
    ///
    /// `Location` points at the typed idea list of the session.
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn create_action_result(
        &self,
        model: Option<NewIdeaModel>,
    ) -> AppResult<ActionResult<BrainstormSession>> {
        let outcome = self.service.create_idea(model).await?;
        Ok(ActionResult::created(outcome, |session| {
            format!("{}/{}", routes::IDEAS_FOR_SESSION_TYPED, session.id)
        }))
    }
}

/// Turn a body extraction failure into field errors
pub(crate) fn rejection_errors(rejection: &JsonRejection) -> ValidationErrors {
    debug!(reason = %rejection.body_text(), "Rejected request body");
    ValidationErrors::single("body", rejection.body_text())
}

/// Idea routes implementation
pub struct IdeasRoutes;

impl IdeasRoutes {
    /// Create all idea routes
    pub fn routes(repository: SharedSessionRepository) -> Router {
        Router::new()
            .route(
                &format!("{}/:session_id", routes::IDEAS_FOR_SESSION),
                get(Self::handle_for_session),
            )
            .route(
                &format!("{}/:session_id", routes::IDEAS_FOR_SESSION_TYPED),
                get(Self::handle_for_session_action_result),
            )
            .route(routes::IDEAS_CREATE, post(Self::handle_create))
            .route(
                routes::IDEAS_CREATE_TYPED,
                post(Self::handle_create_action_result),
            )
            .with_state(IdeasController::new(repository))
    }

    async fn handle_for_session(
        State(controller): State<IdeasController>,
        Path(session_id): Path<SessionId>,
    ) -> Result<Response, AppError> {
        Ok(controller.for_session(session_id).await?.into_response())
    }

    async fn handle_for_session_action_result(
        State(controller): State<IdeasController>,
        Path(session_id): Path<SessionId>,
    ) -> Result<Response, AppError> {
        Ok(controller
            .for_session_action_result(session_id)
            .await?
            .into_response())
    }

    async fn handle_create(
        State(controller): State<IdeasController>,
        payload: Result<Json<Option<NewIdeaModel>>, JsonRejection>,
    ) -> Result<Response, AppError> {
        match payload {
            Ok(Json(model)) => Ok(controller.create(model).await?.into_response()),
            Err(rejection) => Ok(ObjectResult::bad_request(&rejection_errors(&rejection))?
                .into_response()),
        }
    }

    async fn handle_create_action_result(
        State(controller): State<IdeasController>,
        payload: Result<Json<Option<NewIdeaModel>>, JsonRejection>,
    ) -> Result<Response, AppError> {
        match payload {
            Ok(Json(model)) => Ok(controller.create_action_result(model).await?.into_response()),
            Err(rejection) => {
                Ok(ActionResult::<BrainstormSession>::BadRequest(rejection_errors(&rejection))
                    .into_response())
            }
        }
    }
}
