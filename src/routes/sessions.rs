// ABOUTME: Session route handlers for listing, creating, and viewing brainstorm sessions
// ABOUTME: Thin axum handlers delegating to SessionsService and typed result adapters
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

use super::ideas::rejection_errors;
use super::results::ActionResult;
use crate::constants::routes;
use crate::database::repositories::SharedSessionRepository;
use crate::errors::{AppError, AppResult};
use crate::services::SessionsService;
use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use brainstorm_core::models::{BrainstormSession, NewSessionModel, SessionId, SessionSummary};

/// Handlers for session endpoints
#[derive(Clone)]
pub struct SessionsController {
    service: SessionsService,
}

impl SessionsController {
    /// Create a controller over `repository`
    #[must_use]
    pub fn new(repository: SharedSessionRepository) -> Self {
        Self {
            service: SessionsService::new(repository),
        }
    }

    /// Every session as a summary, newest first
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn list(&self) -> AppResult<Vec<SessionSummary>> {
        self.service.list_sessions().await
    }

    /// Create a session; `201 Created` pointing at the new session
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn create(
        &self,
        model: Option<NewSessionModel>,
    ) -> AppResult<ActionResult<BrainstormSession>> {
        let outcome = self.service.create_session(model).await?;
        Ok(ActionResult::created(outcome, |session| {
            format!("{}/{}", routes::SESSIONS, session.id)
        }))
    }

    /// One session with its ideas
    ///
    /// # Errors
    ///
    /// Returns an error if the repository fails
    pub async fn get(&self, id: SessionId) -> AppResult<ActionResult<BrainstormSession>> {
        Ok(ActionResult::ok(self.service.get_session(id).await?))
    }
}

/// Session routes implementation
pub struct SessionsRoutes;

impl SessionsRoutes {
    /// Create all session routes
    pub fn routes(repository: SharedSessionRepository) -> Router {
        Router::new()
            .route(
                routes::SESSIONS,
                get(Self::handle_list).post(Self::handle_create),
            )
            .route(
                &format!("{}/:session_id", routes::SESSIONS),
                get(Self::handle_get),
            )
            .with_state(SessionsController::new(repository))
    }

    async fn handle_list(
        State(controller): State<SessionsController>,
    ) -> Result<Response, AppError> {
        let sessions = controller.list().await?;
        Ok((StatusCode::OK, Json(sessions)).into_response())
    }

    async fn handle_create(
        State(controller): State<SessionsController>,
        payload: Result<Json<Option<NewSessionModel>>, JsonRejection>,
    ) -> Result<Response, AppError> {
        match payload {
            Ok(Json(model)) => Ok(controller.create(model).await?.into_response()),
            Err(rejection) => {
                Ok(ActionResult::<BrainstormSession>::BadRequest(rejection_errors(&rejection))
                    .into_response())
            }
        }
    }

    async fn handle_get(
        State(controller): State<SessionsController>,
        Path(session_id): Path<SessionId>,
    ) -> Result<Response, AppError> {
        Ok(controller.get(session_id).await?.into_response())
    }
}
