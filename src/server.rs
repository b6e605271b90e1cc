// ABOUTME: HTTP server assembly for the brainstorm API
// ABOUTME: Builds the axum router, prepares storage, and serves until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! Server bootstrap
//!
//! [`build_router`] is what integration tests drive; [`BrainstormServer::run`]
//! binds it to a TCP port.

use crate::config::ServerConfig;
use crate::constants::defaults;
use crate::database::repositories::{connect_repository, SharedSessionRepository};
use crate::database::seed::seed_demo_sessions;
use crate::errors::{AppError, AppResult};
use crate::middleware::{setup_cors, with_request_tracing};
use crate::routes::{HealthRoutes, IdeasRoutes, SessionsRoutes};
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

/// Assemble every route group with tracing and CORS layers
pub fn build_router(repository: &SharedSessionRepository, config: &ServerConfig) -> Router {
    let router = Router::new()
        .merge(HealthRoutes::routes(repository.clone()))
        .merge(IdeasRoutes::routes(repository.clone()))
        .merge(SessionsRoutes::routes(repository.clone()))
        .layer(setup_cors(&config.cors));

    with_request_tracing(router)
}

/// Open the configured store and seed it when requested
///
/// # Errors
///
/// Returns an error if the store cannot be opened, migrated, or seeded
pub async fn prepare_repository(config: &ServerConfig) -> AppResult<SharedSessionRepository> {
    let repository = connect_repository(&config.database).await?;

    if config.seed_demo_data {
        seed_demo_sessions(repository.as_ref()).await?;
    }

    Ok(repository)
}

/// The brainstorm HTTP server
pub struct BrainstormServer {
    config: ServerConfig,
    repository: SharedSessionRepository,
}

impl BrainstormServer {
    /// Create a server over an already prepared repository
    #[must_use]
    pub fn new(config: ServerConfig, repository: SharedSessionRepository) -> Self {
        Self { config, repository }
    }

    /// Router serving this server's routes
    #[must_use]
    pub fn router(&self) -> Router {
        build_router(&self.repository, &self.config)
    }

    /// Bind the HTTP port and serve until Ctrl-C
    ///
    /// # Errors
    ///
    /// Returns an error if the port cannot be bound or the server fails
    pub async fn run(self) -> AppResult<()> {
        let address: SocketAddr = format!("{}:{}", defaults::BIND_ADDRESS, self.config.http_port)
            .parse()
            .map_err(|e| AppError::config(format!("Invalid bind address: {e}")))?;

        let listener = TcpListener::bind(address).await.map_err(|e| {
            AppError::internal(format!("Failed to bind HTTP server to {address}: {e}"))
        })?;

        log_endpoints(self.config.http_port);
        info!("HTTP server listening on http://{address}");

        axum::serve(listener, self.router())
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| AppError::internal(format!("HTTP server error: {e}")))?;

        info!("HTTP server stopped");
        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        return;
    }
    info!("Shutdown signal received");
}

fn log_endpoints(port: u16) {
    info!("=== Available API Endpoints ===");
    info!("   Ideas for session:  GET  http://127.0.0.1:{port}/api/ideas/forsession/{{sessionId}}");
    info!("   Ideas (typed):      GET  http://127.0.0.1:{port}/api/ideas/forsessionactionresult/{{sessionId}}");
    info!("   Create idea:        POST http://127.0.0.1:{port}/api/ideas/create");
    info!("   Create idea (typed): POST http://127.0.0.1:{port}/api/ideas/createactionresult");
    info!("   Sessions:           GET/POST http://127.0.0.1:{port}/api/sessions");
    info!("   Session detail:     GET  http://127.0.0.1:{port}/api/sessions/{{id}}");
    info!("   Health:             GET  http://127.0.0.1:{port}/health");
    info!("=== End of Endpoint List ===");
}
