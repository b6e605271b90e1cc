// ABOUTME: Server binary for the brainstorm sessions API
// ABOUTME: Loads configuration, prepares session storage, and serves HTTP until shutdown
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Brainstorm Server Binary
//!
//! Starts the HTTP API over `SQLite` or in-memory session storage.

use anyhow::Result;
use brainstorm_server::{
    config::environment::ServerConfig,
    logging,
    server::{prepare_repository, BrainstormServer},
};
use clap::Parser;
use tracing::{error, info};

/// Command-line overrides for the environment configuration
#[derive(Parser)]
#[command(name = "brainstorm-server")]
#[command(about = "Brainstorm sessions API - sessions, ideas, and a small REST surface")]
pub struct Args {
    /// Override HTTP port
    #[arg(long)]
    http_port: Option<u16>,

    /// Override storage location (`sqlite:<path>`, `sqlite::memory:`, or `memory`)
    #[arg(long)]
    database_url: Option<String>,

    /// Insert demo sessions when the store is empty
    #[arg(long)]
    seed: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config = config.with_database_url(database_url)?;
    }
    if args.seed {
        config.seed_demo_data = true;
    }

    logging::init_from_env()?;

    info!("Starting brainstorm server");
    let summary = config.summary();
    info!("{summary}");

    let repository = prepare_repository(&config).await?;
    info!(database.url = %config.database.url, "Session storage ready");

    if let Err(e) = BrainstormServer::new(config, repository).run().await {
        error!("Server error: {e}");
        return Err(e.into());
    }

    Ok(())
}
