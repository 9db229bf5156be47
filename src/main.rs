//! Movie API server binary.
//!
//! Loads configuration, seeds the in-memory collection, and serves the
//! resource routes until shutdown.

use std::path::{Path, PathBuf};

use clap::Parser;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use movie_api::config::load_config;
use movie_api::{HttpServer, MovieStore};

/// Minimal CRUD server for an in-memory movie collection.
#[derive(Debug, Parser)]
#[command(name = "movie-api", version)]
struct Args {
    /// Path to a TOML config file. Built-in defaults apply when omitted.
    #[arg(long)]
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "movie_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = load_config(args.config.as_deref())?;

    tracing::info!(
        address = %config.listener.addr(),
        allowed_origins = config.cors.allowed_origins.len(),
        seed = %config.seed.path,
        "Configuration loaded"
    );

    let store = MovieStore::from_seed_file(Path::new(&config.seed.path))?;
    tracing::info!(movies = store.len(), "Seed collection loaded");

    let listener = TcpListener::bind(config.listener.addr()).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for connections");

    let server = HttpServer::new(config, store);
    server.run(listener).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
