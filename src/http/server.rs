//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum router with all resource routes
//! - Wire up middleware (request tracing, CORS)
//! - Own the shared application state (injected store, allow-list)
//! - Bind the server to a listener and serve until shutdown

use std::sync::{Arc, Mutex, MutexGuard};

use axum::middleware;
use axum::routing::{delete, get};
use axum::Router;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::config::ServerConfig;
use crate::http::cors::{self, AllowedOrigins};
use crate::movies::handlers;
use crate::movies::store::MovieStore;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    store: Arc<Mutex<MovieStore>>,
    pub origins: Arc<AllowedOrigins>,
}

impl AppState {
    /// Lock the collection for one whole read-modify-write sequence,
    /// keeping each operation atomic with respect to any other. The guard
    /// is never held across an await point.
    pub fn store(&self) -> MutexGuard<'_, MovieStore> {
        self.store.lock().expect("movie store lock poisoned")
    }
}

/// HTTP server for the movie resource API.
pub struct HttpServer {
    router: Router,
    config: ServerConfig,
}

impl HttpServer {
    /// Create a new server over an injected store.
    pub fn new(config: ServerConfig, store: MovieStore) -> Self {
        let state = AppState {
            store: Arc::new(Mutex::new(store)),
            origins: Arc::new(AllowedOrigins::new(config.cors.allowed_origins.clone())),
        };
        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all routes and middleware layers.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/", get(handlers::root))
            .route(
                "/movies",
                get(handlers::list_movies).post(handlers::create_movie),
            )
            .route(
                "/movies/{id}",
                delete(handlers::delete_movie)
                    .patch(handlers::patch_movie)
                    .options(handlers::preflight),
            )
            .route("/movies/{id}/{title}", get(handlers::get_movie))
            .layer(middleware::from_fn_with_state(
                state.clone(),
                cors::apply_cors,
            ))
            .layer(TraceLayer::new_for_http())
            .with_state(state)
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(self, listener: TcpListener) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}

/// Wait for shutdown signal (Ctrl+C).
async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("Failed to install Ctrl+C handler");
    tracing::info!("Shutdown signal received");
}
