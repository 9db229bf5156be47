//! Movie resource API library.
//!
//! A small CRUD server over a single in-memory collection of movie records,
//! built with Tokio and Axum.
//!
//! # Architecture Overview
//!
//! ```text
//! Client Request ──▶ http::server (Axum router + CORS middleware)
//!                        │
//!                        ▼
//!                    movies::handlers ──▶ movies::validate (write paths)
//!                        │
//!                        ▼
//!                    movies::store (mutex-guarded Vec<Movie>)
//!
//! Cross-cutting: config (TOML + env), tracing (structured logs)
//! ```

pub mod config;
pub mod http;
pub mod movies;

pub use config::schema::ServerConfig;
pub use http::HttpServer;
pub use movies::store::MovieStore;
