//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → PORT environment override
//!     → ServerConfig (immutable)
//!     → shared with the HTTP server at construction
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; no hot reload
//! - All fields have defaults so the server runs with no config file at all
//! - The PORT environment variable always wins over the file value, so the
//!   hosting platform can assign the listening port

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{CorsConfig, ListenerConfig, SeedConfig, ServerConfig};
