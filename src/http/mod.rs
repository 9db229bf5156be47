//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection
//!     → server.rs (Axum setup, route table, state injection)
//!     → cors.rs (origin allow-list, response header)
//!     → movies::handlers (resource operations)
//!     → error.rs (ApiError → status + JSON body)
//! ```

pub mod cors;
pub mod error;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, HttpServer};
