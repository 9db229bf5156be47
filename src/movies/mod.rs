//! Movie resource subsystem.
//!
//! # Data Flow
//! ```text
//! request body (untrusted JSON)
//!     → validate.rs (full or partial schema check)
//!     → MovieDraft / MoviePatch (trusted, typed)
//!     → store.rs (insert / update / remove on the Vec<Movie>)
//!     → model.rs Movie (serialized back to the client)
//! ```
//!
//! # Design Decisions
//! - The untrusted/trusted boundary is a total function: validation returns
//!   a tagged result, never panics on bad shapes
//! - The store owns the collection; handlers reach it only through AppState

pub mod handlers;
pub mod model;
pub mod store;
pub mod validate;

pub use model::{Genre, Movie};
pub use store::MovieStore;
