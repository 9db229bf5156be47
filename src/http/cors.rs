//! Cross-origin allow-list middleware.
//!
//! # Design Decisions
//! - Applied uniformly to every route, not per-handler
//! - An allow-listed Origin is echoed back in Access-Control-Allow-Origin;
//!   a disallowed one gets no header and the browser blocks the read
//! - Requests without an Origin header are always permitted (same-origin
//!   and non-browser callers)

use axum::body::Body;
use axum::extract::State;
use axum::http::{header, HeaderValue, Request};
use axum::middleware::Next;
use axum::response::Response;

use crate::http::server::AppState;

/// The fixed set of origins granted cross-origin access.
#[derive(Debug, Clone)]
pub struct AllowedOrigins(Vec<String>);

impl AllowedOrigins {
    pub fn new(origins: Vec<String>) -> Self {
        Self(origins)
    }

    /// Exact-match membership test against the Origin header value.
    pub fn contains(&self, origin: &str) -> bool {
        self.0.iter().any(|o| o == origin)
    }

    /// True when the header is absent or its value is allow-listed.
    pub fn permits(&self, origin: Option<&str>) -> bool {
        origin.map_or(true, |o| self.contains(o))
    }
}

/// Echo an allow-listed Origin back on the response.
pub async fn apply_cors(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let origin = request
        .headers()
        .get(header::ORIGIN)
        .and_then(|v| v.to_str().ok())
        .map(str::to_owned);

    let mut response = next.run(request).await;

    if let Some(origin) = origin {
        if state.origins.contains(&origin) {
            if let Ok(value) = HeaderValue::from_str(&origin) {
                response
                    .headers_mut()
                    .insert(header::ACCESS_CONTROL_ALLOW_ORIGIN, value);
            }
        } else {
            tracing::debug!(origin = %origin, "Origin not allow-listed, omitting CORS header");
        }
    }

    response
}
