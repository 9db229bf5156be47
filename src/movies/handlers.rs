//! Axum handlers for the six movie resource operations.

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::movies::model::Movie;
use crate::movies::validate::{validate_movie, validate_partial_movie};

/// `GET /`
pub async fn root() -> Json<Value> {
    Json(json!({ "message": "Hola Mundo" }))
}

#[derive(Debug, Deserialize)]
pub struct ListQuery {
    pub genre: Option<String>,
    pub id: Option<String>,
}

/// `GET /movies`, optionally filtered by `?genre=` or `?id=`.
pub async fn list_movies(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Value> {
    let store = state.store();

    if let Some(genre) = &query.genre {
        tracing::debug!(genre = %genre, "Filtering movies by genre");
        return Json(json!(store.filter_by_genre(genre)));
    }

    if let Some(id) = &query.id {
        // Unlike the path-based lookup, a miss here is a 200 with a JSON
        // null, not a 404.
        return Json(json!(store.find(id)));
    }

    Json(json!(store.all()))
}

/// `GET /movies/{id}/{title}`: both segments must match exactly.
pub async fn get_movie(
    State(state): State<AppState>,
    Path((id, title)): Path<(String, String)>,
) -> Result<Json<Movie>, ApiError> {
    state
        .store()
        .find_by_id_and_title(&id, &title)
        .cloned()
        .map(Json)
        .ok_or(ApiError::NotFound)
}

/// `POST /movies`: full validation, then append under a fresh id.
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<Value>,
) -> Result<(StatusCode, Json<Movie>), ApiError> {
    let draft = validate_movie(&payload).map_err(ApiError::Validation)?;
    let movie = state.store().insert(draft);
    tracing::info!(id = %movie.id, title = %movie.title, "Movie created");
    Ok((StatusCode::CREATED, Json(movie)))
}

/// `DELETE /movies/{id}`.
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Value>, ApiError> {
    if !state.store().remove(&id) {
        return Err(ApiError::NotFound);
    }
    tracing::info!(id = %id, "Movie deleted");
    Ok(Json(json!({ "message": "Movie deleted" })))
}

/// `PATCH /movies/{id}`: partial validation first, then lookup and merge.
pub async fn patch_movie(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<Value>,
) -> Result<Json<Movie>, ApiError> {
    let patch = validate_partial_movie(&payload).map_err(ApiError::Validation)?;
    let movie = state.store().update(&id, patch).ok_or(ApiError::NotFound)?;
    tracing::info!(id = %movie.id, "Movie updated");
    Ok(Json(movie))
}

/// `OPTIONS /movies/{id}`: empty success advertising the permitted methods
/// when the origin is accepted. The allow-origin echo itself is added by
/// the CORS middleware.
pub async fn preflight(State(state): State<AppState>, headers: HeaderMap) -> Response {
    let origin = headers.get(header::ORIGIN).and_then(|v| v.to_str().ok());
    let mut response = StatusCode::OK.into_response();

    if state.origins.permits(origin) {
        response.headers_mut().insert(
            header::ACCESS_CONTROL_ALLOW_METHODS,
            HeaderValue::from_static("GET, POST, PATCH, DELETE"),
        );
    }

    response
}
