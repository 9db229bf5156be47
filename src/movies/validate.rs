//! Schema validation for movie payloads.
//!
//! # Responsibilities
//! - Check an untrusted JSON value against the movie schema
//! - Full mode: every field required; partial mode: present fields only
//! - Report all field-level violations, not just the first
//!
//! # Design Decisions
//! - Pure functions: `serde_json::Value` in, tagged result out, no panics
//! - Wrong-type and missing-field failures produce distinct messages
//! - Unrecognized keys are dropped, never rejected
//! - Exact-case genre names on the write path (query filtering is the only
//!   case-insensitive comparison, see `Genre::matches_ignore_case`)

use serde::Serialize;
use serde_json::{Map, Value};
use url::Url;

use crate::movies::model::{Genre, Movie};

/// A single field-level schema violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// A fully validated candidate record, minus the server-assigned id.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieDraft {
    pub title: String,
    pub year: i64,
    pub director: String,
    pub duration: i64,
    pub rate: f64,
    pub poster: String,
    pub genre: Vec<Genre>,
}

/// A validated partial update. Absent fields keep their stored values.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MoviePatch {
    pub title: Option<String>,
    pub year: Option<i64>,
    pub director: Option<String>,
    pub duration: Option<i64>,
    pub rate: Option<f64>,
    pub poster: Option<String>,
    pub genre: Option<Vec<Genre>>,
}

impl MoviePatch {
    /// Merge this patch onto an existing record. Patched fields override,
    /// everything else (including `id`) is untouched.
    pub fn apply(self, movie: &mut Movie) {
        if let Some(title) = self.title {
            movie.title = title;
        }
        if let Some(year) = self.year {
            movie.year = year;
        }
        if let Some(director) = self.director {
            movie.director = director;
        }
        if let Some(duration) = self.duration {
            movie.duration = duration;
        }
        if let Some(rate) = self.rate {
            movie.rate = rate;
        }
        if let Some(poster) = self.poster {
            movie.poster = poster;
        }
        if let Some(genre) = self.genre {
            movie.genre = genre;
        }
    }
}

/// Full validation: every schema field must be present and valid.
pub fn validate_movie(payload: &Value) -> Result<MovieDraft, Vec<FieldError>> {
    let object = as_object(payload)?;
    let mut errors = Vec::new();

    let title = required(object, "title", &mut errors, |v| text("title", v));
    let year = required(object, "year", &mut errors, |v| {
        integer_in("year", v, 1900, 2024)
    });
    let director = required(object, "director", &mut errors, |v| text("director", v));
    let duration = required(object, "duration", &mut errors, |v| {
        integer_in("duration", v, 5, 500)
    });
    let rate = required(object, "rate", &mut errors, |v| number_in("rate", v, 0.0, 10.0));
    let poster = required(object, "poster", &mut errors, poster_url);
    let genre = required(object, "genre", &mut errors, genres);

    // Every slot is Some exactly when no error was recorded for it.
    match (title, year, director, duration, rate, poster, genre) {
        (
            Some(title),
            Some(year),
            Some(director),
            Some(duration),
            Some(rate),
            Some(poster),
            Some(genre),
        ) => Ok(MovieDraft {
            title,
            year,
            director,
            duration,
            rate,
            poster,
            genre,
        }),
        _ => Err(errors),
    }
}

/// Partial validation: absent fields are skipped, present fields must
/// satisfy the same per-field constraints as full validation.
pub fn validate_partial_movie(payload: &Value) -> Result<MoviePatch, Vec<FieldError>> {
    let object = as_object(payload)?;
    let mut errors = Vec::new();

    let patch = MoviePatch {
        title: optional(object, "title", &mut errors, |v| text("title", v)),
        year: optional(object, "year", &mut errors, |v| {
            integer_in("year", v, 1900, 2024)
        }),
        director: optional(object, "director", &mut errors, |v| text("director", v)),
        duration: optional(object, "duration", &mut errors, |v| {
            integer_in("duration", v, 5, 500)
        }),
        rate: optional(object, "rate", &mut errors, |v| number_in("rate", v, 0.0, 10.0)),
        poster: optional(object, "poster", &mut errors, poster_url),
        genre: optional(object, "genre", &mut errors, genres),
    };

    if errors.is_empty() {
        Ok(patch)
    } else {
        Err(errors)
    }
}

fn as_object(payload: &Value) -> Result<&Map<String, Value>, Vec<FieldError>> {
    payload
        .as_object()
        .ok_or_else(|| vec![FieldError::new("body", "payload must be a JSON object")])
}

fn required<T>(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
    check: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    match object.get(field) {
        None => {
            errors.push(FieldError::new(field, format!("{field} is required")));
            None
        }
        Some(value) => run_check(field, value, errors, check),
    }
}

fn optional<T>(
    object: &Map<String, Value>,
    field: &'static str,
    errors: &mut Vec<FieldError>,
    check: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    let value = object.get(field)?;
    run_check(field, value, errors, check)
}

fn run_check<T>(
    field: &'static str,
    value: &Value,
    errors: &mut Vec<FieldError>,
    check: impl FnOnce(&Value) -> Result<T, String>,
) -> Option<T> {
    match check(value) {
        Ok(parsed) => Some(parsed),
        Err(message) => {
            errors.push(FieldError::new(field, message));
            None
        }
    }
}

fn text(field: &str, value: &Value) -> Result<String, String> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
        Value::String(_) => Err(format!("{field} must not be empty")),
        _ => Err(format!("{field} must be a string")),
    }
}

fn integer_in(field: &str, value: &Value, min: i64, max: i64) -> Result<i64, String> {
    let n = value
        .as_i64()
        .ok_or_else(|| format!("{field} must be an integer"))?;
    if (min..=max).contains(&n) {
        Ok(n)
    } else {
        Err(format!("{field} must be between {min} and {max}"))
    }
}

fn number_in(field: &str, value: &Value, min: f64, max: f64) -> Result<f64, String> {
    let n = value
        .as_f64()
        .ok_or_else(|| format!("{field} must be a number"))?;
    if n >= min && n <= max {
        Ok(n)
    } else {
        Err(format!("{field} must be between {min} and {max}"))
    }
}

fn poster_url(value: &Value) -> Result<String, String> {
    let Value::String(s) = value else {
        return Err("poster must be a string".to_string());
    };
    let url = Url::parse(s).map_err(|_| "poster must be a valid URL".to_string())?;
    if url.path().ends_with(".jpg") {
        Ok(s.clone())
    } else {
        Err("poster URL must end with .jpg".to_string())
    }
}

fn genres(value: &Value) -> Result<Vec<Genre>, String> {
    let Value::Array(entries) = value else {
        return Err("genre must be an array of genres".to_string());
    };
    if entries.is_empty() {
        return Err("genre must contain at least one genre".to_string());
    }
    let mut parsed = Vec::with_capacity(entries.len());
    for entry in entries {
        let Value::String(name) = entry else {
            return Err("genre entries must be strings".to_string());
        };
        let genre: Genre = name
            .parse()
            .map_err(|_| format!("unknown genre {name:?}"))?;
        parsed.push(genre);
    }
    Ok(parsed)
}
