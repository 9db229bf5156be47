//! In-memory movie collection.
//!
//! # Design Decisions
//! - Insertion-ordered `Vec<Movie>`; ids are unique at all times
//! - Owned value injected into the server at construction, never a global
//! - Resets on restart; the seed file is the only startup input

use std::fs;
use std::path::Path;

use uuid::Uuid;

use crate::movies::model::Movie;
use crate::movies::validate::{MovieDraft, MoviePatch};

/// Error type for seed loading.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// The in-memory collection behind all six resource operations.
#[derive(Debug, Default)]
pub struct MovieStore {
    movies: Vec<Movie>,
}

impl MovieStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-populated with the given records.
    pub fn with_movies(movies: Vec<Movie>) -> Self {
        Self { movies }
    }

    /// Load the initial collection from a JSON seed file.
    pub fn from_seed_file(path: &Path) -> Result<Self, SeedError> {
        let content = fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let movies = serde_json::from_str(&content).map_err(|source| SeedError::Parse {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Self { movies })
    }

    /// The whole collection, in insertion order.
    pub fn all(&self) -> &[Movie] {
        &self.movies
    }

    pub fn len(&self) -> usize {
        self.movies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.movies.is_empty()
    }

    /// Exact id match.
    pub fn find(&self, id: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id)
    }

    /// Exact, case-sensitive match on both id and title.
    pub fn find_by_id_and_title(&self, id: &str, title: &str) -> Option<&Movie> {
        self.movies.iter().find(|m| m.id == id && m.title == title)
    }

    /// Records with at least one genre equal to `query`, case-insensitively.
    pub fn filter_by_genre(&self, query: &str) -> Vec<Movie> {
        self.movies
            .iter()
            .filter(|m| m.genre.iter().any(|g| g.matches_ignore_case(query)))
            .cloned()
            .collect()
    }

    /// Append a validated draft under a fresh server-generated id.
    pub fn insert(&mut self, draft: MovieDraft) -> Movie {
        let movie = Movie {
            id: Uuid::new_v4().to_string(),
            title: draft.title,
            year: draft.year,
            director: draft.director,
            duration: draft.duration,
            rate: draft.rate,
            poster: draft.poster,
            genre: draft.genre,
        };
        self.movies.push(movie.clone());
        movie
    }

    /// Remove the record with the given id. Returns false, leaving the
    /// collection untouched, when no record matches.
    pub fn remove(&mut self, id: &str) -> bool {
        match self.movies.iter().position(|m| m.id == id) {
            Some(index) => {
                self.movies.remove(index);
                true
            }
            None => false,
        }
    }

    /// Merge a validated patch onto the record with the given id, in place.
    /// Returns the merged record, or None when no record matches.
    pub fn update(&mut self, id: &str, patch: MoviePatch) -> Option<Movie> {
        let movie = self.movies.iter_mut().find(|m| m.id == id)?;
        patch.apply(movie);
        Some(movie.clone())
    }
}
