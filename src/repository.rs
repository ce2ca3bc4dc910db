//! Bridge between the in-memory collection and a [`KeyValueStore`].
//!
//! The whole collection lives under one key as a JSON array. Persistence is
//! a best-effort cache: reads that fail in any way degrade to the seed set
//! and writes that fail are dropped. Neither surfaces an error.

use serde_json::Value;

use crate::movie::{create_movie, seed_movies, Movie, MovieId, RawMovie};
use crate::store::{KeyValueStore, StoreError};
use crate::types::identifiers::StorageKey;

/// Why [`MovieRepository::load_movies`] fell back to the seed set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SeedFallback {
    Absent,
    ReadFailed,
    Unparsable,
    NotAnArray,
    NullElement,
    Empty,
}

impl SeedFallback {
    fn as_str(self) -> &'static str {
        match self {
            SeedFallback::Absent => "absent",
            SeedFallback::ReadFailed => "read_failed",
            SeedFallback::Unparsable => "unparsable",
            SeedFallback::NotAnArray => "not_an_array",
            SeedFallback::NullElement => "null_element",
            SeedFallback::Empty => "empty",
        }
    }
}

#[derive(Debug, Clone)]
pub struct MovieRepository<S> {
    store: S,
    key: StorageKey,
}

impl<S: KeyValueStore> MovieRepository<S> {
    pub fn new(store: S, key: StorageKey) -> Self {
        Self { store, key }
    }

    pub fn key(&self) -> &StorageKey {
        &self.key
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Load the collection, or a fresh seed set when storage holds nothing
    /// usable. Never fails.
    pub fn load_movies(&self) -> Vec<Movie> {
        match self.try_load() {
            Ok(movies) => movies,
            Err(reason) => {
                tracing::debug!(key = %self.key, reason = reason.as_str(), "using seed movies");
                seed_movies()
            }
        }
    }

    /// Persist the collection. Failures are logged and otherwise ignored;
    /// the in-memory collection stays authoritative.
    pub fn save_movies(&self, movies: &[Movie]) {
        if let Err(e) = self.try_save(movies) {
            tracing::warn!(key = %self.key, error = %e, count = movies.len(), "failed to persist movies");
        }
    }

    fn try_load(&self) -> Result<Vec<Movie>, SeedFallback> {
        let raw = match self.store.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return Err(SeedFallback::Absent),
            Err(e) => {
                tracing::warn!(key = %self.key, error = %e, "failed to read movies");
                return Err(SeedFallback::ReadFailed);
            }
        };

        // An empty string reads the same as no value at all
        if raw.is_empty() {
            return Err(SeedFallback::Absent);
        }

        let parsed: Value = serde_json::from_str(&raw).map_err(|_| SeedFallback::Unparsable)?;
        let Value::Array(items) = parsed else {
            return Err(SeedFallback::NotAnArray);
        };

        if items.is_empty() {
            return Err(SeedFallback::Empty);
        }

        // A null element cannot be read as a record at all; the whole blob
        // is treated as corrupt
        if items.iter().any(Value::is_null) {
            return Err(SeedFallback::NullElement);
        }

        Ok(items
            .iter()
            .enumerate()
            .map(|(idx, item)| normalize_stored(item, idx))
            .collect())
    }

    fn try_save(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let json = serde_json::to_string(movies)?;
        self.store.set(&self.key, &json)
    }
}

/// Normalize one stored element. A missing or unusable id is replaced by
/// the element's 1-based position.
fn normalize_stored(item: &Value, idx: usize) -> Movie {
    // Other non-object elements normalize from an all-null record
    let raw: RawMovie = serde_json::from_value(item.clone()).unwrap_or_default();
    let mut movie = create_movie(&raw);

    if !movie.id.is_assigned() {
        movie.id = MovieId::new(idx as u64 + 1);
    }
    movie
}
