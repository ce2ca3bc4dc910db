//! Application state behind the catalog screen.
//!
//! One collection, the filter inputs, the debounced title edit buffer and
//! the record open in the detail view. Every mutation of the collection
//! replaces it with a new value and re-persists it.

use std::time::Instant;

use crate::collection::add_movie_with_id;
use crate::config::CatalogConfig;
use crate::debounce::Debouncer;
use crate::filter::{filter_movies, FilterCriteria};
use crate::movie::{validate_movie, Movie, MovieId, RawMovie, ValidationReport};
use crate::repository::MovieRepository;
use crate::store::KeyValueStore;

#[derive(Debug)]
pub struct Catalog<S> {
    movies: Vec<Movie>,
    criteria: FilterCriteria,
    title_edits: Debouncer<String>,
    selected: Option<Movie>,
    repository: MovieRepository<S>,
}

impl<S: KeyValueStore> Catalog<S> {
    /// Load the collection from `store` (seeds if nothing usable is there)
    /// and write it straight back, so seeds and repaired ids reach the store.
    pub fn open(store: S, config: &CatalogConfig) -> Self {
        let repository = MovieRepository::new(store, config.storage_key());
        let movies = repository.load_movies();
        repository.save_movies(&movies);
        tracing::debug!(key = %repository.key(), count = movies.len(), "catalog opened");

        Self {
            movies,
            criteria: FilterCriteria::default(),
            title_edits: Debouncer::new(config.title_debounce()),
            selected: None,
            repository,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn repository(&self) -> &MovieRepository<S> {
        &self.repository
    }

    /// The collection under the current filter, in collection order.
    pub fn visible(&self) -> Vec<&Movie> {
        filter_movies(&self.movies, &self.criteria)
    }

    pub fn filter(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn set_title_filter(&mut self, title: impl Into<String>) {
        self.criteria = self.criteria.clone().with_title(title);
    }

    pub fn set_min_rating(&mut self, min_rating: f64) {
        self.criteria = self.criteria.clone().with_min_rating(min_rating);
    }

    /// Record a keystroke in the title box. The filter follows once no
    /// further edit arrives within the debounce delay (see [`tick`](Self::tick)).
    pub fn edit_title(&mut self, title: impl Into<String>, now: Instant) {
        self.title_edits.push(title.into(), now);
    }

    /// Apply a pending title edit whose delay has elapsed. Returns whether
    /// the filter changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.title_edits.poll(now) {
            Some(title) => {
                self.set_title_filter(title);
                true
            }
            None => false,
        }
    }

    /// Text typed but not yet applied to the filter.
    pub fn pending_title(&self) -> Option<&str> {
        self.title_edits.pending().map(String::as_str)
    }

    /// Clear both filter inputs, dropping any pending title edit.
    pub fn reset_filters(&mut self) {
        self.title_edits.cancel();
        self.criteria = FilterCriteria::default();
    }

    /// Add a candidate record.
    ///
    /// On success the collection grows by one, is persisted, and the new
    /// record is returned. On failure nothing changes and the report says
    /// which fields to fix.
    pub fn submit(&mut self, candidate: &RawMovie) -> Result<&Movie, ValidationReport> {
        let report = validate_movie(candidate);
        if !report.is_valid() {
            return Err(report);
        }

        self.movies = add_movie_with_id(&self.movies, candidate);
        self.repository.save_movies(&self.movies);

        self.movies.last().ok_or(report)
    }

    /// Open the detail view for `id`. Unknown ids clear the selection.
    pub fn select(&mut self, id: MovieId) -> Option<&Movie> {
        self.selected = self.movies.iter().find(|m| m.id == id).cloned();
        self.selected.as_ref()
    }

    pub fn clear_selection(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&Movie> {
        self.selected.as_ref()
    }
}
