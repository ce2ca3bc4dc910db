//! Derived view of the collection under the current filter inputs.
//!
//! Pure: the output depends only on the collection and the criteria, so a
//! caller may cache it keyed on both.

use crate::movie::{Movie, MIN_RATING};

/// Title substring plus minimum rating.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterCriteria {
    title: String,
    min_rating: f64,
}

impl Default for FilterCriteria {
    fn default() -> Self {
        Self {
            title: String::new(),
            min_rating: MIN_RATING,
        }
    }
}

impl FilterCriteria {
    pub fn new(title: impl Into<String>, min_rating: f64) -> Self {
        Self::default().with_title(title).with_min_rating(min_rating)
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Stored as given. A threshold above every rating (or `NaN`) matches
    /// nothing.
    pub fn with_min_rating(mut self, min_rating: f64) -> Self {
        self.min_rating = min_rating;
        self
    }

    /// The title filter as entered.
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn min_rating(&self) -> f64 {
        self.min_rating
    }

    /// Trimmed and case-folded; empty means "any title".
    pub fn title_needle(&self) -> String {
        self.title.trim().to_lowercase()
    }

    /// Whether anything would be filtered out of a collection.
    pub fn is_active(&self) -> bool {
        !self.title.trim().is_empty() || self.min_rating > MIN_RATING || self.min_rating.is_nan()
    }

    pub fn matches(&self, movie: &Movie) -> bool {
        matches_needle(movie, &self.title_needle(), self.min_rating)
    }
}

fn matches_needle(movie: &Movie, needle: &str, min_rating: f64) -> bool {
    let title_ok = needle.is_empty() || movie.title.to_lowercase().contains(needle);
    title_ok && movie.rating >= min_rating
}

/// Matching records in collection order.
pub fn filter_movies<'a>(movies: &'a [Movie], criteria: &FilterCriteria) -> Vec<&'a Movie> {
    // Fold the needle once rather than per record
    let needle = criteria.title_needle();

    movies
        .iter()
        .filter(|m| matches_needle(m, &needle, criteria.min_rating))
        .collect()
}
