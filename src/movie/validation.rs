use std::collections::BTreeMap;
use std::fmt;

use serde_json::Value;
use thiserror::Error;

use super::movie::{RawMovie, MAX_RATING, MIN_RATING};
use crate::types::coerce;

/// Record fields that carry business rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MovieField {
    Title,
    Description,
    PosterUrl,
    Rating,
}

impl MovieField {
    /// Name of the field in the stored JSON shape.
    pub fn as_str(self) -> &'static str {
        match self {
            MovieField::Title => "title",
            MovieField::Description => "description",
            MovieField::PosterUrl => "posterURL",
            MovieField::Rating => "rating",
        }
    }
}

impl fmt::Display for MovieField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Description is required")]
    DescriptionRequired,
    #[error("Valid image URL required (http/https)")]
    InvalidPosterUrl,
    #[error("Rating must be 0 to 5")]
    RatingOutOfRange,
}

/// Outcome of [`validate_movie`]: one error per failing field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    errors: BTreeMap<MovieField, FieldError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn error(&self, field: MovieField) -> Option<FieldError> {
        self.errors.get(&field).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = MovieField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (MovieField, FieldError)> + '_ {
        self.errors.iter().map(|(f, e)| (*f, *e))
    }

    /// Field name to human-readable message, keyed like the stored JSON.
    pub fn messages(&self) -> BTreeMap<&'static str, String> {
        self.errors
            .iter()
            .map(|(field, err)| (field.as_str(), err.to_string()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Check raw input against the business rules without normalizing it.
///
/// This is the one authoritative rule set; form feedback and the
/// collection's add guard both call it.
pub fn validate_movie(raw: &RawMovie) -> ValidationReport {
    let mut errors = BTreeMap::new();

    if coerce::text(&raw.title).trim().is_empty() {
        errors.insert(MovieField::Title, FieldError::TitleRequired);
    }

    if coerce::text(&raw.description).trim().is_empty() {
        errors.insert(MovieField::Description, FieldError::DescriptionRequired);
    }

    if !has_http_scheme(&raw.poster_url) {
        errors.insert(MovieField::PosterUrl, FieldError::InvalidPosterUrl);
    }

    let rating_ok = coerce::rating(&raw.rating)
        .map(|r| (MIN_RATING..=MAX_RATING).contains(&r))
        .unwrap_or(false);
    if !rating_ok {
        errors.insert(MovieField::Rating, FieldError::RatingOutOfRange);
    }

    ValidationReport { errors }
}

/// `^https?://`, case-insensitive. Only strings qualify.
fn has_http_scheme(value: &Value) -> bool {
    let Value::String(url) = value else {
        return false;
    };

    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .map(|prefix| prefix.eq_ignore_ascii_case(scheme))
            .unwrap_or(false)
    })
}
