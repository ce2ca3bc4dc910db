use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::coerce;
use crate::types::identifiers::MovieId;

pub const MIN_RATING: f64 = 0.0;
pub const MAX_RATING: f64 = 5.0;

/// Unnormalized candidate record, as submitted by a form or read back
/// from storage. Every field is optional and loosely typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawMovie {
    #[serde(default)]
    pub id: Value,
    #[serde(default)]
    pub title: Value,
    #[serde(default)]
    pub description: Value,
    #[serde(default, rename = "posterURL")]
    pub poster_url: Value,
    #[serde(default)]
    pub rating: Value,
}

impl RawMovie {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        poster_url: impl Into<String>,
        rating: f64,
    ) -> Self {
        Self {
            id: Value::Null,
            title: Value::String(title.into()),
            description: Value::String(description.into()),
            poster_url: Value::String(poster_url.into()),
            // Non-finite floats become `null`
            rating: Value::from(rating),
        }
    }

    pub fn with_id(mut self, id: impl Into<Value>) -> Self {
        self.id = id.into();
        self
    }
}

impl From<&Movie> for RawMovie {
    fn from(movie: &Movie) -> Self {
        Self {
            id: Value::from(movie.id.get()),
            title: Value::String(movie.title.clone()),
            description: Value::String(movie.description.clone()),
            poster_url: Value::String(movie.poster_url.clone()),
            rating: Value::from(movie.rating),
        }
    }
}

/// A canonical catalog record.
///
/// Text fields are trimmed and `rating` lies in `[MIN_RATING, MAX_RATING]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Movie {
    pub id: MovieId,
    pub title: String,
    pub description: String,
    #[serde(rename = "posterURL")]
    pub poster_url: String,
    pub rating: f64,
}

/// Normalize raw input into a [`Movie`].
///
/// Total: text fields are coerced and trimmed, a missing or non-finite
/// rating becomes 0, and the rating is clamped into range. The id is
/// carried over as parsed ([`MovieId::UNASSIGNED`] when unusable); assigning
/// a real one is the caller's job.
pub fn create_movie(raw: &RawMovie) -> Movie {
    let rating = coerce::rating(&raw.rating).unwrap_or(MIN_RATING);

    Movie {
        id: MovieId::new(coerce::id(&raw.id)),
        title: coerce::text(&raw.title).trim().to_string(),
        description: coerce::text(&raw.description).trim().to_string(),
        poster_url: coerce::text(&raw.poster_url).trim().to_string(),
        rating: clamp_rating(rating),
    }
}

/// Clamp into `[MIN_RATING, MAX_RATING]`. `NaN` maps to `MIN_RATING`.
pub fn clamp_rating(rating: f64) -> f64 {
    if rating.is_nan() {
        return MIN_RATING;
    }
    rating.clamp(MIN_RATING, MAX_RATING)
}

impl From<&RawMovie> for Movie {
    fn from(raw: &RawMovie) -> Self {
        create_movie(raw)
    }
}
