pub mod movie;
pub mod rating;
pub mod seed;
pub mod validation;

pub use crate::types::identifiers::MovieId;
pub use movie::{clamp_rating, create_movie, Movie, RawMovie, MAX_RATING, MIN_RATING};
pub use rating::StarBreakdown;
pub use seed::seed_movies;
pub use validation::{validate_movie, FieldError, MovieField, ValidationReport};
