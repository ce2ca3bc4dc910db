//! Client-side movie catalog core.
//!
//! `movie-catalog` holds the record model (normalization, validation, id
//! assignment), best-effort persistence to a string key-value store, and
//! the filtered view a catalog screen renders. Nothing here is fatal:
//! bad input is reported per field, bad storage falls back to a seed set.

pub mod catalog;
pub mod collection;
pub mod config;
pub mod debounce;
pub mod filter;
pub mod form;
pub mod movie;
pub mod repository;
pub mod store;
pub mod types;

pub use catalog::Catalog;
pub use collection::{add_movie_with_id, get_next_id};
pub use config::CatalogConfig;
pub use filter::{filter_movies, FilterCriteria};
pub use movie::{create_movie, validate_movie, Movie, MovieId, RawMovie, ValidationReport};
pub use repository::MovieRepository;
