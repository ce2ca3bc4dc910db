use crate::movie::{create_movie, validate_movie, Movie, MovieId, RawMovie};
use crate::types::coerce;

/// Anything carrying a record id, possibly a malformed one.
pub trait Identified {
    /// The id as a number; unusable ids read as [`MovieId::UNASSIGNED`].
    fn movie_id(&self) -> MovieId;
}

impl Identified for Movie {
    fn movie_id(&self) -> MovieId {
        self.id
    }
}

impl Identified for RawMovie {
    fn movie_id(&self) -> MovieId {
        MovieId::new(coerce::id(&self.id))
    }
}

/// Id for the next record appended to `list`: one past the largest id,
/// or 1 for an empty list. Malformed ids count as 0.
pub fn get_next_id<T: Identified>(list: &[T]) -> MovieId {
    list.iter()
        .map(Identified::movie_id)
        .max()
        .unwrap_or(MovieId::UNASSIGNED)
        .next()
}

/// Append `candidate` to a copy of `movies` with a fresh id.
///
/// Invalid candidates are rejected silently: the returned collection equals
/// the input. Callers wanting feedback run [`validate_movie`] themselves.
pub fn add_movie_with_id(movies: &[Movie], candidate: &RawMovie) -> Vec<Movie> {
    let report = validate_movie(candidate);
    if !report.is_valid() {
        let fields: Vec<&str> = report.fields().map(|f| f.as_str()).collect();
        tracing::debug!(?fields, "rejected invalid movie");
        return movies.to_vec();
    }

    let id = get_next_id(movies);
    let mut movie = create_movie(candidate);
    movie.id = id;
    tracing::debug!(%id, title = %movie.title, "added movie");

    let mut next = Vec::with_capacity(movies.len() + 1);
    next.extend_from_slice(movies);
    next.push(movie);
    next
}
