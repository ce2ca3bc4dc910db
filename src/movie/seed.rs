use super::movie::{create_movie, Movie, RawMovie};

const TMDB_POSTERS: &str = "https://image.tmdb.org/t/p/w500";

/// The fallback collection used whenever storage holds nothing usable.
///
/// Returns a fresh value on every call.
pub fn seed_movies() -> Vec<Movie> {
    let seeds: [(u64, &str, &str, &str, f64); 6] = [
        (
            1,
            "Inception",
            "A thief who steals corporate secrets through dream-sharing tech is given the inverse task of planting an idea.",
            "edv5CZvWj09upOsy2Y6IwDhK8bt.jpg",
            4.5,
        ),
        (
            2,
            "Interstellar",
            "Explorers travel through a wormhole in space in an attempt to ensure humanity's survival.",
            "rAiYTfKGqDCRIIqoNM8OmMzMgc0.jpg",
            5.0,
        ),
        (
            3,
            "The Dark Knight",
            "Batman faces the Joker, a criminal mastermind who thrusts Gotham into chaos.",
            "qJ2tW6WMUDux911r6m7haRef0WH.jpg",
            5.0,
        ),
        (
            4,
            "The Matrix",
            "A hacker discovers reality as he knows it is a simulation and joins a rebellion.",
            "f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg",
            4.5,
        ),
        (
            5,
            "Breaking Bad",
            "A chemistry teacher diagnosed with cancer starts producing methamphetamine.",
            "ggFHVNu6YYI5L9pCfOacjizRGt.jpg",
            5.0,
        ),
        (
            6,
            "Game of Thrones",
            "Noble families vie for control of the Iron Throne while an ancient enemy returns.",
            "u3bZgnGQ9T01sWNhyveQz0wH0Hl.jpg",
            4.0,
        ),
    ];

    seeds
        .into_iter()
        .map(|(id, title, description, poster, rating)| {
            let raw = RawMovie::new(title, description, format!("{TMDB_POSTERS}/{poster}"), rating)
                .with_id(id);
            create_movie(&raw)
        })
        .collect()
}
