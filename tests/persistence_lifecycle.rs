use movie_catalog::collection::add_movie_with_id;
use movie_catalog::config::DEFAULT_STORAGE_KEY;
use movie_catalog::movie::{seed_movies, MovieId, RawMovie};
use movie_catalog::repository::MovieRepository;
use movie_catalog::store::{FileStore, InMemoryStore, KeyValueStore};
use movie_catalog::types::StorageKey;
use serde_json::json;
use tempfile::tempdir;

fn key() -> StorageKey {
    StorageKey::new(DEFAULT_STORAGE_KEY)
}

fn repo_with(raw: &str) -> MovieRepository<InMemoryStore> {
    let store = InMemoryStore::new();
    store.seed(&key(), raw);
    MovieRepository::new(store, key())
}

#[test]
fn invariant_save_then_load_round_trips() {
    let repo = MovieRepository::new(InMemoryStore::new(), key());
    let movies = add_movie_with_id(
        &seed_movies(),
        &RawMovie::new("Alien", "In space no one can hear you scream.", "https://img/alien.jpg", 4.5),
    );

    repo.save_movies(&movies);
    assert_eq!(repo.load_movies(), movies);
}

#[test]
fn fallback_when_absent() {
    let repo = MovieRepository::new(InMemoryStore::new(), key());
    assert_eq!(repo.load_movies(), seed_movies());
}

#[test]
fn corruption_not_json_falls_back_to_seeds() {
    assert_eq!(repo_with("not json").load_movies(), seed_movies());
}

#[test]
fn corruption_not_an_array_falls_back_to_seeds() {
    assert_eq!(repo_with(r#"{"title":"Heat"}"#).load_movies(), seed_movies());
    assert_eq!(repo_with("42").load_movies(), seed_movies());
    assert_eq!(repo_with("null").load_movies(), seed_movies());
}

#[test]
fn stored_empty_array_or_string_reads_as_no_data() {
    assert_eq!(repo_with("[]").load_movies(), seed_movies());
    assert_eq!(repo_with("").load_movies(), seed_movies());
}

#[test]
fn corruption_unreadable_store_falls_back_to_seeds() {
    let repo = MovieRepository::new(InMemoryStore::disabled(), key());
    assert_eq!(repo.load_movies(), seed_movies());
}

#[test]
fn loaded_records_are_normalized_and_ids_repaired() {
    let stored = json!([
        {"id": 10, "title": " Heat ", "description": "Crime.", "posterURL": "https://h", "rating": 11},
        {"id": "x", "title": "Ronin", "description": "Cars.", "posterURL": "https://r", "rating": 3.5},
        {"title": "Collateral", "rating": -1},
        "garbage"
    ]);
    let movies = repo_with(&stored.to_string()).load_movies();

    let ids: Vec<u64> = movies.iter().map(|m| m.id.get()).collect();
    assert_eq!(ids, vec![10, 2, 3, 4]);

    assert_eq!(movies[0].title, "Heat");
    assert_eq!(movies[0].rating, 5.0);
    assert_eq!(movies[2].rating, 0.0);
    assert_eq!(movies[2].poster_url, "");
    assert_eq!(movies[3].title, "");
}

#[test]
fn corruption_null_element_falls_back_to_seeds() {
    assert_eq!(repo_with("[null]").load_movies(), seed_movies());

    let stored = json!([
        {"id": 1, "title": "Heat", "description": "Crime.", "posterURL": "https://h", "rating": 4},
        null
    ]);
    assert_eq!(repo_with(&stored.to_string()).load_movies(), seed_movies());
}

#[test]
fn repository_exposes_its_store_and_key() {
    let repo = repo_with("not json");

    assert_eq!(repo.key(), &key());
    assert_eq!(repo.store().raw(&key()).as_deref(), Some("not json"));
}

#[test]
fn write_failure_is_swallowed() {
    let store = InMemoryStore::with_quota(16);
    let repo = MovieRepository::new(store.clone(), key());

    let movies = seed_movies();
    repo.save_movies(&movies);

    assert_eq!(store.raw(&key()), None);
    // Nothing was written, so the next load sees seeds
    assert_eq!(repo.load_movies(), movies);

    let disabled = MovieRepository::new(InMemoryStore::disabled(), key());
    disabled.save_movies(&movies);
}

#[test]
fn golden_stored_shape_is_a_bare_array() {
    let store = InMemoryStore::new();
    let repo = MovieRepository::new(store.clone(), key());
    let movies = add_movie_with_id(&[], &RawMovie::new("A", "B", "http://x", 4.0));

    repo.save_movies(&movies);

    let stored: serde_json::Value = serde_json::from_str(&store.raw(&key()).unwrap()).unwrap();
    assert_eq!(
        stored,
        json!([{"id": 1, "title": "A", "description": "B", "posterURL": "http://x", "rating": 4.0}])
    );
}

#[test]
fn file_store_round_trip_survives_reopen() {
    let dir = tempdir().unwrap();
    let root = dir.path().join("profile");

    let movies = add_movie_with_id(
        &seed_movies(),
        &RawMovie::new("Alien", "Space.", "https://img/alien.jpg", 4.0),
    );

    {
        let repo = MovieRepository::new(FileStore::open(&root).unwrap(), key());
        repo.save_movies(&movies);
    }

    let reopened = MovieRepository::new(FileStore::open(&root).unwrap(), key());
    let loaded = reopened.load_movies();
    assert_eq!(loaded, movies);
    assert_eq!(loaded.last().map(|m| m.id), Some(MovieId::new(7)));
}

#[test]
fn file_store_missing_key_and_no_temp_leftovers() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();

    assert_eq!(store.root(), dir.path());
    assert_eq!(store.path_for(&key()).parent(), Some(dir.path()));
    assert_eq!(store.get(&key()).unwrap(), None);

    store.set(&key(), "[]").unwrap();
    store.set(&key(), "[1]").unwrap();
    assert_eq!(store.get(&key()).unwrap().as_deref(), Some("[1]"));

    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec![format!("{}.json", key().file_stem())]);
}

#[test]
fn file_store_corrupt_file_falls_back_to_seeds() {
    let dir = tempdir().unwrap();
    let store = FileStore::open(dir.path()).unwrap();
    std::fs::write(store.path_for(&key()), "{{{").unwrap();

    let repo = MovieRepository::new(store, key());
    assert_eq!(repo.load_movies(), seed_movies());
}
