use movie_catalog::types::coerce;
use movie_catalog::types::{MovieId, StorageKey};
use serde_json::json;

#[test]
fn text_sentinels() {
    assert_eq!(coerce::text(&json!(null)), "");
    assert_eq!(coerce::text(&json!({"a": 1})), "");
    assert_eq!(coerce::text(&json!([1, 2])), "");
    assert_eq!(coerce::text(&json!(42)), "42");
    assert_eq!(coerce::text(&json!(true)), "true");
    assert_eq!(coerce::text(&json!("  Heat ")), "  Heat ");
}

#[test]
fn rating_accepts_numbers_and_numeric_strings_only() {
    assert_eq!(coerce::rating(&json!(4.5)), Some(4.5));
    assert_eq!(coerce::rating(&json!(" 2 ")), Some(2.0));
    assert_eq!(coerce::rating(&json!("NaN")), None);
    assert_eq!(coerce::rating(&json!("inf")), None);
    assert_eq!(coerce::rating(&json!(true)), None);
    assert_eq!(coerce::rating(&json!(null)), None);
}

#[test]
fn id_sentinel_is_zero() {
    assert_eq!(coerce::id(&json!(7)), 7);
    assert_eq!(coerce::id(&json!("12")), 12);
    assert_eq!(coerce::id(&json!(3.9)), 3);
    assert_eq!(coerce::id(&json!(-4)), 0);
    assert_eq!(coerce::id(&json!(0.5)), 0);
    assert_eq!(coerce::id(&json!("x")), 0);
    assert_eq!(coerce::id(&json!(null)), 0);
    assert_eq!(coerce::id(&json!(false)), 0);
}

#[test]
fn movie_id_next_saturates() {
    assert_eq!(MovieId::new(u64::MAX).next(), MovieId::new(u64::MAX));
    assert_eq!(MovieId::UNASSIGNED.next(), MovieId::new(1));
    assert!(!MovieId::UNASSIGNED.is_assigned());
    assert_eq!(MovieId::from(3).to_string(), "3");
}

#[test]
fn storage_key_file_stem_is_stable_and_safe() {
    let key = StorageKey::new("movies:data");
    let stem = key.file_stem();

    assert_eq!(stem, StorageKey::from("movies:data").file_stem());
    assert_eq!(stem.len(), 16);
    assert!(stem.chars().all(|c| c.is_ascii_hexdigit()));
    assert_ne!(stem, StorageKey::new("movies:other").file_stem());
}
