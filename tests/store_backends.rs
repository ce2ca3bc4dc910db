use movie_catalog::store::{InMemoryStore, KeyValueStore, StoreError};
use movie_catalog::types::StorageKey;

#[test]
fn in_memory_clones_share_entries() {
    let store = InMemoryStore::new();
    let key = StorageKey::new("k");
    let other = store.clone();

    store.set(&key, "v").unwrap();
    assert_eq!(other.get(&key).unwrap().as_deref(), Some("v"));
}

#[test]
fn in_memory_quota_counts_other_keys_but_not_the_replaced_value() {
    let store = InMemoryStore::with_quota(6);
    let a = StorageKey::new("a");
    let b = StorageKey::new("b");

    store.set(&a, "1234").unwrap();
    store.set(&a, "123456").unwrap();
    assert!(matches!(
        store.set(&b, "x"),
        Err(StoreError::QuotaExceeded { needed: 7, quota: 6 })
    ));
    assert_eq!(store.get(&b).unwrap(), None);
}

#[test]
fn in_memory_disabled_store_refuses_everything() {
    let store = InMemoryStore::disabled();
    let key = StorageKey::new("k");

    assert!(matches!(store.get(&key), Err(StoreError::Unavailable(_))));
    assert!(matches!(store.set(&key, "v"), Err(StoreError::Unavailable(_))));
}

fn write_through<S: KeyValueStore>(store: S, key: &StorageKey, value: &str) {
    store.set(key, value).unwrap();
}

#[test]
fn store_works_through_a_reference() {
    let store = InMemoryStore::new();
    let key = StorageKey::new("k");

    write_through(&store, &key, "v");
    assert_eq!(store.raw(&key).as_deref(), Some("v"));
}
