//! String-keyed value stores.
//!
//! The catalog only needs `get` and `set` of whole string values; the
//! rest of the crate talks to storage through [`KeyValueStore`] so that
//! tests can swap the file-backed store for an in-memory one.

pub mod file;
pub mod in_memory;

use thiserror::Error;

use crate::types::identifiers::StorageKey;

pub use file::FileStore;
pub use in_memory::InMemoryStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Quota exceeded: {needed} bytes needed, {quota} allowed")]
    QuotaExceeded { needed: usize, quota: usize },
    #[error("Storage unavailable: {0}")]
    Unavailable(String),
}

pub trait KeyValueStore {
    /// `Ok(None)` when nothing is stored under `key`.
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError>;

    /// Replace the value under `key`.
    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StoreError>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for &S {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        (**self).get(key)
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StoreError> {
        (**self).set(key, value)
    }
}
