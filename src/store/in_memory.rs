//! HashMap-backed store for tests and ephemeral sessions.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use super::{KeyValueStore, StoreError};
use crate::types::identifiers::StorageKey;

/// In-memory store. Clones share the same underlying map.
///
/// An optional byte quota (summed over all stored values) and a disabled
/// mode reproduce the ways a browser-profile store refuses writes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStore {
    entries: Arc<RwLock<HashMap<StorageKey, String>>>,
    quota: Option<usize>,
    disabled: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refuse any write that would push total stored bytes past `quota`.
    pub fn with_quota(quota: usize) -> Self {
        Self {
            quota: Some(quota),
            ..Self::default()
        }
    }

    /// Every read and write fails.
    pub fn disabled() -> Self {
        Self {
            disabled: true,
            ..Self::default()
        }
    }

    /// Write `value` directly, bypassing quota and disabled checks.
    pub fn seed(&self, key: &StorageKey, value: impl Into<String>) {
        if let Ok(mut entries) = self.entries.write() {
            entries.insert(key.clone(), value.into());
        }
    }

    pub fn raw(&self, key: &StorageKey) -> Option<String> {
        self.entries.read().ok()?.get(key).cloned()
    }

    fn check_enabled(&self) -> Result<(), StoreError> {
        if self.disabled {
            return Err(StoreError::Unavailable("storage is disabled".into()));
        }
        Ok(())
    }
}

impl KeyValueStore for InMemoryStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        self.check_enabled()?;

        let entries = self
            .entries
            .read()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StoreError> {
        self.check_enabled()?;

        let mut entries = self
            .entries
            .write()
            .map_err(|_| StoreError::Unavailable("lock poisoned".into()))?;

        if let Some(quota) = self.quota {
            let others: usize = entries
                .iter()
                .filter(|(k, _)| *k != key)
                .map(|(_, v)| v.len())
                .sum();
            let needed = others + value.len();
            if needed > quota {
                return Err(StoreError::QuotaExceeded { needed, quota });
            }
        }

        entries.insert(key.clone(), value.to_string());
        Ok(())
    }
}
