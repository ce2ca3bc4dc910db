use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::identifiers::StorageKey;

pub const DEFAULT_STORAGE_KEY: &str = "movies:data";
pub const DEFAULT_TITLE_DEBOUNCE_MS: u64 = 250;
pub const DEFAULT_FORM_RATING: f64 = 3.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

// Serializable, comparable, explicit defaults.
// Missing fields in a config file fall back to `v0()` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    pub storage_key: String,
    pub title_debounce_ms: u64,
    pub default_form_rating: f64,
}

impl CatalogConfig {
    pub fn v0() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.into(),
            title_debounce_ms: DEFAULT_TITLE_DEBOUNCE_MS,
            default_form_rating: DEFAULT_FORM_RATING,
        }
    }

    pub fn from_json_file(path: &Path) -> Result<Self, ConfigError> {
        let f = std::fs::File::open(path)?;
        let config = serde_json::from_reader(f)?;
        Ok(config)
    }

    pub fn storage_key(&self) -> StorageKey {
        StorageKey::new(self.storage_key.clone())
    }

    pub fn title_debounce(&self) -> Duration {
        Duration::from_millis(self.title_debounce_ms)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::v0()
    }
}
