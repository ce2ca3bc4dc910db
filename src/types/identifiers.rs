use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::fmt;

/// System-assigned record identifier.
///
/// Zero is the "unassigned" sentinel produced when raw input carries no
/// usable id. Every record held in a collection has a non-zero id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(u64);

impl MovieId {
    pub const UNASSIGNED: MovieId = MovieId(0);

    pub fn new(value: u64) -> Self {
        MovieId(value)
    }

    pub fn get(self) -> u64 {
        self.0
    }

    pub fn is_assigned(self) -> bool {
        self.0 != 0
    }

    /// The id following this one. Saturates instead of wrapping.
    pub fn next(self) -> Self {
        MovieId(self.0.saturating_add(1))
    }
}

impl From<u64> for MovieId {
    fn from(value: u64) -> Self {
        MovieId(value)
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key under which a value lives in a [`KeyValueStore`](crate::store::KeyValueStore).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StorageKey(String);

impl StorageKey {
    pub fn new(key: impl Into<String>) -> Self {
        StorageKey(key.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Filesystem-safe name for this key.
    ///
    /// Keys may contain separators such as `:`, so file-backed stores
    /// address them by content hash instead of by raw text.
    pub fn file_stem(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.0.as_bytes());

        let hash = hasher.finalize();
        let hex = hex::encode(hash);

        hex[..16].to_string()
    }
}

impl fmt::Display for StorageKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StorageKey {
    fn from(value: &str) -> Self {
        StorageKey(value.to_string())
    }
}
