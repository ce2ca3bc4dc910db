use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use super::{KeyValueStore, StoreError};
use crate::types::identifiers::StorageKey;

/// Directory-backed store: one file per key.
///
/// Files are named after [`StorageKey::file_stem`]. Writes land in a
/// temporary sibling first and are renamed into place, so a reader never
/// observes a half-written value.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open (creating if needed) a store rooted at `root`.
    pub fn open(root: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path_for(&self, key: &StorageKey) -> PathBuf {
        self.root.join(format!("{}.json", key.file_stem()))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &StorageKey) -> Result<Option<String>, StoreError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &StorageKey, value: &str) -> Result<(), StoreError> {
        let path = self.path_for(key);
        let temp_path = path.with_extension("json.tmp");

        let mut f = fs::File::create(&temp_path)?;
        f.write_all(value.as_bytes())?;
        f.sync_all()?;
        drop(f);

        fs::rename(&temp_path, &path)?;
        Ok(())
    }
}
