//! File-backed store: one JSON object mapping keys to serialized values.

use crate::{StoreError, ValueStore};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument};

/// Store persisted as a single JSON object on disk.
///
/// A missing file reads as an empty store. Every save rewrites the whole
/// file, so the on-disk state always matches the last successful write.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Creates a store rooted at `path`. The file is not touched until the
    /// first load or save.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn new(path: impl AsRef<Path>) -> Self {
        info!("Creating FileStore");
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// Returns the backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads every entry in the file.
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn read_entries(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            debug!("Store file missing, treating as empty");
            return Ok(BTreeMap::new());
        }

        let content = std::fs::read_to_string(&self.path).map_err(|e| {
            StoreError::new(format!(
                "Failed to read '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content).map_err(|e| {
            StoreError::new(format!(
                "Failed to parse '{}': {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Writes every entry to the file, creating parent directories.
    #[instrument(skip(self, entries), fields(path = %self.path.display(), count = entries.len()))]
    fn write_entries(&self, entries: &BTreeMap<String, String>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }

        let content = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, content).map_err(|e| {
            StoreError::new(format!(
                "Failed to write '{}': {}",
                self.path.display(),
                e
            ))
        })?;

        debug!("Store file written");
        Ok(())
    }
}

impl ValueStore for FileStore {
    #[instrument(skip(self), fields(path = %self.path.display()))]
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let mut entries = self.read_entries()?;
        Ok(entries.remove(key))
    }

    #[instrument(skip(self, value), fields(path = %self.path.display(), bytes = value.len()))]
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)
    }
}
