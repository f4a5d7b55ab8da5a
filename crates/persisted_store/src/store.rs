//! The store capability and its in-memory implementation.

use crate::StoreError;
use std::collections::HashMap;
use tracing::{debug, instrument};

/// A synchronous string-keyed key-value store.
///
/// This is the only boundary between game/form state and durable storage.
/// Callers pass a store in explicitly; nothing reaches for a global one.
pub trait ValueStore {
    /// Returns the value stored under `key`, or `None` if it was never written.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be read.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Overwrites the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if the backing storage cannot be written.
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

impl<S: ValueStore + ?Sized> ValueStore for &mut S {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

impl<S: ValueStore + ?Sized> ValueStore for Box<S> {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        (**self).save(key, value)
    }
}

/// Store backed by a `HashMap`. Nothing survives the process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the raw value under `key` without going through the trait.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Number of keys written so far.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been written.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for MemoryStore
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ValueStore for MemoryStore {
    #[instrument(skip(self))]
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let value = self.entries.get(key).cloned();
        debug!(found = value.is_some(), "Memory load");
        Ok(value)
    }

    #[instrument(skip(self, value), fields(bytes = value.len()))]
    fn save(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        debug!("Memory save");
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
