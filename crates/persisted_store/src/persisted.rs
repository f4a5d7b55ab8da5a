//! Typed values bound to a store key.

use crate::{StoreError, ValueStore};
use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{debug, instrument, warn};

/// Where a [`Persisted`] value came from when it was loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// The key held a value that decoded cleanly.
    Stored,
    /// Nothing was stored under the key.
    Absent,
    /// Something was stored but could not be read or decoded.
    Rejected,
}

/// A value of type `T` mirrored into a [`ValueStore`] under a fixed key.
///
/// Values are encoded as JSON. A stored value always wins over the default,
/// including "empty" values such as `0`, `""` or `false`; only an absent key
/// or an undecodable payload falls back to the default.
#[derive(Debug, Clone, PartialEq)]
pub struct Persisted<T> {
    key: String,
    value: T,
    source: LoadSource,
}

impl<T> Persisted<T>
where
    T: Serialize + DeserializeOwned,
{
    /// Loads the value under `key`, or uses `default`.
    ///
    /// Read failures and decode failures are logged and treated as absent.
    #[instrument(skip(store, default))]
    pub fn load<S: ValueStore + ?Sized>(store: &S, key: &str, default: T) -> Self {
        let raw = match store.load(key) {
            Ok(raw) => raw,
            Err(e) => {
                warn!(error = %e, "Store read failed, using default");
                return Self::with_source(key, default, LoadSource::Rejected);
            }
        };

        let Some(raw) = raw else {
            debug!("Nothing stored, using default");
            return Self::with_source(key, default, LoadSource::Absent);
        };

        match serde_json::from_str::<T>(&raw) {
            Ok(value) => {
                debug!("Loaded stored value");
                Self::with_source(key, value, LoadSource::Stored)
            }
            Err(e) => {
                warn!(error = %e, "Stored value has unexpected shape, using default");
                Self::with_source(key, default, LoadSource::Rejected)
            }
        }
    }

    fn with_source(key: impl Into<String>, value: T, source: LoadSource) -> Self {
        Self {
            key: key.into(),
            value,
            source,
        }
    }

    /// Writes the current value to `store`.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the store write fails.
    #[instrument(skip(self, store), fields(key = %self.key))]
    pub fn save<S: ValueStore + ?Sized>(&self, store: &mut S) -> Result<(), StoreError> {
        let encoded = serde_json::to_string(&self.value)?;
        store.save(&self.key, &encoded)
    }

    /// Replaces the value and writes it to `store`.
    ///
    /// The in-memory value is updated even when the write fails.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError`] if encoding or the store write fails.
    pub fn set<S: ValueStore + ?Sized>(&mut self, store: &mut S, value: T) -> Result<(), StoreError> {
        self.value = value;
        self.save(store)
    }
}

impl<T> Persisted<T> {
    /// The store key.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Mutable access to the value. Call [`Persisted::save`] afterwards.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.value
    }

    /// Replaces the value in memory only, returning the old one.
    pub fn replace(&mut self, value: T) -> T {
        std::mem::replace(&mut self.value, value)
    }

    /// How the value was obtained at load time.
    pub fn source(&self) -> LoadSource {
        self.source
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MemoryStore;

    #[test]
    fn test_absent_uses_default() {
        let store = MemoryStore::new();
        let cell = Persisted::load(&store, "step", 7usize);
        assert_eq!(*cell.get(), 7);
        assert_eq!(cell.source(), LoadSource::Absent);
    }

    #[test]
    fn test_stored_zero_is_not_treated_as_absent() {
        let store: MemoryStore = [("step", "0")].into_iter().collect();
        let cell = Persisted::load(&store, "step", 5usize);
        assert_eq!(*cell.get(), 0);
        assert_eq!(cell.source(), LoadSource::Stored);
    }

    #[test]
    fn test_stored_empty_string_survives() {
        let store: MemoryStore = [("name", "\"\"")].into_iter().collect();
        let cell = Persisted::load(&store, "name", "Ada".to_string());
        assert_eq!(cell.get(), "");
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let store: MemoryStore = [("step", "\"three\"")].into_iter().collect();
        let cell = Persisted::load(&store, "step", 1usize);
        assert_eq!(*cell.get(), 1);
        assert_eq!(cell.source(), LoadSource::Rejected);
    }

    #[test]
    fn test_set_writes_json() {
        let mut store = MemoryStore::new();
        let mut cell = Persisted::load(&store, "flags", vec![true]);
        cell.set(&mut store, vec![false, true]).unwrap();
        assert_eq!(store.get("flags"), Some("[false,true]"));
    }
}
