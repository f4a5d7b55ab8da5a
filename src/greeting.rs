//! Persisted name field with a greeting.

use persisted_store::{Persisted, ValueStore};
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// Default store key for the greeting user.
pub const USER_KEY: &str = "user";

/// The persisted form value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct User {
    /// Name typed by the user.
    pub name: String,
}

/// A name field whose value outlives the process.
#[derive(Debug)]
pub struct Greeting<S> {
    store: S,
    user: Persisted<User>,
}

impl<S: ValueStore> Greeting<S> {
    /// Loads the user from `store`, starting from `initial_name` if nothing
    /// was stored.
    #[instrument(skip(store))]
    pub fn new(store: S, initial_name: &str) -> Self {
        Self::with_key(store, USER_KEY, initial_name)
    }

    /// Like [`Greeting::new`] with a custom key.
    #[instrument(skip(store))]
    pub fn with_key(store: S, key: &str, initial_name: &str) -> Self {
        let default = User {
            name: initial_name.to_string(),
        };
        let user = Persisted::load(&store, key, default);
        Self { store, user }
    }

    /// Replaces the name and persists it.
    #[instrument(skip(self))]
    pub fn set_name(&mut self, name: &str) {
        let user = User {
            name: name.to_string(),
        };
        if let Err(e) = self.user.set(&mut self.store, user) {
            warn!(error = %e, "Failed to persist user");
        }
    }
}

impl<S> Greeting<S> {
    /// The current name.
    #[instrument(skip(self))]
    pub fn name(&self) -> &str {
        &self.user.get().name
    }

    /// `Hello {name}`, or a prompt while the name is empty.
    #[instrument(skip(self))]
    pub fn message(&self) -> String {
        if self.name().is_empty() {
            "Please type your name".to_string()
        } else {
            format!("Hello {}", self.name())
        }
    }

    /// Consumes the greeting, returning the store.
    #[instrument(skip(self))]
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use persisted_store::MemoryStore;

    #[test]
    fn test_initial_name_used_when_nothing_stored() {
        let greeting = Greeting::new(MemoryStore::new(), "Ada");
        assert_eq!(greeting.message(), "Hello Ada");
    }

    #[test]
    fn test_empty_name_prompts() {
        let greeting = Greeting::new(MemoryStore::new(), "");
        assert_eq!(greeting.message(), "Please type your name");
    }

    #[test]
    fn test_set_name_persists_object() {
        let mut greeting = Greeting::new(MemoryStore::new(), "");
        greeting.set_name("Grace");
        let store = greeting.into_store();
        assert_eq!(store.get(USER_KEY), Some(r#"{"name":"Grace"}"#));
    }

    #[test]
    fn test_stored_empty_name_beats_initial() {
        let store: MemoryStore = [(USER_KEY, r#"{"name":""}"#)].into_iter().collect();
        let greeting = Greeting::new(store, "Ada");
        assert_eq!(greeting.name(), "");
        assert_eq!(greeting.message(), "Please type your name");
    }
}
