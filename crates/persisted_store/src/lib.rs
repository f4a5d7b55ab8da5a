//! Persisted-value store.
//!
//! A small synchronous key-value abstraction in the spirit of browser local
//! storage, plus [`Persisted`], a typed JSON-encoded value bound to one key.
//!
//! # Example
//!
//! ```
//! use persisted_store::{MemoryStore, Persisted};
//!
//! let mut store = MemoryStore::new();
//! let mut step = Persisted::load(&store, "currentStep", 0usize);
//! step.set(&mut store, 3).unwrap();
//!
//! let reloaded = Persisted::load(&store, "currentStep", 0usize);
//! assert_eq!(*reloaded.get(), 3);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod error;
mod file;
mod persisted;
mod store;

pub use error::StoreError;
pub use file::FileStore;
pub use persisted::{LoadSource, Persisted};
pub use store::{MemoryStore, ValueStore};
