//! In-memory storage implementation
//!
//! MemoryStore is the default substrate for tests and ephemeral sessions.
//! All documents live in a single RwLock-protected map.

use crate::Storage;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use spotlight_core::Result;

/// In-memory key-value store
///
/// # Example
///
/// ```
/// use spotlight_storage::{MemoryStore, Storage};
///
/// let store = MemoryStore::new();
/// store.set("todos", "[]").unwrap();
/// assert_eq!(store.get("todos").unwrap().as_deref(), Some("[]"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<FxHashMap<String, String>>,
}

impl MemoryStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with documents
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        MemoryStore {
            entries: RwLock::new(map),
        }
    }

    /// Number of stored documents
    pub fn len(&self) -> usize {
        self.entries.read().len()
    }

    /// Check whether the store holds no documents
    pub fn is_empty(&self) -> bool {
        self.entries.read().is_empty()
    }
}

impl Storage for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.entries
            .write()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<()> {
        self.entries.write().remove(key);
        Ok(())
    }
}
