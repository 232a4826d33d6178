//! File-backed storage implementation
//!
//! JsonFileStore keeps all documents in a single JSON object file
//! (`{"todos": "...", "gallery": "..."}`). The file is read once on open
//! and rewritten in full on every mutation. A missing or unreadable file
//! degrades to an empty store rather than failing the open.

use crate::Storage;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use spotlight_core::{Error, Result};
use std::path::{Path, PathBuf};
use tracing::warn;

/// Single-file JSON key-value store
///
/// Persists documents across sessions the way the original feature kept
/// its collections in browser storage.
///
/// # Example
///
/// ```no_run
/// use spotlight_storage::{JsonFileStore, Storage};
///
/// let store = JsonFileStore::open("/tmp/spotlight-store.json")?;
/// store.set("todos", "[]")?;
/// # Ok::<(), spotlight_core::Error>(())
/// ```
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: RwLock<FxHashMap<String, String>>,
}

impl JsonFileStore {
    /// Open a store backed by the given file
    ///
    /// Creates the parent directory if needed. A missing file yields an
    /// empty store; a corrupt file is logged and treated as empty rather
    /// than propagated, matching the silent-recovery contract of the
    /// dynamic sources reading from it.
    ///
    /// # Errors
    ///
    /// Returns an error only if the parent directory cannot be created.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(Error::IoError)?;
            }
        }

        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str::<FxHashMap<String, String>>(&contents) {
                Ok(map) => map,
                Err(e) => {
                    warn!(
                        target: "spotlight::storage",
                        path = %path.display(),
                        error = %e,
                        "Store file is not a valid JSON object, starting empty"
                    );
                    FxHashMap::default()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => FxHashMap::default(),
            Err(e) => {
                warn!(
                    target: "spotlight::storage",
                    path = %path.display(),
                    error = %e,
                    "Store file unreadable, starting empty"
                );
                FxHashMap::default()
            }
        };

        Ok(JsonFileStore {
            path,
            entries: RwLock::new(entries),
        })
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Rewrite the backing file from the in-memory map
    fn persist(&self, entries: &FxHashMap<String, String>) -> Result<()> {
        let contents = serde_json::to_string_pretty(entries)?;
        std::fs::write(&self.path, contents).map_err(Error::IoError)
    }
}

impl Storage for JsonFileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut entries = self.entries.write();
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut entries = self.entries.write();
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}
