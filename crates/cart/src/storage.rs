//! String key-value persistence for cart snapshots.
//!
//! [`FileStore`] keeps a flat map of string keys to string values in a
//! single JSON file - the browser-localStorage model. [`MemoryStore`] is
//! the ephemeral equivalent for tests and one-shot use.

use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::sync::Mutex;

use thiserror::Error;
use tracing::warn;

/// Errors that can occur reading or writing the store.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Filesystem operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Store file exists but is not a valid key-value map.
    #[error("malformed store file: {0}")]
    Malformed(String),
}

/// A string-only key-value store.
///
/// Values are opaque to the store; the cart serializes its snapshot to a
/// JSON string before handing it over.
pub trait KeyValueStore: Send + Sync {
    /// Read the value under a key, `None` if absent.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Write a value under a key, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// File-backed key-value store: one JSON object per file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    /// Create a store backed by the given file. The file is created on
    /// first write.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StorageError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => {
                serde_json::from_str(&raw).map_err(|e| StorageError::Malformed(e.to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(BTreeMap::new()),
            Err(e) => Err(e.into()),
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        // A malformed store file is unrecoverable; start over rather than
        // refuse every future write.
        let mut map = match self.read_map() {
            Ok(map) => map,
            Err(StorageError::Malformed(e)) => {
                warn!(path = %self.path.display(), error = %e, "replacing malformed store file");
                BTreeMap::new()
            }
            Err(e) => return Err(e),
        };

        map.insert(key.to_string(), value.to_string());

        let raw = serde_json::to_string_pretty(&map)
            .map_err(|e| StorageError::Malformed(e.to_string()))?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

/// In-memory key-value store. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryStore {
    map: Mutex<BTreeMap<String, String>>,
}

impl MemoryStore {
    /// Create an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeMap<String, String>> {
        // Single-writer usage; recover the map if a test panicked mid-write.
        self.map.lock().unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}
