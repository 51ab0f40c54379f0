//! Key/value storage backends for persisted consent state.
//!
//! The backend interface mirrors the shape of web local storage: string
//! values under string keys, no partial updates. `FileStorage` is the
//! durable implementation for environments with a filesystem;
//! `MemoryStorage` backs tests and storage-disabled sessions.

use std::collections::HashMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use thiserror::Error;

/// Errors surfaced by a storage backend.
///
/// The consent store treats every variant as non-fatal: a failed write is
/// logged and the in-memory state stays authoritative for the session.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A synchronous string key/value store.
///
/// All operations complete before returning; implementations expose no
/// suspension point to callers.
pub trait StorageBackend: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any prior value.
    fn write(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Remove the value stored under `key`. Removing an absent key is a no-op.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// File-backed storage: the whole key space is one JSON object file.
///
/// Writes go through a temporary file and an atomic rename so a crashed
/// write never leaves a truncated file behind.
pub struct FileStorage {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStorage {
    /// Open (or create) file-backed storage at `path`.
    ///
    /// An unreadable or malformed file is treated as empty storage; the
    /// next successful write replaces it.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let entries = Self::load_entries(&path).unwrap_or_default();
        Self {
            path,
            entries: Mutex::new(entries),
        }
    }

    fn load_entries(path: &Path) -> Result<HashMap<String, String>, StorageError> {
        if !path.exists() {
            return Ok(HashMap::new());
        }
        let contents = fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let temp = self.path.with_extension("tmp");
        let mut file = fs::File::create(&temp)?;
        let content = serde_json::to_string_pretty(entries)?;
        file.write_all(content.as_bytes())?;
        file.sync_all()?;
        fs::rename(temp, &self.path)?;
        Ok(())
    }
}

impl StorageBackend for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("storage lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        if entries.remove(key).is_some() {
            self.persist(&entries)?;
        }
        Ok(())
    }
}

/// In-memory storage for tests and storage-disabled sessions.
#[derive(Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().expect("storage lock poisoned");
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().expect("storage lock poisoned");
        entries.remove(key);
        Ok(())
    }
}
