//! Durable key-value backends for store persistence.
//!
//! Each record kind owns one key. The file backend keeps one
//! pretty-printed JSON document per key under the data directory;
//! writes are blocking and happen inside the same call as the mutation.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::error::PersistenceError;

/// Blocking key-value storage used by [`ListStore`](super::ListStore).
pub trait Storage {
    /// Read the serialized document under `key`, if any.
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    /// Write the serialized document under `key`, replacing any
    /// previous value.
    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError>;

    /// Remove the document under `key`. Missing keys are not an error.
    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;
}

/// One `<key>.json` file per kind under a data directory.
#[derive(Debug, Clone)]
pub struct FileStorage {
    data_dir: PathBuf,
}

impl FileStorage {
    /// Open (creating the directory if needed) a file backend rooted at
    /// `data_dir`.
    pub fn open(data_dir: &Path) -> Result<Self, PersistenceError> {
        fs::create_dir_all(data_dir)?;
        Ok(FileStorage {
            data_dir: data_dir.to_path_buf(),
        })
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{key}.json"))
    }
}

impl Storage for FileStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        let path = self.key_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        fs::write(self.key_path(key), value)?;
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        let path = self.key_path(key);
        if path.exists() {
            fs::remove_file(&path)?;
        }
        Ok(())
    }
}

/// In-memory backend for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: HashMap<String, String>,
}

impl MemoryStorage {
    /// Empty in-memory storage.
    #[must_use]
    pub fn new() -> Self {
        MemoryStorage::default()
    }

    /// Pre-populated in-memory storage (e.g. legacy-shape fixtures).
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_string(), value.to_string());
        MemoryStorage { entries }
    }
}

impl Storage for MemoryStorage {
    fn read(&self, key: &str) -> Result<Option<String>, PersistenceError> {
        Ok(self.entries.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> Result<(), PersistenceError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError> {
        self.entries.remove(key);
        Ok(())
    }
}
