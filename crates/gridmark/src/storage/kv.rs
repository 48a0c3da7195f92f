//! String-valued key-value media backing the durable storage backend.
//!
//! The medium is an external collaborator from the engine's point of view;
//! backends only see the [`KeyValueStore`] trait.

use super::StorageError;
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, instrument};

/// Opaque string store with read/write by key.
pub trait KeyValueStore: Send {
    /// Reads the value stored under `key`, if any.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-memory medium for tests and demos.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Single-file JSON medium; gives the CLI saves that survive the process.
///
/// The whole store is one JSON object of string entries, re-read on every
/// access. Fine for a handful of keys, not meant as a database.
#[derive(Debug)]
pub struct FileKeyValueStore {
    path: PathBuf,
}

impl FileKeyValueStore {
    /// Creates a medium backed by the file at `path`. The file is created
    /// on first write.
    #[instrument]
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    fn read_entries(&self) -> Result<HashMap<String, String>, StorageError> {
        if !self.path.exists() {
            return Ok(HashMap::new());
        }
        let raw = fs::read_to_string(&self.path)?;
        serde_json::from_str(&raw)
            .map_err(|err| StorageError::Medium(format!("{}: {}", self.path.display(), err)))
    }
}

impl KeyValueStore for FileKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.read_entries()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.read_entries()?;
        entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&entries)
            .map_err(|err| StorageError::Medium(err.to_string()))?;
        fs::write(&self.path, raw)?;
        debug!(path = %self.path.display(), key, "Key-value entry written");
        Ok(())
    }
}
