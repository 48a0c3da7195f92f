//! Pluggable persistence for board snapshots.
//!
//! Backends are interchangeable behind the [`BoardStorage`] capability
//! trait; [`create_storage`] builds the one matching a [`StorageSource`].
//! The engine keeps exactly one backend alive and swaps it only when the
//! requested source changes.

mod durable;
mod kv;
mod volatile;

pub use durable::DurableStorage;
pub use kv::{FileKeyValueStore, KeyValueStore, MemoryKeyValueStore};
pub use volatile::VolatileStorage;

use derive_more::Display;
use gridmark_board::{SnapshotError, StoredSnapshot};
use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};

/// Which persistence strategy the engine targets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum StorageSource {
    /// Process-lifetime storage; saves die with the process.
    Volatile,
    /// Key-value backed storage that outlives the process.
    Durable,
}

/// Shared handle to the external key-value medium.
pub type SharedKeyValueStore = Arc<Mutex<dyn KeyValueStore>>;

/// Failure raised by a storage backend.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum StorageError {
    /// The underlying medium could not be read or written.
    #[display("storage medium unavailable: {}", _0)]
    Medium(String),
    /// Persisted data exists but cannot be decoded.
    #[display("persisted snapshot is malformed: {}", _0)]
    Malformed(SnapshotError),
}

impl std::error::Error for StorageError {}

impl From<SnapshotError> for StorageError {
    fn from(err: SnapshotError) -> Self {
        StorageError::Malformed(err)
    }
}

impl From<std::io::Error> for StorageError {
    fn from(err: std::io::Error) -> Self {
        StorageError::Medium(err.to_string())
    }
}

/// Capability interface every backend provides.
///
/// `load` returning `Ok(None)` is the explicit "nothing saved yet" signal;
/// only malformed persisted data is an error.
pub trait BoardStorage: Send {
    /// Stores a snapshot, overwriting any prior one.
    fn save(&mut self, snapshot: StoredSnapshot) -> Result<(), StorageError>;

    /// Retrieves the last stored snapshot, if any.
    fn load(&self) -> Result<Option<StoredSnapshot>, StorageError>;
}

/// Builds the backend for `source`.
///
/// The durable backend writes through the shared key-value medium; the
/// volatile backend ignores it.
pub fn create_storage(
    source: StorageSource,
    medium: SharedKeyValueStore,
) -> Box<dyn BoardStorage> {
    match source {
        StorageSource::Volatile => Box::new(VolatileStorage::new()),
        StorageSource::Durable => Box::new(DurableStorage::new(medium)),
    }
}
