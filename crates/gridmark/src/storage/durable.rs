//! Key-value backed backend; persists the snapshot under one fixed key.

use super::{BoardStorage, SharedKeyValueStore, StorageError};
use gridmark_board::StoredSnapshot;
use tracing::{debug, info};

/// Key the snapshot record lives under; each save overwrites it, so only
/// the latest snapshot is retained.
const SNAPSHOT_KEY: &str = "SavedGameState";

/// Backend writing the JSON snapshot string through an external
/// string-valued key-value medium.
pub struct DurableStorage {
    medium: SharedKeyValueStore,
}

impl DurableStorage {
    /// Creates a durable backend over the given medium.
    pub fn new(medium: SharedKeyValueStore) -> Self {
        Self { medium }
    }
}

impl BoardStorage for DurableStorage {
    fn save(&mut self, snapshot: StoredSnapshot) -> Result<(), StorageError> {
        let json = snapshot.to_json()?;
        let mut medium = self.medium.lock().unwrap();
        medium.set(SNAPSHOT_KEY, &json)?;
        info!(bytes = json.len(), "Snapshot written to key-value medium");
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSnapshot>, StorageError> {
        let medium = self.medium.lock().unwrap();
        match medium.get(SNAPSHOT_KEY)? {
            // A missing or empty record means nothing was ever saved.
            None => Ok(None),
            Some(raw) if raw.is_empty() => Ok(None),
            Some(raw) => {
                let snapshot = StoredSnapshot::from_json(&raw)?;
                debug!(cells = snapshot.cell_count(), "Snapshot read from key-value medium");
                Ok(Some(snapshot))
            }
        }
    }
}
