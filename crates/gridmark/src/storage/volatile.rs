//! In-memory backend; holds at most one snapshot for the process lifetime.

use super::{BoardStorage, StorageError};
use gridmark_board::StoredSnapshot;
use tracing::debug;

/// Backend keeping the last saved snapshot in process memory.
///
/// Swapping the engine to another source drops this instance and its
/// snapshot with it; that loss is part of the volatile contract.
#[derive(Debug, Default)]
pub struct VolatileStorage {
    stored: Option<StoredSnapshot>,
}

impl VolatileStorage {
    /// Creates an empty volatile backend.
    pub fn new() -> Self {
        Self::default()
    }
}

impl BoardStorage for VolatileStorage {
    fn save(&mut self, snapshot: StoredSnapshot) -> Result<(), StorageError> {
        debug!(cells = snapshot.cell_count(), "Snapshot stored in memory");
        self.stored = Some(snapshot);
        Ok(())
    }

    fn load(&self) -> Result<Option<StoredSnapshot>, StorageError> {
        Ok(self.stored.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridmark_board::{BoardState, GridSize, Player};

    fn snapshot() -> StoredSnapshot {
        let mut board = BoardState::new(GridSize::new(3, 3).unwrap());
        board.place_mark(0, Player::A).unwrap();
        board.serialize()
    }

    #[test]
    fn test_load_without_save_is_absent() {
        let storage = VolatileStorage::new();
        assert_eq!(storage.load().unwrap(), None);
    }

    #[test]
    fn test_save_then_load() {
        let mut storage = VolatileStorage::new();
        let snapshot = snapshot();
        storage.save(snapshot.clone()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(snapshot));
    }

    #[test]
    fn test_save_overwrites() {
        let mut storage = VolatileStorage::new();
        storage.save(snapshot()).unwrap();

        let mut board = BoardState::new(GridSize::new(3, 3).unwrap());
        board.place_mark(8, Player::B).unwrap();
        let second = board.serialize();

        storage.save(second.clone()).unwrap();
        assert_eq!(storage.load().unwrap(), Some(second));
    }
}
