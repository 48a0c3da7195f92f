//! Engine error types.

use crate::storage::{StorageError, StorageSource};
use derive_more::Display;
use gridmark_board::GridError;

/// Failure surfaced by the engine to the initiating caller.
///
/// Every failure is synchronous and final; nothing is retried and nothing
/// propagates into the view layer.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum EngineError {
    /// Board dimensions rejected at setup; fatal.
    #[display("invalid board size: {}", _0)]
    InvalidBoardSize(GridError),
    /// Load requested but the backend holds nothing.
    #[display("no saved state in {} storage", _0)]
    NoSavedState(StorageSource),
    /// Loaded snapshot does not fit the live board; the board is unchanged.
    #[display("saved state is corrupt: snapshot has {} cells, board has {}", found, expected)]
    CorruptState {
        /// Cell count of the live board.
        expected: usize,
        /// Cell count recorded in the snapshot.
        found: usize,
    },
    /// The storage backend failed.
    #[display("storage failure: {}", _0)]
    Storage(StorageError),
}

impl std::error::Error for EngineError {}

impl From<GridError> for EngineError {
    fn from(err: GridError) -> Self {
        EngineError::InvalidBoardSize(err)
    }
}

impl From<StorageError> for EngineError {
    fn from(err: StorageError) -> Self {
        EngineError::Storage(err)
    }
}
