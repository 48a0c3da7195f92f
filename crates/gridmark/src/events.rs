//! External signals consumed by the engine.

use crate::storage::StorageSource;
use serde::{Deserialize, Serialize};

/// A user intent signal from the event source.
///
/// Signals are handled one at a time, each to completion, by
/// [`GameEngine::handle`](crate::GameEngine::handle).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserAction {
    /// Start a new game, or restart the current one.
    StartGame,
    /// A tile at `(row, col)` was clicked.
    TileClicked {
        /// Row of the clicked tile.
        row: usize,
        /// Column of the clicked tile.
        col: usize,
    },
    /// Save the board through the given storage source.
    SaveState(StorageSource),
    /// Load the board through the given storage source.
    LoadState(StorageSource),
}
