//! Snapshot codec: the textual form a board takes at the storage boundary.

use crate::geometry::GridSize;
use crate::types::{BoardState, Player, Tile};
use derive_getters::Getters;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Serialized textual form of a [`BoardState`].
///
/// Cell markers are `""` for empty tiles or a player marker string; the
/// terminal flags are stored as `0`/`1`. Snapshots exist only at the
/// storage boundary and are never held long-term in memory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
#[serde(rename_all = "camelCase")]
pub struct StoredSnapshot {
    cells: Vec<String>,
    current_player: String,
    won: u8,
    tied: u8,
}

impl StoredSnapshot {
    /// Number of cells recorded in the snapshot.
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Encodes the snapshot as a JSON string for string-valued media.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Decodes a snapshot from its JSON string form.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }
}

/// Error decoding persisted snapshot data.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum SnapshotError {
    /// A cell marker is neither empty nor a known player.
    #[display("unrecognized cell marker '{}'", _0)]
    UnknownMarker(String),
    /// The recorded current player is not a known player.
    #[display("unrecognized player '{}'", _0)]
    UnknownPlayer(String),
    /// A terminal flag holds something other than 0 or 1.
    #[display("flag value {} is not 0 or 1", _0)]
    BadFlag(u8),
    /// The cell count does not form a square board.
    #[display("cell count {} does not form a square board", _0)]
    NotSquare(usize),
    /// The raw text is not a valid snapshot record.
    #[display("snapshot is not valid JSON: {}", _0)]
    Json(String),
}

impl std::error::Error for SnapshotError {}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Json(err.to_string())
    }
}

fn decode_flag(value: u8) -> Result<bool, SnapshotError> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(SnapshotError::BadFlag(other)),
    }
}

impl BoardState {
    /// Serializes the board into its snapshot form.
    #[instrument(skip(self))]
    pub fn serialize(&self) -> StoredSnapshot {
        StoredSnapshot {
            cells: self.cells().iter().map(Tile::marker).collect(),
            current_player: self.current_player().to_string(),
            won: self.won() as u8,
            tied: self.tied() as u8,
        }
    }

    /// Rebuilds a board from a snapshot.
    ///
    /// Round-trip contract: `deserialize(&serialize(board))` reproduces an
    /// equivalent board for any reachable configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError`] for unknown markers, bad flag values, or a
    /// cell count that is not a positive perfect square.
    #[instrument(skip(snapshot), fields(cells = snapshot.cell_count()))]
    pub fn deserialize(snapshot: &StoredSnapshot) -> Result<Self, SnapshotError> {
        let grid = GridSize::from_cell_count(snapshot.cell_count())
            .ok_or(SnapshotError::NotSquare(snapshot.cell_count()))?;

        let cells = snapshot
            .cells()
            .iter()
            .map(|marker| {
                if marker.is_empty() {
                    Ok(Tile::Empty)
                } else {
                    Player::from_str(marker)
                        .map(Tile::Owned)
                        .map_err(|_| SnapshotError::UnknownMarker(marker.clone()))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let current_player = Player::from_str(snapshot.current_player())
            .map_err(|_| SnapshotError::UnknownPlayer(snapshot.current_player().clone()))?;

        let won = decode_flag(*snapshot.won())?;
        let tied = decode_flag(*snapshot.tied())?;

        Ok(BoardState::from_parts(grid, cells, current_player, won, tied))
    }
}
