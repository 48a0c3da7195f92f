//! Pure N-by-N grid game domain.
//!
//! This crate holds the board-side logic with no I/O and no controller:
//!
//! - **Geometry**: square grid dimensions and (row, column) <-> index maps
//! - **Types**: players, tiles, and the mutable board state
//! - **Rules**: win detection across rows, columns, and both diagonals
//! - **Snapshot**: the textual codec used at the storage boundary

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod geometry;
mod rules;
mod snapshot;
mod types;

pub use geometry::{GridError, GridSize};
pub use rules::check_winner;
pub use snapshot::{SnapshotError, StoredSnapshot};
pub use types::{BoardState, PlaceError, Player, Tile};
