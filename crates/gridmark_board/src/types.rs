//! Core domain types for the grid game.

use crate::geometry::GridSize;
use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
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
pub enum Player {
    /// Player A (goes first).
    #[strum(serialize = "PlayerA")]
    A,
    /// Player B (goes second).
    #[strum(serialize = "PlayerB")]
    B,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::A => Player::B,
            Player::B => Player::A,
        }
    }
}

/// A tile on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tile {
    /// Empty tile.
    Empty,
    /// Tile owned by a player.
    Owned(Player),
}

impl Tile {
    /// Whether the tile has no owner.
    pub fn is_empty(&self) -> bool {
        matches!(self, Tile::Empty)
    }

    /// The owning player, if any.
    pub fn owner(&self) -> Option<Player> {
        match self {
            Tile::Empty => None,
            Tile::Owned(player) => Some(*player),
        }
    }

    /// Marker string used by the snapshot codec. Empty tiles serialize to
    /// `""`, distinguishable from any player marker.
    pub fn marker(&self) -> String {
        match self {
            Tile::Empty => String::new(),
            Tile::Owned(player) => player.to_string(),
        }
    }
}

/// Error signaled when a mark cannot be placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum PlaceError {
    /// Index is outside the board.
    #[display("index {} is outside the board", _0)]
    OutOfRange(usize),
    /// Tile already has an owner.
    #[display("tile {} is already occupied", _0)]
    Occupied(usize),
    /// The game already ended; the board is frozen until the next start.
    #[display("game is already over")]
    GameOver,
}

impl std::error::Error for PlaceError {}

/// In-memory board: tile occupancy, active player, terminal flags.
///
/// At most one of `won`/`tied` is ever set; once either is set, gameplay
/// mutation is refused until [`reset`](Self::reset). Created empty on game
/// start, mutated one tile at a time on valid moves, replaced wholesale on
/// load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardState {
    grid: GridSize,
    cells: Vec<Tile>,
    current_player: Player,
    won: bool,
    tied: bool,
}

impl BoardState {
    /// Creates an all-empty board with player A to move.
    #[instrument]
    pub fn new(grid: GridSize) -> Self {
        Self {
            grid,
            cells: vec![Tile::Empty; grid.cell_count()],
            current_player: Player::A,
            won: false,
            tied: false,
        }
    }

    /// Rebuilds a board from already-validated parts. Snapshot decoding
    /// goes through this.
    pub(crate) fn from_parts(
        grid: GridSize,
        cells: Vec<Tile>,
        current_player: Player,
        won: bool,
        tied: bool,
    ) -> Self {
        Self {
            grid,
            cells,
            current_player,
            won,
            tied,
        }
    }

    /// Clears every tile and both terminal flags.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.cells.fill(Tile::Empty);
        self.won = false;
        self.tied = false;
    }

    /// Board dimensions.
    pub fn grid(&self) -> GridSize {
        self.grid
    }

    /// All tiles in row-major order.
    pub fn cells(&self) -> &[Tile] {
        &self.cells
    }

    /// The tile at a linear index, or `None` out of range.
    pub fn tile(&self, index: usize) -> Option<Tile> {
        self.cells.get(index).copied()
    }

    /// The player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Hands the turn to a specific player.
    pub fn set_current_player(&mut self, player: Player) {
        self.current_player = player;
    }

    /// Hands the turn to the opponent.
    pub fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Whether the game ended with a winner.
    pub fn won(&self) -> bool {
        self.won
    }

    /// Whether the game ended with a full board and no winner.
    pub fn tied(&self) -> bool {
        self.tied
    }

    /// Whether either terminal flag is set.
    pub fn is_over(&self) -> bool {
        self.won || self.tied
    }

    /// Whether every tile has an owner.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|tile| !tile.is_empty())
    }

    /// Gives the tile at `index` to `player`.
    ///
    /// # Errors
    ///
    /// Returns [`PlaceError`] if the game is over, the index is out of
    /// range, or the tile is occupied. The board is unchanged on error.
    #[instrument(skip(self))]
    pub fn place_mark(&mut self, index: usize, player: Player) -> Result<(), PlaceError> {
        if self.is_over() {
            return Err(PlaceError::GameOver);
        }
        match self.cells.get(index) {
            None => Err(PlaceError::OutOfRange(index)),
            Some(Tile::Owned(_)) => Err(PlaceError::Occupied(index)),
            Some(Tile::Empty) => {
                self.cells[index] = Tile::Owned(player);
                Ok(())
            }
        }
    }

    /// Records a win. The tied flag must not already be set.
    pub fn mark_won(&mut self) {
        debug_assert!(!self.tied, "a tied game cannot be won");
        self.won = true;
    }

    /// Records a tie. The won flag must not already be set.
    pub fn mark_tied(&mut self) {
        debug_assert!(!self.won, "a won game cannot tie");
        self.tied = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board() -> BoardState {
        BoardState::new(GridSize::new(3, 3).unwrap())
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = board();
        assert!(board.cells().iter().all(Tile::is_empty));
        assert_eq!(board.current_player(), Player::A);
        assert!(!board.is_over());
    }

    #[test]
    fn test_place_mark() {
        let mut board = board();
        board.place_mark(4, Player::A).expect("empty tile");
        assert_eq!(board.tile(4), Some(Tile::Owned(Player::A)));
    }

    #[test]
    fn test_place_on_occupied_tile_fails() {
        let mut board = board();
        board.place_mark(0, Player::A).unwrap();
        assert_eq!(
            board.place_mark(0, Player::B),
            Err(PlaceError::Occupied(0))
        );
        assert_eq!(board.tile(0), Some(Tile::Owned(Player::A)));
    }

    #[test]
    fn test_place_out_of_range_fails() {
        let mut board = board();
        assert_eq!(
            board.place_mark(9, Player::A),
            Err(PlaceError::OutOfRange(9))
        );
    }

    #[test]
    fn test_place_after_game_over_fails() {
        let mut board = board();
        board.mark_won();
        assert_eq!(board.place_mark(0, Player::A), Err(PlaceError::GameOver));
    }

    #[test]
    fn test_reset_clears_tiles_and_flags() {
        let mut board = board();
        board.place_mark(0, Player::A).unwrap();
        board.mark_won();
        board.reset();
        assert!(board.cells().iter().all(Tile::is_empty));
        assert!(!board.won());
        assert!(!board.tied());
    }

    #[test]
    fn test_is_full() {
        let mut board = board();
        assert!(!board.is_full());
        for index in 0..9 {
            board.place_mark(index, Player::A).unwrap();
        }
        assert!(board.is_full());
    }

    #[test]
    fn test_player_markers() {
        assert_eq!(Player::A.to_string(), "PlayerA");
        assert_eq!(Player::B.to_string(), "PlayerB");
        assert_eq!("PlayerB".parse::<Player>().unwrap(), Player::B);
        assert_eq!(Tile::Empty.marker(), "");
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Player::A.opponent(), Player::B);
        assert_eq!(Player::B.opponent(), Player::A);
    }
}
