//! Rendering boundary.
//!
//! The engine never draws anything itself; it raises these callbacks
//! toward whatever rendering surface the host wires in.

use gridmark_board::Player;

/// Callbacks the engine raises toward the rendering surface.
///
/// Calls arrive synchronously, in gameplay order: a `start_game` opens
/// every game (and every load), `set_tile_mark` follows each placed mark,
/// and exactly one of `game_won`/`game_tie` closes a finished game.
pub trait GameView {
    /// A new game began with `current_player` to move.
    fn start_game(&mut self, current_player: Player);

    /// `player` now owns the tile at `(row, col)`.
    fn set_tile_mark(&mut self, player: Player, row: usize, col: usize);

    /// The turn passed to `next_player`.
    fn change_turn(&mut self, next_player: Player);

    /// The game ended with `winner` completing a line.
    fn game_won(&mut self, winner: Player);

    /// The game ended with a full board and no winner.
    fn game_tie(&mut self);
}
