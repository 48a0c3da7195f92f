//! Win detection for square boards of any size.

use crate::types::{BoardState, Player, Tile};
use tracing::instrument;

/// Checks the board for a completed line.
///
/// Scans rows top to bottom, then columns left to right, then the main
/// diagonal, then the anti-diagonal; the first full line of one player's
/// marks wins and short-circuits the remaining checks.
#[instrument(skip(board))]
pub fn check_winner(board: &BoardState) -> Option<Player> {
    let grid = board.grid();
    let side = grid.rows();

    for row in 0..side {
        let winner = check_line(board, (0..side).map(|col| grid.to_index(row, col)));
        if winner.is_some() {
            return winner;
        }
    }

    for col in 0..side {
        let winner = check_line(board, (0..side).map(|row| grid.to_index(row, col)));
        if winner.is_some() {
            return winner;
        }
    }

    let main = check_line(board, (0..side).map(|i| grid.to_index(i, i)));
    if main.is_some() {
        return main;
    }

    check_line(board, (0..side).map(|i| grid.to_index(i, side - 1 - i)))
}

/// Owner of a line iff every tile on it belongs to the same player.
fn check_line(board: &BoardState, indices: impl Iterator<Item = usize>) -> Option<Player> {
    let mut owner = None;
    for index in indices {
        match board.tile(index) {
            Some(Tile::Owned(player)) => match owner {
                None => owner = Some(player),
                Some(first) if first == player => {}
                Some(_) => return None,
            },
            _ => return None,
        }
    }
    owner
}
