//! Grid geometry for square boards.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error rejecting invalid board dimensions at setup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum GridError {
    /// Rows and columns differ.
    #[display("board must be square, got {}x{}", _0, _1)]
    NotSquare(usize, usize),
    /// Board has no cells.
    #[display("board must have at least one row")]
    Empty,
}

impl std::error::Error for GridError {}

/// Dimensions of a square board.
///
/// Maps `(row, column)` coordinates to linear cell indices and back.
/// Both conversions are pure and assume in-range input; range checking
/// belongs to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridSize {
    rows: usize,
    columns: usize,
}

impl GridSize {
    /// Creates the dimensions of a `rows` x `columns` board.
    ///
    /// # Errors
    ///
    /// Returns [`GridError`] unless `rows == columns` and both are nonzero.
    #[instrument]
    pub fn new(rows: usize, columns: usize) -> Result<Self, GridError> {
        if rows != columns {
            return Err(GridError::NotSquare(rows, columns));
        }
        if rows == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self { rows, columns })
    }

    /// Recovers a square grid from a flat cell count.
    ///
    /// Returns `None` unless `count` is a positive perfect square. Used when
    /// adopting a snapshot of unknown provenance.
    pub fn from_cell_count(count: usize) -> Option<Self> {
        if count == 0 {
            return None;
        }
        let mut side = 1;
        while side * side < count {
            side += 1;
        }
        (side * side == count).then_some(Self {
            rows: side,
            columns: side,
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.rows * self.columns
    }

    /// Whether `(row, col)` names a cell on this board.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns
    }

    /// Linear index of `(row, col)`, row-major.
    pub fn to_index(&self, row: usize, col: usize) -> usize {
        row * self.columns + col
    }

    /// `(row, col)` coordinates of a linear index.
    pub fn to_row_col(&self, index: usize) -> (usize, usize) {
        (index / self.columns, index % self.columns)
    }
}
