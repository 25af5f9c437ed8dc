//! Move coordinates and placement errors.
//!
//! A move is just a target cell. Whether it is legal depends on the
//! board it is applied to, so validation happens in [`Board::place`].
//!
//! [`Board::place`]: super::Board::place

use serde::{Deserialize, Serialize};

/// A `(row, col)` target on the board, 0-indexed.
///
/// Coordinates are not range-checked on construction; an out-of-range
/// move is rejected when it is placed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Move {
    /// Row, top to bottom.
    pub row: usize,
    /// Column, left to right.
    pub col: usize,
}

impl Move {
    /// Creates a new move.
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// A placement that the board refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum InvalidMoveError {
    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    Occupied(#[error(not(source))] Move),

    /// Row or column is outside `0..3`.
    #[display("Cell {} is off the board", _0)]
    OutOfRange(#[error(not(source))] Move),
}

