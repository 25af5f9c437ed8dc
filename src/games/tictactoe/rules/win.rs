//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Mark};
use strum::IntoEnumIterator;

/// The eight winning lines as `(row, col)` triples: rows, columns, diagonals.
pub const LINES: [[(usize, usize); 3]; 8] = [
    // Rows
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    // Columns
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    // Diagonals
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// Checks whether `mark` fills any row, column or diagonal.
pub fn check_win(board: &Board, mark: Mark) -> bool {
    let target = Cell::Occupied(mark);
    LINES
        .iter()
        .any(|line| line.iter().all(|&(r, c)| board.cell(r, c) == target))
}

/// Returns the mark holding a complete line, if any.
///
/// `X` is reported first if both marks somehow hold a line.
pub fn winner(board: &Board) -> Option<Mark> {
    Mark::iter().find(|&mark| check_win(board, mark))
}
