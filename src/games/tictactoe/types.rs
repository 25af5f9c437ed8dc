//! Core domain types for tic-tac-toe.

use super::action::{InvalidMoveError, Move};
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Mark placed on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[derive(strum::Display, strum::EnumIter)]
pub enum Mark {
    /// The computer's mark.
    X,
    /// The human's mark.
    O,
}

impl Mark {
    /// Mark played by the search engine.
    pub const COMPUTER: Mark = Mark::X;

    /// Mark played by the person at the keyboard.
    pub const HUMAN: Mark = Mark::O;

    /// Returns the other mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Character used in board notation.
    pub fn symbol(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns true if nothing has been placed here.
    pub fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    /// Cells indexed `[row][col]`.
    cells: [[Cell; 3]; 3],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; 3]; 3],
        }
    }

    /// Gets the cell at the given move coordinates, or `None` if out of range.
    pub fn get(&self, mv: Move) -> Option<Cell> {
        self.cells.get(mv.row)?.get(mv.col).copied()
    }

    /// Returns the cell at `(row, col)`. Callers pass coordinates from `LINES`
    /// or other in-range tables; out-of-range values panic.
    pub(crate) fn cell(&self, row: usize, col: usize) -> Cell {
        self.cells[row][col]
    }

    /// Checks if the cell at the given coordinates is on the board and empty.
    pub fn is_empty(&self, mv: Move) -> bool {
        matches!(self.get(mv), Some(Cell::Empty))
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; 3]; 3] {
        &self.cells
    }

    /// Iterates over all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells.iter().flatten().copied()
    }

    /// Number of marks placed so far.
    pub fn mark_count(&self) -> usize {
        self.iter().filter(|c| !c.is_empty()).count()
    }

    /// Places `mark` on an empty cell.
    ///
    /// The board is left untouched when the move is rejected.
    pub fn place(&mut self, mv: Move, mark: Mark) -> Result<(), InvalidMoveError> {
        match self.get(mv) {
            None => Err(InvalidMoveError::OutOfRange(mv)),
            Some(Cell::Occupied(_)) => Err(InvalidMoveError::Occupied(mv)),
            Some(Cell::Empty) => {
                self.cells[mv.row][mv.col] = Cell::Occupied(mark);
                Ok(())
            }
        }
    }

    /// Resets a cell to empty. Out-of-range coordinates are ignored.
    pub(crate) fn clear(&mut self, mv: Move) {
        if let Some(cell) = self
            .cells
            .get_mut(mv.row)
            .and_then(|row| row.get_mut(mv.col))
        {
            *cell = Cell::Empty;
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

/// Compact notation: rows of `X`, `O` and `.` separated by `/`.
impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (r, row) in self.cells.iter().enumerate() {
            if r > 0 {
                write!(f, "/")?;
            }
            for cell in row {
                let c = match cell {
                    Cell::Empty => '.',
                    Cell::Occupied(mark) => mark.symbol(),
                };
                write!(f, "{}", c)?;
            }
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = Vec::with_capacity(9);
        for ch in s.chars() {
            let cell = match ch {
                'X' | 'x' => Cell::Occupied(Mark::X),
                'O' | 'o' => Cell::Occupied(Mark::O),
                '.' | '-' | '_' | ' ' => Cell::Empty,
                '/' | '\n' | '\r' | '\t' => continue,
                other => {
                    return Err(BoardParseError::new(format!(
                        "Unexpected character {:?}",
                        other
                    )));
                }
            };
            cells.push(cell);
        }

        if cells.len() != 9 {
            return Err(BoardParseError::new(format!(
                "Expected 9 cells, found {}",
                cells.len()
            )));
        }

        let mut board = Board::new();
        for (i, cell) in cells.into_iter().enumerate() {
            board.cells[i / 3][i % 3] = cell;
        }
        Ok(board)
    }
}

/// Board notation could not be parsed.
#[derive(Debug, Clone, Display, Error)]
#[display("Board parse error: {} at {}:{}", message, file, line)]
pub struct BoardParseError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl BoardParseError {
    /// Creates a new parse error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_render() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.cell(0, 0), Cell::Occupied(Mark::X));
        assert_eq!(board.cell(1, 1), Cell::Occupied(Mark::O));
        assert_eq!(board.get(Move::new(2, 2)), Some(Cell::Empty));
        assert_eq!(board.to_string(), "XX./OO./...");
    }

    #[test]
    fn test_parse_without_separators() {
        let board: Board = "x-o-_-o.x".parse().unwrap();
        assert_eq!(board.mark_count(), 4);
    }

    #[test]
    fn test_parse_rejects_bad_input() {
        assert!("XX./OO".parse::<Board>().is_err());
        assert!("XXZ/OO./...".parse::<Board>().is_err());
        assert!("XX./OO./....".parse::<Board>().is_err());
    }

    #[test]
    fn test_clear_restores_empty() {
        let mut board = Board::new();
        let mv = Move::new(2, 0);
        board.place(mv, Mark::O).unwrap();
        board.clear(mv);
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_opponent() {
        assert_eq!(Mark::COMPUTER.opponent(), Mark::HUMAN);
        assert_eq!(Mark::HUMAN.opponent(), Mark::COMPUTER);
    }
}
