//! Named board cells for keyboard navigation and labels.

use super::action::Move;
use super::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A named cell on the tic-tac-toe board.
///
/// Keypad numbers run 1-9 in row-major order, so `1` is the top-left
/// cell and `9` the bottom-right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Top-left (row 0, col 0)
    TopLeft,
    /// Top-center (row 0, col 1)
    TopCenter,
    /// Top-right (row 0, col 2)
    TopRight,
    /// Middle-left (row 1, col 0)
    MiddleLeft,
    /// Center (row 1, col 1)
    Center,
    /// Middle-right (row 1, col 2)
    MiddleRight,
    /// Bottom-left (row 2, col 0)
    BottomLeft,
    /// Bottom-center (row 2, col 1)
    BottomCenter,
    /// Bottom-right (row 2, col 2)
    BottomRight,
}

impl Position {
    /// All 9 positions in row-major order.
    pub const ALL: [Position; 9] = [
        Position::TopLeft,
        Position::TopCenter,
        Position::TopRight,
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ];

    /// Get label for this position (for display).
    pub fn label(&self) -> &'static str {
        match self {
            Position::TopLeft => "Top-left",
            Position::TopCenter => "Top-center",
            Position::TopRight => "Top-right",
            Position::MiddleLeft => "Middle-left",
            Position::Center => "Center",
            Position::MiddleRight => "Middle-right",
            Position::BottomLeft => "Bottom-left",
            Position::BottomCenter => "Bottom-center",
            Position::BottomRight => "Bottom-right",
        }
    }

    /// Converts position to row-major index (0-8).
    pub fn to_index(self) -> usize {
        self as usize
    }

    /// Creates position from row-major index.
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Creates position from a keypad number (1-9).
    #[instrument]
    pub fn from_keypad(number: u32) -> Option<Self> {
        let index = usize::try_from(number).ok()?.checked_sub(1)?;
        Self::from_index(index)
    }

    /// Creates position from move coordinates, if they are on the board.
    pub fn from_move(mv: Move) -> Option<Self> {
        if mv.row < 3 && mv.col < 3 {
            Self::from_index(mv.row * 3 + mv.col)
        } else {
            None
        }
    }

    /// Converts position to move coordinates.
    pub fn to_move(self) -> Move {
        let index = self.to_index();
        Move::new(index / 3, index % 3)
    }

    /// Filters positions by board state - returns only empty cells.
    #[instrument(skip(board))]
    pub fn valid_moves(board: &Board) -> Vec<Position> {
        Self::ALL
            .iter()
            .copied()
            .filter(|pos| board.is_empty(pos.to_move()))
            .collect()
    }
}

impl From<Position> for Move {
    fn from(pos: Position) -> Self {
        pos.to_move()
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_matches_coordinates() {
        assert_eq!(Position::TopLeft.to_move(), Move::new(0, 0));
        assert_eq!(Position::MiddleRight.to_move(), Move::new(1, 2));
        assert_eq!(Position::BottomCenter.to_move(), Move::new(2, 1));
        assert_eq!(Position::from_move(Move::new(2, 2)), Some(Position::BottomRight));
        assert_eq!(Position::from_move(Move::new(3, 0)), None);
    }

    #[test]
    fn test_keypad_numbers() {
        assert_eq!(Position::from_keypad(1), Some(Position::TopLeft));
        assert_eq!(Position::from_keypad(5), Some(Position::Center));
        assert_eq!(Position::from_keypad(9), Some(Position::BottomRight));
        assert_eq!(Position::from_keypad(0), None);
        assert_eq!(Position::from_keypad(10), None);
    }
}
