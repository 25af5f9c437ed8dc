//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here mutates state; the
//! session and the search engine both build on these queries.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::{is_draw, is_full};
pub use moves::available_moves;
pub use win::{check_win, winner};

use super::{Board, Outcome};

/// Derives the outcome of a board.
pub fn outcome(board: &Board) -> Outcome {
    if let Some(mark) = winner(board) {
        Outcome::Won(mark)
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Mark;

    #[test]
    fn test_outcome_variants() {
        assert_eq!(outcome(&Board::new()), Outcome::InProgress);
        assert_eq!(
            outcome(&"OOO/XX./X..".parse().unwrap()),
            Outcome::Won(Mark::O)
        );
        assert_eq!(outcome(&"XOX/OXX/OXO".parse().unwrap()), Outcome::Draw);
    }
}
