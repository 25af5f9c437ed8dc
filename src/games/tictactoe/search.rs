//! Exhaustive minimax search for the computer's move.
//!
//! The computer plays [`Mark::COMPUTER`] and maximizes; the human plays
//! [`Mark::HUMAN`] and minimizes. Terminal positions score `10 - depth`
//! for a computer win and `depth - 10` for a human win, so a quicker win
//! beats a slower one and a later loss beats an earlier one. A draw
//! scores zero.
//!
//! The whole remaining tree is searched with no pruning. On a 3x3 board
//! that is at most 9! leaf paths.

use super::rules::{available_moves, check_win, is_full};
use super::{Board, InvalidMoveError, Mark, Move};
use serde::{Deserialize, Serialize};
use std::ops::{Deref, DerefMut};
use tracing::{debug, instrument};

/// Score bonus for a win found at depth zero.
const WIN_SCORE: i32 = 10;

/// Result of searching a position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Row-major-first move with the highest score, `None` on a full board.
    pub best: Option<Move>,
    /// Score of `best`; zero when there is no move.
    pub score: i32,
    /// Every available move with its minimax score, in row-major order.
    pub scored_moves: Vec<ScoredMove>,
    /// Positions visited, including the root's children.
    pub nodes: u64,
}

/// One root move and its minimax value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredMove {
    /// The candidate move.
    #[serde(rename = "move")]
    pub mv: Move,
    /// Its guaranteed score for the computer.
    pub score: i32,
}

/// A mark placed for exploration, removed again when the guard drops.
///
/// Holding the guard is the only way to reach the board while the trial
/// mark is down, so every exit path from a search frame, early returns
/// included, puts the cell back.
struct Trial<'a> {
    board: &'a mut Board,
    mv: Move,
}

impl<'a> Trial<'a> {
    /// Places `mark` at `mv`. No guard exists unless the placement
    /// succeeded, so a rejected move never clears someone else's mark.
    fn place(board: &'a mut Board, mv: Move, mark: Mark) -> Result<Self, InvalidMoveError> {
        board.place(mv, mark)?;
        Ok(Self { board, mv })
    }
}

impl Deref for Trial<'_> {
    type Target = Board;

    fn deref(&self) -> &Board {
        self.board
    }
}

impl DerefMut for Trial<'_> {
    fn deref_mut(&mut self) -> &mut Board {
        self.board
    }
}

impl Drop for Trial<'_> {
    fn drop(&mut self) {
        self.board.clear(self.mv);
    }
}

/// Minimax searcher over a scratch board.
struct Searcher {
    nodes: u64,
}

impl Searcher {
    fn new() -> Self {
        Self { nodes: 0 }
    }

    /// Value of `board` for the computer, with `to_move` about to play and
    /// `depth` plies already made below the root's children.
    fn minimax(&mut self, board: &mut Board, depth: i32, to_move: Mark) -> i32 {
        self.nodes += 1;

        if check_win(board, Mark::COMPUTER) {
            return WIN_SCORE - depth;
        }
        if check_win(board, Mark::HUMAN) {
            return depth - WIN_SCORE;
        }
        if is_full(board) {
            return 0;
        }

        let maximizing = to_move == Mark::COMPUTER;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for mv in available_moves(board) {
            let Ok(mut trial) = Trial::place(board, mv, to_move) else {
                continue;
            };
            let score = self.minimax(&mut trial, depth + 1, to_move.opponent());
            drop(trial);

            best = if maximizing {
                best.max(score)
            } else {
                best.min(score)
            };
        }

        best
    }

    /// Scores each root move and keeps the first strictly-best one.
    fn search_root(&mut self, board: &mut Board) -> SearchReport {
        let mut best: Option<ScoredMove> = None;
        let mut scored_moves = Vec::new();

        for mv in available_moves(board) {
            let Ok(mut trial) = Trial::place(board, mv, Mark::COMPUTER) else {
                continue;
            };
            let score = self.minimax(&mut trial, 0, Mark::HUMAN);
            drop(trial);

            let candidate = ScoredMove { mv, score };
            scored_moves.push(candidate);
            if best.is_none_or(|b| score > b.score) {
                best = Some(candidate);
            }
        }

        SearchReport {
            best: best.map(|b| b.mv),
            score: best.map_or(0, |b| b.score),
            scored_moves,
            nodes: self.nodes,
        }
    }
}

/// Searches `board` with the computer to move and reports every root score.
///
/// The board is not modified. A full board yields a report with no move.
#[instrument(skip(board), fields(board = %board))]
pub fn analyze(board: &Board) -> SearchReport {
    let mut scratch = *board;
    let report = Searcher::new().search_root(&mut scratch);
    debug_assert_eq!(&scratch, board, "search left a trial mark on the board");

    debug!(
        best = ?report.best,
        score = report.score,
        nodes = report.nodes,
        "Search complete"
    );
    report
}

/// Picks the computer's move: the row-major-first move with the best
/// guaranteed outcome under perfect play by both sides.
///
/// Returns `None` when the board has no empty cell. Callers are expected
/// to check [`is_full`] first.
pub fn best_move(board: &Board) -> Option<Move> {
    if is_full(board) {
        debug!("No empty cell, nothing to search");
        return None;
    }
    analyze(board).best
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Cell;

    fn board(s: &str) -> Board {
        s.parse().unwrap()
    }

    #[test]
    fn test_takes_immediate_win() {
        let b = board("XX./OO./...");
        assert_eq!(best_move(&b), Some(Move::new(0, 2)));
        assert_eq!(analyze(&b).score, WIN_SCORE);
    }

    #[test]
    fn test_blocks_opponent_line() {
        let b = board("OO./X../.X.");
        assert_eq!(best_move(&b), Some(Move::new(0, 2)));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOX/OXX/OXO");
        assert_eq!(best_move(&b), None);
        let report = analyze(&b);
        assert_eq!(report.best, None);
        assert_eq!(report.score, 0);
        assert!(report.scored_moves.is_empty());
    }

    #[test]
    fn test_last_cell_is_taken() {
        let b = board("XOX/OOX/XX.");
        assert_eq!(best_move(&b), Some(Move::new(2, 2)));
    }

    #[test]
    fn test_empty_board_is_a_draw_and_picks_first_cell() {
        let report = analyze(&Board::new());
        assert_eq!(report.score, 0);
        assert_eq!(report.scored_moves.len(), 9);
        assert!(report.scored_moves.iter().all(|m| m.score == 0));
        assert_eq!(report.best, Some(Move::new(0, 0)));
    }

    #[test]
    fn test_ties_go_to_first_move_in_row_major_order() {
        // Both (0,2) and (2,0) complete a line.
        let b = board("XX./X../.OO");
        let report = analyze(&b);
        assert_eq!(report.best, Some(Move::new(0, 2)));
        assert_eq!(report.score, WIN_SCORE);
    }

    #[test]
    fn test_trial_guard_restores_cell() {
        let mut b = Board::new();
        {
            let trial = Trial::place(&mut b, Move::new(1, 1), Mark::X).unwrap();
            assert_eq!(trial.cell(1, 1), Cell::Occupied(Mark::X));
        }
        assert_eq!(b, Board::new());
    }

    #[test]
    fn test_rejected_trial_leaves_board_unchanged() {
        let mut b = board("O../.../...");
        let before = b;
        let rejected = Trial::place(&mut b, Move::new(0, 0), Mark::X);
        assert_eq!(
            rejected.err(),
            Some(InvalidMoveError::Occupied(Move::new(0, 0)))
        );
        assert_eq!(b, before);

        assert!(Trial::place(&mut b, Move::new(3, 0), Mark::X).is_err());
        assert_eq!(b, before);
    }
}
