//! Tic-tac-toe against an exhaustive minimax opponent.

mod action;
mod phases;
mod position;
pub mod rules;
pub mod search;
mod types;

pub use action::{InvalidMoveError, Move};
pub use phases::Outcome;
pub use position::Position;
pub use rules::{available_moves, check_win, is_full, outcome};
pub use search::{ScoredMove, SearchReport, analyze, best_move};
pub use types::{Board, BoardParseError, Cell, Mark};
