//! Strictly Minimax - tic-tac-toe against an opponent that never loses
//!
//! The computer chooses its moves with an exhaustive minimax search, so
//! the best a human can do is draw.
//!
//! # Architecture
//!
//! - **Board**: 3x3 grid with win, full and available-move queries
//! - **Search**: minimax over the whole remaining game tree
//! - **Session**: human move, engine reply, outcome checks
//! - **TUI**: terminal front end driving a session
//!
//! # Example
//!
//! ```
//! use strictly_minimax::{Board, Mark, Move, best_move};
//!
//! let mut board = Board::new();
//! board.place(Move::new(0, 0), Mark::X).unwrap();
//! board.place(Move::new(0, 1), Mark::X).unwrap();
//! board.place(Move::new(1, 0), Mark::O).unwrap();
//! board.place(Move::new(1, 1), Mark::O).unwrap();
//!
//! // The engine completes its row.
//! assert_eq!(best_move(&board), Some(Move::new(0, 2)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod tui;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Session management
pub use session::{FirstPlayer, GameSession, SessionError, TurnReport};

// Crate-level exports - Terminal UI
pub use tui::run_tui;

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardParseError, Cell, InvalidMoveError, Mark, Move, Outcome, Position, ScoredMove,
    SearchReport, analyze, available_moves, best_move, check_win, is_full, outcome, rules::is_draw,
};
