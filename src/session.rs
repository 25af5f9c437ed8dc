//! Game session: one human against the minimax engine.
//!
//! The session owns the board. A human move is placed, the board is
//! checked for a win or draw, the engine replies, and the board is
//! checked again.

use crate::games::tictactoe::{Board, InvalidMoveError, Mark, Move, Outcome, best_move, outcome};
use derive_more::{Display, Error, From};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Which side places the first mark of each game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FirstPlayer {
    /// The human opens.
    #[default]
    Human,
    /// The engine opens.
    Computer,
}

/// What happened during one call to [`GameSession::play`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnReport {
    /// The human's move.
    pub human: Move,
    /// The engine's reply, absent if the human's move ended the game.
    pub computer: Option<Move>,
    /// Outcome after both moves.
    pub outcome: Outcome,
}

/// Error returned when a human move cannot be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum SessionError {
    /// The target cell is taken or off the board.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMoveError),

    /// The game is already over.
    #[display("Game is already over")]
    #[from(ignore)]
    GameOver,
}

/// A single game between a human (`O`) and the engine (`X`).
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    first: FirstPlayer,
    last_computer_move: Option<Move>,
}

impl GameSession {
    /// Creates a new session. If the engine opens, it plays immediately.
    #[instrument]
    pub fn new(first: FirstPlayer) -> Self {
        info!("Creating new game session");
        let mut session = Self {
            board: Board::new(),
            first,
            last_computer_move: None,
        };
        session.open();
        session
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The engine's most recent move, if any.
    pub fn last_computer_move(&self) -> Option<Move> {
        self.last_computer_move
    }

    /// Outcome derived from the current board.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Returns true once the game has a winner or the board is full.
    pub fn is_over(&self) -> bool {
        self.outcome().is_terminal()
    }

    /// Plays the human's move and, if the game continues, the engine's reply.
    ///
    /// A rejected move leaves the board exactly as it was.
    #[instrument(skip(self), fields(board = %self.board))]
    pub fn play(&mut self, mv: Move) -> Result<TurnReport, SessionError> {
        if self.is_over() {
            warn!("Move attempted after game over");
            return Err(SessionError::GameOver);
        }

        self.board.place(mv, Mark::HUMAN).map_err(|e| {
            warn!(error = %e, "Rejected human move");
            e
        })?;
        debug!("Human move applied");

        let after_human = self.outcome();
        if after_human.is_terminal() {
            info!(outcome = %after_human, "Game over after human move");
            return Ok(TurnReport {
                human: mv,
                computer: None,
                outcome: after_human,
            });
        }

        let computer = self.computer_turn();
        let outcome = self.outcome();
        if outcome.is_terminal() {
            info!(%outcome, "Game over after computer move");
        }

        Ok(TurnReport {
            human: mv,
            computer,
            outcome,
        })
    }

    /// Text shown to the player for the current state.
    pub fn status_message(&self) -> &'static str {
        let outcome = self.outcome();
        if !outcome.is_terminal() {
            return "Your turn (O)";
        }
        match outcome.winner() {
            Some(Mark::HUMAN) => "You win!",
            Some(_) => "AI wins!",
            None => "It's a draw!",
        }
    }

    /// Starts a new game with the same opening side.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!("Resetting game");
        self.board = Board::new();
        self.last_computer_move = None;
        self.open();
    }

    fn open(&mut self) {
        if self.first == FirstPlayer::Computer {
            self.computer_turn();
        }
    }

    fn computer_turn(&mut self) -> Option<Move> {
        let mv = best_move(&self.board)?;
        // The engine only returns empty cells.
        if let Err(e) = self.board.place(mv, Mark::COMPUTER) {
            warn!(error = %e, "Engine produced an unplayable move");
            return None;
        }
        info!(computer_move = %mv, "Computer moved");
        self.last_computer_move = Some(mv);
        Some(mv)
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(FirstPlayer::default())
    }
}
