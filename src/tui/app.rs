//! Application state and logic.

use super::input::Action;
use crate::games::tictactoe::Position;
use crate::session::{FirstPlayer, GameSession, SessionError};
use tracing::debug;

/// Main application state.
pub struct App {
    session: GameSession,
    cursor: Position,
    status_message: String,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(first: FirstPlayer) -> Self {
        let session = GameSession::new(first);
        let status_message = opening_status(&session);
        Self {
            session,
            cursor: Position::Center,
            status_message,
            should_quit: false,
        }
    }

    /// Gets the current session.
    pub fn session(&self) -> &GameSession {
        &self.session
    }

    /// Gets the cursor position.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// True once the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Applies a keyboard action.
    pub fn handle(&mut self, action: Action) {
        debug!(?action, "Handling action");

        match action {
            Action::Cursor(pos) => self.cursor = pos,
            Action::Place(pos) => self.place(pos),
            Action::Restart => self.restart(),
            Action::Quit => self.should_quit = true,
            Action::None => {}
        }
    }

    fn place(&mut self, pos: Position) {
        self.cursor = pos;
        match self.session.play(pos.to_move()) {
            Ok(report) => {
                debug!(?report, "Turn played");
                self.status_message = match (report.outcome.is_terminal(), report.computer) {
                    (true, _) => format!(
                        "{} Press 'r' to restart or 'q' to quit.",
                        self.session.status_message()
                    ),
                    (false, Some(mv)) => {
                        let label = Position::from_move(mv).map_or("?", |p| p.label());
                        format!("AI played {}. {}", label, self.session.status_message())
                    }
                    (false, None) => self.session.status_message().to_string(),
                };
            }
            Err(SessionError::GameOver) => {
                self.status_message =
                    "Game over. Press 'r' to restart or 'q' to quit.".to_string();
            }
            Err(e) => {
                self.status_message = format!("{}. {}", e, self.session.status_message());
            }
        }
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        debug!("Restarting game");
        self.session.reset();
        self.cursor = Position::Center;
        self.status_message = opening_status(&self.session);
    }
}

fn opening_status(session: &GameSession) -> String {
    match session.last_computer_move() {
        Some(mv) => {
            let label = Position::from_move(mv).map_or("?", |p| p.label());
            format!("AI opened {}. {}", label, session.status_message())
        }
        None => session.status_message().to_string(),
    }
}
