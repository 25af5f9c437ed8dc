//! Keyboard handling.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to a new cell.
    Cursor(Position),
    /// Place the human's mark at a cell.
    Place(Position),
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
    /// Key has no binding.
    None,
}

/// Maps a key press to an action given the current cursor.
pub fn action_for(cursor: Position, key: KeyCode) -> Action {
    match key {
        KeyCode::Char('q') | KeyCode::Esc => Action::Quit,
        KeyCode::Char('r') => Action::Restart,
        KeyCode::Enter | KeyCode::Char(' ') => Action::Place(cursor),
        KeyCode::Char(c) => c
            .to_digit(10)
            .and_then(Position::from_keypad)
            .map_or(Action::None, Action::Place),
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Action::Cursor(move_cursor(cursor, key))
        }
        _ => Action::None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let mv = cursor.to_move();
    let (row, col) = (mv.row, mv.col);
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Down), Position::MiddleLeft);
        assert_eq!(
            move_cursor(Position::BottomCenter, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, KeyCode::Left), Position::TopLeft);
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Down),
            Position::BottomRight
        );
        assert_eq!(
            move_cursor(Position::BottomRight, KeyCode::Right),
            Position::BottomRight
        );
    }

    #[test]
    fn test_key_bindings() {
        let cursor = Position::Center;
        assert_eq!(action_for(cursor, KeyCode::Char('q')), Action::Quit);
        assert_eq!(action_for(cursor, KeyCode::Esc), Action::Quit);
        assert_eq!(action_for(cursor, KeyCode::Char('r')), Action::Restart);
        assert_eq!(action_for(cursor, KeyCode::Enter), Action::Place(Position::Center));
        assert_eq!(
            action_for(cursor, KeyCode::Char('7')),
            Action::Place(Position::BottomLeft)
        );
        assert_eq!(action_for(cursor, KeyCode::Char('0')), Action::None);
        assert_eq!(action_for(cursor, KeyCode::Char('z')), Action::None);
        assert_eq!(
            action_for(cursor, KeyCode::Down),
            Action::Cursor(Position::BottomCenter)
        );
    }
}
