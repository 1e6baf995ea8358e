//! Keyboard mapping for the game screen.

use crossterm::event::KeyCode;
use tictactoe_engine::Position;

/// What a key press asks the front end to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputAction {
    /// Play the given square (keys 1-9, laid out like a phone keypad).
    Select(Position),
    /// Play the square under the cursor.
    SelectCursor,
    /// Move the cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Start a new round, keeping scores.
    NewRound,
    /// Zero the scores and start a new round.
    ClearScores,
    /// Leave the game.
    Quit,
}

/// Maps a key to an action, or `None` for keys with no binding.
pub fn action_for(key: KeyCode) -> Option<InputAction> {
    match key {
        KeyCode::Char(c @ '1'..='9') => {
            let index = c.to_digit(10)? as usize - 1;
            Position::from_index(index).map(InputAction::Select)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(InputAction::SelectCursor),
        KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
            Some(InputAction::MoveCursor(key))
        }
        KeyCode::Char('r' | 'R') => Some(InputAction::NewRound),
        KeyCode::Char('c' | 'C') => Some(InputAction::ClearScores),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => Some(InputAction::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        _ => return cursor,
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
