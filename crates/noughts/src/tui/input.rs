//! Keyboard handling: cursor movement and key-to-action mapping.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use noughts_core::Cell;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the cursor to another cell.
    MoveCursor(Cell),
    /// Take the given cell for the current player.
    Take(Cell),
    /// Start a fresh game.
    Reset,
    /// Leave the game.
    Quit,
}

/// Moves cursor based on arrow keys, stopping at the board edges.
pub fn move_cursor(cursor: Cell, key: KeyCode) -> Cell {
    let (d_row, d_col) = match key {
        KeyCode::Up => (-1, 0),
        KeyCode::Down => (1, 0),
        KeyCode::Left => (0, -1),
        KeyCode::Right => (0, 1),
        _ => return cursor,
    };
    cursor.offset(d_row, d_col).unwrap_or(cursor)
}

/// Maps a key press to an action, given where the cursor is.
pub fn action_for(key: KeyEvent, cursor: Cell) -> Option<Action> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Reset),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Take(cursor)),
        KeyCode::Char(c) => c.to_digit(10).and_then(Cell::from_keypad).map(Action::Take),
        code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
            Some(Action::MoveCursor(move_cursor(cursor, code)))
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: usize, col: usize) -> Cell {
        Cell::new(row, col).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn act(code: KeyCode, cursor: Cell) -> Option<Action> {
        action_for(press(code), cursor)
    }

    fn take(row: usize, col: usize) -> Option<Action> {
        Some(Action::Take(cell(row, col)))
    }

    #[test]
    fn test_arrows_move_cursor() {
        let center = cell(1, 1);
        assert_eq!(move_cursor(center, KeyCode::Up), cell(0, 1));
        assert_eq!(move_cursor(center, KeyCode::Down), cell(2, 1));
        assert_eq!(move_cursor(center, KeyCode::Left), cell(1, 0));
        assert_eq!(move_cursor(center, KeyCode::Right), cell(1, 2));
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(cell(0, 0), KeyCode::Up), cell(0, 0));
        assert_eq!(move_cursor(cell(0, 0), KeyCode::Left), cell(0, 0));
        assert_eq!(move_cursor(cell(2, 2), KeyCode::Down), cell(2, 2));
        assert_eq!(move_cursor(cell(2, 2), KeyCode::Right), cell(2, 2));
    }

    #[test]
    fn test_other_keys_leave_cursor() {
        assert_eq!(move_cursor(cell(1, 1), KeyCode::Tab), cell(1, 1));
    }

    #[test]
    fn test_digits_take_keypad_cells() {
        let cursor = cell(0, 0);
        assert_eq!(act(KeyCode::Char('1'), cursor), take(0, 0));
        assert_eq!(act(KeyCode::Char('6'), cursor), take(1, 2));
        assert_eq!(act(KeyCode::Char('9'), cursor), take(2, 2));
        assert_eq!(act(KeyCode::Char('0'), cursor), None);
    }

    #[test]
    fn test_enter_takes_cursor_cell() {
        let cursor = cell(2, 0);
        assert_eq!(act(KeyCode::Enter, cursor), take(2, 0));
        assert_eq!(act(KeyCode::Char(' '), cursor), take(2, 0));
    }

    #[test]
    fn test_control_keys() {
        let cursor = cell(1, 1);
        assert_eq!(act(KeyCode::Char('q'), cursor), Some(Action::Quit));
        assert_eq!(act(KeyCode::Esc, cursor), Some(Action::Quit));
        assert_eq!(act(KeyCode::Char('r'), cursor), Some(Action::Reset));

        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(action_for(ctrl_c, cursor), Some(Action::Quit));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut key = press(KeyCode::Enter);
        key.kind = KeyEventKind::Release;
        assert_eq!(action_for(key, cell(1, 1)), None);
    }
}
