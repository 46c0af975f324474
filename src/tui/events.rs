//! Key bindings for the board

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// An action on the board, decoded from a key press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardCommand {
    Left,
    Right,
    Up,
    Down,
    /// Drag start on the selected card
    PickUp,
    /// Drag end on the hovered card or column
    Drop,
    /// Drag end without a target
    Cancel,
    Delete,
    Quit,
}

/// Map a key press to a board command
pub fn map_key(key: KeyEvent) -> Option<BoardCommand> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(BoardCommand::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Left | KeyCode::Char('h') => Some(BoardCommand::Left),
        KeyCode::Right | KeyCode::Char('l') => Some(BoardCommand::Right),
        KeyCode::Up | KeyCode::Char('k') => Some(BoardCommand::Up),
        KeyCode::Down | KeyCode::Char('j') => Some(BoardCommand::Down),
        KeyCode::Char(' ') => Some(BoardCommand::PickUp),
        KeyCode::Enter => Some(BoardCommand::Drop),
        KeyCode::Esc => Some(BoardCommand::Cancel),
        KeyCode::Char('d') => Some(BoardCommand::Delete),
        KeyCode::Char('q') => Some(BoardCommand::Quit),
        _ => None,
    }
}
