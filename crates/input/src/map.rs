//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Only key presses count; releases and auto-repeat events are ignored so
/// terminals that report both do not double-step. Unknown keys map to `None`.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if should_quit(key) {
        return Some(GameAction::Quit);
    }

    match key.code {
        // Directions
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(GameAction::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(GameAction::CursorDown),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(GameAction::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(GameAction::CursorRight),

        // Actions
        KeyCode::Char(' ') => Some(GameAction::Select),
        KeyCode::Char('m') | KeyCode::Char('M') => Some(GameAction::ToggleMoveMode),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
