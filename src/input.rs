//! Key mapping from terminal events to game actions.
//!
//! Pure translation only; the main loop decides what to do with the
//! resulting action. Repeat events are treated like fresh presses, so
//! holding an arrow key keeps the piece moving at the terminal's
//! auto-repeat rate.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::types::GameAction;

/// Map a key press to a game action, if any is bound.
pub fn action_for(key: KeyEvent) -> Option<GameAction> {
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(GameAction::MoveLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(GameAction::MoveRight),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(GameAction::MoveDown),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(GameAction::Rotate),
        _ => None,
    }
}

/// True when the key should end the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
