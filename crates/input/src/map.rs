//! Key bindings: which keys produce which game actions.
//!
//! Letters match case-insensitively, so holding shift or caps lock does not
//! change what a key does.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Default bindings: arrows, vi keys (hjkl) and WASD.
const BINDINGS: &[(KeyCode, GameAction)] = &[
    (KeyCode::Left, GameAction::MoveLeft),
    (KeyCode::Char('h'), GameAction::MoveLeft),
    (KeyCode::Char('a'), GameAction::MoveLeft),
    (KeyCode::Right, GameAction::MoveRight),
    (KeyCode::Char('l'), GameAction::MoveRight),
    (KeyCode::Char('d'), GameAction::MoveRight),
    (KeyCode::Down, GameAction::SoftDrop),
    (KeyCode::Char('j'), GameAction::SoftDrop),
    (KeyCode::Char('s'), GameAction::SoftDrop),
    (KeyCode::Up, GameAction::Rotate),
    (KeyCode::Char('k'), GameAction::Rotate),
    (KeyCode::Char('w'), GameAction::Rotate),
    (KeyCode::Char('r'), GameAction::Reset),
    (KeyCode::Enter, GameAction::Reset),
];

fn normalize(code: KeyCode) -> KeyCode {
    match code {
        KeyCode::Char(c) => KeyCode::Char(c.to_ascii_lowercase()),
        other => other,
    }
}

/// Game action bound to `key`, if any. Ctrl/Alt chords are never bound.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }
    let code = normalize(key.code);
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|&(_, action)| action)
}

/// `q`, `Esc` or `Ctrl-C`.
pub fn should_quit(key: KeyEvent) -> bool {
    match normalize(key.code) {
        KeyCode::Esc | KeyCode::Char('q') => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}
