//! Key mapping from host key presses to game events.

use crate::types::InputEvent;

/// Map a macropad matrix key number to a game event.
///
/// Layout: key 1 rotates, keys 3/5 move left/right, key 4 soft-drops and
/// key 7 hard-drops. All other keys belong to other device modes.
pub fn map_key_number(key: u8) -> Option<InputEvent> {
    match key {
        1 => Some(InputEvent::Rotate),
        3 => Some(InputEvent::Left),
        4 => Some(InputEvent::SoftDrop),
        5 => Some(InputEvent::Right),
        7 => Some(InputEvent::HardDrop),
        _ => None,
    }
}

#[cfg(feature = "terminal")]
mod terminal {
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    use crate::types::InputEvent;

    /// Map keyboard input to game events.
    pub fn handle_key_event(key: KeyEvent) -> Option<InputEvent> {
        match key.code {
            KeyCode::Left | KeyCode::Char('h' | 'H' | 'a' | 'A') => Some(InputEvent::Left),
            KeyCode::Right | KeyCode::Char('l' | 'L' | 'd' | 'D') => Some(InputEvent::Right),
            KeyCode::Down | KeyCode::Char('j' | 'J' | 's' | 'S') => Some(InputEvent::SoftDrop),
            KeyCode::Up | KeyCode::Char('k' | 'K' | 'w' | 'W') => Some(InputEvent::Rotate),
            KeyCode::Char(' ') => Some(InputEvent::HardDrop),
            _ => None,
        }
    }

    /// Check if key should quit the game.
    pub fn should_quit(key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
            || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
    }

    /// Check if key asks for a fresh round.
    pub fn is_restart(key: KeyEvent) -> bool {
        matches!(key.code, KeyCode::Char('r') | KeyCode::Char('R'))
    }
}

#[cfg(feature = "terminal")]
pub use terminal::{handle_key_event, is_restart, should_quit};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_numbers() {
        assert_eq!(map_key_number(1), Some(InputEvent::Rotate));
        assert_eq!(map_key_number(3), Some(InputEvent::Left));
        assert_eq!(map_key_number(4), Some(InputEvent::SoftDrop));
        assert_eq!(map_key_number(5), Some(InputEvent::Right));
        assert_eq!(map_key_number(7), Some(InputEvent::HardDrop));
        for unused in [0, 2, 6, 8, 9] {
            assert_eq!(map_key_number(unused), None);
        }
    }

    #[cfg(feature = "terminal")]
    #[test]
    fn test_movement_keys() {
        use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

        let key = |code: KeyCode| handle_key_event(KeyEvent::from(code));
        assert_eq!(key(KeyCode::Left), Some(InputEvent::Left));
        assert_eq!(key(KeyCode::Right), Some(InputEvent::Right));
        assert_eq!(key(KeyCode::Down), Some(InputEvent::SoftDrop));
        assert_eq!(key(KeyCode::Up), Some(InputEvent::Rotate));
        assert_eq!(key(KeyCode::Char(' ')), Some(InputEvent::HardDrop));
        assert_eq!(key(KeyCode::Char('w')), Some(InputEvent::Rotate));
        assert_eq!(key(KeyCode::Char('x')), None);

        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('x'))));
        assert!(is_restart(KeyEvent::from(KeyCode::Char('r'))));
    }
}
