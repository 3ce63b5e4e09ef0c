//! Key mapping from terminal events to game directions and menu keys.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::engine::MenuKey;
use crate::types::Direction;

/// Map a key to a movement direction (arrow keys, with WASD as an alias set).
pub fn direction_for_key(code: KeyCode) -> Option<Direction> {
    match code {
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(Direction::West),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(Direction::East),
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(Direction::North),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(Direction::South),
        _ => None,
    }
}

/// Check if key should quit the game during play.
pub fn should_quit(key: KeyEvent) -> bool {
    is_quit_chord(key) || key.code == KeyCode::Esc
}

/// Map a key to its meaning on the title, help and end screens.
pub fn menu_key(key: KeyEvent) -> MenuKey {
    if is_quit_chord(key) {
        return MenuKey::Quit;
    }
    match key.code {
        KeyCode::Char(' ') => MenuKey::Confirm,
        KeyCode::Char('h') | KeyCode::Char('H') => MenuKey::Help,
        KeyCode::Esc => MenuKey::Back,
        _ => MenuKey::Other,
    }
}

fn is_quit_chord(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arrow_and_wasd_keys() {
        assert_eq!(direction_for_key(KeyCode::Left), Some(Direction::West));
        assert_eq!(direction_for_key(KeyCode::Right), Some(Direction::East));
        assert_eq!(direction_for_key(KeyCode::Up), Some(Direction::North));
        assert_eq!(direction_for_key(KeyCode::Down), Some(Direction::South));

        assert_eq!(direction_for_key(KeyCode::Char('a')), Some(Direction::West));
        assert_eq!(direction_for_key(KeyCode::Char('D')), Some(Direction::East));
        assert_eq!(direction_for_key(KeyCode::Char('w')), Some(Direction::North));
        assert_eq!(direction_for_key(KeyCode::Char('S')), Some(Direction::South));

        assert_eq!(direction_for_key(KeyCode::Char('x')), None);
        assert_eq!(direction_for_key(KeyCode::Enter), None);
    }

    #[test]
    fn test_quit_keys() {
        assert!(should_quit(KeyEvent::from(KeyCode::Esc)));
        assert!(should_quit(KeyEvent::from(KeyCode::Char('q'))));
        assert!(should_quit(KeyEvent::new(
            KeyCode::Char('c'),
            KeyModifiers::CONTROL
        )));
        assert!(!should_quit(KeyEvent::from(KeyCode::Char('c'))));
        assert!(!should_quit(KeyEvent::from(KeyCode::Left)));
    }

    #[test]
    fn test_menu_keys() {
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Char(' '))), MenuKey::Confirm);
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Char('H'))), MenuKey::Help);
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Esc)), MenuKey::Back);
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Char('Q'))), MenuKey::Quit);
        assert_eq!(menu_key(KeyEvent::from(KeyCode::Enter)), MenuKey::Other);
    }
}
