//! Key mapping from terminal events to game commands.

use crate::types::Command;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map a key to the command it drives, if any.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Some(Command::Quit);
    }

    match key.code {
        // Movement
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Command::MoveLeft),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Command::MoveRight),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Command::SoftDrop),

        // Rotation
        KeyCode::Up
        | KeyCode::Char('x')
        | KeyCode::Char('X')
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Command::RotateCw),
        KeyCode::Char('z') | KeyCode::Char('Z') => Some(Command::RotateCcw),

        // Actions
        KeyCode::Char(' ') => Some(Command::HardDrop),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::PauseToggle),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Restart),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(Command::Quit),

        _ => None,
    }
}

/// Key legend shown in the side panel.
pub const CONTROLS_HELP: [(&str, &str); 7] = [
    ("Left/Right", "Move"),
    ("Down", "Soft drop"),
    ("Space", "Hard drop"),
    ("Z / X,Up", "Rotate"),
    ("P", "Pause"),
    ("R", "Restart"),
    ("Q,Esc", "Quit"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

    #[test]
    fn test_movement_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Left)), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Right)), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Down)), Some(Command::SoftDrop));

        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('H'))), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('d'))), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('J'))), Some(Command::SoftDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('a'))), Some(Command::MoveLeft));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('L'))), Some(Command::MoveRight));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('s'))), Some(Command::SoftDrop));
    }

    #[test]
    fn test_rotation_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Up)), Some(Command::RotateCw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('x'))), Some(Command::RotateCw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('W'))), Some(Command::RotateCw));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('z'))), Some(Command::RotateCcw));
    }

    #[test]
    fn test_action_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char(' '))), Some(Command::HardDrop));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('p'))), Some(Command::PauseToggle));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('R'))), Some(Command::Restart));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('y'))), None);
    }

    #[test]
    fn test_quit_keys() {
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(map_key(KeyEvent::from(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(
            map_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(Command::Quit)
        );
        assert_eq!(map_key(KeyEvent::from(KeyCode::Char('c'))), None);
    }
}
