//! Key mapping from terminal events to buttons.

use crate::types::Button;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to a button.
pub fn button_for_key(key: KeyEvent) -> Option<Button> {
    match key.code {
        // Directions
        KeyCode::Left
        | KeyCode::Char('h')
        | KeyCode::Char('H')
        | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(Button::Left),
        KeyCode::Right
        | KeyCode::Char('l')
        | KeyCode::Char('L')
        | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(Button::Right),
        KeyCode::Down
        | KeyCode::Char('j')
        | KeyCode::Char('J')
        | KeyCode::Char('s')
        | KeyCode::Char('S') => Some(Button::Down),
        KeyCode::Up
        | KeyCode::Char('k')
        | KeyCode::Char('K')
        | KeyCode::Char('w')
        | KeyCode::Char('W') => Some(Button::Up),

        // Face buttons
        KeyCode::Char(' ')
        | KeyCode::Enter
        | KeyCode::Char('z')
        | KeyCode::Char('Z')
        | KeyCode::Char('x')
        | KeyCode::Char('X') => Some(Button::Primary),
        KeyCode::Char('p') | KeyCode::Char('P') | KeyCode::Char('c') | KeyCode::Char('C') => {
            Some(Button::Secondary)
        }

        KeyCode::Esc => Some(Button::Exit),

        _ => None,
    }
}

/// Check if key should quit the program.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
