// src/ui/keybindings.rs
//! Keyboard input handling and key mappings.

use crossterm::event::{KeyCode, KeyEvent};

/// Navigation actions derived from key events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NavigationAction {
    Up,
    Down,
    First,
    Last,
    /// Activate the highlighted row: ascend, descend or select.
    Activate,
    /// Go to the parent directory; cancels the dialog at the root.
    Back,
    /// Folder mode: accept the current directory.
    Confirm,
    /// Re-list the current directory.
    Refresh,
    Cancel,
    None,
}

/// Convert a key event to a navigation action.
pub fn key_to_action(key: &KeyEvent) -> NavigationAction {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => NavigationAction::Down,
        KeyCode::Up | KeyCode::Char('k') => NavigationAction::Up,
        KeyCode::Home | KeyCode::Char('g') => NavigationAction::First,
        KeyCode::End | KeyCode::Char('G') => NavigationAction::Last,
        KeyCode::Enter | KeyCode::Right | KeyCode::Char('l') => NavigationAction::Activate,
        KeyCode::Left | KeyCode::Backspace | KeyCode::Char('h') => NavigationAction::Back,
        KeyCode::Char('s') => NavigationAction::Confirm,
        KeyCode::Char('r') => NavigationAction::Refresh,
        KeyCode::Esc | KeyCode::Char('q') => NavigationAction::Cancel,
        _ => NavigationAction::None,
    }
}
