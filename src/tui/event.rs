//! Keyboard handling for the dashboard

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Key action derived from key event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Quit the application
    Quit,
    /// Re-run the whole pipeline
    Refresh,
    /// Next tab
    NextTab,
    /// Previous tab
    PrevTab,
    /// Scroll up
    ScrollUp,
    /// Scroll down
    ScrollDown,
    /// Show help
    Help,
    /// No action
    None,
}

impl From<KeyEvent> for KeyAction {
    fn from(key: KeyEvent) -> Self {
        if key.kind == KeyEventKind::Release {
            return KeyAction::None;
        }
        match key.code {
            KeyCode::Char('q') => KeyAction::Quit,
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
            KeyCode::Esc => KeyAction::Quit,
            KeyCode::Char('r') | KeyCode::F(5) => KeyAction::Refresh,
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => KeyAction::NextTab,
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => KeyAction::PrevTab,
            KeyCode::Up | KeyCode::Char('k') => KeyAction::ScrollUp,
            KeyCode::Down | KeyCode::Char('j') => KeyAction::ScrollDown,
            KeyCode::Char('?') => KeyAction::Help,
            _ => KeyAction::None,
        }
    }
}
