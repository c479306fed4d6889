use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::App;

/// Input action that can be performed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    ScrollDown,
    ScrollUp,
    ScrollHalfPageDown,
    ScrollHalfPageUp,
    JumpToTop,
    JumpToBottom,
    PendingG, // First 'g' press, waiting for second 'g'
    Condense,
    ToggleCondenses,
    ToggleFixed,
    ToggleNoReveal,
    ToggleKeepCondensed,
    ToggleNoDissolve,
    ToggleScrollAwayTopbar,
    None,
}

/// Handle a key event and return the corresponding action
pub fn handle_key_event(key: KeyEvent, app: &App) -> Action {
    match (key.code, key.modifiers) {
        // Quit
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,
        (KeyCode::Esc, _) => Action::Quit,

        // Scrolling
        (KeyCode::Char('j'), KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Char('k'), KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Down, KeyModifiers::NONE) => Action::ScrollDown,
        (KeyCode::Up, KeyModifiers::NONE) => Action::ScrollUp,
        (KeyCode::Char('d'), KeyModifiers::CONTROL) => Action::ScrollHalfPageDown,
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => Action::ScrollHalfPageUp,
        (KeyCode::PageDown, _) => Action::ScrollHalfPageDown,
        (KeyCode::PageUp, _) => Action::ScrollHalfPageUp,

        // Jump to top/bottom
        (KeyCode::Char('g'), KeyModifiers::NONE) => {
            // gg requires double press
            if app.pending_key == Some('g') {
                Action::JumpToTop
            } else {
                Action::PendingG
            }
        }
        (KeyCode::Home, _) => Action::JumpToTop,
        (KeyCode::Char('G'), _) | (KeyCode::End, _) => Action::JumpToBottom,

        // Header
        (KeyCode::Char('c'), KeyModifiers::NONE) => Action::Condense,
        (KeyCode::Char('C'), _) => Action::ToggleCondenses,
        (KeyCode::Char('f'), KeyModifiers::NONE) => Action::ToggleFixed,
        (KeyCode::Char('r'), KeyModifiers::NONE) => Action::ToggleNoReveal,
        (KeyCode::Char('K'), _) => Action::ToggleKeepCondensed,
        (KeyCode::Char('x'), KeyModifiers::NONE) => Action::ToggleNoDissolve,
        (KeyCode::Char('t'), KeyModifiers::NONE) => Action::ToggleScrollAwayTopbar,

        _ => Action::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use condense_core::AppConfig;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn test_gg_needs_two_presses() {
        let mut app = App::new(AppConfig::default(), Default::default());
        let g = key(KeyCode::Char('g'), KeyModifiers::NONE);

        assert_eq!(handle_key_event(g, &app), Action::PendingG);
        app.pending_key = Some('g');
        assert_eq!(handle_key_event(g, &app), Action::JumpToTop);
    }

    #[test]
    fn test_shifted_toggles() {
        let app = App::new(AppConfig::default(), Default::default());

        assert_eq!(
            handle_key_event(key(KeyCode::Char('C'), KeyModifiers::SHIFT), &app),
            Action::ToggleCondenses
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('K'), KeyModifiers::SHIFT), &app),
            Action::ToggleKeepCondensed
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::NONE), &app),
            Action::Condense
        );
        assert_eq!(
            handle_key_event(key(KeyCode::Char('c'), KeyModifiers::CONTROL), &app),
            Action::Quit
        );
    }
}
