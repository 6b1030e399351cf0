//! Keyboard shortcut handling.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// TUI keyboard actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Quit,
    Submit,
    NextField,
    PrevField,
    ToggleMode,
    PrevModel,
    NextModel,
    Input(char),
    Backspace,
    ClearField,
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    None,
}

/// Map a key event to an action.
///
/// Letters other than the shortcuts are passed through as input so that
/// validation, not the key map, decides what is numeric.
#[must_use]
pub fn map_key(key: KeyEvent) -> KeyAction {
    match key.code {
        KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => KeyAction::Quit,
        KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            KeyAction::ClearField
        }
        KeyCode::Char('q') => KeyAction::Quit,
        KeyCode::Char('m') => KeyAction::ToggleMode,
        KeyCode::Char(c) => KeyAction::Input(c),
        KeyCode::Enter => KeyAction::Submit,
        KeyCode::Tab => KeyAction::NextField,
        KeyCode::BackTab => KeyAction::PrevField,
        KeyCode::Left => KeyAction::PrevModel,
        KeyCode::Right => KeyAction::NextModel,
        KeyCode::Backspace => KeyAction::Backspace,
        KeyCode::Up => KeyAction::ScrollUp,
        KeyCode::Down => KeyAction::ScrollDown,
        KeyCode::PageUp => KeyAction::PageUp,
        KeyCode::PageDown => KeyAction::PageDown,
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        assert_eq!(map_key(key(KeyCode::Char('q'))), KeyAction::Quit);
        assert_eq!(map_key(key(KeyCode::Esc)), KeyAction::Quit);
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_c), KeyAction::Quit);
    }

    #[test]
    fn form_keys() {
        assert_eq!(map_key(key(KeyCode::Enter)), KeyAction::Submit);
        assert_eq!(map_key(key(KeyCode::Tab)), KeyAction::NextField);
        assert_eq!(map_key(key(KeyCode::BackTab)), KeyAction::PrevField);
        assert_eq!(map_key(key(KeyCode::Char('m'))), KeyAction::ToggleMode);
        assert_eq!(map_key(key(KeyCode::Backspace)), KeyAction::Backspace);
        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert_eq!(map_key(ctrl_u), KeyAction::ClearField);
    }

    #[test]
    fn model_keys() {
        assert_eq!(map_key(key(KeyCode::Left)), KeyAction::PrevModel);
        assert_eq!(map_key(key(KeyCode::Right)), KeyAction::NextModel);
    }

    #[test]
    fn characters_are_input() {
        assert_eq!(map_key(key(KeyCode::Char('4'))), KeyAction::Input('4'));
        assert_eq!(map_key(key(KeyCode::Char('.'))), KeyAction::Input('.'));
        assert_eq!(map_key(key(KeyCode::Char('x'))), KeyAction::Input('x'));
    }

    #[test]
    fn scroll_keys() {
        assert_eq!(map_key(key(KeyCode::Up)), KeyAction::ScrollUp);
        assert_eq!(map_key(key(KeyCode::Down)), KeyAction::ScrollDown);
        assert_eq!(map_key(key(KeyCode::PageUp)), KeyAction::PageUp);
        assert_eq!(map_key(key(KeyCode::PageDown)), KeyAction::PageDown);
    }

    #[test]
    fn unknown_key() {
        assert_eq!(map_key(key(KeyCode::F(5))), KeyAction::None);
    }
}
