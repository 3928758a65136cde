//! Input handling for the TUI application.
//!
//! This module provides key-to-message mapping for translating terminal key
//! events into application messages.

use crossterm::event::{KeyCode, KeyModifiers};

use super::messages::AppMsg;

/// Maps a key event to an application message.
///
/// Printable characters edit the page number text, so navigation and
/// commands live on non-printing keys. Returns `None` for unrecognised key
/// events, allowing them to be ignored.
#[must_use]
pub fn map_key_to_message(key: &bubbletea_rs::event::KeyMsg) -> Option<AppMsg> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.key {
            KeyCode::Char('c' | 'C') => Some(AppMsg::Quit),
            _ => None,
        };
    }

    match key.key {
        KeyCode::Char(character) if !character.is_control() => {
            Some(AppMsg::InsertChar(character))
        }
        KeyCode::Backspace => Some(AppMsg::Backspace),
        KeyCode::Esc => Some(AppMsg::EscapePressed),
        KeyCode::Enter => Some(AppMsg::Submit),
        KeyCode::Left | KeyCode::PageUp => Some(AppMsg::PrevPage),
        KeyCode::Right | KeyCode::PageDown => Some(AppMsg::NextPage),
        KeyCode::Up => Some(AppMsg::ScrollUp),
        KeyCode::Down => Some(AppMsg::ScrollDown),
        KeyCode::F(5) => Some(AppMsg::Reload),
        KeyCode::F(1) => Some(AppMsg::ToggleHelp),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use bubbletea_rs::event::KeyMsg;
    use crossterm::event::{KeyCode, KeyModifiers};
    use rstest::rstest;

    use super::map_key_to_message;
    use crate::tui::messages::AppMsg;

    fn key(code: KeyCode) -> KeyMsg {
        KeyMsg {
            key: code,
            modifiers: KeyModifiers::NONE,
        }
    }

    #[rstest]
    #[case::digit(KeyCode::Char('7'), "InsertChar('7')")]
    #[case::letter(KeyCode::Char('q'), "InsertChar('q')")]
    #[case::backspace(KeyCode::Backspace, "Backspace")]
    #[case::escape(KeyCode::Esc, "EscapePressed")]
    #[case::enter(KeyCode::Enter, "Submit")]
    #[case::left(KeyCode::Left, "PrevPage")]
    #[case::page_up(KeyCode::PageUp, "PrevPage")]
    #[case::right(KeyCode::Right, "NextPage")]
    #[case::page_down(KeyCode::PageDown, "NextPage")]
    #[case::up(KeyCode::Up, "ScrollUp")]
    #[case::down(KeyCode::Down, "ScrollDown")]
    #[case::reload(KeyCode::F(5), "Reload")]
    #[case::help(KeyCode::F(1), "ToggleHelp")]
    fn maps_keys_to_messages(#[case] code: KeyCode, #[case] expected: &str) {
        let mapped = map_key_to_message(&key(code));
        assert_eq!(mapped.map(|msg| format!("{msg:?}")).as_deref(), Some(expected));
    }

    #[rstest]
    fn ctrl_c_quits() {
        let msg = KeyMsg {
            key: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
        };
        assert!(matches!(map_key_to_message(&msg), Some(AppMsg::Quit)));
    }

    #[rstest]
    #[case::other_control(KeyCode::Char('x'), KeyModifiers::CONTROL)]
    #[case::tab(KeyCode::Tab, KeyModifiers::NONE)]
    #[case::home(KeyCode::Home, KeyModifiers::NONE)]
    fn ignores_unmapped_keys(#[case] code: KeyCode, #[case] modifiers: KeyModifiers) {
        let msg = KeyMsg {
            key: code,
            modifiers,
        };
        assert!(map_key_to_message(&msg).is_none());
    }
}
