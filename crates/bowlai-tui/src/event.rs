//! Terminal event polling

use crossterm::event::{self, Event, KeyCode, KeyModifiers};
use bowlai_app::message::Message;
use bowlai_app::InputKey;
use bowlai_core::prelude::*;
use std::time::Duration;

use crate::layout;

/// Convert crossterm KeyEvent to InputKey
pub fn key_event_to_input(key: crossterm::event::KeyEvent) -> Option<InputKey> {
    match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            Some(InputKey::CharCtrl(c))
        }
        KeyCode::Char(c) => Some(InputKey::Char(c)),
        KeyCode::Enter => Some(InputKey::Enter),
        KeyCode::Esc => Some(InputKey::Esc),
        KeyCode::Tab if key.modifiers.contains(KeyModifiers::SHIFT) => Some(InputKey::BackTab),
        KeyCode::Tab => Some(InputKey::Tab),
        KeyCode::BackTab => Some(InputKey::BackTab),
        KeyCode::Backspace => Some(InputKey::Backspace),
        KeyCode::Delete => Some(InputKey::Delete),
        KeyCode::Up => Some(InputKey::Up),
        KeyCode::Down => Some(InputKey::Down),
        KeyCode::Left => Some(InputKey::Left),
        KeyCode::Right => Some(InputKey::Right),
        KeyCode::Home => Some(InputKey::Home),
        KeyCode::End => Some(InputKey::End),
        KeyCode::PageUp => Some(InputKey::PageUp),
        KeyCode::PageDown => Some(InputKey::PageDown),
        _ => None, // Unsupported keys ignored
    }
}

/// Convert a crossterm event to a message, if it means anything to the app
pub fn event_to_message(event: Event) -> Option<Message> {
    match event {
        Event::Key(key) if key.kind == event::KeyEventKind::Press => {
            key_event_to_input(key).map(Message::Key)
        }
        // Terminals deliver dropped files as a bracketed paste of the path
        Event::Paste(text) => Some(Message::Paste(text)),
        Event::Resize(width, _) => Some(Message::Resized {
            compact: layout::is_compact(width),
        }),
        _ => None,
    }
}

/// Poll for terminal events with timeout
pub fn poll() -> Result<Option<Message>> {
    // Poll with 50ms timeout (20 FPS)
    if event::poll(Duration::from_millis(50))? {
        Ok(event_to_message(event::read()?))
    } else {
        // Generate tick on timeout
        Ok(Some(Message::Tick))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_ctrl_char_maps_to_char_ctrl() {
        let key = press(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(key_event_to_input(key), Some(InputKey::CharCtrl('c')));
    }

    #[test]
    fn test_shift_tab_maps_to_back_tab() {
        let key = press(KeyCode::Tab, KeyModifiers::SHIFT);
        assert_eq!(key_event_to_input(key), Some(InputKey::BackTab));
    }

    #[test]
    fn test_function_keys_ignored() {
        let key = press(KeyCode::F(5), KeyModifiers::NONE);
        assert_eq!(key_event_to_input(key), None);
    }

    #[test]
    fn test_key_release_ignored() {
        let mut key = press(KeyCode::Char('q'), KeyModifiers::NONE);
        key.kind = KeyEventKind::Release;
        assert_eq!(event_to_message(Event::Key(key)), None);
    }

    #[test]
    fn test_paste_becomes_paste_message() {
        let msg = event_to_message(Event::Paste("/tmp/clip.mp4".to_string()));
        assert_eq!(msg, Some(Message::Paste("/tmp/clip.mp4".to_string())));
    }

    #[test]
    fn test_resize_reports_compact_width() {
        assert_eq!(
            event_to_message(Event::Resize(60, 30)),
            Some(Message::Resized { compact: true })
        );
        assert_eq!(
            event_to_message(Event::Resize(140, 30)),
            Some(Message::Resized { compact: false })
        );
    }
}
