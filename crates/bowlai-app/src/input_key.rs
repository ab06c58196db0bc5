//! Abstract input key event, independent of terminal library.
//!
//! The TUI converts crossterm key events into [`InputKey`] at its boundary so
//! that the handlers in this crate never see terminal types.

/// Abstract input key event.
/// Converted from `crossterm::event::KeyEvent` at the TUI boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputKey {
    // Character keys
    /// Regular character key (a-z, 0-9, symbols)
    Char(char),
    /// Character with Ctrl modifier (Ctrl+c, Ctrl+u, ...)
    CharCtrl(char),

    // Navigation
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    PageUp,
    PageDown,

    // Action keys
    Enter,
    Esc,
    Tab,
    /// Shift+Tab
    BackTab,
    Backspace,
    Delete,
}

impl InputKey {
    /// Whether this is a plain digit `1..=9`, returning its zero-based index
    pub fn digit_index(&self) -> Option<usize> {
        match self {
            InputKey::Char(c @ '1'..='9') => c.to_digit(10).map(|d| d as usize - 1),
            _ => None,
        }
    }
}
