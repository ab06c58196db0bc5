//! Semantic style builders over a [`Palette`].

use bowlai_core::StatusTone;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders, Padding};

use super::palette::Palette;

// --- Text styles ---
pub fn text_primary(p: &Palette) -> Style {
    Style::default().fg(p.text_primary)
}

pub fn text_secondary(p: &Palette) -> Style {
    Style::default().fg(p.text_secondary)
}

pub fn text_muted(p: &Palette) -> Style {
    Style::default().fg(p.text_muted)
}

pub fn heading(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .add_modifier(Modifier::BOLD)
}

// --- Border styles ---
pub fn border_inactive(p: &Palette) -> Style {
    Style::default().fg(p.border)
}

pub fn border_active(p: &Palette) -> Style {
    Style::default().fg(p.border_active)
}

// --- Accent styles ---
pub fn accent(p: &Palette) -> Style {
    Style::default().fg(p.accent)
}

pub fn accent_bold(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Key hint in brackets, e.g. `[o]`
pub fn keybinding(p: &Palette) -> Style {
    Style::default().fg(p.accent).add_modifier(Modifier::BOLD)
}

/// Colored status badge text
pub fn badge(p: &Palette, tone: StatusTone) -> Style {
    Style::default()
        .fg(p.tone(tone))
        .add_modifier(Modifier::BOLD)
}

// --- Selection ---
pub fn selected_row(p: &Palette) -> Style {
    Style::default()
        .fg(p.text_primary)
        .bg(p.surface)
        .add_modifier(Modifier::BOLD)
}

pub fn focused_selected(p: &Palette) -> Style {
    Style::default()
        .fg(p.on_accent)
        .bg(p.accent)
        .add_modifier(Modifier::BOLD)
}

// --- Containers ---
pub fn glass_block(p: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active(p)
        } else {
            border_inactive(p)
        })
        .style(Style::default().bg(p.card_bg))
}

pub fn modal_block<'a>(p: &Palette, title: &'a str) -> Block<'a> {
    Block::default()
        .title(title)
        .title_style(heading(p))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active(p))
        .padding(Padding::horizontal(1))
        .style(Style::default().bg(p.popup_bg))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::{DARK, LIGHT};

    #[test]
    fn test_text_styles_follow_palette() {
        assert_eq!(text_primary(&DARK).fg, Some(DARK.text_primary));
        assert_eq!(text_primary(&LIGHT).fg, Some(LIGHT.text_primary));
        assert_eq!(text_muted(&DARK).fg, Some(DARK.text_muted));
    }

    #[test]
    fn test_badge_uses_tone_color() {
        assert_eq!(badge(&DARK, StatusTone::Caution).fg, Some(DARK.caution));
        assert_eq!(badge(&LIGHT, StatusTone::Warning).fg, Some(LIGHT.warning));
    }

    #[test]
    fn test_focused_selected_inverts_accent() {
        let style = focused_selected(&DARK);
        assert_eq!(style.bg, Some(DARK.accent));
        assert_eq!(style.fg, Some(DARK.on_accent));
    }
}
