//! Styled button rendered as a single line of spans
//!
//! Buttons in a terminal are inert labels; the key hint tells the user which
//! key triggers the action.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;
use unicode_width::UnicodeWidthStr;

use crate::theme::palette::Palette;
use crate::theme::styles;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    /// Horizontal padding on each side of the label
    fn padding(self) -> usize {
        match self {
            ButtonSize::Sm => 1,
            ButtonSize::Md => 2,
            ButtonSize::Lg => 3,
        }
    }
}

pub struct Button<'a> {
    label: &'a str,
    palette: &'a Palette,
    variant: ButtonVariant,
    size: ButtonSize,
    disabled: bool,
    icon: Option<&'a str>,
    key_hint: Option<&'a str>,
}

impl<'a> Button<'a> {
    pub fn new(label: &'a str, palette: &'a Palette) -> Self {
        Self {
            label,
            palette,
            variant: ButtonVariant::default(),
            size: ButtonSize::default(),
            disabled: false,
            icon: None,
            key_hint: None,
        }
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = variant;
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = size;
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Glyph drawn after the label
    pub fn icon(mut self, icon: &'a str) -> Self {
        self.icon = Some(icon);
        self
    }

    pub fn key_hint(mut self, key: &'a str) -> Self {
        self.key_hint = Some(key);
        self
    }

    fn body_style(&self) -> Style {
        let p = self.palette;
        if self.disabled {
            return Style::default()
                .fg(p.text_muted)
                .bg(p.surface)
                .add_modifier(Modifier::DIM);
        }
        match self.variant {
            ButtonVariant::Primary => Style::default()
                .fg(p.on_accent)
                .bg(p.accent)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Secondary => Style::default()
                .fg(p.text_primary)
                .bg(p.surface)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Outline => Style::default()
                .fg(p.text_primary)
                .add_modifier(Modifier::BOLD),
            ButtonVariant::Ghost => Style::default().fg(p.text_secondary),
        }
    }

    pub fn spans(&self) -> Vec<Span<'a>> {
        let mut spans = Vec::with_capacity(5);

        if let (Some(key), false) = (self.key_hint, self.disabled) {
            spans.push(Span::styled(format!("[{}] ", key), styles::keybinding(self.palette)));
        }

        let pad = " ".repeat(self.size.padding());
        let mut body = format!("{}{}", pad, self.label);
        if let Some(icon) = self.icon {
            body.push(' ');
            body.push_str(icon);
        }
        body.push_str(&pad);

        if self.variant == ButtonVariant::Outline {
            let edge = styles::border_inactive(self.palette);
            spans.push(Span::styled("\u{2590}", edge));
            spans.push(Span::styled(body, self.body_style()));
            spans.push(Span::styled("\u{258c}", edge));
        } else {
            spans.push(Span::styled(body, self.body_style()));
        }
        spans
    }

    pub fn line(&self) -> Line<'a> {
        Line::from(self.spans())
    }

    /// Display width in cells
    pub fn width(&self) -> usize {
        self.spans().iter().map(|s| s.content.width()).sum()
    }
}

impl Widget for Button<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.line().render(area, buf);
    }
}
