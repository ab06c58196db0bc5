//! Single-line text input (history search box, path prompt)

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};
use unicode_width::UnicodeWidthStr;

use crate::theme::palette::Palette;
use crate::theme::styles;

pub struct TextInput<'a> {
    value: &'a str,
    palette: &'a Palette,
    placeholder: &'a str,
    prefix: Option<&'a str>,
    focused: bool,
}

impl<'a> TextInput<'a> {
    pub fn new(value: &'a str, palette: &'a Palette) -> Self {
        Self {
            value,
            palette,
            placeholder: "",
            prefix: None,
            focused: false,
        }
    }

    pub fn placeholder(mut self, placeholder: &'a str) -> Self {
        self.placeholder = placeholder;
        self
    }

    /// Glyph drawn before the text (e.g. a search icon)
    pub fn prefix(mut self, prefix: &'a str) -> Self {
        self.prefix = Some(prefix);
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Spans of the input, keeping the tail of `value` visible in `max_width`
    pub fn spans(&self, max_width: usize) -> Vec<Span<'a>> {
        let p = self.palette;
        let mut spans = Vec::with_capacity(4);
        let mut used = 0;

        if let Some(prefix) = self.prefix {
            spans.push(Span::styled(format!("{} ", prefix), styles::text_muted(p)));
            used += prefix.width() + 1;
        }

        if self.value.is_empty() && !self.focused {
            spans.push(Span::styled(self.placeholder, styles::text_muted(p)));
            return spans;
        }

        // Leave room for the cursor
        let room = max_width.saturating_sub(used + 1);
        spans.push(Span::styled(
            tail_fitting(self.value, room).to_string(),
            styles::text_primary(p),
        ));

        if self.focused {
            spans.push(Span::styled("_", styles::accent_bold(p)));
        }
        spans
    }
}

impl Widget for TextInput<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let line = Line::from(self.spans(area.width as usize));
        Paragraph::new(line).render(area, buf);
    }
}

/// Longest suffix of `text` that fits in `width` cells
fn tail_fitting(text: &str, width: usize) -> &str {
    if text.width() <= width {
        return text;
    }
    let mut start = text.len();
    let mut used = 0;
    for (idx, ch) in text.char_indices().rev() {
        let w = unicode_width::UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        start = idx;
    }
    &text[start..]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use crate::theme::palette::DARK;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_placeholder_when_empty_and_unfocused() {
        let input = TextInput::new("", &DARK).placeholder("Search analyses...");
        assert_eq!(text(&input.spans(40)), "Search analyses...");
    }

    #[test]
    fn test_focused_shows_cursor_not_placeholder() {
        let input = TextInput::new("", &DARK)
            .placeholder("Search analyses...")
            .focused(true);
        assert_eq!(text(&input.spans(40)), "_");
    }

    #[test]
    fn test_long_value_keeps_tail() {
        let input = TextInput::new("/home/user/videos/clip.mp4", &DARK).focused(true);
        assert_eq!(text(&input.spans(10)), "/clip.mp4_");
    }

    #[test]
    fn test_tail_fitting_wide_chars() {
        assert_eq!(tail_fitting("ab漢字", 4), "漢字");
        assert_eq!(tail_fitting("ab漢字", 3), "字");
        assert_eq!(tail_fitting("abc", 10), "abc");
    }

    #[test]
    fn test_renders_prefix() {
        let mut term = TestTerminal::new(30, 1);
        let area = term.area();
        term.render_widget(TextInput::new("fast", &DARK).prefix(">"), area);
        assert_eq!(term.row(0), "> fast");
    }
}
