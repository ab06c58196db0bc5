//! Line builder shared by the page views
//!
//! Pages are rendered as a flat list of lines so that the body can scroll as
//! one document. Text is wrapped here (not by `Paragraph`) so the line count
//! is known when the scroll offset is clamped.

use std::ops::Range;

use ratatui::style::Style;
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::theme::{styles, Theme};

pub struct PageLines {
    theme: Theme,
    width: usize,
    lines: Vec<Line<'static>>,
    focus: Option<Range<usize>>,
}

impl PageLines {
    pub fn new(theme: Theme, width: u16) -> Self {
        Self {
            theme,
            width: usize::from(width.max(1)),
            lines: Vec::new(),
            focus: None,
        }
    }

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn push(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    /// Keep the next pushed line on screen (the selected row)
    pub fn focus_next(&mut self) {
        let start = self.lines.len();
        self.focus = Some(start..start + 1);
    }

    pub fn focus_next_if(&mut self, condition: bool) {
        if condition {
            self.focus_next();
        }
    }

    /// Grow the focus to cover every line pushed since it was set
    pub fn extend_focus_if(&mut self, condition: bool) {
        if let (true, Some(focus)) = (condition, self.focus.as_mut()) {
            focus.end = self.lines.len().max(focus.start + 1);
        }
    }

    /// Page heading
    pub fn title(&mut self, text: &str) {
        let p = self.theme.palette;
        self.push(Span::styled(text.to_string(), styles::accent_bold(p)));
    }

    /// Word-wrapped paragraph in one style
    pub fn text(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width) {
            self.push(Span::styled(row, style));
        }
    }

    /// Word-wrapped paragraph, each row centered
    pub fn centered(&mut self, text: &str, style: Style) {
        for row in wrap_text(text, self.width) {
            self.push(Line::from(Span::styled(row, style)).centered());
        }
    }

    /// Blank line, bold heading and a rule under it
    pub fn section(&mut self, title: &str) {
        let p = self.theme.palette;
        self.blank();
        self.push(Span::styled(title.to_string(), styles::heading(p)));
        self.rule();
    }

    pub fn rule(&mut self) {
        let p = self.theme.palette;
        self.push(Span::styled(
            "\u{2500}".repeat(self.width),
            styles::border_inactive(p),
        ));
    }

    /// `icon text` with the text wrapped under itself
    pub fn bullet(&mut self, icon: &str, icon_style: Style, text: &str, style: Style) {
        let indent = icon.width() + 1;
        let rows = wrap_text(text, self.width.saturating_sub(indent).max(1));
        for (i, row) in rows.into_iter().enumerate() {
            let lead = if i == 0 {
                Span::styled(format!("{} ", icon), icon_style)
            } else {
                Span::raw(" ".repeat(indent))
            };
            self.push(Line::from(vec![lead, Span::styled(row, style)]));
        }
    }

    pub fn into_parts(self) -> (Vec<Line<'static>>, Option<Range<usize>>) {
        (self.lines, self.focus)
    }
}

/// Greedy word wrap by display width.
///
/// Words wider than `width` are split across rows.
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();
    let mut current_width = 0;

    for word in text.split_whitespace() {
        let word_width = word.width();
        let needed = if current.is_empty() {
            word_width
        } else {
            current_width + 1 + word_width
        };

        if needed <= width {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_width = needed;
            continue;
        }

        if !current.is_empty() {
            rows.push(std::mem::take(&mut current));
            current_width = 0;
        }

        if word_width <= width {
            current.push_str(word);
            current_width = word_width;
            continue;
        }

        for ch in word.chars() {
            let w = ch.width().unwrap_or(0);
            if current_width + w > width && !current.is_empty() {
                rows.push(std::mem::take(&mut current));
                current_width = 0;
            }
            current.push(ch);
            current_width += w;
        }
    }

    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}
