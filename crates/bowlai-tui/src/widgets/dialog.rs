//! Centered modal dialogs: the blocking alert and the file path prompt

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget, Wrap};

use crate::theme::{styles, Theme};

use super::button::Button;
use super::modal_overlay;
use super::text_input::TextInput;

const DIALOG_WIDTH: u16 = 56;

/// Blocking message box, dismissed with Enter or Esc
pub struct AlertDialog<'a> {
    theme: Theme,
    message: &'a str,
}

impl<'a> AlertDialog<'a> {
    pub fn new(theme: Theme, message: &'a str) -> Self {
        Self { theme, message }
    }
}

impl Widget for AlertDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        modal_overlay::dim_background(buf, area, p);

        let text_width = DIALOG_WIDTH.saturating_sub(4).max(1) as usize;
        let message_rows = self.message.chars().count().div_ceil(text_width).max(1) as u16;
        let dialog = modal_overlay::centered_rect(DIALOG_WIDTH, message_rows + 6, area);
        modal_overlay::clear_area(buf, dialog);
        modal_overlay::render_shadow(buf, dialog, p);

        let title = format!(" {} Alert ", self.theme.icons.alert());
        let block = styles::modal_block(p, &title);
        let inner = block.inner(dialog);
        block.render(dialog, buf);

        let ok = Button::new("OK", p).key_hint("Enter");
        let lines = vec![
            Line::default(),
            Line::from(Span::styled(self.message, styles::text_primary(p))),
            Line::default(),
            ok.line().right_aligned(),
        ];
        Paragraph::new(lines)
            .wrap(Wrap { trim: true })
            .render(inner, buf);
    }
}

/// "Choose Video File" path prompt
pub struct PathPrompt<'a> {
    theme: Theme,
    value: &'a str,
}

impl<'a> PathPrompt<'a> {
    pub fn new(theme: Theme, value: &'a str) -> Self {
        Self { theme, value }
    }
}

impl Widget for PathPrompt<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        modal_overlay::dim_background(buf, area, p);

        let dialog = modal_overlay::centered_rect(DIALOG_WIDTH + 16, 8, area);
        modal_overlay::clear_area(buf, dialog);
        modal_overlay::render_shadow(buf, dialog, p);

        let block = styles::modal_block(p, " Choose Video File ");
        let inner = block.inner(dialog);
        block.render(dialog, buf);
        if inner.height < 4 {
            return;
        }

        let hint = Line::from(Span::styled(
            "Path to an MP4, AVI or MOV file (max 100MB)",
            styles::text_secondary(p),
        ));
        Paragraph::new(hint).render(Rect { height: 1, ..inner }, buf);

        let input_area = Rect::new(inner.x, inner.y + 2, inner.width, 1);
        TextInput::new(self.value, p)
            .prefix(self.theme.icons.video())
            .focused(true)
            .render(input_area, buf);

        let keys = Line::from(vec![
            Span::styled("[Enter] ", styles::keybinding(p)),
            Span::styled("select  ", styles::text_muted(p)),
            Span::styled("[Esc] ", styles::keybinding(p)),
            Span::styled("cancel", styles::text_muted(p)),
        ]);
        let keys_area = Rect::new(inner.x, inner.y + inner.height - 1, inner.width, 1);
        Paragraph::new(keys).render(keys_area, buf);
    }
}
