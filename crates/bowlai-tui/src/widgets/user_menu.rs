//! User dropdown anchored under the nav bar's right edge

use bowlai_app::state::{USER_EMAIL, USER_MENU_ITEMS, USER_NAME};
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{styles, Theme};

use super::modal_overlay;

const MENU_WIDTH: u16 = 28;

pub struct UserMenu {
    theme: Theme,
    selected: usize,
}

impl UserMenu {
    pub fn new(theme: Theme, selected: usize) -> Self {
        Self { theme, selected }
    }

    /// Popup rect: top-right of `area`, just below the nav bar
    pub fn popup_area(area: Rect) -> Rect {
        let height = (USER_MENU_ITEMS.len() as u16 + 5).min(area.height.saturating_sub(3));
        let width = MENU_WIDTH.min(area.width);
        let x = area.x + area.width.saturating_sub(width + 1);
        Rect::new(x, area.y + 3, width, height)
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![
            Line::from(Span::styled(USER_NAME, styles::heading(p))),
            Line::from(Span::styled(USER_EMAIL, styles::text_muted(p))),
            Line::from(Span::styled(
                "\u{2500}".repeat(MENU_WIDTH as usize - 4),
                styles::border_inactive(p),
            )),
        ];
        for (i, item) in USER_MENU_ITEMS.iter().enumerate() {
            let style = if i == self.selected {
                styles::selected_row(p)
            } else if item.label == "Sign Out" {
                Style::default().fg(p.danger)
            } else {
                styles::text_secondary(p)
            };
            lines.push(Line::from(Span::styled(format!(" {:<22}", item.label), style)));
        }
        lines
    }
}

impl Widget for UserMenu {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let popup = Self::popup_area(area);
        if popup.height == 0 {
            return;
        }
        modal_overlay::clear_area(buf, popup);
        modal_overlay::render_shadow(buf, popup, p);

        let block = styles::modal_block(p, "");
        let inner = block.inner(popup);
        block.render(popup, buf);
        Paragraph::new(self.lines()).render(inner, buf);
    }
}
