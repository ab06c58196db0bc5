//! Navigation drawer for compact terminals

use bowlai_app::NAV_LINKS;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{styles, Theme};

use super::modal_overlay;

const DRAWER_WIDTH: u16 = 30;

pub struct Sidebar {
    theme: Theme,
    /// Highlighted entry
    selected: usize,
    /// Entry matching the current path
    active: Option<usize>,
}

impl Sidebar {
    pub fn new(theme: Theme, selected: usize, active: Option<usize>) -> Self {
        Self {
            theme,
            selected,
            active,
        }
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let p = self.theme.palette;
        let mut lines = vec![Line::default()];
        for (i, link) in NAV_LINKS.iter().enumerate() {
            let marker = if self.active == Some(i) {
                self.theme.icons.dot()
            } else {
                " "
            };
            let style = if i == self.selected {
                styles::focused_selected(p)
            } else if self.active == Some(i) {
                styles::accent_bold(p)
            } else {
                styles::text_secondary(p)
            };
            lines.push(Line::from(vec![
                Span::styled(format!(" {} ", marker), styles::accent(p)),
                Span::styled(format!(" {}  {:<20}", i + 1, link.label), style),
            ]));
        }
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            " Enter open \u{b7} Esc close",
            styles::text_muted(p),
        )));
        lines
    }
}

impl Widget for Sidebar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        modal_overlay::dim_background(buf, area, p);

        let drawer = Rect::new(area.x, area.y, DRAWER_WIDTH.min(area.width), area.height);
        modal_overlay::clear_area(buf, drawer);

        let block = styles::modal_block(p, " Menu ");
        let inner = block.inner(drawer);
        block.render(drawer, buf);
        Paragraph::new(self.lines()).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use bowlai_app::config::IconMode;
    use bowlai_app::ThemeMode;

    #[test]
    fn test_lists_all_links() {
        let theme = Theme::new(ThemeMode::Dark, IconMode::Unicode);
        let mut term = TestTerminal::new(60, 12);
        let area = term.area();
        term.render_widget(Sidebar::new(theme, 0, Some(0)), area);

        assert!(term.buffer_contains("Menu"));
        for link in NAV_LINKS {
            assert!(term.buffer_contains(link.label));
        }
    }

    #[test]
    fn test_selected_entry_uses_accent_background() {
        let theme = Theme::new(ThemeMode::Light, IconMode::Unicode);
        let sidebar = Sidebar::new(theme, 2, Some(0));
        let lines = sidebar.lines();
        // First line is padding
        assert_eq!(lines[3].spans[1].style.bg, Some(theme.palette.accent));
        assert_ne!(lines[1].spans[1].style.bg, Some(theme.palette.accent));
    }
}
