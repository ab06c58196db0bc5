//! Top navigation bar
//!
//! Brand on the left, route links in the middle and the theme toggle,
//! notification badge, user menu and "Get Started" button on the right.
//! In compact mode the links collapse into the sidebar toggle.

use bowlai_app::NAV_LINKS;
use bowlai_core::NOTIFICATION_COUNT;
use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::theme::{styles, Theme};

use super::button::{Button, ButtonSize};

pub struct NavBar {
    theme: Theme,
    /// Index into `NAV_LINKS` of the link matching the current path
    active: Option<usize>,
    compact: bool,
    user_menu_open: bool,
}

impl NavBar {
    pub fn new(theme: Theme, active: Option<usize>) -> Self {
        Self {
            theme,
            active,
            compact: false,
            user_menu_open: false,
        }
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn user_menu_open(mut self, open: bool) -> Self {
        self.user_menu_open = open;
        self
    }

    fn brand(&self) -> Line<'static> {
        let p = self.theme.palette;
        let mut spans = vec![
            Span::styled(format!("{} ", self.theme.icons.brand()), styles::accent(p)),
            Span::styled("BowlAI", styles::accent_bold(p)),
        ];
        if self.compact {
            spans.push(Span::raw("  "));
            spans.push(Span::styled("[m] ", styles::keybinding(p)));
            spans.push(Span::styled(self.theme.icons.menu(), styles::text_secondary(p)));
        }
        Line::from(spans)
    }

    fn links(&self) -> Line<'static> {
        let p = self.theme.palette;
        let mut spans = Vec::with_capacity(NAV_LINKS.len() * 2);
        for (i, link) in NAV_LINKS.iter().enumerate() {
            if i > 0 {
                spans.push(Span::raw(" "));
            }
            let style = if self.active == Some(i) {
                Style::default()
                    .fg(p.accent)
                    .bg(p.accent_dim)
                    .add_modifier(Modifier::BOLD)
            } else {
                styles::text_secondary(p)
            };
            spans.push(Span::styled(format!(" {} {} ", i + 1, link.label), style));
        }
        Line::from(spans)
    }

    fn actions(&self) -> Line<'static> {
        let p = self.theme.palette;
        let icons = self.theme.icons;

        let toggle_style = if self.theme.mode.is_dark() {
            Style::default().fg(p.caution)
        } else {
            styles::text_secondary(p)
        };
        let user_style = if self.user_menu_open {
            styles::accent_bold(p)
        } else {
            styles::text_secondary(p)
        };

        let mut spans = vec![
            Span::styled("[t] ", styles::keybinding(p)),
            Span::styled(icons.theme_toggle(self.theme.mode), toggle_style),
            Span::raw("  "),
            Span::styled(icons.bell(), styles::text_secondary(p)),
        ];
        if NOTIFICATION_COUNT > 0 {
            spans.push(Span::styled(
                format!(" {}", NOTIFICATION_COUNT),
                Style::default().fg(p.danger).add_modifier(Modifier::BOLD),
            ));
        }
        spans.extend([
            Span::raw("  "),
            Span::styled("[u] ", styles::keybinding(p)),
            Span::styled(format!("{} \u{25be}", icons.user()), user_style),
            Span::raw("  "),
        ]);
        let cta = Button::new("Get Started", p)
            .size(ButtonSize::Sm)
            .key_hint("g");
        spans.extend(cta.spans());
        Line::from(spans)
    }
}

impl Widget for NavBar {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let p = self.theme.palette;
        let block = styles::glass_block(p, false);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let row = Rect::new(inner.x, inner.y, inner.width, 1);
        let brand = self.brand();
        let actions = self.actions();

        let [brand_area, middle, actions_area] = Layout::horizontal([
            Constraint::Length(brand.width() as u16 + 1),
            Constraint::Min(0),
            Constraint::Length(actions.width() as u16),
        ])
        .areas(row);

        Paragraph::new(brand).render(brand_area, buf);
        if !self.compact {
            Paragraph::new(self.links())
                .alignment(Alignment::Center)
                .render(middle, buf);
        }
        Paragraph::new(actions).render(actions_area, buf);
    }
}
