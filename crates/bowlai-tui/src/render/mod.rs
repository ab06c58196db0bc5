//! Main render/view function (View in TEA pattern)

mod page;
mod pages;

#[cfg(test)]
mod tests;

use std::ops::Range;

use bowlai_app::progress::ProgressPhase;
use bowlai_app::state::AppState;
use bowlai_app::{Route, UiMode};
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use ratatui::Frame;

use super::{layout, widgets};
use crate::theme::{styles, Theme};

use self::page::PageLines;

/// Render the complete UI (View function in TEA)
///
/// Returns the largest scroll offset the current page can use, for the
/// runner to report back as `Message::ScrollBounds`.
pub fn view(frame: &mut Frame, state: &AppState) -> u16 {
    let area = frame.area();
    let theme = Theme::new(state.theme.mode(), state.settings.ui.icons);
    let p = theme.palette;

    // Fill entire terminal with the page background
    let bg_block = Block::default().style(Style::default().bg(p.deepest_bg).fg(p.text_primary));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);

    let nav = widgets::NavBar::new(theme, state.router.active_nav_index())
        .compact(state.compact)
        .user_menu_open(state.ui_mode == UiMode::UserMenu);
    frame.render_widget(nav, areas.nav);

    let max_scroll = render_body(frame, areas.body, state, theme);
    render_footer(frame, areas.footer, state, theme);

    match state.ui_mode {
        UiMode::Normal | UiMode::SearchInput => {}
        UiMode::Alert => {
            let message = state.alert.as_deref().unwrap_or_default();
            frame.render_widget(widgets::AlertDialog::new(theme, message), area);
        }
        UiMode::PathInput => {
            frame.render_widget(
                widgets::PathPrompt::new(theme, &state.analysis.path_input),
                area,
            );
        }
        UiMode::UserMenu => {
            frame.render_widget(widgets::UserMenu::new(theme, state.menu_selected), area);
        }
        UiMode::Sidebar => {
            let sidebar = widgets::Sidebar::new(
                theme,
                state.menu_selected,
                state.router.active_nav_index(),
            );
            frame.render_widget(sidebar, area);
        }
    }

    max_scroll
}

fn render_body(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) -> u16 {
    // One column of breathing room on each side
    let inner = Rect::new(
        area.x + 1,
        area.y,
        area.width.saturating_sub(2),
        area.height,
    );
    if inner.width == 0 || inner.height == 0 {
        return 0;
    }

    let mut page = PageLines::new(theme, inner.width);
    pages::build(state, &mut page);
    let (lines, focus) = page.into_parts();

    let offset = effective_scroll(state.scroll_offset, focus, lines.len(), inner.height);
    let bound = max_scroll(lines.len(), inner.height);
    frame.render_widget(Paragraph::new(lines).scroll((offset, 0)), inner);
    bound
}

/// Largest offset that still fills the viewport
fn max_scroll(content_len: usize, height: u16) -> u16 {
    let max = content_len.saturating_sub(usize::from(height.max(1)));
    u16::try_from(max).unwrap_or(u16::MAX)
}

/// Clamp the requested offset to the content and keep `focus` visible.
///
/// A focus taller than the viewport shows its first line.
pub fn effective_scroll(
    requested: u16,
    focus: Option<Range<usize>>,
    content_len: usize,
    height: u16,
) -> u16 {
    let max = usize::from(max_scroll(content_len, height));
    let height = usize::from(height.max(1));
    let mut offset = usize::from(requested).min(max);

    if let Some(focus) = focus {
        if focus.end > offset + height {
            offset = focus.end - height;
        }
        if focus.start < offset {
            offset = focus.start;
        }
    }
    u16::try_from(offset).unwrap_or(u16::MAX)
}

/// Keys shown in the bottom bar for the current mode and page
pub fn key_hints(state: &AppState) -> Vec<(&'static str, &'static str)> {
    match state.ui_mode {
        UiMode::Alert => return vec![("Enter", "dismiss")],
        UiMode::PathInput => {
            return vec![("Enter", "select"), ("Esc", "cancel"), ("Ctrl+U", "clear")]
        }
        UiMode::SearchInput => return vec![("Enter", "done"), ("Ctrl+U", "clear")],
        UiMode::UserMenu | UiMode::Sidebar => {
            return vec![("\u{2191}\u{2193}", "move"), ("Enter", "open"), ("Esc", "close")]
        }
        UiMode::Normal => {}
    }

    let mut hints = match state.route() {
        Route::Home => vec![("s", "start analysis")],
        Route::Dashboard => vec![
            ("\u{2191}\u{2193}", "select"),
            ("Enter", "view"),
            ("n", "new"),
            ("v", "history"),
        ],
        Route::Analysis => match (&state.analysis.file, state.analysis.progress.phase()) {
            (None, _) => vec![("o", "choose file"), ("drop", "file onto terminal")],
            (Some(_), ProgressPhase::Running) => vec![("c", "cancel")],
            (Some(_), _) => vec![("s", "start"), ("x", "remove")],
        },
        Route::History => vec![
            ("/", "search"),
            ("f", "status"),
            ("d", "date"),
            ("Enter", "view"),
        ],
        Route::Report { .. } => vec![("Esc", "back"), ("a", "analyze"), ("h", "history")],
        Route::NotFound { .. } => vec![("Enter", "home")],
    };

    if state.compact {
        hints.push(("m", "menu"));
    } else {
        hints.push(("1-4", "pages"));
    }
    hints.extend([("t", "theme"), ("q", "quit")]);
    hints
}

fn render_footer(frame: &mut Frame, area: Rect, state: &AppState, theme: Theme) {
    let p = theme.palette;
    let mut spans = Vec::new();
    for (i, (key, label)) in key_hints(state).into_iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" \u{b7} ", styles::text_muted(p)));
        }
        spans.push(Span::styled(key, styles::keybinding(p)));
        spans.push(Span::styled(format!(" {}", label), styles::text_muted(p)));
    }
    let footer_style = Style::default().bg(p.card_bg);
    frame.render_widget(Paragraph::new(Line::from(spans)).style(footer_style), area);

    let path = Line::from(Span::styled(
        format!("{} ", state.router.path()),
        styles::text_muted(p),
    ))
    .right_aligned();
    frame.render_widget(Paragraph::new(path), area);
}
