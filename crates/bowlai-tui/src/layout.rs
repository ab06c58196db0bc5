//! Screen layout definitions for the TUI
//!
//! Nav bar on top, page body in the middle and a one-line key hint bar at
//! the bottom. Narrow terminals get the compact nav bar.

use ratatui::layout::{Constraint, Layout, Rect};

/// Below this width the nav links move into the sidebar
pub const COMPACT_WIDTH: u16 = 100;

/// Widest the page body grows; wider terminals center it
pub const MAX_CONTENT_WIDTH: u16 = 120;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    /// Nav bar (glass container)
    pub nav: Rect,

    /// Scrollable page body
    pub body: Rect,

    /// Key hints
    pub footer: Rect,
}

pub fn is_compact(width: u16) -> bool {
    width < COMPACT_WIDTH
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let chunks = Layout::vertical([
        Constraint::Length(3), // Top border + nav row + bottom border
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .split(area);

    ScreenAreas {
        nav: chunks[0],
        body: centered_column(chunks[1], MAX_CONTENT_WIDTH),
        footer: chunks[2],
    }
}

/// Horizontally center a column of at most `max_width` cells
pub fn centered_column(area: Rect, max_width: u16) -> Rect {
    let width = area.width.min(max_width);
    let x = area.x + (area.width - width) / 2;
    Rect::new(x, area.y, width, area.height)
}
