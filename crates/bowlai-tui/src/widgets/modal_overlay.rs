//! Shared modal overlay utilities.
//!
//! Centering, background dimming and drop shadows for popups.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Clear, Widget};

use crate::theme::palette::Palette;

/// Center a fixed-size rect within an area.
///
/// If the requested size exceeds the area, clamps to the area dimensions.
///
/// # Examples
/// ```
/// use ratatui::layout::Rect;
/// use bowlai_tui::widgets::modal_overlay::centered_rect;
///
/// let area = Rect::new(0, 0, 80, 24);
/// let modal = centered_rect(40, 10, area);
/// assert_eq!(modal, Rect::new(20, 7, 40, 10));
/// ```
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let w = width.min(area.width);
    let h = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(w)) / 2;
    let y = area.y + (area.height.saturating_sub(h)) / 2;
    Rect::new(x, y, w, h)
}

/// Dim all cells in the given area.
///
/// Stands in for the translucent dark backdrop behind drawers and dialogs.
pub fn dim_background(buf: &mut Buffer, area: Rect, palette: &Palette) {
    let dim_style = Style::default().fg(palette.text_muted).bg(palette.deepest_bg);

    let area = area.intersection(buf.area);
    let y_end = area.y.saturating_add(area.height);
    let x_end = area.x.saturating_add(area.width);
    for y in area.y..y_end {
        for x in area.x..x_end {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.set_style(dim_style);
            }
        }
    }
}

/// Render a 1-cell shadow offset to the right and bottom of a modal rect.
pub fn render_shadow(buf: &mut Buffer, modal_rect: Rect, palette: &Palette) {
    let shadow_style = Style::default().fg(palette.shadow).bg(palette.shadow);

    // Right edge
    let right_x = modal_rect.x.saturating_add(modal_rect.width);
    for y in modal_rect.y.saturating_add(1)
        ..modal_rect
            .y
            .saturating_add(modal_rect.height)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((right_x, y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }

    // Bottom edge
    let bottom_y = modal_rect.y.saturating_add(modal_rect.height);
    for x in modal_rect.x.saturating_add(1)
        ..modal_rect
            .x
            .saturating_add(modal_rect.width)
            .saturating_add(1)
    {
        if let Some(cell) = buf.cell_mut((x, bottom_y)) {
            cell.set_char(' ');
            cell.set_style(shadow_style);
        }
    }
}

/// Reset every cell in `area` before drawing modal content.
pub fn clear_area(buf: &mut Buffer, area: Rect) {
    Clear.render(area, buf);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::palette::DARK;

    #[test]
    fn test_centered_rect_within_area() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect(40, 10, area), Rect::new(20, 7, 40, 10));
    }

    #[test]
    fn test_centered_rect_clamps_to_area() {
        let area = Rect::new(5, 5, 20, 6);
        assert_eq!(centered_rect(100, 100, area), area);
    }

    #[test]
    fn test_dim_background_sets_palette_colors() {
        let area = Rect::new(0, 0, 4, 2);
        let mut buf = Buffer::empty(area);
        dim_background(&mut buf, area, &DARK);
        let cell = buf.cell((3, 1)).unwrap();
        assert_eq!(cell.fg, DARK.text_muted);
        assert_eq!(cell.bg, DARK.deepest_bg);
    }

    #[test]
    fn test_shadow_stays_inside_buffer() {
        let area = Rect::new(0, 0, 10, 5);
        let mut buf = Buffer::empty(area);
        // Modal touching the edges: shadow cells fall outside and are skipped
        render_shadow(&mut buf, area, &DARK);
        let modal = Rect::new(2, 1, 4, 2);
        render_shadow(&mut buf, modal, &DARK);
        assert_eq!(buf.cell((6, 2)).unwrap().bg, DARK.shadow);
        assert_eq!(buf.cell((3, 3)).unwrap().bg, DARK.shadow);
    }
}
