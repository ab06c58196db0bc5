//! Horizontal bars for scores, metrics and progress

use ratatui::style::Style;
use ratatui::text::Span;

const FILLED: &str = "\u{2588}"; // █
const EMPTY: &str = "\u{2591}"; // ░

/// Spans of a `width`-cell bar filled to `ratio` (clamped to 0..=1)
pub fn bar(ratio: f64, width: usize, filled: Style, empty: Style) -> Vec<Span<'static>> {
    let cells = filled_cells(ratio, width);
    let mut spans = Vec::with_capacity(2);
    if cells > 0 {
        spans.push(Span::styled(FILLED.repeat(cells), filled));
    }
    if cells < width {
        spans.push(Span::styled(EMPTY.repeat(width - cells), empty));
    }
    spans
}

/// Bar for a 0-100 percentage
pub fn percent_bar(percent: u8, width: usize, filled: Style, empty: Style) -> Vec<Span<'static>> {
    bar(f64::from(percent) / 100.0, width, filled, empty)
}

fn filled_cells(ratio: f64, width: usize) -> usize {
    let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
    (ratio * width as f64).round() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(spans: &[Span]) -> String {
        spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn test_half_bar() {
        let spans = bar(0.5, 10, Style::default(), Style::default());
        assert_eq!(text(&spans), "█████░░░░░");
    }

    #[test]
    fn test_bar_clamps_ratio() {
        assert_eq!(filled_cells(1.7, 8), 8);
        assert_eq!(filled_cells(-0.2, 8), 0);
        assert_eq!(filled_cells(f64::NAN, 8), 0);
    }

    #[test]
    fn test_percent_bar_extremes() {
        let empty = percent_bar(0, 4, Style::default(), Style::default());
        assert_eq!(text(&empty), "░░░░");
        let full = percent_bar(100, 4, Style::default(), Style::default());
        assert_eq!(text(&full), "████");
        assert_eq!(full.len(), 1);
    }
}
