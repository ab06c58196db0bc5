//! Fallback for paths outside the routing table

use ratatui::text::{Line, Span};

use crate::render::page::PageLines;
use crate::theme::styles;
use crate::widgets::Button;

pub fn build(path: &str, page: &mut PageLines) {
    let p = page.theme().palette;

    page.blank();
    page.blank();
    page.push(Line::from(Span::styled("404", styles::accent_bold(p))).centered());
    page.push(Line::from(Span::styled("Page not found", styles::heading(p))).centered());
    page.centered(&format!("Nothing lives at {}", path), styles::text_muted(p));
    page.blank();
    page.push(Button::new("Go Home", p).key_hint("Enter").line().centered());
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::Theme;
    use bowlai_app::config::IconMode;
    use bowlai_app::ThemeMode;

    #[test]
    fn test_names_missing_path() {
        let mut page = PageLines::new(Theme::new(ThemeMode::Light, IconMode::Unicode), 60);
        build("/reports", &mut page);
        let text: Vec<String> = page.into_parts().0.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Page not found")));
        assert!(text.iter().any(|l| l.contains("Nothing lives at /reports")));
    }
}
