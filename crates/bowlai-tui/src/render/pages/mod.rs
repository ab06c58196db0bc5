//! Page views, one per route

mod analysis;
mod dashboard;
mod history;
mod home;
mod not_found;
mod report;

use bowlai_app::{AppState, Route};
use bowlai_core::StatusTone;
use ratatui::text::Span;

use crate::theme::palette::Palette;
use crate::theme::styles;

use super::page::PageLines;

/// Build the body lines of the current route
pub fn build(state: &AppState, page: &mut PageLines) {
    match state.route() {
        Route::Home => home::build(page),
        Route::Dashboard => dashboard::build(state, page),
        Route::Analysis => analysis::build(state, page),
        Route::History => history::build(state, page),
        Route::Report { .. } => match &state.report {
            Some(report) => report::build(report, page),
            None => not_found::build(&state.router.path(), page),
        },
        Route::NotFound { path } => not_found::build(path, page),
    }
}

/// Rounded status pill, e.g. `( Legal )`
fn badge(label: &str, tone: StatusTone, p: &Palette) -> Span<'static> {
    Span::styled(format!("\u{2590}{}\u{258c}", label), styles::badge(p, tone))
}

/// Separator between inline facts on one line
fn gap() -> Span<'static> {
    Span::raw("   ")
}
