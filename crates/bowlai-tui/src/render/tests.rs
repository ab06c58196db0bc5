use std::sync::Arc;
use std::time::Duration;

use bowlai_app::process::process_message;
use bowlai_app::{AppState, Message, ProgressScheduler, ThemeMode, UiMode};
use bowlai_core::FixedClock;
use chrono::NaiveDate;

use super::*;
use crate::test_utils::TestTerminal;
use crate::theme::palette;

/// Scheduler for tests that never start a run
struct NoTimer;

impl ProgressScheduler for NoTimer {
    fn start(&mut self, _run_id: u64, _interval: Duration) {}
    fn cancel(&mut self, _run_id: u64) {}
}

fn render(state: &AppState, width: u16, height: u16) -> TestTerminal {
    let mut term = TestTerminal::new(width, height);
    term.draw(|f| {
        view(f, state);
    });
    term
}

fn history_state() -> AppState {
    let now = NaiveDate::from_ymd_opt(2025, 11, 21)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    AppState::new()
        .with_clock(Arc::new(FixedClock(now)))
        .with_initial_path("/history")
}

#[test]
fn test_home_renders_nav_and_hero() {
    let state = AppState::new();
    let term = render(&state, 120, 30);

    assert!(term.buffer_contains("BowlAI"));
    assert!(term.buffer_contains("1 Home"));
    assert!(term.buffer_contains("Analyze Your Bowling Action"));
    assert!(term.buffer_contains("start analysis"));
}

#[test]
fn test_background_follows_theme() {
    let state = AppState::new();
    // Left margin of the body, never covered by page text
    let term = render(&state, 120, 30);
    assert_eq!(term.buffer().cell((0, 10)).unwrap().bg, palette::DARK.deepest_bg);

    state.theme.toggle();
    assert_eq!(state.theme.mode(), ThemeMode::Light);
    let term = render(&state, 120, 30);
    assert_eq!(term.buffer().cell((0, 10)).unwrap().bg, palette::LIGHT.deepest_bg);
}

#[test]
fn test_footer_shows_path() {
    let state = AppState::new().with_initial_path("/dashboard");
    let term = render(&state, 120, 30);
    assert!(term.row(29).ends_with("/dashboard"));
}

#[test]
fn test_not_found_route() {
    let state = AppState::new().with_initial_path("/settings");
    let term = render(&state, 100, 24);
    assert!(term.buffer_contains("Page not found"));
    assert!(term.buffer_contains("/settings"));
}

#[test]
fn test_report_route_renders_payload() {
    let state = AppState::new().with_initial_path("/analysis/7");
    let term = render(&state, 120, 40);
    assert!(term.buffer_contains("Fast Bowling #12"));
    assert!(term.buffer_contains("Back"));
}

#[test]
fn test_alert_overlay() {
    let mut state = AppState::new().with_initial_path("/analysis");
    state.show_alert("Please upload a valid video file (MP4, AVI, MOV)");
    let term = render(&state, 100, 30);
    assert!(term.buffer_contains("Please upload a valid video file (MP4, AVI, MOV)"));
    assert!(term.buffer_contains("Enter dismiss"));
}

#[test]
fn test_path_prompt_overlay() {
    let mut state = AppState::new().with_initial_path("/analysis");
    state.ui_mode = UiMode::PathInput;
    state.analysis.path_input = "/tmp/clip.mp4".to_string();
    let term = render(&state, 100, 30);
    assert!(term.buffer_contains("Choose Video File"));
    assert!(term.buffer_contains("/tmp/clip.mp4_"));
}

#[test]
fn test_user_menu_overlay() {
    let mut state = AppState::new();
    state.ui_mode = UiMode::UserMenu;
    let term = render(&state, 120, 30);
    assert!(term.buffer_contains("john@bowlai.com"));
}

#[test]
fn test_compact_sidebar_overlay() {
    let mut state = AppState::new().with_initial_path("/history");
    state.compact = true;
    state.ui_mode = UiMode::Sidebar;
    let term = render(&state, 80, 24);
    assert!(term.buffer_contains("Menu"));
    assert!(term.buffer_contains("Dashboard"));
}

#[test]
fn test_scroll_is_clamped_to_content() {
    let mut state = AppState::new().with_initial_path("/");
    state.scroll_offset = u16::MAX;
    let term = render(&state, 100, 30);
    // The last lines of the home page are on screen
    assert!(term.buffer_contains("No credit card required"));
}

#[test]
fn test_history_selection_scrolls_into_view() {
    let mut state = history_state();
    state.history.selected = 5;
    let term = render(&state, 100, 20);
    assert!(term.buffer_contains("Form Check #15"));
    assert!(term.buffer_contains("View Details"));
}

#[test]
fn test_view_reports_max_scroll() {
    let state = AppState::new().with_initial_path("/settings");
    let mut term = TestTerminal::new(100, 24);
    let mut max = u16::MAX;
    term.draw(|f| max = view(f, &state));
    // The 404 page fits on screen
    assert_eq!(max, 0);

    let state = AppState::new();
    term.draw(|f| max = view(f, &state));
    assert!(max > 0);
}

#[test]
fn test_effective_scroll() {
    // Clamp to content
    assert_eq!(effective_scroll(50, None, 30, 10), 20);
    // Short content never scrolls
    assert_eq!(effective_scroll(5, None, 4, 10), 0);
    // Focus above the window pulls it up
    assert_eq!(effective_scroll(15, Some(3..4), 40, 10), 3);
    // Focus below the window pushes it down
    assert_eq!(effective_scroll(0, Some(25..26), 40, 10), 16);
    // The whole card comes into view
    assert_eq!(effective_scroll(0, Some(25..28), 40, 10), 18);
    // Taller than the window: its first line wins
    assert_eq!(effective_scroll(0, Some(20..35), 40, 10), 20);
}

#[test]
fn test_key_hints_by_mode() {
    let mut state = AppState::new().with_initial_path("/analysis");
    let hints = key_hints(&state);
    assert!(hints.contains(&("o", "choose file")));

    state.ui_mode = UiMode::PathInput;
    assert_eq!(key_hints(&state)[0], ("Enter", "select"));

    state.ui_mode = UiMode::Normal;
    state.compact = true;
    assert!(key_hints(&state).contains(&("m", "menu")));
}

#[test]
fn test_search_typing_updates_view() {
    let mut state = history_state();
    for msg in [
        Message::StartSearch,
        Message::SearchInput {
            text: "speed".to_string(),
        },
    ] {
        process_message(&mut state, msg, &mut NoTimer);
    }
    let term = render(&state, 100, 30);
    assert!(term.buffer_contains("speed_"));
    assert!(term.buffer_contains("Speed Test #3"));
    assert!(term.buffer_contains("1 result"));
}
