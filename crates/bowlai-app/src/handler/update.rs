//! Main update function - handles state transitions (TEA pattern)

use bowlai_core::prelude::*;

use crate::message::Message;
use crate::router::{Route, NAV_LINKS};
use crate::state::{AppPhase, AppState, UiMode, USER_MENU_ITEMS};

use super::{keys::handle_key, upload, UpdateResult};

/// Lines moved by PageUp/PageDown
const PAGE_SCROLL: u16 = 10;

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.phase = AppPhase::Quitting;
            UpdateResult::none()
        }

        Message::Key(key) => match handle_key(state, key) {
            Some(msg) => UpdateResult::message(msg),
            None => UpdateResult::none(),
        },

        Message::Paste(text) => handle_paste(state, text),

        Message::Tick => UpdateResult::none(),

        Message::Resized { compact } => {
            state.compact = compact;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        Message::Navigate(path) => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::cancel(state.navigate(&path))
        }

        Message::Back => UpdateResult::cancel(state.go_back()),

        Message::NextNavLink => {
            let next = state
                .router
                .active_nav_index()
                .map(|i| (i + 1) % NAV_LINKS.len())
                .unwrap_or(0);
            UpdateResult::message(Message::Navigate(NAV_LINKS[next].path.to_string()))
        }

        Message::PreviousNavLink => {
            let len = NAV_LINKS.len();
            let prev = state
                .router
                .active_nav_index()
                .map(|i| (i + len - 1) % len)
                .unwrap_or(len - 1);
            UpdateResult::message(Message::Navigate(NAV_LINKS[prev].path.to_string()))
        }

        // ─────────────────────────────────────────────────────────
        // Scrolling (the renderer clamps to content height)
        // ─────────────────────────────────────────────────────────
        Message::ScrollUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(1);
            UpdateResult::none()
        }
        Message::ScrollDown => {
            state.scroll_offset = state.scroll_offset.saturating_add(1).min(state.max_scroll);
            UpdateResult::none()
        }
        Message::PageUp => {
            state.scroll_offset = state.scroll_offset.saturating_sub(PAGE_SCROLL);
            UpdateResult::none()
        }
        Message::PageDown => {
            state.scroll_offset = state
                .scroll_offset
                .saturating_add(PAGE_SCROLL)
                .min(state.max_scroll);
            UpdateResult::none()
        }
        Message::ScrollBounds { max } => {
            state.max_scroll = max;
            state.scroll_offset = state.scroll_offset.min(max);
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Chrome
        // ─────────────────────────────────────────────────────────
        Message::ToggleTheme => {
            state.theme.toggle();
            UpdateResult::none()
        }

        Message::ToggleUserMenu => toggle_overlay(state, UiMode::UserMenu),
        Message::ToggleSidebar => toggle_overlay(state, UiMode::Sidebar),

        Message::MenuUp => {
            state.menu_selected = state.menu_selected.saturating_sub(1);
            UpdateResult::none()
        }

        Message::MenuDown => {
            let last = menu_len(state).saturating_sub(1);
            state.menu_selected = (state.menu_selected + 1).min(last);
            UpdateResult::none()
        }

        Message::MenuSelect => handle_menu_select(state),

        Message::CloseOverlay => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::DismissAlert => {
            state.dismiss_alert();
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Upload & analysis
        // ─────────────────────────────────────────────────────────
        Message::OpenPathPrompt => upload::handle_open_path_prompt(state),
        Message::PathInput { text } => {
            state.analysis.path_input = text;
            UpdateResult::none()
        }
        Message::SubmitPath => upload::handle_submit_path(state),
        Message::CancelPathInput => upload::handle_cancel_path_input(state),
        Message::PathDropped(raw) => upload::select_path(state, &raw),
        Message::StartAnalysis => upload::handle_start_analysis(state),
        Message::RemoveFile => upload::handle_remove_file(state),
        Message::ProgressTick { run_id } => upload::handle_progress_tick(state, run_id),

        // ─────────────────────────────────────────────────────────
        // Lists
        // ─────────────────────────────────────────────────────────
        Message::SelectNext => {
            let last = state.selectable_len().saturating_sub(1);
            if let Some(selected) = selection_mut(state) {
                *selected = (*selected + 1).min(last);
            }
            UpdateResult::none()
        }

        Message::SelectPrevious => {
            if let Some(selected) = selection_mut(state) {
                *selected = selected.saturating_sub(1);
            }
            UpdateResult::none()
        }

        Message::OpenSelected => match state.selected_report_path() {
            Some(path) => UpdateResult::message(Message::Navigate(path)),
            None => UpdateResult::none(),
        },

        // ─────────────────────────────────────────────────────────
        // History filters
        // ─────────────────────────────────────────────────────────
        Message::StartSearch => {
            state.ui_mode = UiMode::SearchInput;
            UpdateResult::none()
        }

        Message::SearchInput { text } => {
            state.history.filter.search = text;
            refresh_history(state);
            UpdateResult::none()
        }

        Message::EndSearch => {
            state.ui_mode = UiMode::Normal;
            UpdateResult::none()
        }

        Message::CycleStatusFilter => {
            state.history.filter.status = state.history.filter.status.next();
            refresh_history(state);
            UpdateResult::none()
        }

        Message::CycleDateRange => {
            state.history.filter.range = state.history.filter.range.next();
            refresh_history(state);
            UpdateResult::none()
        }
    }
}

fn handle_paste(state: &mut AppState, text: String) -> UpdateResult {
    let first_line = text.lines().next().unwrap_or_default();
    match state.ui_mode {
        UiMode::PathInput => {
            let mut input = state.analysis.path_input.clone();
            input.push_str(first_line);
            UpdateResult::message(Message::PathInput { text: input })
        }
        UiMode::SearchInput => {
            let mut input = state.history.filter.search.clone();
            input.push_str(first_line);
            UpdateResult::message(Message::SearchInput { text: input })
        }
        UiMode::Normal if *state.route() == Route::Analysis => {
            UpdateResult::message(Message::PathDropped(text))
        }
        _ => {
            trace!("Ignoring paste outside an input");
            UpdateResult::none()
        }
    }
}

fn toggle_overlay(state: &mut AppState, mode: UiMode) -> UpdateResult {
    if state.ui_mode == mode {
        state.ui_mode = UiMode::Normal;
    } else if matches!(
        state.ui_mode,
        UiMode::Normal | UiMode::UserMenu | UiMode::Sidebar
    ) {
        state.ui_mode = mode;
        state.menu_selected = match mode {
            // Start the drawer on the current page's link
            UiMode::Sidebar => state.router.active_nav_index().unwrap_or(0),
            _ => 0,
        };
    }
    UpdateResult::none()
}

fn menu_len(state: &AppState) -> usize {
    match state.ui_mode {
        UiMode::UserMenu => USER_MENU_ITEMS.len(),
        UiMode::Sidebar => NAV_LINKS.len(),
        _ => 0,
    }
}

fn handle_menu_select(state: &mut AppState) -> UpdateResult {
    let target = match state.ui_mode {
        UiMode::UserMenu => USER_MENU_ITEMS
            .get(state.menu_selected)
            .and_then(|item| {
                if item.path.is_none() {
                    debug!("User menu entry '{}' has no destination", item.label);
                }
                item.path
            }),
        UiMode::Sidebar => NAV_LINKS.get(state.menu_selected).map(|link| link.path),
        _ => None,
    };

    state.ui_mode = UiMode::Normal;
    match target {
        Some(path) => UpdateResult::message(Message::Navigate(path.to_string())),
        None => UpdateResult::none(),
    }
}

fn selection_mut(state: &mut AppState) -> Option<&mut usize> {
    match state.router.route() {
        Route::Dashboard => Some(&mut state.dashboard.selected),
        Route::History => Some(&mut state.history.selected),
        _ => None,
    }
}

fn refresh_history(state: &mut AppState) {
    state.refresh_history();
    debug!(
        "History filter {:?} -> {} records",
        state.history.filter,
        state.history.visible.len()
    );
}
