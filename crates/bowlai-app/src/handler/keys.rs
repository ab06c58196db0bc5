//! Key event handlers for different UI modes

use crate::input_key::InputKey;
use crate::message::Message;
use crate::router::{Route, NAV_LINKS};
use crate::state::{AppState, UiMode};

/// Convert key events to messages based on current UI mode
pub fn handle_key(state: &AppState, key: InputKey) -> Option<Message> {
    match state.ui_mode {
        UiMode::Alert => handle_key_alert(key),
        UiMode::PathInput => handle_key_path_input(state, key),
        UiMode::SearchInput => handle_key_search_input(state, key),
        UiMode::UserMenu | UiMode::Sidebar => handle_key_menu(key),
        UiMode::Normal => handle_key_normal(state, key),
    }
}

fn handle_key_alert(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Enter | InputKey::Esc | InputKey::Char(' ') => Some(Message::DismissAlert),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_path_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::CancelPathInput),
        InputKey::Enter => Some(Message::SubmitPath),
        InputKey::Backspace => {
            let mut text = state.analysis.path_input.clone();
            text.pop();
            Some(Message::PathInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::PathInput {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = state.analysis.path_input.clone();
            text.push(c);
            Some(Message::PathInput { text })
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_search_input(state: &AppState, key: InputKey) -> Option<Message> {
    match key {
        // Keep the query, leave input mode
        InputKey::Esc | InputKey::Enter => Some(Message::EndSearch),
        InputKey::Backspace => {
            let mut text = state.history.filter.search.clone();
            text.pop();
            Some(Message::SearchInput { text })
        }
        InputKey::CharCtrl('u') => Some(Message::SearchInput {
            text: String::new(),
        }),
        InputKey::Char(c) => {
            let mut text = state.history.filter.search.clone();
            text.push(c);
            Some(Message::SearchInput { text })
        }
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

fn handle_key_menu(key: InputKey) -> Option<Message> {
    match key {
        InputKey::Up | InputKey::Char('k') => Some(Message::MenuUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::MenuDown),
        InputKey::Enter => Some(Message::MenuSelect),
        InputKey::Esc | InputKey::Char('u' | 'm') => Some(Message::CloseOverlay),
        InputKey::CharCtrl('c') => Some(Message::Quit),
        _ => None,
    }
}

/// Page keys win over global keys
fn handle_key_normal(state: &AppState, key: InputKey) -> Option<Message> {
    let page = match state.route() {
        Route::Home => handle_key_home(&key),
        Route::Dashboard => handle_key_dashboard(&key),
        Route::Analysis => handle_key_analysis(state, &key),
        Route::History => handle_key_history(&key),
        Route::Report { .. } => handle_key_report(&key),
        Route::NotFound { .. } => handle_key_not_found(&key),
    };

    page.or_else(|| handle_key_global(key))
}

fn handle_key_global(key: InputKey) -> Option<Message> {
    if let Some(index) = key.digit_index() {
        return NAV_LINKS
            .get(index)
            .map(|link| Message::Navigate(link.path.to_string()));
    }

    match key {
        InputKey::Char('q') | InputKey::CharCtrl('c') => Some(Message::Quit),

        // ─────────────────────────────────────────────────────────
        // Navigation
        // ─────────────────────────────────────────────────────────
        InputKey::Tab => Some(Message::NextNavLink),
        InputKey::BackTab => Some(Message::PreviousNavLink),
        InputKey::Backspace | InputKey::Char('b') => Some(Message::Back),
        // "Get Started"
        InputKey::Char('g') => Some(Message::Navigate("/analysis".to_string())),

        // ─────────────────────────────────────────────────────────
        // Chrome
        // ─────────────────────────────────────────────────────────
        InputKey::Char('t') => Some(Message::ToggleTheme),
        InputKey::Char('u') => Some(Message::ToggleUserMenu),
        InputKey::Char('m') => Some(Message::ToggleSidebar),

        // ─────────────────────────────────────────────────────────
        // Scrolling
        // ─────────────────────────────────────────────────────────
        InputKey::Up | InputKey::Char('k') => Some(Message::ScrollUp),
        InputKey::Down | InputKey::Char('j') => Some(Message::ScrollDown),
        InputKey::PageUp => Some(Message::PageUp),
        InputKey::PageDown | InputKey::Char(' ') => Some(Message::PageDown),

        _ => None,
    }
}

fn handle_key_home(key: &InputKey) -> Option<Message> {
    match key {
        // "Start Free Analysis" / "Get Started Free"
        InputKey::Enter | InputKey::Char('s') => Some(Message::Navigate("/analysis".to_string())),
        _ => None,
    }
}

fn handle_key_dashboard(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('n') => Some(Message::Navigate("/analysis".to_string())),
        InputKey::Char('h' | 'v') => Some(Message::Navigate("/history".to_string())),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::OpenSelected),
        _ => None,
    }
}

fn handle_key_analysis(state: &AppState, key: &InputKey) -> Option<Message> {
    let has_file = state.analysis.file.is_some();
    match key {
        InputKey::Char('o') | InputKey::Enter if !has_file => Some(Message::OpenPathPrompt),
        InputKey::Char('s') | InputKey::Enter if has_file => Some(Message::StartAnalysis),
        // Remove / Cancel
        InputKey::Char('x' | 'c') | InputKey::Delete if has_file => Some(Message::RemoveFile),
        _ => None,
    }
}

fn handle_key_history(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Char('/') => Some(Message::StartSearch),
        InputKey::Char('f') => Some(Message::CycleStatusFilter),
        InputKey::Char('d') => Some(Message::CycleDateRange),
        InputKey::Up | InputKey::Char('k') => Some(Message::SelectPrevious),
        InputKey::Down | InputKey::Char('j') => Some(Message::SelectNext),
        InputKey::Enter => Some(Message::OpenSelected),
        _ => None,
    }
}

fn handle_key_report(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Esc => Some(Message::Back),
        // "Analyze Another Video"
        InputKey::Char('a') => Some(Message::Navigate("/analysis".to_string())),
        // "View All Analyses"
        InputKey::Char('h') => Some(Message::Navigate("/history".to_string())),
        _ => None,
    }
}

fn handle_key_not_found(key: &InputKey) -> Option<Message> {
    match key {
        InputKey::Enter => Some(Message::Navigate("/".to_string())),
        _ => None,
    }
}
