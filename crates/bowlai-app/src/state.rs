//! Application state (Model in TEA pattern)

use std::sync::Arc;

use bowlai_core::{
    history_records, recent_analyses, report_for, AnalysisRecord, AnalysisReport, Clock,
    HistoryFilter, SystemClock, UploadedFile,
};

use crate::config::Settings;
use crate::progress::ProgressDriver;
use crate::router::{Route, Router};
use crate::theme::ThemeState;

/// Lifecycle of the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPhase {
    #[default]
    Running,
    Quitting,
}

/// Current UI mode (which overlay or input owns the keyboard)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UiMode {
    /// Page keys are active
    #[default]
    Normal,

    /// Blocking alert; only dismissal keys work
    Alert,

    /// Typing a file path into the "Choose Video File" prompt
    PathInput,

    /// Typing into the history search box
    SearchInput,

    /// User dropdown open
    UserMenu,

    /// Navigation drawer open
    Sidebar,
}

// ─────────────────────────────────────────────────────────────────────────────
// User menu
// ─────────────────────────────────────────────────────────────────────────────

pub const USER_NAME: &str = "John Bowler";
pub const USER_EMAIL: &str = "john@bowlai.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserMenuItem {
    pub label: &'static str,
    /// Where the entry navigates, `None` for entries with no destination
    pub path: Option<&'static str>,
}

pub const USER_MENU_ITEMS: [UserMenuItem; 4] = [
    UserMenuItem {
        label: "Profile Settings",
        path: None,
    },
    UserMenuItem {
        label: "My Analyses",
        path: Some("/history"),
    },
    UserMenuItem {
        label: "Billing",
        path: None,
    },
    UserMenuItem {
        label: "Sign Out",
        path: None,
    },
];

// ─────────────────────────────────────────────────────────────────────────────
// Per-page state
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default)]
pub struct DashboardState {
    /// Highlighted row of "Recent Analyses"
    pub selected: usize,
}

#[derive(Debug, Clone, Default)]
pub struct AnalysisState {
    pub file: Option<UploadedFile>,
    pub progress: ProgressDriver,
    /// Text of the path prompt
    pub path_input: String,
}

impl AnalysisState {
    fn with_step(step: u8) -> Self {
        Self {
            progress: ProgressDriver::new(step),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryState {
    pub filter: HistoryFilter,
    /// Records passing the filter, in catalogue order
    pub visible: Vec<AnalysisRecord>,
    pub selected: usize,
}

impl HistoryState {
    /// Recompute the visible list from the catalogue
    pub fn refresh(&mut self, clock: &dyn Clock) {
        self.visible = self.filter.apply(&history_records(), clock);
        if self.selected >= self.visible.len() {
            self.selected = self.visible.len().saturating_sub(1);
        }
    }

    pub fn selected_record(&self) -> Option<&AnalysisRecord> {
        self.visible.get(self.selected)
    }
}

/// Complete application state
pub struct AppState {
    pub phase: AppPhase,
    pub ui_mode: UiMode,
    pub router: Router,
    pub theme: ThemeState,
    pub settings: Settings,

    /// Vertical scroll of the page body
    pub scroll_offset: u16,

    /// Largest offset the last drawn page can use; `u16::MAX` until measured
    pub max_scroll: u16,

    /// Terminal is too narrow for inline nav links
    pub compact: bool,

    /// Message of the blocking alert
    pub alert: Option<String>,

    /// Highlighted entry of the open menu (user menu or sidebar)
    pub menu_selected: usize,

    pub dashboard: DashboardState,
    pub analysis: AnalysisState,
    pub history: HistoryState,

    /// Payload of the open report page
    pub report: Option<AnalysisReport>,

    clock: Arc<dyn Clock>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(Settings::default())
    }

    pub fn with_settings(settings: Settings) -> Self {
        let mut state = Self {
            phase: AppPhase::Running,
            ui_mode: UiMode::Normal,
            router: Router::default(),
            theme: ThemeState::new(settings.ui.theme),
            analysis: AnalysisState::with_step(settings.analysis.clamped_step()),
            settings,
            scroll_offset: 0,
            max_scroll: u16::MAX,
            compact: false,
            alert: None,
            menu_selected: 0,
            dashboard: DashboardState::default(),
            history: HistoryState::default(),
            report: None,
            clock: Arc::new(SystemClock),
        };
        state.enter_page();
        state
    }

    /// Replace the clock used for relative-date filtering
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self.history.refresh(&*self.clock);
        self
    }

    /// Start on `path` instead of `/`
    pub fn with_initial_path(mut self, path: &str) -> Self {
        self.router = Router::new(path);
        self.enter_page();
        self
    }

    pub fn clock(&self) -> &dyn Clock {
        &*self.clock
    }

    /// Re-run the history filter after a filter change
    pub fn refresh_history(&mut self) {
        self.history.refresh(&*self.clock);
    }

    pub fn route(&self) -> &Route {
        self.router.route()
    }

    pub fn should_quit(&self) -> bool {
        self.phase == AppPhase::Quitting
    }

    pub fn show_alert(&mut self, message: impl Into<String>) {
        self.alert = Some(message.into());
        self.ui_mode = UiMode::Alert;
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Go to `path` and scroll to top.
    ///
    /// Pages own their state, so leaving a page discards it. Returns the id
    /// of a progress run that was cancelled by leaving the analysis page.
    pub fn navigate(&mut self, path: &str) -> Option<u64> {
        self.scroll_offset = 0;
        if Route::parse(path) == *self.router.route() {
            return None;
        }
        let cancelled = self.leave_page();
        self.router.navigate(path);
        self.enter_page();
        cancelled
    }

    /// Return to the previous path, same contract as [`AppState::navigate`]
    pub fn go_back(&mut self) -> Option<u64> {
        if !self.router.can_go_back() {
            return None;
        }
        let cancelled = self.leave_page();
        self.router.back();
        self.scroll_offset = 0;
        self.enter_page();
        cancelled
    }

    fn leave_page(&mut self) -> Option<u64> {
        match self.router.route() {
            Route::Analysis => {
                let cancelled = self.analysis.progress.reset();
                self.analysis.file = None;
                self.analysis.path_input.clear();
                cancelled
            }
            Route::History => {
                self.history.filter = HistoryFilter::default();
                self.history.selected = 0;
                None
            }
            Route::Dashboard => {
                self.dashboard.selected = 0;
                None
            }
            Route::Report { .. } => {
                self.report = None;
                None
            }
            Route::Home | Route::NotFound { .. } => None,
        }
    }

    fn enter_page(&mut self) {
        match self.router.route().clone() {
            Route::History => self.history.refresh(&*self.clock),
            Route::Report { id } => self.report = Some(report_for(&id)),
            _ => {}
        }
    }

    /// Number of rows the selection can move over on the current page
    pub fn selectable_len(&self) -> usize {
        match self.router.route() {
            Route::Dashboard => recent_analyses().len(),
            Route::History => self.history.visible.len(),
            _ => 0,
        }
    }

    /// Report path of the highlighted row on the current page
    pub fn selected_report_path(&self) -> Option<String> {
        match self.router.route() {
            Route::Dashboard => recent_analyses()
                .get(self.dashboard.selected)
                .map(AnalysisRecord::report_path),
            Route::History => self.history.selected_record().map(AnalysisRecord::report_path),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::ThemeMode;
    use bowlai_core::{FileCandidate, FixedClock};
    use chrono::NaiveDate;

    fn clock() -> Arc<dyn Clock> {
        Arc::new(FixedClock(
            NaiveDate::from_ymd_opt(2025, 11, 21)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
        ))
    }

    #[test]
    fn test_new_state_starts_home_dark() {
        let state = AppState::new();
        assert_eq!(state.route(), &Route::Home);
        assert_eq!(state.theme.mode(), ThemeMode::Dark);
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(!state.should_quit());
    }

    #[test]
    fn test_settings_theme_is_initial_mode() {
        let mut settings = Settings::default();
        settings.ui.theme = ThemeMode::Light;
        let state = AppState::with_settings(settings);
        assert_eq!(state.theme.mode(), ThemeMode::Light);
    }

    #[test]
    fn test_navigate_resets_scroll() {
        let mut state = AppState::new();
        state.scroll_offset = 12;
        state.navigate("/dashboard");
        assert_eq!(state.scroll_offset, 0);

        // Same path still scrolls to top
        state.scroll_offset = 5;
        state.navigate("/dashboard");
        assert_eq!(state.scroll_offset, 0);
        assert_eq!(state.router.path(), "/dashboard");
    }

    #[test]
    fn test_entering_report_builds_payload() {
        let state = AppState::new().with_initial_path("/analysis/7");
        let report = state.report.as_ref().unwrap();
        assert_eq!(report.id, "7");
        assert_eq!(report.name, "Fast Bowling #12");
    }

    #[test]
    fn test_entering_history_lists_all_records() {
        let mut state = AppState::new().with_clock(clock());
        state.navigate("/history");
        assert_eq!(state.history.visible.len(), 6);
        assert_eq!(state.selectable_len(), 6);
    }

    #[test]
    fn test_leaving_analysis_cancels_run_and_clears_file() {
        let mut state = AppState::new().with_initial_path("/analysis");
        state.analysis.file =
            bowlai_core::validate(FileCandidate::new("a.mp4", 10, "video/mp4")).ok();
        let run = state.analysis.progress.start().unwrap();

        assert_eq!(state.navigate("/history"), Some(run));
        assert!(state.analysis.file.is_none());
        assert_eq!(state.analysis.progress.value(), 0);
    }

    #[test]
    fn test_leaving_history_resets_filter() {
        let mut state = AppState::new().with_clock(clock()).with_initial_path("/history");
        state.history.filter.search = "fast".to_string();
        state.history.refresh(state.clock.as_ref());
        assert_eq!(state.history.visible.len(), 1);

        state.navigate("/");
        state.navigate("/history");
        assert!(state.history.filter.search.is_empty());
        assert_eq!(state.history.visible.len(), 6);
    }

    #[test]
    fn test_go_back_without_history_is_noop() {
        let mut state = AppState::new();
        assert_eq!(state.go_back(), None);
        assert_eq!(state.route(), &Route::Home);
    }

    #[test]
    fn test_selected_report_path() {
        let mut state = AppState::new().with_initial_path("/dashboard");
        state.dashboard.selected = 2;
        assert_eq!(state.selected_report_path().as_deref(), Some("/analysis/3"));
    }

    #[test]
    fn test_alert_roundtrip() {
        let mut state = AppState::new();
        state.show_alert("File size must be less than 100MB");
        assert_eq!(state.ui_mode, UiMode::Alert);
        state.dismiss_alert();
        assert_eq!(state.ui_mode, UiMode::Normal);
        assert!(state.alert.is_none());
    }
}
