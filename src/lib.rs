//! BowlAI Library
//!
//! Entry points for the `bowlai` binary: the interactive TUI and the
//! headless JSON commands.

pub mod headless;

use std::path::PathBuf;

use bowlai_app::config::{self, Settings};
use bowlai_app::{AppState, ThemeMode};
use bowlai_core::prelude::*;

/// Options for an interactive session
#[derive(Debug, Clone, Default)]
pub struct TuiOptions {
    /// Path to open first
    pub route: Option<String>,
    /// Start in the light theme regardless of the config file
    pub light: bool,
    /// Explicit config file; the platform default otherwise
    pub config: Option<PathBuf>,
}

/// Run the interactive terminal UI
pub async fn run_tui(options: TuiOptions) -> Result<()> {
    // Initialize error handling
    color_eyre::install().map_err(|e| Error::terminal(e.to_string()))?;

    // Initialize logging (to file, since TUI owns stdout)
    bowlai_core::logging::init()?;

    let settings = resolve_settings(&options);
    let mut state = AppState::with_settings(settings);
    if let Some(route) = &options.route {
        state = state.with_initial_path(route);
    }

    bowlai_tui::run(state).await.context("Application error")
}

/// Set up logging for a headless command.
///
/// stdout carries the JSON lines, so logs go to the same file as the TUI's.
pub fn init_headless() -> Result<()> {
    bowlai_core::logging::init()?;
    info!("Running headless command");
    Ok(())
}

/// Load settings and apply command-line overrides
pub fn resolve_settings(options: &TuiOptions) -> Settings {
    let mut settings = match &options.config {
        Some(path) => config::load_settings(path),
        None => match config::default_config_path() {
            Some(path) => {
                if let Err(e) = config::init_config_file(&path) {
                    warn!("Could not write default config: {}", e);
                }
                config::load_settings(&path)
            }
            None => {
                debug!("No config directory on this platform, using defaults");
                Settings::default()
            }
        },
    };

    if options.light {
        settings.ui.theme = ThemeMode::Light;
    }
    info!("Settings: {:?}", settings);
    settings
}
