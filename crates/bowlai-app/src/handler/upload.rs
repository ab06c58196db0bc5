//! File selection and the simulated analysis run

use bowlai_core::prelude::*;
use bowlai_core::{normalize_dropped_path, validate, FileCandidate};

use crate::progress::TickOutcome;
use crate::state::{AppState, UiMode};

use super::{UpdateAction, UpdateResult};

pub fn handle_open_path_prompt(state: &mut AppState) -> UpdateResult {
    if state.analysis.file.is_none() {
        state.analysis.path_input.clear();
        state.ui_mode = UiMode::PathInput;
    }
    UpdateResult::none()
}

pub fn handle_submit_path(state: &mut AppState) -> UpdateResult {
    state.ui_mode = UiMode::Normal;
    let raw = std::mem::take(&mut state.analysis.path_input);
    select_path(state, &raw)
}

pub fn handle_cancel_path_input(state: &mut AppState) -> UpdateResult {
    state.analysis.path_input.clear();
    state.ui_mode = UiMode::Normal;
    UpdateResult::none()
}

/// Validate `raw` as a video path and store it on success.
///
/// Rejections open an alert and leave the page as it was.
pub fn select_path(state: &mut AppState, raw: &str) -> UpdateResult {
    if state.analysis.file.is_some() {
        debug!("Ignoring file selection while a file is loaded");
        return UpdateResult::none();
    }

    let Some(path) = normalize_dropped_path(raw) else {
        return UpdateResult::none();
    };

    let accepted = FileCandidate::from_path(&path)
        .and_then(|candidate| validate(candidate).map_err(Error::from));

    match accepted {
        Ok(file) => {
            info!(
                "Accepted upload {} ({}, {})",
                file.name(),
                file.mime_type(),
                file.display_size()
            );
            state.analysis.file = Some(file);
        }
        Err(e) if e.is_recoverable() => {
            warn!("Rejected upload {}: {}", path.display(), e);
            state.show_alert(e.to_string());
        }
        Err(e) => error!("Could not load {}: {:?}", path.display(), e),
    }

    UpdateResult::none()
}

pub fn handle_start_analysis(state: &mut AppState) -> UpdateResult {
    if state.analysis.file.is_none() {
        return UpdateResult::none();
    }

    match state.analysis.progress.start() {
        Some(run_id) => UpdateResult::action(UpdateAction::StartProgressTimer {
            run_id,
            interval: state.settings.analysis.tick_interval(),
        }),
        None => UpdateResult::none(),
    }
}

pub fn handle_remove_file(state: &mut AppState) -> UpdateResult {
    state.analysis.file = None;
    UpdateResult::cancel(state.analysis.progress.reset())
}

pub fn handle_progress_tick(state: &mut AppState, run_id: u64) -> UpdateResult {
    match state.analysis.progress.tick(run_id) {
        TickOutcome::Completed => {
            UpdateResult::action(UpdateAction::CancelProgressTimer { run_id })
        }
        TickOutcome::Advanced(_) | TickOutcome::Ignored => UpdateResult::none(),
    }
}
