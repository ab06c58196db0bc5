//! Message processing loop shared by the runner and tests

use tracing::trace;

use crate::handler::{self, UpdateAction};
use crate::message::Message;
use crate::progress::ProgressScheduler;
use crate::state::AppState;

/// Run `message` through `update`, following up chained messages and
/// handing timer actions to `scheduler`
pub fn process_message(
    state: &mut AppState,
    message: Message,
    scheduler: &mut dyn ProgressScheduler,
) {
    let mut next = Some(message);
    while let Some(msg) = next.take() {
        trace!("Processing {:?}", msg);
        let result = handler::update(state, msg);
        if let Some(action) = result.action {
            handle_action(action, scheduler);
        }
        next = result.message;
    }
}

fn handle_action(action: UpdateAction, scheduler: &mut dyn ProgressScheduler) {
    match action {
        UpdateAction::StartProgressTimer { run_id, interval } => scheduler.start(run_id, interval),
        UpdateAction::CancelProgressTimer { run_id } => scheduler.cancel(run_id),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input_key::InputKey;
    use crate::progress::MockProgressScheduler;
    use crate::router::Route;
    use mockall::predicate::eq;
    use std::io::Write;
    use std::time::Duration;
    use tempfile::TempDir;

    fn video(dir: &TempDir) -> String {
        let path = dir.path().join("clip.mp4");
        let mut f = std::fs::File::create(&path).unwrap();
        f.write_all(&[0u8; 64]).unwrap();
        path.display().to_string()
    }

    #[test]
    fn test_key_chain_navigates() {
        let mut state = AppState::new();
        let mut scheduler = MockProgressScheduler::new();
        scheduler.expect_start().never();

        process_message(&mut state, Message::Key(InputKey::Char('2')), &mut scheduler);

        assert_eq!(state.route(), &Route::Dashboard);
    }

    #[test]
    fn test_start_and_remove_drive_scheduler() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new().with_initial_path("/analysis");
        let mut scheduler = MockProgressScheduler::new();
        scheduler
            .expect_start()
            .with(eq(1), eq(Duration::from_millis(300)))
            .times(1)
            .return_const(());
        scheduler.expect_cancel().with(eq(1)).times(1).return_const(());

        process_message(&mut state, Message::PathDropped(video(&dir)), &mut scheduler);
        process_message(&mut state, Message::Key(InputKey::Char('s')), &mut scheduler);
        process_message(&mut state, Message::ProgressTick { run_id: 1 }, &mut scheduler);
        assert_eq!(state.analysis.progress.value(), 10);

        process_message(&mut state, Message::Key(InputKey::Char('x')), &mut scheduler);
        assert_eq!(state.analysis.progress.value(), 0);
        assert!(state.analysis.file.is_none());
    }

    #[test]
    fn test_completion_cancels_timer() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new().with_initial_path("/analysis");
        let mut scheduler = MockProgressScheduler::new();
        scheduler.expect_start().times(1).return_const(());
        scheduler.expect_cancel().with(eq(1)).times(1).return_const(());

        process_message(&mut state, Message::PathDropped(video(&dir)), &mut scheduler);
        process_message(&mut state, Message::StartAnalysis, &mut scheduler);
        for _ in 0..10 {
            process_message(&mut state, Message::ProgressTick { run_id: 1 }, &mut scheduler);
        }

        assert_eq!(state.analysis.progress.value(), 100);
        assert!(!state.analysis.progress.is_running());
    }

    #[test]
    fn test_leaving_page_mid_run_cancels_timer() {
        let dir = TempDir::new().unwrap();
        let mut state = AppState::new().with_initial_path("/analysis");
        let mut scheduler = MockProgressScheduler::new();
        scheduler.expect_start().times(1).return_const(());
        scheduler.expect_cancel().with(eq(1)).times(1).return_const(());

        process_message(&mut state, Message::PathDropped(video(&dir)), &mut scheduler);
        process_message(&mut state, Message::StartAnalysis, &mut scheduler);
        process_message(&mut state, Message::Navigate("/".to_string()), &mut scheduler);

        assert_eq!(state.route(), &Route::Home);
    }
}
