//! Main TUI runner - entry point and event loop
//!
//! Owns the terminal for the lifetime of the app: sets it up, feeds terminal
//! events and timer ticks through `process_message`, redraws, and restores
//! the terminal on the way out.

use bowlai_app::process::process_message;
use bowlai_app::{signals, AppState, Message, ThemeMode, TokioProgressScheduler};
use bowlai_core::prelude::*;
use tokio::sync::{mpsc, watch};

use crate::{event, layout, render, terminal};

/// Run the TUI with an already configured state
pub async fn run(mut state: AppState) -> Result<()> {
    terminal::install_panic_hook();

    let mut term = ratatui::init();
    if let Err(e) = terminal::enable_paste() {
        // Drops still work as typed paths in the prompt
        warn!("Bracketed paste unavailable: {}", e);
    }

    // Unified channel for signal handler and progress timer
    let (msg_tx, msg_rx) = mpsc::channel::<Message>(256);
    signals::spawn_signal_handler(msg_tx.clone());
    let mut scheduler = TokioProgressScheduler::new(msg_tx);

    let theme_rx = state.theme.subscribe();

    info!(
        "BowlAI starting on {} ({:?} theme)",
        state.router.path(),
        state.theme.mode()
    );

    let result = run_loop(&mut term, &mut state, msg_rx, theme_rx, &mut scheduler);

    // Stops a run still in flight
    drop(scheduler);

    terminal::disable_paste();
    ratatui::restore();

    match &result {
        Ok(()) => info!("BowlAI exited"),
        Err(e) => error!("BowlAI exited with error: {}", e),
    }
    result
}

/// Main event loop
fn run_loop(
    term: &mut ratatui::DefaultTerminal,
    state: &mut AppState,
    mut msg_rx: mpsc::Receiver<Message>,
    mut theme_rx: watch::Receiver<ThemeMode>,
    scheduler: &mut TokioProgressScheduler,
) -> Result<()> {
    // Resize events only arrive on change, so seed the layout mode
    let size = term.size()?;
    process_message(
        state,
        Message::Resized {
            compact: layout::is_compact(size.width),
        },
        scheduler,
    );

    while !state.should_quit() {
        // Process external messages (signal handler, progress ticks)
        while let Ok(msg) = msg_rx.try_recv() {
            process_message(state, msg, scheduler);
        }

        // Every cell changes colour on a theme switch
        if theme_rx.has_changed().unwrap_or(false) {
            let mode = *theme_rx.borrow_and_update();
            debug!("Theme switched to {:?}, repainting", mode);
            term.clear()?;
        }

        let mut max_scroll = state.max_scroll;
        term.draw(|frame| max_scroll = render::view(frame, state))?;
        if max_scroll != state.max_scroll {
            process_message(state, Message::ScrollBounds { max: max_scroll }, scheduler);
        }

        if let Some(message) = event::poll()? {
            process_message(state, message, scheduler);
        }
    }

    Ok(())
}
