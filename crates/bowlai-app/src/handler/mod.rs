//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for UI modes and pages
//! - `upload`: File selection, validation and the fake analysis run

pub(crate) mod keys;
pub(crate) mod update;
pub(crate) mod upload;


use std::time::Duration;

use crate::message::Message;

pub use keys::handle_key;
pub use update::update;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Begin sending `ProgressTick { run_id }` every `interval`
    StartProgressTimer { run_id: u64, interval: Duration },

    /// Stop the timer of `run_id`
    CancelProgressTimer { run_id: u64 },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }

    /// Cancel the given run's timer, if any
    pub(crate) fn cancel(run_id: Option<u64>) -> Self {
        match run_id {
            Some(run_id) => Self::action(UpdateAction::CancelProgressTimer { run_id }),
            None => Self::none(),
        }
    }
}
