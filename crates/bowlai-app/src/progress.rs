//! Simulated analysis progress
//!
//! [`ProgressDriver`] is the pure state machine kept in `AppState`. The timer
//! that feeds it lives behind [`ProgressScheduler`]: the runner uses
//! [`TokioProgressScheduler`], tests drive ticks by hand.
//!
//! Every run gets a fresh id. A tick carrying any other id is dropped, so a
//! tick already queued when the run was removed cannot move the counter.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, trace};

use crate::message::Message;

/// Percentage added per tick
pub const DEFAULT_STEP: u8 = 10;

/// Time between ticks
pub const DEFAULT_TICK: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProgressPhase {
    #[default]
    Idle,
    Running,
    Complete,
}

/// What a tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Stale run id or not running
    Ignored,
    Advanced(u8),
    /// Counter reached 100; the timer should be cancelled
    Completed,
}

#[derive(Debug, Clone)]
pub struct ProgressDriver {
    value: u8,
    phase: ProgressPhase,
    run_id: u64,
    step: u8,
}

impl Default for ProgressDriver {
    fn default() -> Self {
        Self::new(DEFAULT_STEP)
    }
}

impl ProgressDriver {
    pub fn new(step: u8) -> Self {
        Self {
            value: 0,
            phase: ProgressPhase::Idle,
            run_id: 0,
            step: step.clamp(1, 100),
        }
    }

    pub fn value(&self) -> u8 {
        self.value
    }

    pub fn phase(&self) -> ProgressPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        self.phase == ProgressPhase::Running
    }

    pub fn run_id(&self) -> u64 {
        self.run_id
    }

    /// Begin a run from 0. Returns the run id, or `None` while already running.
    pub fn start(&mut self) -> Option<u64> {
        if self.is_running() {
            return None;
        }
        self.run_id += 1;
        self.value = 0;
        self.phase = ProgressPhase::Running;
        debug!("Progress run {} started", self.run_id);
        Some(self.run_id)
    }

    pub fn tick(&mut self, run_id: u64) -> TickOutcome {
        if !self.is_running() || run_id != self.run_id {
            trace!("Dropping tick for run {} (current {})", run_id, self.run_id);
            return TickOutcome::Ignored;
        }

        self.value = self.value.saturating_add(self.step).min(100);
        if self.value >= 100 {
            self.phase = ProgressPhase::Complete;
            debug!("Progress run {} complete", run_id);
            TickOutcome::Completed
        } else {
            TickOutcome::Advanced(self.value)
        }
    }

    /// Abort any run and return to 0. Returns the id of the run that was
    /// cancelled, if one was in flight.
    pub fn reset(&mut self) -> Option<u64> {
        let cancelled = self.is_running().then_some(self.run_id);
        // Invalidate queued ticks of the old run
        self.run_id += 1;
        self.value = 0;
        self.phase = ProgressPhase::Idle;
        cancelled
    }
}

/// Starts and stops the repeating progress tick
#[cfg_attr(test, mockall::automock)]
pub trait ProgressScheduler {
    /// Start sending `ProgressTick { run_id }` every `interval`
    fn start(&mut self, run_id: u64, interval: Duration);

    /// Stop the timer of `run_id` if it is still running
    fn cancel(&mut self, run_id: u64);
}

/// Interval task on the tokio runtime, one at a time
#[derive(Debug)]
pub struct TokioProgressScheduler {
    msg_tx: mpsc::Sender<Message>,
    task: Option<(u64, JoinHandle<()>)>,
}

impl TokioProgressScheduler {
    pub fn new(msg_tx: mpsc::Sender<Message>) -> Self {
        Self { msg_tx, task: None }
    }

    pub fn is_active(&self) -> bool {
        self.task
            .as_ref()
            .map(|(_, handle)| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl ProgressScheduler for TokioProgressScheduler {
    fn start(&mut self, run_id: u64, interval: Duration) {
        if let Some((old, handle)) = self.task.take() {
            debug!("Replacing progress timer for run {}", old);
            handle.abort();
        }

        let tx = self.msg_tx.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // The first tick completes immediately
            ticker.tick().await;
            loop {
                ticker.tick().await;
                if tx.send(Message::ProgressTick { run_id }).await.is_err() {
                    break;
                }
            }
        });
        self.task = Some((run_id, handle));
    }

    fn cancel(&mut self, run_id: u64) {
        match self.task.take() {
            Some((id, handle)) if id == run_id => {
                debug!("Progress timer for run {} cancelled", run_id);
                handle.abort();
            }
            other => self.task = other,
        }
    }
}

impl Drop for TokioProgressScheduler {
    fn drop(&mut self) {
        if let Some((_, handle)) = self.task.take() {
            handle.abort();
        }
    }
}
