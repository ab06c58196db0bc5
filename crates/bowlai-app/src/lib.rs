//! bowlai-app - Application state and orchestration for BowlAI
//!
//! This crate implements the TEA (The Elm Architecture) pattern: `AppState`
//! is the model, `handler::update` the update function, and the TUI crate
//! supplies the view. It also owns routing, the theme flag, the simulated
//! progress timer and settings loading.

pub mod config;
pub mod handler;
pub mod input_key;
pub mod message;
pub mod process;
pub mod progress;
pub mod router;
pub mod signals;
pub mod state;
pub mod theme;

// Re-export primary types
pub use handler::{UpdateAction, UpdateResult};
pub use input_key::InputKey;
pub use message::Message;
pub use progress::{ProgressDriver, ProgressPhase, ProgressScheduler, TokioProgressScheduler};
pub use router::{Route, Router, NAV_LINKS};
pub use state::{AppState, UiMode};
pub use theme::{ThemeMode, ThemeState};
