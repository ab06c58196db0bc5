//! bowlai-tui - Terminal UI for BowlAI
//!
//! This crate provides the ratatui-based terminal interface. It owns the
//! terminal, converts crossterm events into `bowlai_app` messages, runs the
//! progress scheduler and renders the active page.

pub mod event;
pub mod layout;
pub mod render;
pub mod runner;
pub mod terminal;
pub mod theme;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export main entry point
pub use runner::run;
