//! Configuration file parsing for BowlAI
//!
//! A single optional `config.toml` under the platform config directory.

pub mod settings;
pub mod types;

pub use settings::{default_config_path, init_config_file, load_settings};
pub use types::*;
