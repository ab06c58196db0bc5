//! Settings types deserialized from `config.toml`

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::progress::{DEFAULT_STEP, DEFAULT_TICK};
use crate::theme::ThemeMode;

/// Shortest accepted progress tick interval
pub const MIN_TICK_MS: u64 = 50;

/// Top-level settings
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Settings {
    #[serde(default)]
    pub ui: UiSettings,

    #[serde(default)]
    pub analysis: AnalysisSettings,
}

/// Icon glyph set
///
/// Nerd Font glyphs need a patched font; Unicode works everywhere.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum IconMode {
    #[default]
    Unicode,
    NerdFonts,
}

impl std::fmt::Display for IconMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IconMode::Unicode => write!(f, "unicode"),
            IconMode::NerdFonts => write!(f, "nerd_fonts"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    /// Initial theme: "dark" (default) or "light"
    #[serde(default)]
    pub theme: ThemeMode,

    /// Icon mode: "unicode" (default) or "nerd_fonts"
    #[serde(default)]
    pub icons: IconMode,
}

/// Fake-progress timing
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AnalysisSettings {
    /// Milliseconds between progress ticks (min 50)
    #[serde(default = "default_tick_ms")]
    pub tick_ms: u64,

    /// Percent added per tick (1-100)
    #[serde(default = "default_step")]
    pub step: u8,
}

impl Default for AnalysisSettings {
    fn default() -> Self {
        Self {
            tick_ms: default_tick_ms(),
            step: default_step(),
        }
    }
}

impl AnalysisSettings {
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_ms.max(MIN_TICK_MS))
    }

    pub fn clamped_step(&self) -> u8 {
        self.step.clamp(1, 100)
    }
}

fn default_tick_ms() -> u64 {
    DEFAULT_TICK.as_millis() as u64
}

fn default_step() -> u8 {
    DEFAULT_STEP
}
