//! Application-wide light/dark theme flag
//!
//! [`ThemeState`] owns a `watch` channel. The state handler flips it with
//! [`ThemeState::toggle`]; anything that needs to react to a change (the
//! runner forces a full repaint) holds a receiver from
//! [`ThemeState::subscribe`].

use serde::{Deserialize, Serialize};
use tokio::sync::watch;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> Self {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }

    pub fn is_dark(self) -> bool {
        self == ThemeMode::Dark
    }
}

impl std::fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ThemeMode::Dark => write!(f, "dark"),
            ThemeMode::Light => write!(f, "light"),
        }
    }
}

#[derive(Debug)]
pub struct ThemeState {
    tx: watch::Sender<ThemeMode>,
}

impl Default for ThemeState {
    fn default() -> Self {
        Self::new(ThemeMode::default())
    }
}

impl ThemeState {
    pub fn new(mode: ThemeMode) -> Self {
        let (tx, _rx) = watch::channel(mode);
        Self { tx }
    }

    pub fn mode(&self) -> ThemeMode {
        *self.tx.borrow()
    }

    pub fn is_dark(&self) -> bool {
        self.mode().is_dark()
    }

    /// Flip dark/light and notify subscribers. Returns the new mode.
    pub fn toggle(&self) -> ThemeMode {
        let next = self.mode().toggled();
        // send_replace stores the value even with no receivers alive
        self.tx.send_replace(next);
        tracing::debug!("Theme toggled to {}", next);
        next
    }

    /// Receiver that observes every toggle
    pub fn subscribe(&self) -> watch::Receiver<ThemeMode> {
        self.tx.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dark() {
        let theme = ThemeState::default();
        assert!(theme.is_dark());
    }

    #[test]
    fn test_toggle_flips_both_ways() {
        let theme = ThemeState::new(ThemeMode::Dark);
        assert_eq!(theme.toggle(), ThemeMode::Light);
        assert_eq!(theme.mode(), ThemeMode::Light);
        assert_eq!(theme.toggle(), ThemeMode::Dark);
    }

    #[test]
    fn test_subscriber_sees_toggle() {
        let theme = ThemeState::default();
        let mut rx = theme.subscribe();
        assert!(!rx.has_changed().unwrap());

        theme.toggle();

        assert!(rx.has_changed().unwrap());
        assert_eq!(*rx.borrow_and_update(), ThemeMode::Light);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_theme_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct W {
            theme: ThemeMode,
        }
        let w: W = toml::from_str(r#"theme = "light""#).unwrap();
        assert_eq!(w.theme, ThemeMode::Light);
    }
}
