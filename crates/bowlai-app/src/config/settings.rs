//! Settings loader for `<config_dir>/bowlai/config.toml`

use std::path::{Path, PathBuf};

use bowlai_core::prelude::*;

use super::types::Settings;

const CONFIG_FILENAME: &str = "config.toml";
const APP_DIR: &str = "bowlai";

const DEFAULT_CONFIG: &str = r#"# BowlAI Configuration

[ui]
theme = "dark"          # "dark" or "light"
icons = "unicode"       # "unicode" or "nerd_fonts"

[analysis]
# Simulated analysis progress
tick_ms = 300           # Milliseconds between progress updates (min 50)
step = 10               # Percent added per update (1-100)
"#;

/// Default location of the settings file, if the platform has a config dir
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILENAME))
}

/// Load settings from `path`, falling back to defaults when the file is
/// missing or invalid
pub fn load_settings(path: &Path) -> Settings {
    if !path.exists() {
        debug!("No config file at {:?}, using defaults", path);
        return Settings::default();
    }

    match std::fs::read_to_string(path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(settings) => {
                debug!("Loaded settings from {:?}", path);
                settings
            }
            Err(e) => {
                warn!("Failed to parse {:?}: {}", path, e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Failed to read {:?}: {}", path, e);
            Settings::default()
        }
    }
}

/// Write the commented default config to `path` unless a file exists.
/// Returns true when a file was created.
pub fn init_config_file(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config dir {}", parent.display()))?;
    }

    std::fs::write(path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", path.display()))?;
    info!("Created default config at {:?}", path);
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::IconMode;
    use crate::theme::ThemeMode;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let settings = load_settings(&dir.path().join("config.toml"));
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_invalid_toml_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[ui\ntheme = ").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_wrong_value_type_gives_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[analysis]\ntick_ms = \"fast\"\n").unwrap();
        assert_eq!(load_settings(&path), Settings::default());
    }

    #[test]
    fn test_loads_values() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[ui]\ntheme = \"light\"\nicons = \"nerd_fonts\"\n\n[analysis]\ntick_ms = 100\nstep = 25\n",
        )
        .unwrap();

        let settings = load_settings(&path);
        assert_eq!(settings.ui.theme, ThemeMode::Light);
        assert_eq!(settings.ui.icons, IconMode::NerdFonts);
        assert_eq!(settings.analysis.tick_ms, 100);
        assert_eq!(settings.analysis.step, 25);
    }

    #[test]
    fn test_init_config_file_writes_parseable_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bowlai").join("config.toml");

        assert!(init_config_file(&path).unwrap());
        assert!(path.exists());
        assert_eq!(load_settings(&path), Settings::default());

        // Second call leaves the file alone
        std::fs::write(&path, "[ui]\ntheme = \"light\"\n").unwrap();
        assert!(!init_config_file(&path).unwrap());
        assert_eq!(load_settings(&path).ui.theme, ThemeMode::Light);
    }

    #[test]
    fn test_init_config_file_reports_io_failure() {
        let dir = TempDir::new().unwrap();
        let blocker = dir.path().join("bowlai");
        std::fs::write(&blocker, "not a directory").unwrap();

        let err = init_config_file(&blocker.join("config.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
