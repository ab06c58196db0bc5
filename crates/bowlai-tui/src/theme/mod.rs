//! Theme module - palettes, styles and icons
//!
//! [`Theme`] bundles the palette for the current [`ThemeMode`] with the icon
//! set from settings. Views build one per frame from `AppState`.

pub mod icons;
pub mod palette;
pub mod styles;

use bowlai_app::config::IconMode;
use bowlai_app::ThemeMode;

use self::icons::IconSet;
use self::palette::Palette;

/// Everything a view needs to pick colors and glyphs
#[derive(Debug, Clone, Copy)]
pub struct Theme {
    pub mode: ThemeMode,
    pub palette: &'static Palette,
    pub icons: IconSet,
}

impl Theme {
    pub fn new(mode: ThemeMode, icons: IconMode) -> Self {
        Self {
            mode,
            palette: palette::for_mode(mode),
            icons: IconSet::new(icons),
        }
    }
}
