//! Color palettes for dark and light mode
//!
//! Both palettes share the emerald accent family. Use `for_mode` to pick
//! the active one.

use bowlai_app::ThemeMode;
use bowlai_core::StatusTone;
use ratatui::style::Color;

/// Named colors of one theme
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    // --- Background layers (darkest to lightest in dark mode) ---
    pub deepest_bg: Color,
    pub card_bg: Color,
    pub popup_bg: Color,
    pub surface: Color,

    // --- Borders ---
    pub border: Color,
    pub border_active: Color,

    // --- Accent ---
    pub accent: Color,
    pub accent_dim: Color,
    pub on_accent: Color,

    // --- Text ---
    pub text_primary: Color,
    pub text_secondary: Color,
    pub text_muted: Color,

    // --- Status ---
    pub positive: Color,
    pub caution: Color,
    pub warning: Color,
    pub danger: Color,

    // --- Effects ---
    pub shadow: Color,
}

pub const DARK: Palette = Palette {
    deepest_bg: Color::Rgb(2, 6, 23),
    card_bg: Color::Rgb(15, 23, 42),
    popup_bg: Color::Rgb(30, 41, 59),
    surface: Color::Rgb(30, 41, 59),

    border: Color::Rgb(51, 65, 85),
    border_active: Color::Rgb(16, 185, 129),

    accent: Color::Rgb(16, 185, 129),
    accent_dim: Color::Rgb(6, 95, 70),
    on_accent: Color::Rgb(255, 255, 255),

    text_primary: Color::Rgb(241, 245, 249),
    text_secondary: Color::Rgb(148, 163, 184),
    text_muted: Color::Rgb(100, 116, 139),

    positive: Color::Rgb(52, 211, 153),
    caution: Color::Rgb(250, 204, 21),
    warning: Color::Rgb(251, 146, 60),
    danger: Color::Rgb(248, 113, 113),

    shadow: Color::Rgb(0, 0, 0),
};

pub const LIGHT: Palette = Palette {
    deepest_bg: Color::Rgb(248, 250, 252),
    card_bg: Color::Rgb(255, 255, 255),
    popup_bg: Color::Rgb(255, 255, 255),
    surface: Color::Rgb(241, 245, 249),

    border: Color::Rgb(203, 213, 225),
    border_active: Color::Rgb(5, 150, 105),

    accent: Color::Rgb(5, 150, 105),
    accent_dim: Color::Rgb(209, 250, 229),
    on_accent: Color::Rgb(255, 255, 255),

    text_primary: Color::Rgb(15, 23, 42),
    text_secondary: Color::Rgb(71, 85, 105),
    text_muted: Color::Rgb(148, 163, 184),

    positive: Color::Rgb(5, 150, 105),
    caution: Color::Rgb(202, 138, 4),
    warning: Color::Rgb(234, 88, 12),
    danger: Color::Rgb(220, 38, 38),

    shadow: Color::Rgb(148, 163, 184),
};

pub fn for_mode(mode: ThemeMode) -> &'static Palette {
    match mode {
        ThemeMode::Dark => &DARK,
        ThemeMode::Light => &LIGHT,
    }
}

impl Palette {
    /// Badge color for a status tone
    pub fn tone(&self, tone: StatusTone) -> Color {
        match tone {
            StatusTone::Positive => self.positive,
            StatusTone::Caution => self.caution,
            StatusTone::Warning => self.warning,
        }
    }
}
