//! Icon set for the TUI.
//!
//! Provides `IconSet` which resolves icons at runtime based on `IconMode`.
//! - `IconMode::Unicode`: safe characters that work in all terminals
//! - `IconMode::NerdFonts`: rich Nerd Font glyphs (requires Nerd Font installed)

use bowlai_app::config::IconMode;
use bowlai_app::ThemeMode;

/// Runtime icon resolver.
#[derive(Debug, Clone, Copy)]
pub struct IconSet {
    mode: IconMode,
}

impl IconSet {
    pub fn new(mode: IconMode) -> Self {
        Self { mode }
    }

    /// Brand mark next to "BowlAI"
    pub fn brand(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f140}", // nf-fa-bullseye
            IconMode::Unicode => "\u{25ce}",   // ◎
        }
    }

    pub fn sun(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f185}", // nf-fa-sun_o
            IconMode::Unicode => "\u{2600}",   // ☀
        }
    }

    pub fn moon(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f186}", // nf-fa-moon_o
            IconMode::Unicode => "\u{263e}",   // ☾
        }
    }

    /// Theme toggle glyph: sun while dark, moon while light
    pub fn theme_toggle(&self, mode: ThemeMode) -> &'static str {
        if mode.is_dark() {
            self.sun()
        } else {
            self.moon()
        }
    }

    pub fn bell(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0f3}", // nf-fa-bell
            IconMode::Unicode => "\u{266a}",   // ♪
        }
    }

    pub fn user(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f007}", // nf-fa-user
            IconMode::Unicode => "\u{263a}",   // ☺
        }
    }

    pub fn menu(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0c9}", // nf-fa-bars
            IconMode::Unicode => "\u{2630}",   // ☰
        }
    }

    pub fn upload(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f093}", // nf-fa-upload
            IconMode::Unicode => "\u{21e7}",   // ⇧
        }
    }

    pub fn video(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f03d}", // nf-fa-video_camera
            IconMode::Unicode => "\u{25b6}",   // ▶
        }
    }

    pub fn check(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00c}", // nf-fa-check
            IconMode::Unicode => "\u{2713}",   // ✓
        }
    }

    pub fn alert(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f071}", // nf-fa-warning
            IconMode::Unicode => "\u{26a0}",   // ⚠
        }
    }

    pub fn close(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f00d}", // nf-fa-close
            IconMode::Unicode => "\u{2717}",   // ✗
        }
    }

    pub fn trend_up(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f201}", // nf-fa-line_chart
            IconMode::Unicode => "\u{2197}",   // ↗
        }
    }

    pub fn calendar(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f073}", // nf-fa-calendar
            IconMode::Unicode => "\u{25a6}",   // ▦
        }
    }

    pub fn search(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f002}", // nf-fa-search
            IconMode::Unicode => "\u{2315}",   // ⌕
        }
    }

    pub fn filter(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f0b0}", // nf-fa-filter
            IconMode::Unicode => "\u{25bd}",   // ▽
        }
    }

    pub fn chevron_right(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f054}", // nf-fa-chevron_right
            IconMode::Unicode => "\u{203a}",   // ›
        }
    }

    pub fn arrow_left(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f060}", // nf-fa-arrow_left
            IconMode::Unicode => "\u{2190}",   // ←
        }
    }

    pub fn bullet(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{2022}",   // •
        }
    }

    pub fn dot(&self) -> &'static str {
        match self.mode {
            IconMode::NerdFonts => "\u{f444}", // nf-oct-dot_fill
            IconMode::Unicode => "\u{25cf}",   // ●
        }
    }
}
