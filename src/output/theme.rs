//! Colour palettes for terminal output

use owo_colors::{AnsiColors, OwoColorize};

use crate::config::ThemeChoice;

/// Resolved theme after `auto` has been settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

/// Background luma above which a terminal counts as light.
const LIGHT_LUMA_THRESHOLD: f32 = 0.6;

/// Settle a configured theme. `auto` asks the terminal for its background
/// colour and falls back to dark if the terminal doesn't answer.
pub fn resolve_theme(choice: ThemeChoice) -> Theme {
    match choice {
        ThemeChoice::Dark => Theme::Dark,
        ThemeChoice::Light => Theme::Light,
        ThemeChoice::Auto => match terminal_light::luma() {
            Ok(luma) if luma > LIGHT_LUMA_THRESHOLD => Theme::Light,
            Ok(_) => Theme::Dark,
            Err(e) => {
                crate::verbose_eprintln!("Could not detect terminal background ({}), using dark", e);
                Theme::Dark
            }
        },
    }
}

/// The other theme, for `theme toggle`.
pub fn toggled(current: Theme) -> ThemeChoice {
    match current {
        Theme::Dark => ThemeChoice::Light,
        Theme::Light => ThemeChoice::Dark,
    }
}

/// Complete colour palette for the scoreboard
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    /// Leader and decided status
    pub good: AnsiColors,
    /// Ties and pending status
    pub warn: AnsiColors,
    pub heading: AnsiColors,
    pub muted: AnsiColors,
    pub home: AnsiColors,
    pub visitor: AnsiColors,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            good: AnsiColors::BrightGreen,
            warn: AnsiColors::BrightYellow,
            heading: AnsiColors::BrightCyan,
            muted: AnsiColors::BrightBlack,
            home: AnsiColors::BrightBlue,
            visitor: AnsiColors::BrightMagenta,
        }
    }

    /// Darker shades that stay readable on a white background
    pub fn light() -> Self {
        Self {
            good: AnsiColors::Green,
            warn: AnsiColors::Red,
            heading: AnsiColors::Blue,
            muted: AnsiColors::BrightBlack,
            home: AnsiColors::Blue,
            visitor: AnsiColors::Magenta,
        }
    }

    pub fn for_theme(theme: Theme) -> Self {
        match theme {
            Theme::Dark => Self::dark(),
            Theme::Light => Self::light(),
        }
    }
}

/// Applies a palette, or nothing at all when colour is off.
#[derive(Debug, Clone, Copy)]
pub struct Painter {
    pub palette: Palette,
    pub enabled: bool,
}

impl Painter {
    pub fn new(theme: Theme, enabled: bool) -> Self {
        Self {
            palette: Palette::for_theme(theme),
            enabled,
        }
    }

    /// A painter that never emits escape codes.
    pub fn plain() -> Self {
        Self::new(Theme::Dark, false)
    }

    pub fn paint(&self, text: &str, color: AnsiColors) -> String {
        if self.enabled {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    pub fn bold(&self, text: &str) -> String {
        if self.enabled {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn good(&self, text: &str) -> String {
        self.paint(text, self.palette.good)
    }

    pub fn warn(&self, text: &str) -> String {
        self.paint(text, self.palette.warn)
    }

    pub fn heading(&self, text: &str) -> String {
        if self.enabled {
            text.color(self.palette.heading).bold().to_string()
        } else {
            text.to_string()
        }
    }

    pub fn muted(&self, text: &str) -> String {
        self.paint(text, self.palette.muted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_choices_resolve_directly() {
        assert_eq!(resolve_theme(ThemeChoice::Dark), Theme::Dark);
        assert_eq!(resolve_theme(ThemeChoice::Light), Theme::Light);
    }

    #[test]
    fn test_toggle_flips() {
        assert_eq!(toggled(Theme::Dark), ThemeChoice::Light);
        assert_eq!(toggled(Theme::Light), ThemeChoice::Dark);
    }

    #[test]
    fn test_plain_painter_emits_no_escapes() {
        let painter = Painter::plain();
        assert_eq!(painter.good("Points"), "Points");
        assert_eq!(painter.heading("TOTAL"), "TOTAL");
        assert_eq!(painter.bold("8.0"), "8.0");
    }

    #[test]
    fn test_enabled_painter_wraps_text() {
        let painter = Painter::new(Theme::Light, true);
        let painted = painter.warn("Still tied");
        assert!(painted.contains("Still tied"));
        assert!(painted.contains('\u{1b}'));
    }
}
