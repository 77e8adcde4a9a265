//! Terminal color theme system
//!
//! Provides adaptive color palettes for dark and light terminal backgrounds.
//! Auto-detects via COLORFGBG env var, or manual override with --light flag,
//! the `light` option, or GM_LIGHT_BG=1 environment variable.

use ratatui::style::Color;

use crate::feedback::Tone;

/// Color theme for terminal UI.
/// All UI code should use theme colors instead of hardcoded Color:: values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // General UI text
    /// Primary foreground text
    pub text: Color,
    /// Secondary/hint text (footers, instructions)
    pub text_dim: Color,
    /// Title banner
    pub title: Color,

    // Borders
    /// Default border color
    pub border: Color,
    /// Informational border (help)
    pub border_accent: Color,
    /// Action border (guess input, exit confirmation)
    pub border_action: Color,
    /// Round-over border
    pub border_danger: Color,

    // Interactive elements
    /// Selected/cursor item foreground
    pub cursor_fg: Color,
    /// Selected/cursor item background
    pub cursor_bg: Color,


    // Feedback line
    pub neutral: Color,
    pub too_high: Color,
    pub too_low: Color,
    pub correct: Color,
    pub game_over: Color,
    pub warning: Color,

    /// Closeness gauge fill
    pub gauge: Color,
}

impl Theme {
    /// Dark terminal background theme (default)
    pub fn dark() -> Self {
        Self {
            text: Color::White,
            text_dim: Color::DarkGray,
            title: Color::LightBlue,
            border: Color::White,
            border_accent: Color::Cyan,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            neutral: Color::Gray,
            too_high: Color::LightRed,
            too_low: Color::LightBlue,
            correct: Color::LightGreen,
            game_over: Color::Gray,
            warning: Color::Yellow,
            gauge: Color::Cyan,
        }
    }

    /// Light terminal background theme
    pub fn light() -> Self {
        Self {
            text: Color::Black,
            text_dim: Color::DarkGray,
            title: Color::Blue,
            border: Color::DarkGray,
            border_accent: Color::Blue,
            border_action: Color::Yellow,
            border_danger: Color::Red,
            cursor_fg: Color::Yellow,
            cursor_bg: Color::DarkGray,
            neutral: Color::DarkGray,
            too_high: Color::Red,
            too_low: Color::Blue,
            correct: Color::Green,
            game_over: Color::Black,
            warning: Color::Magenta,
            gauge: Color::Blue,
        }
    }

    /// Auto-detect terminal background and return appropriate theme.
    /// Checks COLORFGBG env var and GM_LIGHT_BG override.
    pub fn detect() -> Self {
        if Self::is_light_background() {
            Self::light()
        } else {
            Self::dark()
        }
    }

    /// Color for a feedback line of the given tone.
    pub fn tone_color(&self, tone: Tone) -> Color {
        match tone {
            Tone::Neutral => self.neutral,
            Tone::TooHigh => self.too_high,
            Tone::TooLow => self.too_low,
            Tone::Correct => self.correct,
            Tone::GameOver => self.game_over,
            Tone::Warning => self.warning,
        }
    }

    fn is_light_background() -> bool {
        // Explicit override via environment variable
        if let Ok(val) = std::env::var("GM_LIGHT_BG") {
            return val == "1" || val.eq_ignore_ascii_case("true");
        }

        // COLORFGBG is "fg;bg" with color indices (0-15).
        // Light backgrounds typically have bg index >= 7 (excluding 8 which is bright black)
        if let Ok(colorfgbg) = std::env::var("COLORFGBG")
            && let Some(bg_str) = colorfgbg.rsplit(';').next()
            && let Ok(bg_idx) = bg_str.parse::<u8>()
        {
            return matches!(bg_idx, 7 | 9..=15);
        }

        false
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::detect()
    }
}
