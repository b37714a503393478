//! Display configuration
//!
//! Color and symbol settings are an explicit value threaded through the
//! formatting functions, chosen once at startup from CLI flags.
//!
//! The palette avoids red/green distinctions for game feedback (deutanopia
//! accessibility): correct is blue, present is magenta, absent is gray.
//! Symbols give a second, color-independent channel.

use crate::core::Mark;
use colored::{ColoredString, Colorize};

/// Color palette variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Palette {
    /// Blue / magenta / gray foreground colors
    #[default]
    Standard,
    /// Foreground-on-background pairs for stronger separation
    HighContrast,
}

/// Presentation settings passed to every formatting function
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayConfig {
    pub palette: Palette,
    /// Prefix each letter with a shape that mirrors its mark
    pub symbols: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            palette: Palette::Standard,
            symbols: true,
        }
    }
}

impl DisplayConfig {
    /// Style a piece of text according to a feedback mark
    #[must_use]
    pub fn mark_style(&self, mark: Mark, text: &str) -> ColoredString {
        match (self.palette, mark) {
            (Palette::Standard, Mark::Correct) => text.blue().bold(),
            (Palette::Standard, Mark::Present) => text.magenta(),
            (Palette::Standard, Mark::Absent) => text.bright_black(),
            (Palette::HighContrast, Mark::Correct) => text.white().on_blue().bold(),
            (Palette::HighContrast, Mark::Present) => text.black().on_bright_magenta(),
            (Palette::HighContrast, Mark::Absent) => text.white().on_black(),
        }
    }

    /// Style for informational text
    #[must_use]
    pub fn info(&self, text: &str) -> ColoredString {
        match self.palette {
            Palette::Standard => text.cyan(),
            Palette::HighContrast => text.white().on_cyan(),
        }
    }

    /// Style for success messages (blue, not green - see module docs)
    #[must_use]
    pub fn success(&self, text: &str) -> ColoredString {
        match self.palette {
            Palette::Standard => text.blue(),
            Palette::HighContrast => text.black().on_bright_cyan(),
        }
    }

    /// Style for errors; red is reserved for errors, never game feedback
    #[must_use]
    pub fn error(&self, text: &str) -> ColoredString {
        match self.palette {
            Palette::Standard => text.red(),
            Palette::HighContrast => text.white().on_red(),
        }
    }

    /// Style for warnings
    #[must_use]
    pub fn warning(&self, text: &str) -> ColoredString {
        match self.palette {
            Palette::Standard => text.yellow(),
            Palette::HighContrast => text.black().on_bright_yellow(),
        }
    }

    /// The symbol channel for a mark, or empty when symbols are off
    #[must_use]
    pub const fn symbol(&self, mark: Mark) -> &'static str {
        if !self.symbols {
            return "";
        }
        match mark {
            Mark::Correct => "█",
            Mark::Present => "○",
            Mark::Absent => "·",
        }
    }
}
