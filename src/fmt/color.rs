//! The fixed color palette a format string can select with `%{color:<name>}`.
//!
//! Only the eight basic ANSI foreground colors (minus black) are offered, so the
//! output looks the same under any terminal theme that remaps them.

use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// A palette entry selectable from a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorName {
    Red,
    Blue,
    Green,
    Yellow,
    White,
    Cyan,
    Magenta,
}

impl ColorName {
    /// Lowercase names exactly as they appear inside `%{color:...}`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Red => "red",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::White => "white",
            Self::Cyan => "cyan",
            Self::Magenta => "magenta",
        }
    }

    /// Every palette entry, in SGR code order.
    pub const ALL: &'static [Self] = &[
        Self::Red,
        Self::Green,
        Self::Yellow,
        Self::Blue,
        Self::Magenta,
        Self::Cyan,
        Self::White,
    ];

    /// SGR foreground parameter (30-37 range).
    #[must_use]
    pub const fn sgr_code(self) -> u8 {
        match self {
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
        }
    }

    /// The `\x1b[3Xm` escape that switches the foreground to this color.
    #[must_use]
    pub fn fg_ansi(self) -> String {
        format!("\x1b[{}m", self.sgr_code())
    }

    /// Terminates any active SGR styling so subsequent text returns to the terminal default.
    pub const RESET: &'static str = "\x1b[0m";
}

impl fmt::Display for ColorName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by `FromStr` for names outside the palette.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColorError(String);

impl UnknownColorError {
    /// The rejected name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for UnknownColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color: '{}'", self.0)
    }
}

impl std::error::Error for UnknownColorError {}

impl FromStr for ColorName {
    type Err = UnknownColorError;

    /// Matching is exact: `Red` or ` red` are not palette names.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| UnknownColorError(s.to_string()))
    }
}

/// Wraps `text` in the color escape and a trailing reset.
#[must_use]
pub fn colorize(text: &str, color: ColorName) -> String {
    let fg = color.fg_ansi();
    let reset = ColorName::RESET;
    format!("{fg}{text}{reset}")
}

/// Whether a logger emits the escapes for its selected color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when writing to a terminal on stdout or stderr.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolves the mode against whether the destination is an interactive terminal.
    #[must_use]
    pub const fn enabled_for(self, is_terminal: bool) -> bool {
        match self {
            Self::Auto => is_terminal,
            Self::Always => true,
            Self::Never => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_name_parses_back() {
        for color in ColorName::ALL {
            assert_eq!(color.as_str().parse::<ColorName>(), Ok(*color));
        }
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!("Red".parse::<ColorName>().is_err());
        assert!("purple".parse::<ColorName>().is_err());
    }

    #[test]
    fn auto_follows_terminal() {
        assert!(ColorMode::Auto.enabled_for(true));
        assert!(!ColorMode::Auto.enabled_for(false));
        assert!(ColorMode::Always.enabled_for(false));
        assert!(!ColorMode::Never.enabled_for(true));
    }
}
