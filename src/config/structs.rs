//! Configuration struct definitions.

use crate::fmt::ColorMode;
use crate::output::Destination;
use serde::Deserialize;

/// Settings shared by every logger section.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Color mode for sections that don't set their own.
    pub color: ColorMode,
    /// Apply the `DEBUG` environment override when building loggers.
    pub debug_env: bool,
    /// Report config and format warnings on stderr.
    pub diagnostics: bool,
    /// Also report debug-level diagnostics.
    pub verbose: bool,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            color: ColorMode::Auto,
            debug_env: true,
            diagnostics: false,
            verbose: false,
        }
    }
}

/// One logger: its enabled flag, format string, destination and color mode.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub enabled: bool,
    /// Format string; empty means the bare message.
    pub format: String,
    pub destination: Destination,
    /// `None` defers to `general.color`.
    pub color: Option<ColorMode>,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: String::new(),
            destination: Destination::Stdout,
            color: None,
        }
    }
}
