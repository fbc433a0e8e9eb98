//! Logger construction from config sections.

use super::{Logger, LoggerBuilder};
use crate::Error;
use crate::config::LoggerConfig;
use crate::internal;

impl Logger {
    /// Builds a logger from one config section, opening its destination.
    ///
    /// `override_enabled` is applied on top of `config.enabled`; pass
    /// [`debug_override()`](crate::config::debug_override) to honor `DEBUG`.
    ///
    /// # Errors
    /// Returns `Error::Io` if a file destination cannot be opened.
    pub fn from_config(
        config: &LoggerConfig,
        override_enabled: Option<bool>,
    ) -> Result<Self, Error> {
        internal::debug(&format!(
            "building logger: enabled={} destination={:?}",
            config.enabled, config.destination
        ));

        let sink = config.destination.open()?;
        let logger = LoggerBuilder::new()
            .enabled(config.enabled)
            .format(config.format.as_str())
            .color(config.color.unwrap_or_default())
            .override_enabled(override_enabled)
            .sink(sink)
            .build();

        if override_enabled.is_some_and(|v| v != config.enabled) {
            internal::debug(&format!("enabled overridden to {}", logger.is_enabled()));
        }

        Ok(logger)
    }
}
