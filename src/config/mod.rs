//! TOML configuration: named logger sections, `source = "..."` includes, and the
//! `DEBUG` environment override.
//!
//! Loading (file I/O, include expansion, cycle detection) lives here; the serde
//! schema lives in `structs`.

mod env;
mod structs;

pub use env::{DEBUG_ENV, debug_override, parse_debug_override};
pub use structs::{GeneralConfig, LoggerConfig};

use crate::Error;
use crate::internal;
use crate::logger::Logger;
use serde::Deserialize;
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

const CONFIG_DIR: &str = "tmplog";
const CONFIG_FILE: &str = "tmplog.toml";

/// An empty file is a valid config: every field has a default.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    /// Logger sections keyed by name, e.g. `[loggers.debug]`.
    pub loggers: BTreeMap<String, LoggerConfig>,
}

/// Splits `source = "..."` lines out of raw TOML before deserialization.
/// Returns the include paths and the remaining TOML.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        let value = trimmed
            .strip_prefix("source")
            .map(str::trim_start)
            .and_then(|rest| rest.strip_prefix('='));
        if let Some(value) = value {
            let path = value.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl FromStr for Config {
    type Err = Error;

    /// Parses TOML content. `source` lines are dropped: includes need a file to be
    /// relative to, see [`Config::load_from`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (_, content) = extract_sources(s);
        Ok(toml::from_str(&content)?)
    }
}

impl Config {
    /// Loads `<config dir>/tmplog/tmplog.toml`, or defaults when it does not exist.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read, TOML
    /// parsing fails, or includes form a cycle.
    pub fn load() -> Result<Self, Error> {
        let path = Self::config_path()?;
        internal::debug(&format!("loading config from {}", path.display()));
        Self::load_from(&path)
    }

    /// Loads an explicit config file, expanding its includes.
    ///
    /// Include paths are relative to the file that names them. A file may be included
    /// along several paths; only a file that includes itself through the current chain
    /// is a cycle. Included files contribute logger sections only, their `[general]`
    /// table is ignored (see [`Config::merge`]).
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    fn load_with_sources(path: &Path, chain: &mut HashSet<PathBuf>) -> Result<Self, Error> {
        if !path.exists() {
            internal::debug("config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
        if !chain.insert(canonical.clone()) {
            internal::warn(&format!("cyclic include: {}", canonical.display()));
            return Err(Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        for source in sources {
            let expanded = shellexpand::tilde(&source);
            let source_file = base.join(expanded.as_ref());
            if source_file.exists() {
                internal::debug(&format!("including {}", source_file.display()));
                let included = Self::load_with_sources(&source_file, chain)?;
                config.merge(included);
            } else {
                internal::warn(&format!("source file not found: {source}"));
            }
        }

        chain.remove(&canonical);
        Ok(config)
    }

    /// Adds logger sections from an included file; sections already defined here win.
    /// `other.general` is discarded: only the primary file sets general options.
    pub fn merge(&mut self, other: Self) {
        for (name, logger) in other.loggers {
            self.loggers.entry(name).or_insert(logger);
        }
    }

    /// Default config file location.
    ///
    /// # Errors
    /// Fails when the platform has no config directory.
    pub fn config_path() -> Result<PathBuf, Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join(CONFIG_DIR).join(CONFIG_FILE))
            .ok_or(Error::ConfigDirNotFound)
    }

    /// Builds the logger named `name`. Its color mode falls back to `general.color`,
    /// and `DEBUG` is honored when `general.debug_env` is set.
    ///
    /// # Errors
    /// `Error::UnknownLogger` if no such section exists, `Error::Io` if its destination
    /// cannot be opened.
    pub fn logger(&self, name: &str) -> Result<Logger, Error> {
        let section = self
            .loggers
            .get(name)
            .ok_or_else(|| Error::UnknownLogger(name.to_string()))?;
        let section = LoggerConfig {
            color: section.color.or(Some(self.general.color)),
            ..section.clone()
        };
        let override_enabled = if self.general.debug_env {
            debug_override()
        } else {
            None
        };
        Logger::from_config(&section, override_enabled)
    }

    /// Enables the internal diagnostic channel if `general.diagnostics` asks for it.
    pub fn init_diagnostics(&self) {
        if self.general.diagnostics {
            internal::init(self.general.verbose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_lines_are_split_out() {
        let (sources, rest) = extract_sources("source = \"a.toml\"\n[general]\nsource='b'\n");
        assert_eq!(sources, vec!["a.toml", "b"]);
        assert_eq!(rest, "[general]\n");
    }

    #[test]
    fn keys_starting_with_source_are_kept() {
        let (sources, rest) = extract_sources("sources_dir = \"x\"\n");
        assert!(sources.is_empty());
        assert_eq!(rest, "sources_dir = \"x\"\n");
    }
}
