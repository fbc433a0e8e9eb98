//! Stepwise construction: format, destination, and the enabled override are bound
//! once in [`LoggerBuilder::build`].

use super::{Clock, Logger, local_now, report_warnings};
use crate::config;
use crate::fmt::{ColorMode, CompiledFormat};
use crate::output::Sink;
use std::io::Write;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex, RwLock};

#[derive(Debug)]
pub struct LoggerBuilder {
    enabled: bool,
    format: String,
    override_enabled: Option<bool>,
    color: ColorMode,
    sink: Option<Sink>,
    clock: Clock,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Enabled, empty format (message passthrough), stdout, automatic color.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            format: String::new(),
            override_enabled: None,
            color: ColorMode::Auto,
            sink: None,
            clock: local_now,
        }
    }

    #[must_use]
    pub const fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Format string with `%{message}`, `%{time[:layout]}` and `%{color:<name>}` tokens.
    #[must_use]
    pub fn format(mut self, format: impl Into<String>) -> Self {
        self.format = format.into();
        self
    }

    /// `Some(_)` replaces the configured enabled flag at build time; `None` keeps it.
    #[must_use]
    pub const fn override_enabled(mut self, value: Option<bool>) -> Self {
        self.override_enabled = value;
        self
    }

    /// Shorthand for `override_enabled(config::debug_override())`.
    #[must_use]
    pub fn env_override(self) -> Self {
        self.override_enabled(config::debug_override())
    }

    #[must_use]
    pub const fn color(mut self, mode: ColorMode) -> Self {
        self.color = mode;
        self
    }

    #[must_use]
    pub fn stdout(self) -> Self {
        self.sink(Sink::stdout())
    }

    #[must_use]
    pub fn stderr(self) -> Self {
        self.sink(Sink::stderr())
    }

    /// Any byte sink: a file, a socket, a [`MemoryWriter`](crate::output::MemoryWriter).
    #[must_use]
    pub fn writer(self, writer: impl Write + Send + 'static) -> Self {
        self.sink(Sink::writer(writer))
    }

    #[must_use]
    pub fn sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Replaces the local clock, e.g. with a fixed instant in tests.
    #[must_use]
    pub const fn clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Binds the destination (stdout if none was given), compiles the format and
    /// applies the enabled override.
    #[must_use]
    pub fn build(self) -> Logger {
        let sink = self.sink.unwrap_or_else(Sink::stdout);
        let format = CompiledFormat::compile(&self.format);
        report_warnings(&format);

        Logger {
            enabled: AtomicBool::new(self.override_enabled.unwrap_or(self.enabled)),
            format: RwLock::new(Arc::new(format)),
            colorize: self.color.enabled_for(sink.is_terminal()),
            sink: Mutex::new(sink),
            clock: self.clock,
        }
    }
}
