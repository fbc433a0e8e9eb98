//! The logger pairs a compiled format with one destination. Formats are compiled when
//! the logger is built and again on [`Logger::set_format`]; each log call only renders.

mod builder;
mod from_config;

pub use builder::LoggerBuilder;

use crate::Error;
use crate::fmt::{CompiledFormat, colorize};
use crate::internal;
use crate::output::Sink;
use chrono::{DateTime, FixedOffset, Local};
use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Source of the timestamp rendered into `%{time}`.
pub type Clock = fn() -> DateTime<FixedOffset>;

/// Default clock: local time with its current offset.
#[must_use]
pub fn local_now() -> DateTime<FixedOffset> {
    Local::now().fixed_offset()
}

/// Shareable across threads: the enabled flag is atomic, the compiled format is
/// swapped whole, and each line is written under the sink lock.
#[derive(Debug)]
pub struct Logger {
    enabled: AtomicBool,
    format: RwLock<Arc<CompiledFormat>>,
    sink: Mutex<Sink>,
    colorize: bool,
    clock: Clock,
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Enabled logger on stdout with the given format.
    #[must_use]
    pub fn new(format: &str) -> Self {
        Self::builder().format(format).build()
    }

    /// Writes `value` rendered through the format. A disabled logger returns `Ok(())`
    /// without writing anything.
    ///
    /// # Errors
    /// Returns `Error::Write` if the destination rejects the line.
    pub fn log(&self, value: impl fmt::Display) -> Result<(), Error> {
        if !self.is_enabled() {
            return Ok(());
        }
        self.emit(&value.to_string())
    }

    /// Like [`Logger::log`], for pre-formatted arguments; see the [`logf!`](crate::logf)
    /// macro. The arguments are expanded first and the result is used as the message,
    /// so `%{...}` text coming from them is never treated as a placeholder.
    ///
    /// # Errors
    /// Returns `Error::Write` if the destination rejects the line.
    pub fn logf(&self, args: fmt::Arguments<'_>) -> Result<(), Error> {
        if !self.is_enabled() {
            return Ok(());
        }
        let message = args
            .as_str()
            .map_or_else(|| fmt::format(args), ToString::to_string);
        self.emit(&message)
    }

    fn emit(&self, message: &str) -> Result<(), Error> {
        let mut line = self.render(message);
        line.push('\n');

        let mut sink = self.sink.lock().unwrap_or_else(PoisonError::into_inner);
        sink.write_line(&line)
    }

    /// Renders `message` exactly as [`Logger::log`] would write it, minus the newline.
    #[must_use]
    pub fn render(&self, message: &str) -> String {
        let format = self.compiled();
        let now = format.uses_time().then(self.clock);
        let rendered = format.render(message, now);
        match format.color() {
            Some(color) if self.colorize => colorize(&rendered, color),
            _ => rendered,
        }
    }

    /// Recompiles and installs a new format; the next log call uses it.
    pub fn set_format(&self, format: &str) {
        let compiled = Arc::new(CompiledFormat::compile(format));
        report_warnings(&compiled);
        *self.format.write().unwrap_or_else(PoisonError::into_inner) = compiled;
    }

    /// The raw format string currently in effect.
    #[must_use]
    pub fn format(&self) -> String {
        self.compiled().raw().to_string()
    }

    /// The compiled format currently in effect.
    #[must_use]
    pub fn compiled(&self) -> Arc<CompiledFormat> {
        Arc::clone(&self.format.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.store(enabled, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.load(Ordering::Relaxed)
    }

    /// Whether the selected color is emitted as escape codes.
    #[must_use]
    pub const fn colorize(&self) -> bool {
        self.colorize
    }

    /// # Errors
    /// Returns `Error::Write` if the destination fails to flush.
    pub fn flush(&self) -> Result<(), Error> {
        self.sink
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .flush()
    }
}

fn report_warnings(format: &CompiledFormat) {
    for warning in format.warnings() {
        internal::warn(&format!("format {:?}: {warning}", format.raw()));
    }
}

/// Logs `format_args!`-style arguments through a [`Logger`].
///
/// ```
/// use tmplog::{Logger, logf};
/// use tmplog::output::MemoryWriter;
///
/// let out = MemoryWriter::new();
/// let logger = Logger::builder().format("L2:%{message}").writer(out.clone()).build();
/// logf!(logger, "{} blue", 2).unwrap();
/// assert_eq!(out.contents(), "L2:2 blue\n");
/// ```
#[macro_export]
macro_rules! logf {
    ($logger:expr, $($arg:tt)*) => {
        $logger.logf(::std::format_args!($($arg)*))
    };
}
