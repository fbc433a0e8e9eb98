//! tmplog's own diagnostic channel: a logger built with this crate, writing to stderr,
//! used to report config and format problems.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if several entry
//! points race to call `init`. Until then every call here is dropped.

use crate::fmt::ColorMode;
use crate::logger::Logger;
use crate::output::Sink;
use std::io::Write;
use std::sync::OnceLock;

const FORMAT: &str = "%{color:yellow}tmplog %{time:15:04:05} %{message}";

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();
static VERBOSE: OnceLock<bool> = OnceLock::new();

/// Enables the diagnostic channel. `verbose` also lets debug messages through.
/// Only the first call takes effect.
pub fn init(verbose: bool) {
    init_with(verbose, Sink::stderr);
}

/// Like [`init`], but diagnostics go to `writer` instead of stderr.
pub fn init_with_writer(verbose: bool, writer: impl Write + Send + 'static) {
    init_with(verbose, || Sink::writer(writer));
}

fn init_with(verbose: bool, sink: impl FnOnce() -> Sink) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    VERBOSE.get_or_init(|| verbose);
    INTERNAL_LOGGER.get_or_init(|| {
        Logger::builder()
            .enabled(true)
            .format(FORMAT)
            .color(ColorMode::Auto)
            .sink(sink())
            .build()
    });
    if !was_init {
        debug("internal logger ready");
    }
}

/// Whether `init` has run.
#[must_use]
pub fn is_initialized() -> bool {
    INTERNAL_LOGGER.get().is_some()
}

fn log(msg: &str) {
    if let Some(logger) = INTERNAL_LOGGER.get() {
        // Nowhere left to report a failing stderr.
        let _ = logger.log(msg);
    }
}

/// Startup and config-loading details; only shown when initialized as verbose.
pub fn debug(msg: &str) {
    if VERBOSE.get().copied().unwrap_or(false) {
        log(msg);
    }
}

/// Recoverable problems: unknown colors, unreadable optional config.
pub fn warn(msg: &str) {
    log(msg);
}
