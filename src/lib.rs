//! `tmplog` - minimal template-driven text logger.
//!
//! A logger renders each message through a format string and writes one line to its
//! destination, unless it is disabled. Format strings understand three tokens:
//! - `%{message}`: the logged value
//! - `%{time}` or `%{time:<layout>}`: the current time, in a reference-time layout
//!   such as `15:04:05` (default `Jan _2 15:04:05`)
//! - `%{color:<name>}`: colors the whole line (red, blue, green, yellow, white, cyan, magenta)
//!
//! # Example
//!
//! ```
//! use tmplog::{Logger, logf};
//! use tmplog::output::MemoryWriter;
//!
//! let out = MemoryWriter::new();
//! let logger = Logger::builder()
//!     .format("app: %{message}")
//!     .writer(out.clone())
//!     .build();
//!
//! logger.log("started").unwrap();
//! logf!(logger, "{} workers", 4).unwrap();
//!
//! logger.set_enabled(false);
//! logger.log("dropped").unwrap();
//!
//! assert_eq!(out.contents(), "app: started\napp: 4 workers\n");
//! ```

pub mod config;
mod error;
pub mod fmt;
pub mod internal;
pub mod logger;
pub mod output;

pub use config::{Config, LoggerConfig};
pub use error::Error;
pub use fmt::{ColorMode, ColorName, CompiledFormat, FormatWarning};
pub use logger::{Logger, LoggerBuilder};
pub use output::{Destination, MemoryWriter};
