//! Where rendered lines go. A logger owns exactly one [`Sink`]; [`Destination`] is the
//! config-facing description of one.

mod file;
mod memory;

pub use file::open_append;
pub use memory::MemoryWriter;

use crate::Error;
use serde::Deserialize;
use std::fmt;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;

/// A named destination as written in config: `"stdout"`, `"stderr"`, or a file path.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(from = "String")]
pub enum Destination {
    #[default]
    Stdout,
    Stderr,
    /// Appended to; `~` is expanded and missing parent directories are created.
    File(PathBuf),
}

impl From<String> for Destination {
    fn from(s: String) -> Self {
        match s.as_str() {
            "stdout" | "-" => Self::Stdout,
            "stderr" => Self::Stderr,
            _ => Self::File(PathBuf::from(s)),
        }
    }
}

impl From<&str> for Destination {
    fn from(s: &str) -> Self {
        Self::from(s.to_string())
    }
}

impl Destination {
    /// Opens the destination for writing.
    ///
    /// # Errors
    /// Returns `Error::Io` if a file destination cannot be created or opened.
    pub fn open(&self) -> Result<Sink, Error> {
        match self {
            Self::Stdout => Ok(Sink::stdout()),
            Self::Stderr => Ok(Sink::stderr()),
            Self::File(path) => Ok(Sink::writer(open_append(path)?)),
        }
    }
}

/// The writer a logger owns, plus whether it is an interactive terminal.
pub struct Sink {
    writer: Box<dyn Write + Send>,
    is_terminal: bool,
}

impl Sink {
    #[must_use]
    pub fn stdout() -> Self {
        let stdout = io::stdout();
        Self {
            is_terminal: stdout.is_terminal(),
            writer: Box::new(stdout),
        }
    }

    #[must_use]
    pub fn stderr() -> Self {
        let stderr = io::stderr();
        Self {
            is_terminal: stderr.is_terminal(),
            writer: Box::new(stderr),
        }
    }

    /// Wraps an arbitrary writer. Never treated as a terminal.
    #[must_use]
    pub fn writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Box::new(writer),
            is_terminal: false,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        self.is_terminal
    }

    /// Writes one complete line with a single `write_all` and flushes it.
    ///
    /// # Errors
    /// Returns `Error::Write` if the underlying writer fails.
    pub fn write_line(&mut self, line: &str) -> Result<(), Error> {
        self.writer
            .write_all(line.as_bytes())
            .and_then(|()| self.writer.flush())
            .map_err(Error::Write)
    }

    /// # Errors
    /// Returns `Error::Write` if the underlying writer fails to flush.
    pub fn flush(&mut self) -> Result<(), Error> {
        self.writer.flush().map_err(Error::Write)
    }
}

impl fmt::Debug for Sink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Sink")
            .field("is_terminal", &self.is_terminal)
            .finish_non_exhaustive()
    }
}
