//! Reporting interface for sweep operations.
//!
//! Operations never write to ambient globals; they are handed a [`Reporter`]
//! with three capabilities: show a short status message, append a line to
//! the findings log, and reveal that log. The console implementation writes
//! both through an injected writer so the whole pipeline is testable
//! without a terminal.

use std::io::{self, Write};

/// Capability set for surfacing sweep results to the user.
pub trait Reporter {
    /// Shows a short status message.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    fn show_message(&mut self, message: &str) -> io::Result<()>;

    /// Appends one line to the findings log.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    fn append_line(&mut self, line: &str) -> io::Result<()>;

    /// Brings the findings log into view (flushes pending output).
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying sink fails.
    fn reveal(&mut self) -> io::Result<()>;
}

/// Console reporter writing messages and findings to one writer.
#[derive(Debug)]
pub struct ConsoleReporter<W: Write> {
    writer: W,
    quiet: bool,
}

impl<W: Write> ConsoleReporter<W> {
    /// Creates a console reporter. In quiet mode, per-line findings are
    /// suppressed and only status messages are shown.
    pub fn new(writer: W, quiet: bool) -> Self {
        Self { writer, quiet }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        writeln!(self.writer, "{message}")
    }

    fn append_line(&mut self, line: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.writer, "{line}")
    }

    fn reveal(&mut self) -> io::Result<()> {
        self.writer.flush()
    }
}
