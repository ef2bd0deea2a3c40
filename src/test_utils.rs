//! Test utilities shared by unit and integration tests.

use crate::report::Reporter;
use std::io;

/// Reporter that records everything it is handed, for assertions.
#[derive(Debug, Default)]
pub struct RecordingReporter {
    /// Status messages, in order.
    pub messages: Vec<String>,
    /// Findings log lines, in order.
    pub lines: Vec<String>,
    /// Whether the findings log was revealed.
    pub revealed: bool,
}

impl Reporter for RecordingReporter {
    fn show_message(&mut self, message: &str) -> io::Result<()> {
        self.messages.push(message.to_owned());
        Ok(())
    }

    fn append_line(&mut self, line: &str) -> io::Result<()> {
        self.lines.push(line.to_owned());
        Ok(())
    }

    fn reveal(&mut self) -> io::Result<()> {
        self.revealed = true;
        Ok(())
    }
}
