//! Immediate feedback on the console: warnings and errors go to stderr, the rest to stdout.

use crate::level::Level;
use crate::message::{LogMessageGenerator, PlainLogMessageGenerator};

use super::{LogRecord, Output};
use std::io::{self, Write};
use std::sync::Arc;

/// Console output. Renders single-line records by default; pass
/// [`HbmlLogMessageGenerator`](crate::message::HbmlLogMessageGenerator) to see the entry tree instead.
#[derive(Clone)]
pub struct TerminalOutput {
    generator: Arc<dyn LogMessageGenerator>,
    /// Records at or above this level are written to stderr.
    stderr_level: Level,
}

impl Default for TerminalOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalOutput {
    #[must_use]
    pub fn new() -> Self {
        Self {
            generator: Arc::new(PlainLogMessageGenerator),
            stderr_level: Level::Warn,
        }
    }

    #[must_use]
    pub fn generator(mut self, generator: impl LogMessageGenerator + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    /// Lowest level routed to stderr instead of stdout.
    #[must_use]
    pub const fn stderr_level(mut self, level: Level) -> Self {
        self.stderr_level = level;
        self
    }

    /// Whether a record at `level` goes to stderr.
    #[must_use]
    pub fn routes_to_stderr(&self, level: Level) -> bool {
        level >= self.stderr_level
    }
}

impl Output for TerminalOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let formatted = record.render(self.generator.as_ref());

        if self.routes_to_stderr(record.level) {
            writeln!(io::stderr(), "{formatted}")?;
        } else {
            writeln!(io::stdout(), "{formatted}")?;
        }

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        io::stdout().flush()?;
        io::stderr().flush()?;
        Ok(())
    }
}
