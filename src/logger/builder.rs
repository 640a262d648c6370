//! Stepwise construction of a [`Logger`], with sub-builders for each built-in output.

use super::Logger;
use crate::config::PresetConfig;
use crate::level::Level;
use crate::message::LogMessageGenerator;
use crate::output::{FileOutput, Output, TerminalOutput};
use std::collections::HashMap;

/// Collects level, timestamp format, presets, and outputs before producing an immutable [`Logger`].
pub struct LoggerBuilder {
    pub(super) min_level: Level,
    pub(super) timestamp_format: String,
    pub(super) outputs: Vec<Box<dyn Output>>,
    pub(super) presets: HashMap<String, PresetConfig>,
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerBuilder {
    /// Info level, `%Y-%m-%d %H:%M:%S` timestamps, no outputs.
    #[must_use]
    pub fn new() -> Self {
        Self {
            min_level: Level::Info,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
            outputs: Vec::new(),
            presets: HashMap::new(),
        }
    }

    #[must_use]
    pub const fn level(mut self, level: Level) -> Self {
        self.min_level = level;
        self
    }

    /// strftime pattern for the `Date` field.
    #[must_use]
    pub fn timestamp_format(mut self, format: impl Into<String>) -> Self {
        self.timestamp_format = format.into();
        self
    }

    #[must_use]
    pub fn presets(mut self, presets: HashMap<String, PresetConfig>) -> Self {
        self.presets = presets;
        self
    }

    #[must_use]
    pub fn terminal(self) -> TerminalBuilder {
        TerminalBuilder {
            parent: self,
            output: TerminalOutput::new(),
        }
    }

    #[must_use]
    pub fn file(self) -> FileBuilder {
        FileBuilder {
            parent: self,
            output: FileOutput::new(),
        }
    }

    /// Adds a custom backend.
    #[must_use]
    pub fn output(mut self, output: impl Output + 'static) -> Self {
        self.outputs.push(Box::new(output));
        self
    }

    #[must_use]
    pub fn build(self) -> Logger {
        Logger {
            min_level: self.min_level,
            timestamp_format: self.timestamp_format,
            outputs: self.outputs,
            presets: self.presets,
            app_name: None,
        }
    }
}

/// Terminal-specific options; `done` hands control back to the [`LoggerBuilder`].
pub struct TerminalBuilder {
    parent: LoggerBuilder,
    output: TerminalOutput,
}

impl TerminalBuilder {
    #[must_use]
    pub fn generator(mut self, generator: impl LogMessageGenerator + 'static) -> Self {
        self.output = self.output.generator(generator);
        self
    }

    #[must_use]
    pub fn stderr_level(mut self, level: Level) -> Self {
        self.output = self.output.stderr_level(level);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}

/// File-specific options; `done` hands control back to the [`LoggerBuilder`].
pub struct FileBuilder {
    parent: LoggerBuilder,
    output: FileOutput,
}

impl FileBuilder {
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.output = self.output.base_dir(dir);
        self
    }

    /// Subdirectory under the base dir, one per app.
    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.output = self.output.app_name(name);
        self
    }

    #[must_use]
    pub fn filename_format(mut self, format: impl Into<String>) -> Self {
        self.output = self.output.filename_format(format);
        self
    }

    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.output = self.output.extension(extension);
        self
    }

    #[must_use]
    pub fn generator(mut self, generator: impl LogMessageGenerator + 'static) -> Self {
        self.output = self.output.generator(generator);
        self
    }

    #[must_use]
    pub fn done(mut self) -> LoggerBuilder {
        self.parent.outputs.push(Box::new(self.output));
        self.parent
    }
}
