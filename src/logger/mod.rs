//! The logger stamps each message with time, thread, and level, then fans the record out
//! to every configured output. Construction goes through [`LoggerBuilder`] or a config file.

mod builder;
mod from_config;

pub use builder::{FileBuilder, LoggerBuilder, TerminalBuilder};

use crate::config::PresetConfig;
use crate::internal;
use crate::level::Level;
use crate::output::{LogRecord, Output, format_now};
use std::collections::HashMap;
use std::thread;

/// Thread name recorded when the calling thread was spawned without one.
pub const UNNAMED_THREAD: &str = "unnamed";

/// Immutable after build, so one logger can be shared across threads without locks.
pub struct Logger {
    min_level: Level,
    timestamp_format: String,
    outputs: Vec<Box<dyn Output>>,
    presets: HashMap<String, PresetConfig>,
    pub(crate) app_name: Option<String>,
}

impl Default for Logger {
    fn default() -> Self {
        LoggerBuilder::new().build()
    }
}

impl Logger {
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Logs `msg` with the level's own label in the `Type` field.
    pub fn log(&self, level: Level, method: &str, msg: &str) {
        self.dispatch(level, method, msg, level.label(), None);
    }

    /// Logs with a caller-chosen `Type` value ("SUCCESS", "AUDIT") while still filtering on `level`.
    pub fn log_with_label(&self, level: Level, method: &str, msg: &str, label: &str) {
        self.dispatch(level, method, msg, label, None);
    }

    /// Logs under another app's name; `None` keeps the logger's own.
    pub fn log_full(
        &self,
        level: Level,
        method: &str,
        msg: &str,
        label: Option<&str>,
        app_name: Option<&str>,
    ) {
        self.dispatch(
            level,
            method,
            msg,
            label.unwrap_or_else(|| level.label()),
            app_name,
        );
    }

    fn dispatch(
        &self,
        level: Level,
        method: &str,
        msg: &str,
        type_label: &str,
        app_name: Option<&str>,
    ) {
        if level < self.min_level || self.outputs.is_empty() {
            return;
        }

        let record = LogRecord {
            level,
            timestamp: format_now(&self.timestamp_format),
            thread_name: current_thread_name(),
            method_name: method.to_string(),
            type_label: type_label.to_string(),
            message: msg.to_string(),
            app_name: app_name
                .map(ToString::to_string)
                .or_else(|| self.app_name.clone()),
        };

        for output in &self.outputs {
            // A failing sink must not take the caller down; report it and keep going.
            if let Err(e) = output.write(&record) {
                internal::error("LOGGER", &format!("Output write failed: {e}"));
            }
        }
    }

    pub fn trace(&self, method: &str, msg: &str) {
        self.log(Level::Trace, method, msg);
    }

    pub fn debug(&self, method: &str, msg: &str) {
        self.log(Level::Debug, method, msg);
    }

    pub fn info(&self, method: &str, msg: &str) {
        self.log(Level::Info, method, msg);
    }

    pub fn warn(&self, method: &str, msg: &str) {
        self.log(Level::Warn, method, msg);
    }

    pub fn error(&self, method: &str, msg: &str) {
        self.log(Level::Error, method, msg);
    }

    /// Logs the preset called `name`. Returns `false` if no such preset exists.
    ///
    /// An unparsable preset level falls back to `Info`; `PresetRunner` in the CLI
    /// rejects it instead.
    #[must_use]
    pub fn preset(&self, name: &str) -> bool {
        let Some(preset) = self.presets.get(name) else {
            internal::warn("LOGGER", &format!("Preset not found: {name}"));
            return false;
        };

        let level: Level = preset.level.parse().unwrap_or(Level::Info);
        let method = preset.method.as_deref().unwrap_or("preset");

        self.log_full(
            level,
            method,
            &preset.msg,
            preset.label.as_deref(),
            preset.app_name.as_deref(),
        );
        true
    }

    #[must_use]
    pub fn has_preset(&self, name: &str) -> bool {
        self.presets.contains_key(name)
    }

    #[must_use]
    pub fn preset_count(&self) -> usize {
        self.presets.len()
    }

    /// # Errors
    /// Returns the first I/O error encountered across all outputs.
    pub fn flush(&self) -> Result<(), crate::Error> {
        for output in &self.outputs {
            output.flush()?;
        }
        Ok(())
    }

    #[must_use]
    pub const fn min_level(&self) -> Level {
        self.min_level
    }

    #[must_use]
    pub fn output_count(&self) -> usize {
        self.outputs.len()
    }

    #[must_use]
    pub fn timestamp_format(&self) -> &str {
        &self.timestamp_format
    }
}

/// The calling thread's name, or [`UNNAMED_THREAD`].
#[must_use]
pub fn current_thread_name() -> String {
    thread::current()
        .name()
        .unwrap_or(UNNAMED_THREAD)
        .to_string()
}
