//! Where rendered log records go. The built-in backends write HBML files and terminal
//! lines; the `Output` trait lets callers add their own without touching the logger.

mod file;
mod terminal;

pub(crate) use file::default_base_dir;
pub use file::{FileOutput, HBML_LOG_EXTENSION};
pub use terminal::TerminalOutput;

use crate::internal;
use crate::level::Level;
use crate::message::LogMessageGenerator;
use chrono::Local;
use std::fmt::Write as _;

/// Everything a backend needs to render one record.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub level: Level,
    /// Already formatted by the logger so every output agrees on the instant.
    pub timestamp: String,
    pub thread_name: String,
    pub method_name: String,
    /// Written into the `Type` field; usually `level.label()` unless a preset or caller overrides it.
    pub type_label: String,
    pub message: String,
    /// Overrides the output's own app name when set.
    pub app_name: Option<String>,
}

impl LogRecord {
    /// Feeds the record's fields to `generator` in its argument order.
    #[must_use]
    pub fn render(&self, generator: &dyn LogMessageGenerator) -> String {
        generator.generate_log_message(
            &self.timestamp,
            &self.thread_name,
            &self.method_name,
            &self.type_label,
            &self.message,
        )
    }
}

/// `Send + Sync` bounds enable concurrent logging from multiple threads without locks on the trait object.
pub trait Output: Send + Sync {
    /// Renders and writes one record.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error>;

    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}

/// Formats the current local time with a strftime pattern.
///
/// chrono reports a malformed pattern only when the value is displayed, so the failure is
/// caught here and the time falls back to RFC 3339.
pub(crate) fn format_now(pattern: &str) -> String {
    let now = Local::now();
    let mut out = String::new();
    if write!(out, "{}", now.format(pattern)).is_err() {
        internal::warn("TIME", &format!("Invalid time format: {pattern}"));
        return now.to_rfc3339();
    }
    out
}
