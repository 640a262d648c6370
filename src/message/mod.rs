//! Turning the five fields of a log record into text.
//!
//! Outputs own a generator rather than a fixed format, so the same record can be written
//! as an HBML `LogEntry` to a file and as a single line to the terminal.

use crate::element::Element;

/// Root label of every HBML log record.
pub const LOG_ENTRY_LABEL: &str = "LogEntry";
pub const DATE_LABEL: &str = "Date";
pub const TYPE_LABEL: &str = "Type";
pub const THREAD_LABEL: &str = "Thread";
pub const METHOD_LABEL: &str = "Method";
pub const MESSAGE_LABEL: &str = "Message";

/// `Send + Sync` so outputs holding a generator can be shared across logging threads.
pub trait LogMessageGenerator: Send + Sync {
    /// Formats one log record.
    fn generate_log_message(
        &self,
        timestamp: &str,
        thread_name: &str,
        method_name: &str,
        type_label: &str,
        message: &str,
    ) -> String;
}

/// Writes each record as a `LogEntry` element with `Date`, `Type`, `Thread`, `Method`
/// and `Message` children, in that order.
#[derive(Debug, Clone, Copy, Default)]
pub struct HbmlLogMessageGenerator;

impl HbmlLogMessageGenerator {
    /// The element tree for one record, before rendering.
    #[must_use]
    pub fn build_entry(
        timestamp: &str,
        thread_name: &str,
        method_name: &str,
        type_label: &str,
        message: &str,
    ) -> Element {
        let mut entry = Element::with_label(LOG_ENTRY_LABEL);
        // Labels are fixed and distinct, so none of these inserts can be rejected.
        entry.add_element(DATE_LABEL, timestamp);
        entry.add_element(TYPE_LABEL, type_label);
        entry.add_element(THREAD_LABEL, thread_name);
        entry.add_element(METHOD_LABEL, method_name);
        entry.add_element(MESSAGE_LABEL, message);
        entry
    }
}

impl LogMessageGenerator for HbmlLogMessageGenerator {
    fn generate_log_message(
        &self,
        timestamp: &str,
        thread_name: &str,
        method_name: &str,
        type_label: &str,
        message: &str,
    ) -> String {
        Self::build_entry(timestamp, thread_name, method_name, type_label, message).render()
    }
}

/// Single-line form for terminals: `{timestamp} [{type}] {thread} {method}: {message}`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainLogMessageGenerator;

impl LogMessageGenerator for PlainLogMessageGenerator {
    fn generate_log_message(
        &self,
        timestamp: &str,
        thread_name: &str,
        method_name: &str,
        type_label: &str,
        message: &str,
    ) -> String {
        format!("{timestamp} [{type_label}] {thread_name} {method_name}: {message}")
    }
}
