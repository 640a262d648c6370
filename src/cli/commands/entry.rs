//! `hbml entry` - renders one `LogEntry` without touching any output.

use crate::logger::current_thread_name;
use crate::message::{HbmlLogMessageGenerator, LogMessageGenerator};
use crate::output::format_now;
use std::process::ExitCode;

/// Prints the entry for `message`, stamped now with `timestamp_format`.
#[must_use]
pub fn cmd_entry(
    timestamp_format: &str,
    type_label: &str,
    method: &str,
    message: &str,
    thread: Option<&str>,
) -> ExitCode {
    let thread = thread.map_or_else(current_thread_name, ToString::to_string);
    let rendered = HbmlLogMessageGenerator.generate_log_message(
        &format_now(timestamp_format),
        &thread,
        method,
        type_label,
        message,
    );
    println!("{rendered}");
    ExitCode::SUCCESS
}
