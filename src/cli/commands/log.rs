//! `hbml log` - one entry through every configured output.

use crate::level::Level;
use crate::logger::Logger;
use std::process::ExitCode;

/// Logs `message` and flushes, so the entry is on disk before the process exits.
#[must_use]
pub fn cmd_log(
    logger: &Logger,
    level: Level,
    method: &str,
    message: &str,
    label: Option<&str>,
    app: Option<&str>,
) -> ExitCode {
    logger.log_full(level, method, message, label, app);
    match logger.flush() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("hbml: flush failed: {e}");
            ExitCode::FAILURE
        }
    }
}
