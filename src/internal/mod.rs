//! hbml's own diagnostic logger, used for config loading and output failures.
//!
//! Backed by a `OnceLock`, so only the first `init` call takes effect. Messages sent
//! before initialization are dropped.

use crate::config::Config;
use crate::level::Level;
use crate::logger::Logger;
use crate::output::TerminalOutput;
use std::cell::Cell;
use std::sync::OnceLock;

static INTERNAL_LOGGER: OnceLock<Logger> = OnceLock::new();

thread_local! {
    /// Set while a diagnostic is being written; a failure reported from inside that write is dropped.
    static WRITING: Cell<bool> = const { Cell::new(false) };
}

/// Initializes from the default config file, falling back to defaults if it can't be read.
pub fn init() {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| {
        let config = Config::load().unwrap_or_default();
        build_internal_logger(&config)
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Initializes from an already-loaded config.
pub fn init_with_config(config: &Config) {
    let was_init = INTERNAL_LOGGER.get().is_some();
    INTERNAL_LOGGER.get_or_init(|| build_internal_logger(config));
    if !was_init {
        debug("INTERNAL", &format!("Log level: {}", config.general.level));
        if config.file.enabled {
            debug(
                "INTERNAL",
                &format!("File: base_dir={}", config.file.base_dir),
            );
        }
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Diagnostics always go to stderr so they never mix with command output on stdout.
fn build_internal_logger(config: &Config) -> Logger {
    Logger::builder()
        .level(config.parse_level())
        .timestamp_format(&config.general.timestamp_format)
        .output(TerminalOutput::new().stderr_level(Level::Trace))
        .build()
}

fn log(level: Level, method: &str, msg: &str) {
    let Some(logger) = INTERNAL_LOGGER.get() else {
        return;
    };
    if WRITING.replace(true) {
        return;
    }
    let _reset = WritingReset;
    logger.log(level, method, msg);
}

/// Clears `WRITING` on scope exit, including when an output panics.
struct WritingReset;

impl Drop for WritingReset {
    fn drop(&mut self) {
        WRITING.set(false);
    }
}


pub fn trace(method: &str, msg: &str) {
    log(Level::Trace, method, msg);
}

pub fn debug(method: &str, msg: &str) {
    log(Level::Debug, method, msg);
}

pub fn info(method: &str, msg: &str) {
    log(Level::Info, method, msg);
}

pub fn warn(method: &str, msg: &str) {
    log(Level::Warn, method, msg);
}

pub fn error(method: &str, msg: &str) {
    log(Level::Error, method, msg);
}
