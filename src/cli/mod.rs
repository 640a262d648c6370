//! Command-line interface for hbml, parsed with clap.

pub mod commands;
pub mod preset;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

pub use commands::{cmd_entry, cmd_log, cmd_preset, cmd_presets};
pub use preset::PresetRunner;

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::Trace,
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// hbml - Write HBML log entries from the command line.
#[derive(Parser)]
#[command(
    name = "hbml",
    version,
    about = "Write HBML log entries from the command line"
)]
pub struct Cli {
    /// Config file to use instead of the default location
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Log a message through the configured outputs.
    Log {
        /// Log level
        #[arg(value_enum)]
        level: LogLevel,
        /// Method name recorded in the entry
        method: String,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
        /// Application name (selects the log directory)
        #[arg(short, long)]
        app: Option<String>,
        /// Type label written instead of the level's own
        #[arg(short, long)]
        label: Option<String>,
    },
    /// Print a single rendered log entry to stdout.
    Entry {
        /// Type label
        #[arg(value_name = "TYPE")]
        type_label: String,
        /// Method name
        method: String,
        /// Log message
        #[arg(required = true)]
        message: Vec<String>,
        /// Thread name (defaults to the current thread)
        #[arg(short, long)]
        thread: Option<String>,
    },
    /// Run a preset.
    Preset {
        /// Preset name
        name: String,
    },
    /// List available presets.
    Presets,
}
