//! `hbml` binary: writes HBML log entries from shell scripts.
//!
//! Usage:
//!   hbml log <level> <method> <message...> [--app A] [--label L]
//!   hbml entry <type> <method> <message...> [--thread T]
//!   hbml preset <name>
//!   hbml presets

use clap::Parser;
use hbml::cli::{Cli, Command, cmd_entry, cmd_log, cmd_preset, cmd_presets};
use hbml::config::Config;
use hbml::internal;
use hbml::logger::Logger;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = cli
        .config
        .as_deref()
        .map_or_else(Config::load, Config::load_from);
    let config = match loaded {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    };

    internal::init_with_config(&config);

    let logger = Logger::from_config_with(&config, "hbml");

    match cli.command {
        Command::Log {
            level,
            method,
            message,
            app,
            label,
        } => cmd_log(
            &logger,
            level.into(),
            &method,
            &message.join(" "),
            label.as_deref(),
            app.as_deref(),
        ),
        Command::Entry {
            type_label,
            method,
            message,
            thread,
        } => cmd_entry(
            &config.general.timestamp_format,
            &type_label,
            &method,
            &message.join(" "),
            thread.as_deref(),
        ),
        Command::Preset { name } => cmd_preset(&name, &config, &logger),
        Command::Presets => cmd_presets(&config, &logger),
    }
}
