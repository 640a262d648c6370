//! Preset command implementations.

use crate::cli::preset::PresetRunner;
use crate::config::Config;
use crate::internal;
use crate::logger::Logger;
use std::collections::BTreeMap;
use std::process::ExitCode;

/// Handles `hbml preset <name>`.
#[must_use]
pub fn cmd_preset(name: &str, config: &Config, logger: &Logger) -> ExitCode {
    let runner = PresetRunner::new(config, logger);
    match runner.run(name).and_then(|()| logger.flush()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            internal::error("PRESET", &format!("{e}"));
            ExitCode::FAILURE
        }
    }
}

/// Handles `hbml presets`, grouped by target app.
#[must_use]
pub fn cmd_presets(config: &Config, logger: &Logger) -> ExitCode {
    let runner = PresetRunner::new(config, logger);
    let list = runner.list();
    if list.is_empty() {
        println!("No presets defined");
        return ExitCode::SUCCESS;
    }

    let mut groups: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
    for (name, app_name) in list {
        groups
            .entry(app_name.unwrap_or("general"))
            .or_default()
            .push(name);
    }

    println!("Available presets:");
    for (app, mut presets) in groups {
        println!("  [{app}]");
        presets.sort_unstable();
        for preset in presets {
            println!("    {preset}");
        }
    }
    ExitCode::SUCCESS
}
