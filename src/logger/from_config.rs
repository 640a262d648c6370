//! Logger construction from hbml config files.

use super::{Logger, LoggerBuilder};
use crate::config::Config;
use crate::internal;
use crate::message::HbmlLogMessageGenerator;
use std::path::Path;

impl Logger {
    /// Builds a logger from the default config file, or from defaults if it can't be loaded.
    #[must_use]
    pub fn from_config(app_name: &str) -> Self {
        internal::debug("LOGGER", "Building logger from config");
        let config = Config::load().unwrap_or_default();
        Self::from_config_with(&config, app_name)
    }

    /// Builds a logger from the config file at `path`.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn from_config_file(path: &Path, app_name: &str) -> Result<Self, crate::Error> {
        let config = Config::load_from(path)?;
        Ok(Self::from_config_with(&config, app_name))
    }

    /// Builds a logger from an already-loaded config.
    ///
    /// `general.app_name`, when set, takes precedence over `app_name`.
    #[must_use]
    pub fn from_config_with(config: &Config, app_name: &str) -> Self {
        let app_name = config.general.app_name.as_deref().unwrap_or(app_name);
        internal::debug("LOGGER", &format!("Initializing logger for app={app_name}"));
        internal::debug("LOGGER", &format!("Log level: {}", config.general.level));

        let mut builder = LoggerBuilder::new()
            .level(config.parse_level())
            .timestamp_format(&config.general.timestamp_format);
        let mut outputs: Vec<&str> = Vec::new();

        if config.terminal.enabled {
            builder = Self::configure_terminal(builder, config);
            outputs.push("terminal");
        }

        if config.file.enabled {
            builder = Self::configure_file(builder, config, app_name);
            outputs.push("file");
        }

        if outputs.is_empty() {
            internal::warn("LOGGER", "No outputs enabled");
        } else {
            internal::debug(
                "LOGGER",
                &format!("Outputs enabled: [{}]", outputs.join(", ")),
            );
        }

        if !config.presets.is_empty() {
            internal::debug(
                "PRESETS",
                &format!("Loaded {} presets", config.presets.len()),
            );
        }

        let mut logger = builder.presets(config.presets.clone()).build();
        logger.app_name = Some(app_name.to_string());
        logger
    }

    fn configure_terminal(builder: LoggerBuilder, config: &Config) -> LoggerBuilder {
        internal::debug(
            "TERMINAL",
            &format!("Format: {}", config.terminal.format),
        );

        let terminal = builder.terminal();
        if config.terminal_uses_hbml() {
            terminal.generator(HbmlLogMessageGenerator).done()
        } else {
            terminal.done()
        }
    }

    fn configure_file(builder: LoggerBuilder, config: &Config, app_name: &str) -> LoggerBuilder {
        internal::debug("FILE", &format!("Base dir: {}", config.file.base_dir));
        internal::debug("FILE", &format!("App name: {app_name}"));

        builder
            .file()
            .base_dir(&config.file.base_dir)
            .filename_format(&config.file.filename_format)
            .extension(&config.file.extension)
            .app_name(app_name)
            .done()
    }
}
