//! Strict preset execution for the CLI.
//!
//! Unlike `Logger::preset`, a preset with an unknown level is an error here rather than
//! silently logged at `Info`.

use crate::config::Config;
use crate::internal;
use crate::level::Level;
use crate::logger::Logger;

/// Runs presets from configuration.
pub struct PresetRunner<'a> {
    config: &'a Config,
    logger: &'a Logger,
}

impl<'a> PresetRunner<'a> {
    #[must_use]
    pub const fn new(config: &'a Config, logger: &'a Logger) -> Self {
        Self { config, logger }
    }

    /// Runs a preset by name.
    ///
    /// # Errors
    /// Returns error if preset not found or has invalid level.
    pub fn run(&self, name: &str) -> Result<(), crate::Error> {
        internal::trace("PRESET", &format!("Looking up preset: {name}"));
        let preset = self.config.presets.get(name).ok_or_else(|| {
            internal::warn("PRESET", &format!("Preset not found: {name}"));
            crate::Error::PresetNotFound(name.to_string())
        })?;

        let level: Level = preset
            .level
            .parse()
            .map_err(|_| crate::Error::InvalidLevel(preset.level.clone()))?;
        let method = preset.method.as_deref().unwrap_or("preset");

        internal::debug(
            "PRESET",
            &format!("Preset: level={level}, method={method}"),
        );

        self.logger.log_full(
            level,
            method,
            &preset.msg,
            preset.label.as_deref(),
            preset.app_name.as_deref(),
        );
        internal::info("PRESET", &format!("Executed preset: {name}"));

        Ok(())
    }

    /// Preset names with their optional target app.
    #[must_use]
    pub fn list(&self) -> Vec<(&str, Option<&str>)> {
        self.config
            .presets
            .iter()
            .map(|(k, v)| (k.as_str(), v.app_name.as_deref()))
            .collect()
    }

    #[must_use]
    pub fn exists(&self, name: &str) -> bool {
        self.config.presets.contains_key(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PresetConfig;

    fn preset(level: &str) -> PresetConfig {
        PresetConfig {
            level: level.to_string(),
            method: Some("Startup".to_string()),
            msg: "ready".to_string(),
            label: None,
            app_name: None,
        }
    }

    #[test]
    fn preset_not_found() {
        let config = Config::default();
        let logger = Logger::builder().build();
        let runner = PresetRunner::new(&config, &logger);

        let result = runner.run("nonexistent");
        assert!(matches!(result, Err(crate::Error::PresetNotFound(_))));
    }

    #[test]
    fn invalid_level_is_rejected() {
        let mut config = Config::default();
        config.presets.insert("bad".to_string(), preset("loud"));
        let logger = Logger::builder().build();
        let runner = PresetRunner::new(&config, &logger);

        assert!(matches!(
            runner.run("bad"),
            Err(crate::Error::InvalidLevel(level)) if level == "loud"
        ));
    }

    #[test]
    fn known_preset_runs_and_is_listed() {
        let mut config = Config::default();
        config.presets.insert("boot".to_string(), preset("warn"));
        let logger = Logger::builder().build();
        let runner = PresetRunner::new(&config, &logger);

        assert!(runner.exists("boot"));
        assert!(runner.run("boot").is_ok());
        assert_eq!(runner.list(), vec![("boot", None)]);
    }
}
