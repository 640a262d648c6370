//! Configuration struct definitions.

use serde::Deserialize;

/// General configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Minimum log level.
    pub level: String,
    /// Application name; overrides the name passed by the caller.
    pub app_name: Option<String>,
    /// strftime pattern for the `Date` field of each entry.
    pub timestamp_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            app_name: None,
            timestamp_format: "%Y-%m-%d %H:%M:%S".to_string(),
        }
    }
}

/// Terminal output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct TerminalConfig {
    /// Enable terminal output.
    pub enabled: bool,
    /// Record format: `plain` or `hbml`.
    pub format: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: "plain".to_string(),
        }
    }
}

/// File output configuration.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enable file output.
    pub enabled: bool,
    /// Base directory for logs.
    pub base_dir: String,
    /// strftime pattern for the file stem.
    pub filename_format: String,
    /// File extension.
    pub extension: String,
}

impl Default for FileConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            base_dir: crate::output::default_base_dir(),
            filename_format: "%Y-%m-%d".to_string(),
            extension: crate::output::HBML_LOG_EXTENSION.to_string(),
        }
    }
}

/// A named, reusable log record.
#[derive(Debug, Clone, Deserialize)]
pub struct PresetConfig {
    /// Level used for filtering; also the `Type` value unless `label` is set.
    #[serde(default = "default_preset_level")]
    pub level: String,
    /// Value of the `Method` field.
    pub method: Option<String>,
    /// Value of the `Message` field.
    pub msg: String,
    /// Replaces the level's label in the `Type` field.
    pub label: Option<String>,
    /// Writes under another app's directory.
    pub app_name: Option<String>,
}

fn default_preset_level() -> String {
    "info".to_string()
}
