//! TOML configuration loading with `source = "..."` include resolution.
//!
//! Struct definitions live in `structs`; this module owns file I/O, cycle detection,
//! and the merge strategy for included files.

mod structs;

pub use structs::{FileConfig, GeneralConfig, PresetConfig, TerminalConfig};

use crate::internal;
use crate::level::Level;
use serde::Deserialize;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::{Path, PathBuf};

/// An empty file is a valid config: every section falls back to its defaults.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub general: GeneralConfig,
    pub terminal: TerminalConfig,
    pub file: FileConfig,
    /// Named records runnable with `Logger::preset`.
    pub presets: HashMap<String, PresetConfig>,
}

/// Splits `source = "..."` directives out of raw TOML before deserialization.
///
/// Returns the include paths and the remaining TOML with those lines removed.
#[doc(hidden)]
#[must_use]
pub fn extract_sources(content: &str) -> (Vec<String>, String) {
    let mut sources = Vec::new();
    let mut remaining = String::new();

    for line in content.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("source")
            && let Some(path) = rest.trim_start().strip_prefix('=')
        {
            let path = path.trim().trim_matches('"').trim_matches('\'');
            if !path.is_empty() {
                sources.push(path.to_string());
            }
        } else {
            remaining.push_str(line);
            remaining.push('\n');
        }
    }

    (sources, remaining)
}

impl Config {
    /// Loads the user's config from the default location, resolving includes.
    ///
    /// A missing file yields the defaults.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined, a file can't be read,
    /// TOML parsing fails, or includes form a cycle.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let config_path = Self::get_config_path()?;
        let config = Self::load_from(&config_path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", config_path.display()),
        );
        Ok(config)
    }

    /// Loads configuration from an explicit path.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or contains cyclic includes.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        Self::load_with_sources(path, &mut HashSet::new())
    }

    /// `active` holds the include chain leading to `path`; a file may be sourced from
    /// several branches, but never from inside its own chain.
    fn load_with_sources(path: &Path, active: &mut HashSet<PathBuf>) -> Result<Self, crate::Error> {
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let canonical = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());

        if !active.insert(canonical.clone()) {
            internal::warn(
                "CONFIG",
                &format!("Cyclic include detected: {}", canonical.display()),
            );
            return Err(crate::Error::CyclicInclude(canonical));
        }

        let content = fs::read_to_string(path)?;
        let (sources, toml_content) = extract_sources(&content);
        let mut config: Self = toml::from_str(&toml_content)?;

        for source_path in sources {
            internal::debug("CONFIG", &format!("Processing source: {source_path}"));
            let expanded = shellexpand::tilde(&source_path);
            let source_file = Path::new(expanded.as_ref());
            if source_file.exists() {
                let source_config = Self::load_with_sources(source_file, active)?;
                config.merge(source_config);
            } else {
                internal::warn("CONFIG", &format!("Source file not found: {source_path}"));
            }
        }

        active.remove(&canonical);
        Ok(config)
    }

    /// Folds an included config's presets into `self`; keys already present win.
    pub fn merge(&mut self, other: Self) {
        for (name, preset) in other.presets {
            self.presets.entry(name).or_insert(preset);
        }
    }

    /// `<config_dir>/hbml/hbml.toml`.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::BaseDirs::new()
            .map(|dirs| dirs.config_dir().join("hbml").join("hbml.toml"))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Unknown level strings fall back to `Info`.
    #[must_use]
    pub fn parse_level(&self) -> Level {
        self.general.level.parse().unwrap_or_else(|_| {
            internal::warn(
                "CONFIG",
                &format!("Invalid level '{}', using info", self.general.level),
            );
            Level::Info
        })
    }

    /// Whether the terminal should print the full HBML entry instead of one line.
    #[must_use]
    pub fn terminal_uses_hbml(&self) -> bool {
        self.terminal.format.eq_ignore_ascii_case("hbml")
    }
}
