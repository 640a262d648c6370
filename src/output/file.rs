//! Appends rendered records to dated `.hbml` files.

use crate::internal;
use crate::message::{HbmlLogMessageGenerator, LogMessageGenerator};

use super::{LogRecord, Output, format_now};
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

/// Default file extension, without the leading dot.
pub const HBML_LOG_EXTENSION: &str = "hbml";

/// File output configuration.
///
/// Records land in `{base_dir}/{app}/{filename_format}.{extension}`, where
/// `filename_format` is a strftime pattern evaluated at write time.
#[derive(Clone)]
pub struct FileOutput {
    base_dir: String,
    app_name: String,
    filename_format: String,
    extension: String,
    generator: Arc<dyn LogMessageGenerator>,
}

impl Default for FileOutput {
    fn default() -> Self {
        Self::new()
    }
}

impl FileOutput {
    /// HBML entries in one file per day under the platform state directory.
    #[must_use]
    pub fn new() -> Self {
        Self {
            base_dir: default_base_dir(),
            app_name: "hbml".to_string(),
            filename_format: "%Y-%m-%d".to_string(),
            extension: HBML_LOG_EXTENSION.to_string(),
            generator: Arc::new(HbmlLogMessageGenerator),
        }
    }

    /// Sets the base directory. A leading `~` is expanded at write time.
    #[must_use]
    pub fn base_dir(mut self, dir: impl Into<String>) -> Self {
        self.base_dir = dir.into();
        self
    }

    #[must_use]
    pub fn app_name(mut self, name: impl Into<String>) -> Self {
        self.app_name = name.into();
        self
    }

    /// Sets the strftime pattern for the file stem.
    #[must_use]
    pub fn filename_format(mut self, format: impl Into<String>) -> Self {
        self.filename_format = format.into();
        self
    }

    /// Sets the file extension. A leading dot is tolerated.
    #[must_use]
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        let extension = extension.into();
        self.extension = extension.trim_start_matches('.').to_string();
        self
    }

    #[must_use]
    pub fn generator(mut self, generator: impl LogMessageGenerator + 'static) -> Self {
        self.generator = Arc::new(generator);
        self
    }

    fn resolve_base_dir(&self) -> PathBuf {
        let path = PathBuf::from(shellexpand::tilde(&self.base_dir).as_ref());
        internal::trace("FILE", &format!("Resolved base dir: {}", path.display()));
        path
    }

    /// Full path of the file `record` is appended to.
    #[must_use]
    pub fn path_for(&self, record: &LogRecord) -> PathBuf {
        let app = record.app_name.as_deref().unwrap_or(&self.app_name);
        let stem = format_now(&self.filename_format);
        let filename = if self.extension.is_empty() {
            stem
        } else {
            format!("{stem}.{}", self.extension)
        };

        self.resolve_base_dir().join(app).join(filename)
    }
}

impl Output for FileOutput {
    fn write(&self, record: &LogRecord) -> Result<(), crate::Error> {
        let path = self.path_for(record);
        internal::trace("FILE", &format!("Writing to: {}", path.display()));

        if let Some(parent) = path.parent()
            && !parent.exists()
        {
            match fs::create_dir_all(parent) {
                Ok(()) => {
                    internal::debug("FILE", &format!("Created directory: {}", parent.display()));
                }
                Err(e) => {
                    internal::error(
                        "FILE",
                        &format!("Failed to create directory {}: {}", parent.display(), e),
                    );
                    return Err(e.into());
                }
            }
        }

        let mut file = OpenOptions::new().create(true).append(true).open(&path)?;

        // One write per record keeps concurrent appends from interleaving mid-entry.
        let mut content = record.render(self.generator.as_ref());
        content.push('\n');
        file.write_all(content.as_bytes())?;

        Ok(())
    }

    fn flush(&self) -> Result<(), crate::Error> {
        Ok(())
    }
}

/// Platform state directory (data directory as fallback) plus `logs`.
pub(crate) fn default_base_dir() -> String {
    directories::ProjectDirs::from("", "", "hbml").map_or_else(
        || "logs".to_string(),
        |dirs| {
            dirs.state_dir()
                .unwrap_or_else(|| dirs.data_dir())
                .join("logs")
                .to_string_lossy()
                .into_owned()
        },
    )
}
