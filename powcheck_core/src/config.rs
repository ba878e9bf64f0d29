//! Run configuration.
//!
//! A [`RunConfig`] is an explicit value handed to [`crate::run`]; nothing is
//! read from process-wide state.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{PowCheckError, Result};

/// Default report file name, written relative to the working directory.
pub const DEFAULT_REPORT_FILE: &str = "check_results.txt";

/// Default extension of candidate files.
pub const DEFAULT_EXTENSION: &str = "txt";

/// Default number of characters shown for expected/actual on a mismatch.
pub const DEFAULT_PREVIEW_CHARS: usize = 50;

/// Default memory budget for expanding one power of two (64 MiB).
pub const DEFAULT_MAX_EXPANSION_BYTES: u64 = 64 * 1024 * 1024;

/// Configuration for one verification run.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Folder to scan
    pub root: PathBuf,
    /// Where the report file is written
    pub report_path: PathBuf,
    /// Descend into subdirectories
    pub recursive: bool,
    /// Candidate extension, without the dot
    pub extension: String,
    /// Characters of expected/actual shown in mismatch narration
    pub preview_chars: usize,
    /// Largest expansion, in bytes, the verifier will build
    pub max_expansion_bytes: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            report_path: PathBuf::from(DEFAULT_REPORT_FILE),
            recursive: true,
            extension: DEFAULT_EXTENSION.to_string(),
            preview_chars: DEFAULT_PREVIEW_CHARS,
            max_expansion_bytes: DEFAULT_MAX_EXPANSION_BYTES,
        }
    }
}

impl RunConfig {
    /// Creates a builder starting from the defaults.
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::default()
    }

    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields take their default values. The result is validated.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config: RunConfig = serde_json::from_str(&text)?;
        config.validate()
    }

    /// Checks invariants and normalises the extension.
    pub fn validate(mut self) -> Result<Self> {
        self.extension = self.extension.trim_start_matches('.').to_string();
        if self.extension.is_empty() {
            return Err(PowCheckError::InvalidConfig(
                "extension must not be empty".to_string(),
            ));
        }
        if self.report_path.as_os_str().is_empty() {
            return Err(PowCheckError::InvalidConfig(
                "report path must not be empty".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Builder for [`RunConfig`].
#[derive(Clone, Debug, Default)]
pub struct RunConfigBuilder {
    config: RunConfig,
}

impl RunConfigBuilder {
    /// Starts from an existing configuration instead of the defaults.
    pub fn from_config(config: RunConfig) -> Self {
        Self { config }
    }

    /// Sets the folder to scan.
    pub fn root(mut self, root: impl AsRef<Path>) -> Self {
        self.config.root = root.as_ref().to_path_buf();
        self
    }

    /// Sets the report destination.
    pub fn report_path(mut self, path: impl AsRef<Path>) -> Self {
        self.config.report_path = path.as_ref().to_path_buf();
        self
    }

    /// Enables or disables descending into subdirectories.
    pub fn recursive(mut self, recursive: bool) -> Self {
        self.config.recursive = recursive;
        self
    }

    /// Sets the candidate extension (a leading dot is accepted).
    pub fn extension(mut self, extension: impl Into<String>) -> Self {
        self.config.extension = extension.into();
        self
    }

    /// Sets how many characters of a mismatch are narrated.
    pub fn preview_chars(mut self, chars: usize) -> Self {
        self.config.preview_chars = chars;
        self
    }

    /// Sets the memory budget for a single expansion.
    pub fn max_expansion_bytes(mut self, bytes: u64) -> Self {
        self.config.max_expansion_bytes = bytes;
        self
    }

    /// Validates and returns the configuration.
    pub fn build(self) -> Result<RunConfig> {
        self.config.validate()
    }
}
