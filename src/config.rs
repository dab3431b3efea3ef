//! Generator configuration module.
//!
//! Contains the runtime configuration for bell-sounds. Sound parameters
//! are fixed; only the output location can be changed.

use std::path::PathBuf;

use crate::error::{Result, SoundError};

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "src/sounds";

/// Environment variable overriding the output directory.
pub const OUTPUT_DIR_ENV: &str = "BELL_SOUNDS_DIR";

/// Runtime configuration for the generator.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeneratorConfig {
    /// Directory the sound files are written to.
    /// If None, uses [`DEFAULT_OUTPUT_DIR`].
    pub output_dir: Option<PathBuf>,
}

impl GeneratorConfig {
    /// Creates a new GeneratorConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a GeneratorConfig from environment variables.
    ///
    /// Reads `BELL_SOUNDS_DIR`; falls back to defaults when it is unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(path) = std::env::var(OUTPUT_DIR_ENV) {
            config.output_dir = Some(PathBuf::from(path));
        }

        config
    }

    /// Applies a command-line override on top of this configuration.
    pub fn with_output_dir(mut self, output_dir: Option<PathBuf>) -> Self {
        if output_dir.is_some() {
            self.output_dir = output_dir;
        }
        self
    }

    /// Returns the effective output directory.
    pub fn effective_output_dir(&self) -> PathBuf {
        self.output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT_DIR))
    }

    /// Validates the configuration.
    ///
    /// Returns an error message if validation fails, None otherwise.
    pub fn validate(&self) -> Option<String> {
        if let Some(ref path) = self.output_dir {
            if path.as_os_str().is_empty() {
                return Some("output_dir must not be empty".to_string());
            }
        }

        None
    }

    /// Like [`validate`](Self::validate), as a `Result`.
    pub fn check(&self) -> Result<()> {
        match self.validate() {
            Some(reason) => Err(SoundError::invalid_config(reason)),
            None => Ok(()),
        }
    }
}
