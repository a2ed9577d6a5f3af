//! Annotator configuration.
//!
//! ```toml
//! # expando.toml
//! extended = true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::annotator::Mode;
use crate::error::ConfigError;

/// Settings that select the annotator's behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnnotatorConfig {
    /// Adds the `decode` context prefix and a derived `@id` to each reading.
    pub extended: bool,
}

impl AnnotatorConfig {
    /// Parses a configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Toml`] if the text is not valid TOML or
    /// contains unknown keys.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    /// Reads and parses a TOML configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Toml`] if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }

    /// Returns the annotation mode this configuration selects.
    #[must_use]
    pub fn mode(&self) -> Mode {
        if self.extended {
            Mode::Extended
        } else {
            Mode::Basic
        }
    }
}
