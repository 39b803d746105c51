//! Registry configuration loaded from YAML.
//!
//! A network definition can extend the default phases and frequencies and
//! choose how the frequency registry treats duplicate names:
//!
//! ```yaml
//! frequency_duplicates: reject
//! phases: [burst, recall]
//! frequencies:
//!   - name: minibatch
//!     end_event: EndBatch
//! ```
//!
//! Every field is optional; unknown keys are rejected. Feed the result to
//! [`Registry::from_config`](crate::Registry::from_config).

use std::path::Path;

use serde::Deserialize;

use crate::error::EventError;
use crate::frequency::DuplicatePolicy;

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("failed to read config file: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },

    /// Failed to parse YAML content.
    #[error("failed to parse config YAML: {source}")]
    Yaml {
        /// The underlying YAML parse error.
        #[from]
        source: serde_yml::Error,
    },

    /// The configuration parsed but a registration failed.
    #[error("invalid registry config: {source}")]
    Registry {
        /// The underlying registration error.
        #[from]
        source: EventError,
    },
}

/// Extra registrations and policies for a [`Registry`](crate::Registry).
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RegistryConfig {
    /// Duplicate policy of the frequency registry.
    #[serde(default)]
    pub frequency_duplicates: DuplicatePolicy,

    /// Phases to register after `plus`, `minus` and `none`.
    #[serde(default)]
    pub phases: Vec<String>,

    /// Frequencies to register after the four defaults.
    #[serde(default)]
    pub frequencies: Vec<FrequencyConfig>,
}

/// One frequency entry in [`RegistryConfig`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FrequencyConfig {
    /// Frequency name.
    pub name: String,
    /// Name of the event variant that ends a period, e.g. `EndTrial`.
    pub end_event: String,
}

impl RegistryConfig {
    /// Load configuration from a YAML file at the given path.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read, or
    /// [`ConfigError::Yaml`] if the content is not valid YAML.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// Parse configuration from a YAML string.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Yaml`] if the string is not valid YAML.
    pub fn parse(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yml::from_str(yaml)?)
    }
}
