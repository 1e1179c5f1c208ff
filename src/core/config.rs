//! Game configuration.
//!
//! `GameConfig` collects everything a session needs beyond the dataset
//! itself: where the dataset lives, how strictly to validate it, and the
//! display thresholds for the side panel and the map.
//!
//! Configuration comes from `GameConfig::default()`, optionally overlaid
//! by a TOML file, then by command-line flags. Every TOML field is
//! optional:
//!
//! ```toml
//! dataset = "data/cities.json"
//! policy = "permissive"
//! candidate_list_threshold = 15
//! log_file = "city_hunt.log"
//!
//! [map]
//! fit_threshold = 100
//! padding_degrees = 2.0
//! min_span_degrees = 6.0
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dataset::ValidationPolicy;
use crate::map::MapSettings;

/// Default side-panel candidate listing threshold.
pub const DEFAULT_CANDIDATE_LIST_THRESHOLD: usize = 15;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Dataset file. `None` uses the built-in dataset.
    pub dataset: Option<PathBuf>,

    /// How to treat cities missing tested attributes.
    pub policy: ValidationPolicy,

    /// List remaining candidates in the side panel when
    /// `1 < remaining <= candidate_list_threshold`.
    pub candidate_list_threshold: usize,

    /// Map viewport settings.
    pub map: MapSettings,

    /// Log file used while the terminal UI owns the screen.
    pub log_file: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dataset: None,
            policy: ValidationPolicy::default(),
            candidate_list_threshold: DEFAULT_CANDIDATE_LIST_THRESHOLD,
            map: MapSettings::default(),
            log_file: PathBuf::from("city_hunt.log"),
        }
    }
}

impl GameConfig {
    /// Create a configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Read a configuration from a TOML file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Parse a configuration from TOML text. Missing fields take defaults.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Set the dataset path.
    #[must_use]
    pub fn with_dataset(mut self, path: impl Into<PathBuf>) -> Self {
        self.dataset = Some(path.into());
        self
    }

    /// Set the validation policy.
    #[must_use]
    pub fn with_policy(mut self, policy: ValidationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Set the candidate listing threshold.
    #[must_use]
    pub fn with_candidate_list_threshold(mut self, threshold: usize) -> Self {
        self.candidate_list_threshold = threshold;
        self
    }

    /// Set the log file.
    #[must_use]
    pub fn with_log_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_file = path.into();
        self
    }

    /// Reject settings the game cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.candidate_list_threshold == 0 {
            return Err(ConfigError::Invalid(
                "candidate_list_threshold must be at least 1".into(),
            ));
        }
        if self.map.fit_threshold == 0 {
            return Err(ConfigError::Invalid("map.fit_threshold must be at least 1".into()));
        }
        if !(self.map.padding_degrees >= 0.0) {
            return Err(ConfigError::Invalid(
                "map.padding_degrees must be zero or positive".into(),
            ));
        }
        if !(self.map.min_span_degrees > 0.0) {
            return Err(ConfigError::Invalid("map.min_span_degrees must be positive".into()));
        }
        Ok(())
    }
}
