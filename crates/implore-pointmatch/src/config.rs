//! Configuration for pattern compilation and selection lists
//!
//! Loaded from TOML or JSON, e.g.:
//!
//! ```toml
//! skip_invalid = true
//!
//! [matching]
//! index_policy = "reject"
//! path_mode = "search"
//! ```

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What to do with a non-integer exact bin index such as `#2.5`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IndexPolicy {
    /// Truncate toward zero (`#2.5` selects bin 2)
    #[default]
    Truncate,
    /// Fail compilation with a malformed-selector error
    Reject,
}

/// How a path expression is applied to dataset paths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum PathMode {
    /// Match from the start of the path
    #[default]
    Anchored,
    /// Match anywhere in the path
    Search,
}

/// Options that affect how a single pattern compiles and matches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct MatchOptions {
    pub index_policy: IndexPolicy,
    pub path_mode: PathMode,
}

/// Configuration for reading selection lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SelectionConfig {
    /// Per-pattern options
    pub matching: MatchOptions,
    /// Drop lines that fail to compile instead of failing the whole list
    pub skip_invalid: bool,
}

impl SelectionConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(toml_str)?)
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json_str)?)
    }

    /// Serialize configuration to JSON
    pub fn to_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Load configuration from a `.toml` or `.json` file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml(&text),
            Some("json") => Self::from_json(&text),
            other => Err(ConfigError::UnsupportedFormat(
                other.unwrap_or("<none>").to_string(),
            )),
        }
    }
}
