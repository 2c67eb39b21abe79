//! Error types for implore-pointmatch
//!
//! - Pattern compilation errors
//! - Selection list errors (pattern errors tagged with their line)
//! - Configuration loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while compiling a selection pattern.
///
/// Every variant carries the normalised pattern text so callers can report
/// the failure verbatim.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PatternError {
    /// The path part is not a valid regular expression
    #[error("Malformed path expression in '{pattern}': {message}")]
    MalformedPath { pattern: String, message: String },

    /// An exact value or a range bound is not a number
    #[error("Malformed number '{token}' in '{pattern}'")]
    MalformedNumber { pattern: String, token: String },

    /// The selector marker is present but its body is unusable
    #[error("Malformed selector in '{pattern}': {message}")]
    MalformedSelector { pattern: String, message: String },
}

impl PatternError {
    /// The pattern text that failed to compile
    pub fn pattern(&self) -> &str {
        match self {
            PatternError::MalformedPath { pattern, .. }
            | PatternError::MalformedNumber { pattern, .. }
            | PatternError::MalformedSelector { pattern, .. } => pattern,
        }
    }
}

/// Result type for pattern compilation
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors raised while reading a selection list
#[derive(Error, Debug)]
pub enum SelectionError {
    /// A line of the list failed to compile (1-based line number)
    #[error("Line {line}: {source}")]
    Pattern {
        line: usize,
        #[source]
        source: PatternError,
    },

    /// The list file could not be read
    #[error("Failed to read selection file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Errors raised while loading or saving configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unsupported config format: {0}")]
    UnsupportedFormat(String),
}
