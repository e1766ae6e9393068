#![forbid(unsafe_code)]

//! Error types shared by the loader, configuration, and cue layers.

use thiserror::Error;

/// Failure of one episode retrieval attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The module import (or fetch) itself was rejected.
    #[error("import of {url} failed: {reason}")]
    Import {
        /// URL that was requested, including any cache-bust query.
        url: String,
        /// Host-provided rejection message.
        reason: String,
    },

    /// The module loaded but did not expose the expected export.
    #[error("module {url} has no export named `{export}`")]
    MissingExport { url: String, export: String },

    /// The export exists but is not a sequence of strings.
    #[error("episode export could not be decoded: {0}")]
    Decode(String),
}

/// Configuration could not be parsed or is out of range.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config value for `{field}`: {reason}")]
    Invalid {
        field: &'static str,
        reason: &'static str,
    },
}

/// Audio cue playback failure. Always swallowed by the controller.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("audio cue failed: {0}")]
pub struct CueError(pub String);
