//! Replay error types.

use thiserror::Error;
use videogrid_core::ConfigError;

/// Errors that abort a replay.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// Reading the script or configuration failed.
    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    /// Grid configuration rejected before the first event.
    #[error("invalid grid configuration: {0}")]
    Config(#[from] ConfigError),

    /// Configuration file is not valid JSON for a grid configuration.
    #[error("malformed configuration file: {0}")]
    ConfigFormat(#[source] serde_json::Error),

    /// Script line is not valid JSON.
    #[error("line {line}: malformed JSON: {source}")]
    Syntax {
        /// 1-based script line.
        line: usize,
        /// Parser error.
        #[source]
        source: serde_json::Error,
    },

    /// Script line names an event the grid does not support, or carries the
    /// wrong payload for its tag.
    #[error("line {line}: unsupported event: {source}")]
    UnknownEvent {
        /// 1-based script line.
        line: usize,
        /// Decoder error.
        #[source]
        source: serde_json::Error,
    },
}
