//! Error types for highlighter-core.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ConfigError.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading add-on configuration.
///
/// Everything else in this crate degrades silently instead of failing: a
/// malformed fence is left as literal text and a missing language tag falls
/// back to the configured default.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}
