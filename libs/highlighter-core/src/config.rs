//! Add-on configuration.
//!
//! The host stores add-on settings as a JSON object with camelCase keys:
//!
//! ```json
//! {
//!     "supportedLanguages": ["python", "javascript", "rust"],
//!     "defaultLanguage": "python"
//! }
//! ```
//!
//! Loaded once at startup and immutable thereafter. Missing keys (or a
//! missing file) fall back to built-in defaults.

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Read-only add-on configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// Languages offered by the editor's language picker, in menu order.
    pub supported_languages: Vec<String>,
    /// Tag applied to fences that carry no language tag of their own.
    /// Expected to be a member of `supported_languages`, but not enforced.
    pub default_language: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            supported_languages: vec!["python".to_string(), "javascript".to_string()],
            default_language: "python".to_string(),
        }
    }
}

impl Config {
    /// Load configuration from the host's JSON config file.
    ///
    /// A missing file yields the defaults. An unreadable or malformed file
    /// is a [`ConfigError`]; callers that want the never-fail behavior can
    /// fall back to [`Config::default`].
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
