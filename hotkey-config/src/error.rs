//! Typed error variants for the hotkey-config crate.
//!
//! Callers that go through `anyhow` can still match on these with
//! `downcast_ref::<ConfigError>()`.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when loading or saving hotkey settings.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The settings file could not be read or written.
    #[error("I/O error on hotkey settings '{path}': {source}")]
    Io {
        /// File that was being accessed.
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The settings file is not valid YAML, or its top level is not a mapping.
    #[error("YAML parse error in hotkey settings '{path}': {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    /// The settings could not be serialized.
    #[error("failed to serialize hotkey settings: {0}")]
    Serialize(#[source] serde_yaml_ng::Error),
}

impl ConfigError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        ConfigError::Io {
            path: path.into(),
            source,
        }
    }
}
