//! Error types shared across Pacer crates

use std::path::PathBuf;
use thiserror::Error;

/// Result type for core operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A tokio scheduler was requested outside of a runtime
    #[error("no tokio runtime available (construct inside a runtime or pass a handle)")]
    NoRuntime,

    #[error("failed to read config file {path}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file {path}")]
    ConfigWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config file {path}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("failed to serialize config")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("invalid config value for {key}: {reason}")]
    InvalidConfig { key: &'static str, reason: String },
}
