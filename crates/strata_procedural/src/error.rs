//! # Procedural Error Types
//!
//! Generation itself cannot fail. Everything here happens at the
//! configuration boundary, before a generator or controller exists.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while configuring world generation.
#[derive(Error, Debug)]
pub enum ProceduralError {
    /// A configuration value is outside its allowed range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    ConfigRead {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: std::io::Error,
    },

    /// The configuration file is not valid TOML for [`crate::WorldConfig`].
    #[error("malformed config: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

/// Result type for procedural configuration.
pub type ProceduralResult<T> = Result<T, ProceduralError>;
