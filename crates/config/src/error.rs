//! Error types for configuration loading and environment resolution.
//!
//! Responsibilities:
//! - Define error variants for every resolution and loading failure.
//! - Carry the variable name or path involved in each failure.
//!
//! Does NOT handle:
//! - HTTP error envelopes (see the `svckit-error` crate).
//!
//! Invariants:
//! - Resolution errors name the variable but never include its value.
//! - Dotenv errors NEVER include raw .env line contents to prevent secret leakage.

use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading or resolving configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Neither the variable nor its `_FILE` counterpart is set.
    #[error("required environment variable missing: {key}")]
    RequiredVariableMissing { key: String },

    /// The variable is set but blank after trimming.
    #[error("required environment variable empty: {key}")]
    RequiredVariableEmpty { key: String },

    /// `<key>_FILE` is set but blank after trimming.
    #[error("empty file path for docker secret: {key}_FILE")]
    FilePathEmpty { key: String },

    /// The secret file named by `<key>_FILE` could not be opened or read.
    #[error("failed to read secret file for {key} at {path}: {source}")]
    SecretFileRead {
        key: String,
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid value for {var}: {message}")]
    InvalidValue { var: String, message: String },

    #[error("Failed to read config file at {path}: {source}")]
    ConfigFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    ConfigFileParse {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("Failed to parse config document: {0}")]
    Json(#[from] serde_json::Error),

    /// Failed to parse the `.env` file due to invalid syntax.
    ///
    /// SAFETY: This error only includes the byte index of the parse failure,
    /// NOT the offending line content, to prevent leaking secrets.
    #[error(
        "Failed to parse .env file at position {error_index}. Hint: set DOTENV_DISABLED=1 to skip .env loading"
    )]
    DotenvParse { error_index: usize },

    /// Failed to read the `.env` file due to an I/O error.
    #[error("Failed to read .env file: {kind}")]
    DotenvIo { kind: ErrorKind },

    /// Unknown dotenv error (future variants from dotenvy crate).
    #[error("Failed to load .env file. Hint: set DOTENV_DISABLED=1 to skip .env loading")]
    DotenvUnknown,
}

impl ConfigError {
    /// The environment variable this error concerns, if any.
    pub fn variable(&self) -> Option<&str> {
        match self {
            Self::RequiredVariableMissing { key }
            | Self::RequiredVariableEmpty { key }
            | Self::FilePathEmpty { key }
            | Self::SecretFileRead { key, .. } => Some(key),
            Self::InvalidValue { var, .. } => Some(var),
            _ => None,
        }
    }
}
