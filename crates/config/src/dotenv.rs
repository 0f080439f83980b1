//! `.env` file loading ahead of environment resolution.
//!
//! Responsibilities:
//! - Populate the process environment from a `.env` file via `dotenvy`.
//! - Honor the `DOTENV_DISABLED` gate.
//!
//! Invariants:
//! - Variables already present in the process environment are not overridden.
//! - A missing `.env` file is not an error.
//! - Errors never include raw .env line contents.

use std::path::Path;

use crate::constants::DOTENV_DISABLED_VAR;
use crate::error::ConfigError;

/// Check if dotenv loading is disabled via environment variable.
fn dotenv_disabled() -> bool {
    matches!(
        std::env::var(DOTENV_DISABLED_VAR).ok().as_deref(),
        Some("true") | Some("1")
    )
}

/// Load `.env` from the current directory or its ancestors, if present.
///
/// # Errors
///
/// Returns an error if:
/// - The `.env` file exists but has invalid syntax (`ConfigError::DotenvParse`)
/// - The `.env` file exists but cannot be read due to I/O errors (`ConfigError::DotenvIo`)
pub fn load_dotenv() -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("Skipping .env loading, {} is set", DOTENV_DISABLED_VAR);
        return Ok(());
    }
    map_result(dotenvy::dotenv().map(|_| ()))
}

/// Load the `.env`-formatted file at `path`, if present.
///
/// Same gating and error mapping as [`load_dotenv`].
pub fn load_dotenv_from(path: impl AsRef<Path>) -> Result<(), ConfigError> {
    if dotenv_disabled() {
        tracing::debug!("Skipping .env loading, {} is set", DOTENV_DISABLED_VAR);
        return Ok(());
    }
    map_result(dotenvy::from_path(path.as_ref()))
}

fn map_result(result: Result<(), dotenvy::Error>) -> Result<(), ConfigError> {
    match result {
        Ok(()) => Ok(()),
        Err(e) if is_not_found(&e) => Ok(()),
        Err(dotenvy::Error::LineParse(_, idx)) => {
            Err(ConfigError::DotenvParse { error_index: idx })
        }
        Err(dotenvy::Error::Io(io_err)) => Err(ConfigError::DotenvIo {
            kind: io_err.kind(),
        }),
        Err(_) => Err(ConfigError::DotenvUnknown),
    }
}

/// Check if a dotenv error indicates the file was not found.
fn is_not_found(err: &dotenvy::Error) -> bool {
    matches!(
        err,
        dotenvy::Error::Io(io_err) if io_err.kind() == std::io::ErrorKind::NotFound
    )
}
