//! Centralized constants for environment resolution.

/// Suffix appended to a variable name to find its secret file path.
///
/// `DATABASE_PASSWORD_FILE=/run/secrets/db` supplies `DATABASE_PASSWORD`.
pub const SECRET_FILE_SUFFIX: &str = "_FILE";

/// Setting this variable to `true` or `1` disables `.env` loading.
pub const DOTENV_DISABLED_VAR: &str = "DOTENV_DISABLED";

/// Build the secret file variable name for `key`.
pub fn secret_file_key(key: &str) -> String {
    format!("{key}{SECRET_FILE_SUFFIX}")
}
