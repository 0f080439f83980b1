//! Environment resolution with Docker-secret `_FILE` indirection.
//!
//! Responsibilities:
//! - Resolve every schema variable to a trimmed string value.
//! - Fall back to `<KEY>_FILE` when `KEY` is not set and read the secret file.
//! - Apply the missing-value policy (fail vs. default) per variable group.
//!
//! Does NOT handle:
//! - Loading the schema (see `schema.rs`).
//! - `.env` files (see `dotenv.rs`).
//!
//! Invariants:
//! - Required variables are resolved before optional ones; the first failure stops resolution.
//! - Every required key appears in the result with a non-empty value.
//! - Every optional key appears in the result (resolved value or default).
//! - A secret file that cannot be read is fatal even for optional variables.
//! - Values are never logged.

use std::collections::BTreeMap;
use std::path::Path;

use crate::constants::secret_file_key;
use crate::env::Environment;
use crate::error::ConfigError;
use crate::resolved::ResolvedEnvironment;
use crate::schema::EnvironmentSchema;

/// What to do when a variable has no usable value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MissingPolicy<'a> {
    /// Fail with the error describing why the value is unusable.
    Fail,
    /// Use the given default value.
    UseDefault(&'a str),
}

impl MissingPolicy<'_> {
    fn apply(
        self,
        key: &str,
        error: impl FnOnce(String) -> ConfigError,
    ) -> Result<String, ConfigError> {
        match self {
            Self::Fail => Err(error(key.to_string())),
            Self::UseDefault(default) => {
                tracing::debug!(variable = key, source = "default", "Resolved variable");
                Ok(default.to_string())
            }
        }
    }
}

/// Resolve all variables declared by `schema` against `env`.
pub fn resolve<E>(schema: &EnvironmentSchema, env: &E) -> Result<ResolvedEnvironment, ConfigError>
where
    E: Environment + ?Sized,
{
    let mut values = BTreeMap::new();

    for key in &schema.required {
        let value = resolve_variable(env, key, MissingPolicy::Fail)?;
        values.insert(key.clone(), value);
    }

    for (key, default) in &schema.optional {
        let value = resolve_variable(env, key, MissingPolicy::UseDefault(default))?;
        values.insert(key.clone(), value);
    }

    tracing::debug!(
        required = schema.required.len(),
        optional = schema.optional.len(),
        "Resolved environment"
    );

    Ok(ResolvedEnvironment::from(values))
}

/// Resolve a single variable, consulting `<key>_FILE` when `key` is unset.
pub fn resolve_variable<E>(
    env: &E,
    key: &str,
    policy: MissingPolicy<'_>,
) -> Result<String, ConfigError>
where
    E: Environment + ?Sized,
{
    if let Some(raw) = env.var(key) {
        let value = raw.trim();
        if value.is_empty() {
            return policy.apply(key, |key| ConfigError::RequiredVariableEmpty { key });
        }
        tracing::debug!(variable = key, source = "direct", "Resolved variable");
        return Ok(value.to_string());
    }

    let Some(raw_path) = env.var(&secret_file_key(key)) else {
        return policy.apply(key, |key| ConfigError::RequiredVariableMissing { key });
    };

    let path = raw_path.trim();
    if path.is_empty() {
        return policy.apply(key, |key| ConfigError::FilePathEmpty { key });
    }

    read_secret_file(key, Path::new(path))
}

fn read_secret_file(key: &str, path: &Path) -> Result<String, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::SecretFileRead {
        key: key.to_string(),
        path: path.to_path_buf(),
        source: e,
    })?;

    tracing::debug!(
        variable = key,
        source = "secret file",
        path = %path.display(),
        "Resolved variable"
    );

    Ok(content.trim().to_string())
}
