//! The result of resolving an environment schema.
//!
//! Invariants:
//! - Contents never change after resolution.
//! - `Debug` output lists variable names only; values are redacted.

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;

use crate::error::ConfigError;

/// Resolved variable values keyed by variable name.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ResolvedEnvironment {
    values: BTreeMap<String, String>,
}

impl ResolvedEnvironment {
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Return the value wrapped as a secret so it cannot be logged by accident.
    pub fn secret(&self, key: &str) -> Option<SecretString> {
        self.values
            .get(key)
            .map(|value| SecretString::new(value.clone().into()))
    }

    /// Parse the value of `key` into `T`.
    ///
    /// Returns `Ok(None)` when the key was not part of the schema.
    pub fn parse<T>(&self, key: &str) -> Result<Option<T>, ConfigError>
    where
        T: FromStr,
        T::Err: fmt::Display,
    {
        self.values
            .get(key)
            .map(|value| {
                value.parse().map_err(|e: T::Err| ConfigError::InvalidValue {
                    var: key.to_string(),
                    message: e.to_string(),
                })
            })
            .transpose()
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn into_inner(self) -> BTreeMap<String, String> {
        self.values
    }
}

impl From<BTreeMap<String, String>> for ResolvedEnvironment {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}

impl IntoIterator for ResolvedEnvironment {
    type Item = (String, String);
    type IntoIter = btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl fmt::Debug for ResolvedEnvironment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.values.keys().map(|k| (k, "[REDACTED]")))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::ExposeSecret;

    fn resolved(pairs: &[(&str, &str)]) -> ResolvedEnvironment {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect::<BTreeMap<_, _>>()
            .into()
    }

    #[test]
    fn test_debug_redacts_values() {
        let env = resolved(&[("DB_PASSWORD", "hunter2")]);
        let debug = format!("{env:?}");
        assert!(debug.contains("DB_PASSWORD"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_secret_exposes_value() {
        let env = resolved(&[("TOKEN", "abc")]);
        assert_eq!(env.secret("TOKEN").unwrap().expose_secret(), "abc");
        assert!(env.secret("OTHER").is_none());
    }

    #[test]
    fn test_parse_typed_values() {
        let env = resolved(&[("PORT", "8080"), ("DEBUG", "true"), ("BAD", "eighty")]);

        assert_eq!(env.parse::<u16>("PORT").unwrap(), Some(8080));
        assert_eq!(env.parse::<bool>("DEBUG").unwrap(), Some(true));
        assert_eq!(env.parse::<u16>("UNKNOWN").unwrap(), None);

        match env.parse::<u16>("BAD") {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "BAD"),
            other => panic!("expected InvalidValue, got {other:?}"),
        }
    }

    #[test]
    fn test_iteration_is_ordered_by_key() {
        let env = resolved(&[("B", "2"), ("A", "1")]);
        let keys: Vec<_> = env.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["A", "B"]);

        let inner = env.into_inner();
        assert_eq!(inner["A"], "1");
    }
}
