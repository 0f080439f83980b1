//! Environment schema: which variables a microservice needs.
//!
//! Responsibilities:
//! - Describe required variable names and optional variables with defaults.
//! - Load the schema from a JSON reader or file.
//!
//! Does NOT handle:
//! - Looking up variables (see `env.rs`) or resolving them (see `resolver.rs`).
//!
//! Invariants:
//! - Required names keep their document order; optional names are ordered by key.
//! - Missing or `null` `required` / `optional` fields deserialize as empty.

use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{null_as_default, read_json, read_json_file};
use crate::env::{Environment, ProcessEnvironment};
use crate::error::ConfigError;
use crate::resolved::ResolvedEnvironment;
use crate::resolver::resolve;

/// Expected layout of a microservice's environment configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvironmentSchema {
    /// Variables that must resolve to a non-empty value.
    #[serde(default, deserialize_with = "null_as_default")]
    pub required: Vec<String>,

    /// Variables that fall back to the mapped default when unresolved.
    #[serde(default, deserialize_with = "null_as_default")]
    pub optional: BTreeMap<String, String>,
}

impl EnvironmentSchema {
    /// Decode a schema from an already opened reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        read_json(reader)
    }

    /// Read and decode the schema file at `path`.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_json_file(path.as_ref())
    }

    /// Resolve the schema against the process environment.
    pub fn resolve(&self) -> Result<ResolvedEnvironment, ConfigError> {
        resolve(self, &ProcessEnvironment)
    }

    /// Resolve the schema against an arbitrary variable lookup.
    pub fn resolve_with<E: Environment + ?Sized>(
        &self,
        env: &E,
    ) -> Result<ResolvedEnvironment, ConfigError> {
        resolve(self, env)
    }
}
