//! Authorization middleware configuration.
//!
//! Loaded from a JSON document of the form
//! `{"enableAuth": true, "requireUserID": true, "requiredUserGroup": "admins"}`.

use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::document::{null_as_default, read_json, read_json_file};
use crate::error::ConfigError;

/// How the authorization middleware of a microservice should behave.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationConfig {
    /// Whether authorization is enabled and enforced.
    #[serde(rename = "enableAuth", default, deserialize_with = "null_as_default")]
    pub enabled: bool,

    /// Whether a user id must be present for a request to be allowed.
    #[serde(rename = "requireUserID", default, deserialize_with = "null_as_default")]
    pub require_user_identification: bool,

    /// Group a user must belong to in order to access the service.
    #[serde(rename = "requiredUserGroup", default, deserialize_with = "null_as_default")]
    pub required_user_group: String,
}

impl AuthorizationConfig {
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        read_json(reader)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        read_json_file(path.as_ref())
    }

    /// The group requirement, or `None` when no group is configured.
    pub fn required_group(&self) -> Option<&str> {
        let group = self.required_user_group.trim();
        (!group.is_empty()).then_some(group)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_reader_uses_wire_names() {
        let json = r#"{"enableAuth": true, "requireUserID": true, "requiredUserGroup": "ops"}"#;
        let config = AuthorizationConfig::from_reader(json.as_bytes()).unwrap();

        assert!(config.enabled);
        assert!(config.require_user_identification);
        assert_eq!(config.required_user_group, "ops");
        assert_eq!(config.required_group(), Some("ops"));
    }

    #[test]
    fn test_missing_fields_default() {
        let config = AuthorizationConfig::from_reader(r#"{"enableAuth": true}"#.as_bytes()).unwrap();

        assert!(config.enabled);
        assert!(!config.require_user_identification);
        assert!(config.required_group().is_none());
    }

    #[test]
    fn test_null_fields_default() {
        let json = r#"{"enableAuth": null, "requireUserID": true, "requiredUserGroup": null}"#;
        let config = AuthorizationConfig::from_reader(json.as_bytes()).unwrap();

        assert!(!config.enabled);
        assert!(config.require_user_identification);
        assert_eq!(config.required_user_group, "");
    }

    #[test]
    fn test_serializes_with_wire_names() {
        let config = AuthorizationConfig {
            enabled: true,
            require_user_identification: false,
            required_user_group: "admins".to_string(),
        };
        let value = serde_json::to_value(&config).unwrap();

        assert_eq!(value["enableAuth"], true);
        assert_eq!(value["requireUserID"], false);
        assert_eq!(value["requiredUserGroup"], "admins");
    }
}
