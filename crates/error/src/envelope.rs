//! The error envelope record.
//!
//! Responsibilities:
//! - Define the envelope fields and their JSON wire names.
//! - Infer the status text from the status code.
//! - Wrap arbitrary errors into an internal-error envelope.
//!
//! Does NOT handle:
//! - Writing the HTTP response (see `response.rs`).
//!
//! Invariants:
//! - Wire names are `code`, `title`, `description`, `httpCode`, `httpError`.
//! - Wrapping overwrites every field and always yields status 500.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::constants::{INTERNAL_ERROR_CODE, INTERNAL_ERROR_TITLE};
use crate::status::status_text;

/// Response body for an error that occurred while handling a request.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {title}: {description}")]
pub struct ServiceError {
    /// Short code identifying the error and the service, e.g. `orders.NOT_FOUND`.
    pub code: String,
    /// Human-readable title.
    pub title: String,
    /// Human-readable description of what went wrong.
    pub description: String,
    /// Status code the envelope is sent with.
    #[serde(rename = "httpCode")]
    pub http_status_code: u16,
    /// Reason phrase for `http_status_code`.
    #[serde(rename = "httpError")]
    pub http_status_text: String,
}

impl ServiceError {
    /// Build an envelope, inferring the status text from `http_status_code`.
    pub fn new(
        code: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        http_status_code: u16,
    ) -> Self {
        Self {
            code: code.into(),
            title: title.into(),
            description: description.into(),
            http_status_code,
            http_status_text: status_text(http_status_code).to_string(),
        }
    }

    /// Set `http_status_text` from the current `http_status_code`.
    ///
    /// Unknown codes leave the text empty.
    pub fn infer_http_status_text(&mut self) {
        self.http_status_text = status_text(self.http_status_code).to_string();
    }

    /// Wrap `err` into an internal-error envelope with status 500.
    ///
    /// `service_names` are joined with `.` to prefix the error code.
    pub fn wrap<E>(err: &E, service_names: &[&str]) -> Self
    where
        E: std::error::Error + ?Sized,
    {
        let mut envelope = Self::new("", "", "", 500);
        envelope.wrap_error(err, service_names);
        envelope
    }

    /// In-place variant of [`ServiceError::wrap`]; every field is overwritten.
    pub fn wrap_error<E>(&mut self, err: &E, service_names: &[&str])
    where
        E: std::error::Error + ?Sized,
    {
        self.code = internal_error_code(service_names);
        self.title = INTERNAL_ERROR_TITLE.to_string();
        self.description = err.to_string();
        self.http_status_code = 500;
        self.infer_http_status_text();

        tracing::debug!(code = %self.code, error = %err, "Wrapped internal error");
    }

    /// Serialize the envelope to its JSON wire form.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

fn internal_error_code(service_names: &[&str]) -> String {
    if service_names.is_empty() {
        INTERNAL_ERROR_CODE.to_string()
    } else {
        format!("{}.{}", service_names.join("."), INTERNAL_ERROR_CODE)
    }
}
