//! Sending an envelope as an HTTP response.
//!
//! Invariants:
//! - The status line matches `httpCode` whenever the code is a valid status (100..=999).
//! - The body is the JSON envelope with `Content-Type: text/json; charset=utf-8`.

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

use crate::constants::CONTENT_TYPE;
use crate::envelope::ServiceError;

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.http_status_code).unwrap_or_else(|_| {
            tracing::warn!(
                code = %self.code,
                http_code = self.http_status_code,
                "Invalid HTTP status code in error envelope, sending 500"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        });

        match self.to_json() {
            Ok(body) => (status, [(header::CONTENT_TYPE, CONTENT_TYPE)], body).into_response(),
            Err(e) => {
                tracing::warn!(code = %self.code, error = %e, "Failed to serialize error envelope");
                status.into_response()
            }
        }
    }
}
