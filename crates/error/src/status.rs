//! HTTP status text inference.

use axum::http::StatusCode;

/// Standard reason phrase for `code`, or `""` when the code is unknown.
pub fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or("")
}
