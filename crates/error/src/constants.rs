//! Wire constants for the error envelope.

/// `Content-Type` header sent with every envelope.
pub const CONTENT_TYPE: &str = "text/json; charset=utf-8";

/// Code suffix used when wrapping an unexpected error.
pub const INTERNAL_ERROR_CODE: &str = "INTERNAL_ERROR";

/// Title used when wrapping an unexpected error.
pub const INTERNAL_ERROR_TITLE: &str = "Internal Error in Microservice";
