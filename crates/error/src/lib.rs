//! Standardized JSON error envelope for svckit microservices.
//!
//! Every service answers failed requests with the same body:
//!
//! ```json
//! {"code": "orders.INTERNAL_ERROR", "title": "...", "description": "...",
//!  "httpCode": 500, "httpError": "Internal Server Error"}
//! ```

pub mod constants;
mod envelope;
mod response;
mod status;

pub use envelope::ServiceError;
pub use status::status_text;
