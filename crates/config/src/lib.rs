//! Environment configuration for svckit microservices.
//!
//! This crate loads a JSON environment schema, resolves it against the
//! process environment (including Docker-secret `_FILE` indirection), and
//! exposes the authorization middleware configuration document.

pub mod authorization;
pub mod constants;
mod document;
mod dotenv;
mod env;
mod error;
mod resolved;
mod resolver;
mod schema;

pub use authorization::AuthorizationConfig;
pub use dotenv::{load_dotenv, load_dotenv_from};
pub use env::{Environment, MapEnvironment, ProcessEnvironment};
pub use error::ConfigError;
pub use resolved::ResolvedEnvironment;
pub use resolver::{MissingPolicy, resolve, resolve_variable};
pub use schema::EnvironmentSchema;
