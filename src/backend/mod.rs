//! Transport backend module
//!
//! Decouples resource accessors from the network layer. Accessors only
//! see the [`Backend`] trait; [`HttpBackend`] is the default `reqwest`
//! implementation.
//!
//! # Failure taxonomy
//!
//! - **Not found**: the only recognized condition, see [`BackendError::is_not_found`]
//! - **Request**: connection, timeout and protocol errors
//! - **Status**: a non-2xx, non-404 response
//! - **Decode**: a body that does not parse into the expected type

mod http;
mod types;

pub use http::{HttpBackend, HttpBackendConfig, HttpBackendConfigBuilder};
pub use types::{decode_json, Backend, BackendError, BackendExt, Query};
