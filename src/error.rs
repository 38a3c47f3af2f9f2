//! Error types for the PokeAPI SDK
//!
//! This module defines the error hierarchy for the whole SDK.
//! All public APIs return `Result<T, Error>` where Error is defined here.
//!
//! Transport failures are described by [`BackendError`]; accessors wrap
//! them with the operation that failed, except for "not found", which is
//! mapped to a typed [`Error::NotFound`] carrying the resource kind.

use crate::backend::BackendError;
use crate::resource::Resource;
use thiserror::Error;

/// The main error type for the SDK
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Resource Errors
    // ============================================================================
    /// The requested resource does not exist
    #[error("{0}: not found")]
    NotFound(Resource),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    /// A backend call failed for any reason other than "not found"
    #[error("pokesdk: {context}: {source}")]
    Backend {
        context: String,
        #[source]
        source: BackendError,
    },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Wrap a backend failure with the operation that produced it
    pub fn backend(context: impl Into<String>, source: BackendError) -> Self {
        Self::Backend {
            context: context.into(),
            source,
        }
    }

    /// Map a backend failure for `resource`, turning "not found" into the
    /// resource-specific error and wrapping everything else with `context`.
    pub fn from_backend(
        resource: Resource,
        context: impl Into<String>,
        source: BackendError,
    ) -> Self {
        if source.is_not_found() {
            Self::NotFound(resource)
        } else {
            Self::backend(context, source)
        }
    }

    /// True for every "not found" condition, whatever the resource kind.
    pub fn is_not_found(&self) -> bool {
        match self {
            Error::NotFound(_) => true,
            Error::Backend { source, .. } => source.is_not_found(),
            _ => false,
        }
    }

    /// The resource kind of a not-found error, if this is one
    pub fn not_found_kind(&self) -> Option<Resource> {
        match self {
            Error::NotFound(resource) => Some(*resource),
            _ => None,
        }
    }

    /// The HTTP status of a non-2xx response, if that is what failed
    pub fn backend_status(&self) -> Option<u16> {
        match self {
            Error::Backend {
                source: BackendError::Status { status },
                ..
            } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for the SDK
pub type Result<T> = std::result::Result<T, Error>;
