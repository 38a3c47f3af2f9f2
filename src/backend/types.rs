//! Backend trait and error types

use async_trait::async_trait;
use bytes::Bytes;
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fmt;
use thiserror::Error;

/// Query parameters appended to a request URL
pub type Query = HashMap<String, String>;

/// Failures reported by a [`Backend`]
#[derive(Error, Debug)]
pub enum BackendError {
    #[error("resource not found")]
    NotFound,

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP request failed with status code {status}")]
    Status { status: u16 },

    #[error("failed to decode HTTP response body: failed to decode JSON for type {type_name}: {source}")]
    Decode {
        type_name: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid request URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl BackendError {
    /// Check if the backend reported a missing resource
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// A transport able to GET a URL and hand back the response body.
///
/// Implementations must map a missing resource to [`BackendError::NotFound`]
/// and must not retry.
#[async_trait]
pub trait Backend: Send + Sync + fmt::Debug {
    /// Fetch `url` with optional query parameters, returning the body of a
    /// successful response.
    async fn fetch(&self, url: &str, params: Option<&Query>) -> Result<Bytes, BackendError>;
}

/// Typed helpers available on every [`Backend`]
#[async_trait]
pub trait BackendExt: Backend {
    /// Fetch `url` and decode the body into `T`
    async fn process<T>(&self, url: &str, params: Option<&Query>) -> Result<T, BackendError>
    where
        T: DeserializeOwned + Send,
    {
        let body = self.fetch(url, params).await?;
        decode_json(&body)
    }

    /// Fetch `url` and discard the body
    async fn process_discard(&self, url: &str, params: Option<&Query>) -> Result<(), BackendError> {
        self.fetch(url, params).await.map(|_| ())
    }
}

impl<B: Backend + ?Sized> BackendExt for B {}

/// Decode a JSON body into a fresh `T`
pub fn decode_json<T: DeserializeOwned>(body: &[u8]) -> Result<T, BackendError> {
    serde_json::from_slice(body).map_err(|source| BackendError::Decode {
        type_name: std::any::type_name::<T>(),
        source,
    })
}
