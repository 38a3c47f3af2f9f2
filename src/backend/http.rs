//! HTTP backend built on reqwest
//!
//! Sends a single GET per call:
//! - Query parameters are percent-encoded onto the target URL
//! - 404 maps to [`BackendError::NotFound`]
//! - Any other non-2xx status is a [`BackendError::Status`]
//!
//! The response is consumed or dropped on every path, which returns the
//! connection to the pool.

use super::types::{Backend, BackendError, Query};
use crate::urlutil::{path_and_query, with_query};
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::{debug, warn};

/// Configuration for the default HTTP backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpBackendConfig {
    /// Total request timeout
    pub timeout: Duration,
    /// TCP connect timeout
    pub connect_timeout: Duration,
    /// TCP keepalive interval
    pub tcp_keepalive: Duration,
    /// Maximum idle pooled connections per host
    pub max_idle_connections: usize,
    /// User agent string
    pub user_agent: String,
}

impl Default for HttpBackendConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(10),
            connect_timeout: Duration::from_secs(5),
            tcp_keepalive: Duration::from_secs(30),
            max_idle_connections: 100,
            user_agent: format!("pokesdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl HttpBackendConfig {
    /// Create a new config builder
    pub fn builder() -> HttpBackendConfigBuilder {
        HttpBackendConfigBuilder::default()
    }
}

/// Builder for HTTP backend config
#[derive(Debug, Default)]
pub struct HttpBackendConfigBuilder {
    config: HttpBackendConfig,
}

impl HttpBackendConfigBuilder {
    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Set the connect timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.connect_timeout = timeout;
        self
    }

    /// Set the TCP keepalive interval
    pub fn tcp_keepalive(mut self, keepalive: Duration) -> Self {
        self.config.tcp_keepalive = keepalive;
        self
    }

    /// Set the idle connection limit per host
    pub fn max_idle_connections(mut self, max: usize) -> Self {
        self.config.max_idle_connections = max;
        self
    }

    /// Set user agent
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config.user_agent = agent.into();
        self
    }

    /// Build the config
    pub fn build(self) -> HttpBackendConfig {
        self.config
    }
}

/// Backend that talks to the API over HTTP
#[derive(Debug, Clone)]
pub struct HttpBackend {
    client: Client,
}

impl HttpBackend {
    /// Create a backend with the default transport settings
    pub fn new() -> Result<Self, BackendError> {
        Self::with_config(&HttpBackendConfig::default())
    }

    /// Create a backend with custom transport settings
    pub fn with_config(config: &HttpBackendConfig) -> Result<Self, BackendError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(config.connect_timeout)
            .tcp_keepalive(config.tcp_keepalive)
            .pool_max_idle_per_host(config.max_idle_connections)
            .user_agent(&config.user_agent)
            .build()?;

        Ok(Self { client })
    }

    /// Create a backend around an existing reqwest client
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Backend for HttpBackend {
    async fn fetch(&self, url: &str, params: Option<&Query>) -> Result<Bytes, BackendError> {
        let target = with_query(url, params)?;

        let response = self.client.get(target.clone()).send().await?;
        let status = response.status();
        let path = path_and_query(&target);

        if status == StatusCode::NOT_FOUND {
            debug!(path, "Resource not found");
            return Err(BackendError::NotFound);
        }

        if !status.is_success() {
            warn!(path, status = status.as_u16(), "Request failed");
            return Err(BackendError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        debug!(
            path,
            status = status.as_u16(),
            bytes = body.len(),
            "Request succeeded"
        );
        Ok(body)
    }
}
