//! Client configuration
//!
//! [`Config`] carries the base URL and the backend shared by every
//! resource accessor. It is assembled with [`ConfigBuilder`], which fills
//! in the public PokeAPI URL and a default [`HttpBackend`] when unset.
//! [`ConfigFile`] loads the same settings from YAML or JSON.

use crate::backend::{Backend, HttpBackend, HttpBackendConfig};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

/// Base URL of the public PokeAPI
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

// ============================================================================
// Config
// ============================================================================

/// Settings shared by all resource accessors
#[derive(Debug, Clone)]
pub struct Config {
    base_url: String,
    backend: Arc<dyn Backend>,
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Base URL all resource paths are joined onto
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The backend performing requests
    pub fn backend(&self) -> &Arc<dyn Backend> {
        &self.backend
    }
}

/// Builder for [`Config`]
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    base_url: Option<String>,
    backend: Option<Arc<dyn Backend>>,
    http: HttpBackendConfig,
}

impl ConfigBuilder {
    /// Use a custom base URL
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Use the HTTP backend around an existing reqwest client
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.backend = Some(Arc::new(HttpBackend::with_client(client)));
        self
    }

    /// Transport settings for the default HTTP backend.
    ///
    /// Ignored when a client or backend is supplied.
    pub fn http_config(mut self, config: HttpBackendConfig) -> Self {
        self.http = config;
        self
    }

    /// Use a custom backend
    pub fn backend(self, backend: impl Backend + 'static) -> Self {
        self.shared_backend(Arc::new(backend))
    }

    /// Use a backend that is shared with other owners
    pub fn shared_backend(mut self, backend: Arc<dyn Backend>) -> Self {
        self.backend = Some(backend);
        self
    }

    /// Build the config, applying defaults for anything unset
    pub fn build(self) -> Result<Config> {
        let base_url = self
            .base_url
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        url::Url::parse(&base_url)
            .map_err(|e| Error::config(format!("invalid base URL '{base_url}': {e}")))?;

        let backend = match self.backend {
            Some(backend) => backend,
            None => Arc::new(
                HttpBackend::with_config(&self.http)
                    .map_err(|e| Error::config(format!("failed to build HTTP client: {e}")))?,
            ),
        };

        Ok(Config { base_url, backend })
    }
}

// ============================================================================
// Config File
// ============================================================================

/// Client settings loaded from a YAML or JSON document
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Base URL of the API
    #[serde(default)]
    pub base_url: Option<String>,
    /// Total request timeout in seconds
    #[serde(default)]
    pub timeout_secs: Option<u64>,
    /// TCP connect timeout in seconds
    #[serde(default)]
    pub connect_timeout_secs: Option<u64>,
    /// Maximum idle pooled connections per host
    #[serde(default)]
    pub max_idle_connections: Option<usize>,
    /// User agent string
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl ConfigFile {
    /// Load settings from a file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .map_err(|e| Error::config(format!("cannot read {}: {e}", path.display())))?;
        Self::parse(&content)
    }

    /// Parse settings from YAML (JSON is accepted as a subset)
    pub fn parse(content: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(content)?)
    }

    /// HTTP backend settings, with defaults for unset fields
    pub fn http_config(&self) -> HttpBackendConfig {
        let mut config = HttpBackendConfig::default();
        if let Some(secs) = self.timeout_secs {
            config.timeout = Duration::from_secs(secs);
        }
        if let Some(secs) = self.connect_timeout_secs {
            config.connect_timeout = Duration::from_secs(secs);
        }
        if let Some(max) = self.max_idle_connections {
            config.max_idle_connections = max;
        }
        if let Some(agent) = &self.user_agent {
            config.user_agent.clone_from(agent);
        }
        config
    }

    /// A builder preloaded with these settings
    pub fn into_builder(self) -> ConfigBuilder {
        let builder = Config::builder().http_config(self.http_config());
        match self.base_url {
            Some(url) => builder.base_url(url),
            None => builder,
        }
    }

    /// Build a config from these settings
    pub fn into_config(self) -> Result<Config> {
        self.into_builder().build()
    }
}
