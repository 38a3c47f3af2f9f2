//! Shared resource types
//!
//! The pieces every resource kind has in common: its kind tag, named
//! references, the paginated list envelope and the endpoint plumbing
//! used by the per-resource accessors.

use crate::backend::BackendExt;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::pagination::{Pageable, Paginator};
use crate::urlutil::build_url;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;

// ============================================================================
// Resource Kind
// ============================================================================

/// The resource kinds exposed by the SDK
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Resource {
    Pokemon,
    Generation,
}

impl Resource {
    /// API path of the resource collection
    pub fn path(self) -> &'static str {
        match self {
            Resource::Pokemon => "/pokemon",
            Resource::Generation => "/generation",
        }
    }

    /// Plural name used in error messages
    pub fn plural(self) -> &'static str {
        match self {
            Resource::Pokemon => "pokemon",
            Resource::Generation => "generations",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resource::Pokemon => write!(f, "pokemon"),
            Resource::Generation => write!(f, "generation"),
        }
    }
}

// ============================================================================
// References
// ============================================================================

/// A name plus the absolute URL of the full resource
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedApiResource {
    pub name: String,
    pub url: String,
}

/// A name localized into a specific language
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocalizedName {
    pub language: NamedApiResource,
    pub name: String,
}

/// Common view of the reference types returned in list results
pub trait ResourceRef {
    fn name(&self) -> &str;
    fn url(&self) -> &str;
}

impl ResourceRef for NamedApiResource {
    fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> &str {
        &self.url
    }
}

// ============================================================================
// List Envelope
// ============================================================================

/// One page of a resource collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamedList<R> {
    pub count: u32,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<R>,
}

impl<R> Pageable for NamedList<R> {
    fn next_url(&self) -> Option<&str> {
        self.next.as_deref()
    }
}

// ============================================================================
// Endpoint
// ============================================================================

/// Backend calls for one resource kind
#[derive(Debug, Clone)]
pub(crate) struct Endpoint {
    config: Config,
    resource: Resource,
}

impl Endpoint {
    pub(crate) fn new(config: Config, resource: Resource) -> Self {
        Self { config, resource }
    }

    /// URL of the collection
    pub(crate) fn collection_url(&self) -> String {
        build_url(self.config.base_url(), self.resource.path())
    }

    /// URL of a single item by id or name
    pub(crate) fn item_url(&self, key: &str) -> String {
        build_url(&self.collection_url(), key)
    }

    /// Fetch and decode a single resource from an absolute URL
    pub(crate) async fn get<T>(&self, url: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        self.config
            .backend()
            .process::<T>(url, None)
            .await
            .map_err(|e| {
                Error::from_backend(self.resource, format!("error getting {}", self.resource), e)
            })
    }

    /// Paginator over the collection
    pub(crate) fn list<R>(&self) -> Paginator<NamedList<R>>
    where
        R: DeserializeOwned + Send + 'static,
    {
        let backend = self.config.backend().clone();
        let context = format!("error listing {}", self.resource.plural());

        Paginator::new(self.collection_url(), move |url: String| {
            let backend = backend.clone();
            let context = context.clone();
            async move {
                backend
                    .process::<NamedList<R>>(&url, None)
                    .await
                    .map_err(|e| Error::backend(context, e))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_resource_names() {
        assert_eq!(Resource::Pokemon.to_string(), "pokemon");
        assert_eq!(Resource::Generation.to_string(), "generation");
        assert_eq!(Resource::Pokemon.plural(), "pokemon");
        assert_eq!(Resource::Generation.plural(), "generations");
        assert_eq!(Resource::Generation.path(), "/generation");
    }

    #[test]
    fn test_named_list_next_url() {
        let list: NamedList<NamedApiResource> = serde_json::from_value(json!({
            "count": 2,
            "next": "https://pokeapi.co/api/v2/pokemon?offset=1&limit=1",
            "previous": null,
            "results": [{"name": "bulbasaur", "url": "https://pokeapi.co/api/v2/pokemon/1/"}]
        }))
        .unwrap();

        assert_eq!(
            list.next_url(),
            Some("https://pokeapi.co/api/v2/pokemon?offset=1&limit=1")
        );
        assert_eq!(list.results[0].name(), "bulbasaur");

        let last: NamedList<NamedApiResource> = serde_json::from_value(json!({
            "count": 2,
            "next": null,
            "previous": "https://pokeapi.co/api/v2/pokemon?offset=0&limit=1",
            "results": []
        }))
        .unwrap();
        assert_eq!(last.next_url(), None);
    }

    #[test]
    fn test_endpoint_urls() {
        let config = Config::builder()
            .base_url("http://example.com/api/v2/")
            .backend(crate::testing::MockBackend::new())
            .build()
            .unwrap();
        let endpoint = Endpoint::new(config, Resource::Pokemon);

        assert_eq!(endpoint.collection_url(), "http://example.com/api/v2/pokemon");
        assert_eq!(endpoint.item_url("25"), "http://example.com/api/v2/pokemon/25");
    }
}
