//! Generation endpoint accessor

use super::types::{Generation, GenerationList, GenerationRef};
use crate::config::Config;
use crate::error::Result;
use crate::pagination::Paginator;
use crate::resource::{Endpoint, Resource};

/// Access to the Generation API endpoints
#[derive(Debug, Clone)]
pub struct GenerationApi {
    endpoint: Endpoint,
}

impl GenerationApi {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, Resource::Generation),
        }
    }

    /// Paginator over every Generation
    pub fn list(&self) -> Paginator<GenerationList> {
        self.endpoint.list()
    }

    pub async fn get_by_id(&self, id: u32) -> Result<Generation> {
        self.endpoint.get(&self.endpoint.item_url(&id.to_string())).await
    }

    pub async fn get_by_name(&self, name: &str) -> Result<Generation> {
        self.endpoint.get(&self.endpoint.item_url(name)).await
    }

    /// Get the Generation behind a reference returned by [`GenerationApi::list`]
    pub async fn get_by_ref(&self, reference: &GenerationRef) -> Result<Generation> {
        self.endpoint.get(&reference.url).await
    }
}
