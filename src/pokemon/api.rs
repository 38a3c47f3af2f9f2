//! Pokemon endpoint accessor

use super::types::{Pokemon, PokemonList, PokemonRef};
use crate::config::Config;
use crate::error::Result;
use crate::pagination::Paginator;
use crate::resource::{Endpoint, Resource};

/// Access to the Pokemon API endpoints
#[derive(Debug, Clone)]
pub struct PokemonApi {
    endpoint: Endpoint,
}

impl PokemonApi {
    pub(crate) fn new(config: Config) -> Self {
        Self {
            endpoint: Endpoint::new(config, Resource::Pokemon),
        }
    }

    /// Paginator over every Pokemon.
    ///
    /// Takes no cancellation token: pass one to [`Paginator::all`] instead.
    pub fn list(&self) -> Paginator<PokemonList> {
        self.endpoint.list()
    }

    /// Get a Pokemon by its numeric id
    pub async fn get_by_id(&self, id: u32) -> Result<Pokemon> {
        self.endpoint.get(&self.endpoint.item_url(&id.to_string())).await
    }

    /// Get a Pokemon by its name
    pub async fn get_by_name(&self, name: &str) -> Result<Pokemon> {
        self.endpoint.get(&self.endpoint.item_url(name)).await
    }

    /// Get the Pokemon behind a reference returned by [`PokemonApi::list`]
    pub async fn get_by_ref(&self, reference: &PokemonRef) -> Result<Pokemon> {
        self.endpoint.get(&reference.url).await
    }
}
