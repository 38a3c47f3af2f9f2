//! Client façade
//!
//! Bundles one accessor per resource kind over a shared [`Config`].

use crate::config::{Config, ConfigBuilder};
use crate::error::Result;
use crate::generation::GenerationApi;
use crate::pokemon::PokemonApi;

/// Entry point to the PokeAPI
#[derive(Debug, Clone)]
pub struct Client {
    /// Pokemon endpoints
    pub pokemon: PokemonApi,
    /// Generation endpoints
    pub generation: GenerationApi,
}

impl Client {
    /// Create a client against the public API with default settings
    pub fn new() -> Result<Self> {
        Ok(Self::with_config(Config::builder().build()?))
    }

    /// Create a client from an existing config
    pub fn with_config(config: Config) -> Self {
        Self {
            pokemon: PokemonApi::new(config.clone()),
            generation: GenerationApi::new(config),
        }
    }

    /// Start building a config for a client
    pub fn builder() -> ConfigBuilder {
        Config::builder()
    }
}
