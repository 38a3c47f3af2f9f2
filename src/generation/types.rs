//! Generation response schemas

use crate::resource::{LocalizedName, NamedApiResource, NamedList, ResourceRef};
use serde::{Deserialize, Serialize};

/// Reference to a Generation, as returned by list calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRef {
    pub name: String,
    pub url: String,
}

impl ResourceRef for GenerationRef {
    fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> &str {
        &self.url
    }
}

/// One page of the Generation collection
pub type GenerationList = NamedList<GenerationRef>;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Generation {
    pub id: u32,
    pub name: String,
    pub abilities: Vec<NamedApiResource>,
    pub main_region: NamedApiResource,
    pub moves: Vec<NamedApiResource>,
    pub names: Vec<LocalizedName>,
    pub pokemon_species: Vec<NamedApiResource>,
    pub types: Vec<NamedApiResource>,
    pub version_groups: Vec<NamedApiResource>,
}
