//! Pokemon response schemas
//!
//! Fields missing from a response fall back to their defaults; nullable
//! fields are `Option`.

use crate::resource::{NamedApiResource, NamedList, ResourceRef};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Reference to a Pokemon, as returned by list calls
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PokemonRef {
    pub name: String,
    pub url: String,
}

impl ResourceRef for PokemonRef {
    fn name(&self) -> &str {
        &self.name
    }

    fn url(&self) -> &str {
        &self.url
    }
}

impl From<NamedApiResource> for PokemonRef {
    fn from(resource: NamedApiResource) -> Self {
        Self {
            name: resource.name,
            url: resource.url,
        }
    }
}

/// One page of the Pokemon collection
pub type PokemonList = NamedList<PokemonRef>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Pokemon {
    pub id: u32,
    pub name: String,
    pub abilities: Vec<PokemonAbility>,
    pub base_experience: Option<u32>,
    pub cries: PokemonCries,
    pub forms: Vec<NamedApiResource>,
    pub game_indices: Vec<GameIndex>,
    pub height: u32,
    pub held_items: Vec<HeldItem>,
    pub is_default: bool,
    pub location_area_encounters: String,
    pub moves: Vec<PokemonMove>,
    pub order: i32,
    pub past_abilities: Vec<PastAbilities>,
    pub past_types: Vec<PastTypes>,
    pub species: NamedApiResource,
    pub sprites: PokemonSprites,
    pub stats: Vec<PokemonStat>,
    pub types: Vec<PokemonType>,
    pub weight: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonAbility {
    pub ability: NamedApiResource,
    pub is_hidden: bool,
    pub slot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonCries {
    pub latest: Option<String>,
    pub legacy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameIndex {
    pub game_index: u32,
    pub version: NamedApiResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastTypes {
    pub generation: NamedApiResource,
    pub types: Vec<PokemonType>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeldItem {
    pub item: NamedApiResource,
    pub version_details: Vec<VersionDetails>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonMove {
    #[serde(rename = "move")]
    pub move_: NamedApiResource,
    pub version_group_details: Vec<MoveVersionGroupDetail>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MoveVersionGroupDetail {
    pub level_learned_at: u32,
    pub move_learn_method: NamedApiResource,
    pub order: Option<u32>,
    pub version_group: NamedApiResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastAbilities {
    pub abilities: Vec<PastAbility>,
    pub generation: NamedApiResource,
}

/// Ability slot in a past generation; the ability is null for removed slots
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PastAbility {
    pub ability: Option<NamedApiResource>,
    pub is_hidden: bool,
    pub slot: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonSprites {
    pub back_default: Option<String>,
    pub back_female: Option<String>,
    pub back_shiny: Option<String>,
    pub back_shiny_female: Option<String>,
    pub front_default: Option<String>,
    pub front_female: Option<String>,
    pub front_shiny: Option<String>,
    pub front_shiny_female: Option<String>,
    /// Artwork sets keyed by source, e.g. `official-artwork`
    pub other: HashMap<String, HashMap<String, Option<String>>>,
    /// Per-generation, per-game sprite sets
    pub versions: HashMap<String, HashMap<String, Value>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonStat {
    pub base_stat: u32,
    pub effort: u32,
    pub stat: NamedApiResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PokemonType {
    pub slot: u32,
    #[serde(rename = "type")]
    pub type_: NamedApiResource,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VersionDetails {
    pub rarity: u32,
    pub version: NamedApiResource,
}
