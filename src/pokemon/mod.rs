//! Pokemon resource
//!
//! Accessor and response schemas for the `/pokemon` endpoint.

mod api;
mod types;

pub use api::PokemonApi;
pub use types::*;
