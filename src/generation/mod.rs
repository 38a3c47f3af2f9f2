//! Generation resource
//!
//! Accessor and response schemas for the `/generation` endpoint.

mod api;
mod types;

pub use api::GenerationApi;
pub use types::{Generation, GenerationList, GenerationRef};
