//! # pokesdk
//!
//! A typed, async client for the [PokeAPI](https://pokeapi.co) REST service.
//!
//! ## Features
//!
//! - **Typed resources**: Pokemon and Generation schemas with serde
//! - **Cursor pagination**: `next`-URL following with a shared, serialized cursor
//! - **Page streams**: lazily produced, cancellable `Stream` of pages
//! - **Pluggable transport**: swap the reqwest backend for any [`Backend`]
//! - **Typed not-found errors**: per resource kind, matchable as one condition
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use futures::StreamExt;
//! use pokesdk::{CancellationToken, Client, Result};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = Client::new()?;
//!
//!     // One page at a time
//!     let pokemon = client.pokemon.list();
//!     if let Some(page) = pokemon.next().await {
//!         let page = page?;
//!         let first = &page.results[0];
//!         let detail = client.pokemon.get_by_ref(first).await?;
//!         println!("{} weighs {}", detail.name, detail.weight);
//!     }
//!
//!     // Or as a stream
//!     let mut pages = client.generation.list().all(CancellationToken::new());
//!     while let Some(page) = pages.next().await {
//!         for generation in page?.results {
//!             println!("{}", generation.name);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │                   Client                     │
//! │      pokemon: PokemonApi   generation: ...   │
//! └──────────────────────┬───────────────────────┘
//!                        │ list() / get_by_*()
//! ┌──────────────────────┴───────────────────────┐
//! │  Paginator<T: Pageable>  ──fetch(url)──▶     │
//! │                           Backend (trait)    │
//! │                           └─ HttpBackend     │
//! └──────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the SDK
pub mod error;

/// Transport backends
pub mod backend;

/// Cursor pagination
pub mod pagination;

/// Shared resource types
pub mod resource;

/// Pokemon resource
pub mod pokemon;

/// Generation resource
pub mod generation;

/// Client configuration
pub mod config;

/// Client façade
pub mod client;

/// URL helpers
pub mod urlutil;

/// In-memory backend for tests
pub mod testing;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use backend::{Backend, BackendError, BackendExt, HttpBackend, HttpBackendConfig, Query};
pub use client::Client;
pub use config::{Config, ConfigBuilder, ConfigFile, DEFAULT_BASE_URL};
pub use error::{Error, Result};
pub use generation::{Generation, GenerationApi, GenerationList, GenerationRef};
pub use pagination::{Page, Pageable, Pages, Paginator};
pub use pokemon::{Pokemon, PokemonApi, PokemonList, PokemonRef};
pub use resource::{NamedApiResource, NamedList, Resource, ResourceRef};
pub use tokio_util::sync::CancellationToken;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
