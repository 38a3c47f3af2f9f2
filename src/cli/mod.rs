//! CLI module
//!
//! Command-line interface for browsing the API.
//!
//! # Commands
//!
//! - `pokemon list` / `generation list` - Stream collection pages
//! - `pokemon get` / `generation get` - Fetch one resource by id or name

mod commands;
mod runner;

pub use commands::{Cli, Commands, ResourceAction};
pub use runner::Runner;
