//! CLI commands and argument parsing

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// PokeAPI command-line client
#[derive(Parser, Debug)]
#[command(name = "pokesdk")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the API
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Configuration file (YAML or JSON)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Pokemon endpoints
    Pokemon {
        #[command(subcommand)]
        action: ResourceAction,
    },

    /// Generation endpoints
    Generation {
        #[command(subcommand)]
        action: ResourceAction,
    },
}

/// Operations available on every resource
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ResourceAction {
    /// List resource names, page by page
    List {
        /// Stop after this many pages
        #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
        pages: Option<u64>,
    },

    /// Fetch one resource by numeric id or name
    Get {
        /// Id or name
        id_or_name: String,
    },
}
