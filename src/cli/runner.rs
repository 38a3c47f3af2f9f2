//! CLI runner - executes commands

use crate::cli::commands::{Cli, Commands, ResourceAction};
use crate::client::Client;
use crate::config::{Config, ConfigFile};
use crate::error::Result;
use crate::pagination::Paginator;
use crate::resource::{NamedList, ResourceRef};
use futures::StreamExt;
use serde::Serialize;
use std::future::Future;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = self.client()?;

        match &self.cli.command {
            Commands::Pokemon { action } => match action {
                ResourceAction::List { pages } => list(client.pokemon.list(), *pages).await,
                ResourceAction::Get { id_or_name } => {
                    get(
                        id_or_name,
                        |id| client.pokemon.get_by_id(id),
                        |name| client.pokemon.get_by_name(name),
                    )
                    .await
                }
            },
            Commands::Generation { action } => match action {
                ResourceAction::List { pages } => list(client.generation.list(), *pages).await,
                ResourceAction::Get { id_or_name } => {
                    get(
                        id_or_name,
                        |id| client.generation.get_by_id(id),
                        |name| client.generation.get_by_name(name),
                    )
                    .await
                }
            },
        }
    }

    /// Build the client from the config file and flags
    fn client(&self) -> Result<Client> {
        let mut builder = match &self.cli.config {
            Some(path) => ConfigFile::from_path(path)?.into_builder(),
            None => Config::builder(),
        };

        if let Some(url) = &self.cli.base_url {
            builder = builder.base_url(url);
        }

        Ok(Client::with_config(builder.build()?))
    }
}

/// Print every name in the collection, stopping after `max_pages` pages
async fn list<R>(paginator: Paginator<NamedList<R>>, max_pages: Option<u64>) -> Result<()>
where
    R: ResourceRef + Send + 'static,
{
    let cancel = CancellationToken::new();
    let mut pages = paginator.all(cancel.clone());
    let mut seen: u64 = 0;

    while let Some(page) = pages.next().await {
        let page = page?;
        for resource in &page.results {
            println!("{}", resource.name());
        }

        seen += 1;
        if max_pages.is_some_and(|max| seen >= max) {
            debug!(pages = seen, "Page limit reached");
            cancel.cancel();
            break;
        }
    }

    Ok(())
}

/// Resolve numeric input by id, anything else by name, and print the result
async fn get<'a, T, ById, ByName, F1, F2>(
    id_or_name: &'a str,
    by_id: ById,
    by_name: ByName,
) -> Result<()>
where
    T: Serialize,
    ById: FnOnce(u32) -> F1,
    ByName: FnOnce(&'a str) -> F2,
    F1: Future<Output = Result<T>>,
    F2: Future<Output = Result<T>>,
{
    let resource = match id_or_name.parse::<u32>() {
        Ok(id) => by_id(id).await?,
        Err(_) => by_name(id_or_name).await?,
    };

    println!("{}", serde_json::to_string_pretty(&resource)?);
    Ok(())
}
