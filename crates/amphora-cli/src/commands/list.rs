//! List command implementation.
//!
//! Lists the registry repositories of a project.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use amphora_registry::{ListParams, ResourceId};

use super::ConnectionArgs;

/// Arguments for the list command.
#[derive(Args)]
pub struct ListArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Project id or namespaced path (e.g. `group/project`)
    pub project: ResourceId,

    /// Include each repository's tag list
    #[arg(long)]
    pub tags: bool,

    /// Include each repository's tag count
    #[arg(long)]
    pub tags_count: bool,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

/// Runs the list command.
///
/// # Errors
///
/// Returns an error if the repositories cannot be listed.
pub async fn run(args: &ListArgs) -> Result<()> {
    info!(project = %args.project, "Listing registry repositories");

    let client = args.connection.client()?;

    let mut params = ListParams::default();
    if args.tags {
        params = params.with_tags(true);
    }
    if args.tags_count {
        params = params.with_tags_count(true);
    }

    let repositories = client
        .list(args.project.clone(), params)
        .await
        .context("Failed to list registry repositories")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&repositories)?);
        return Ok(());
    }

    if repositories.is_empty() {
        println!("No registry repositories found.");
        return Ok(());
    }

    for repository in &repositories {
        match repository.tags_count {
            Some(count) => println!(
                "{:>8}  {}  ({count} tags)",
                repository.id, repository.location
            ),
            None => println!("{:>8}  {}", repository.id, repository.location),
        }

        if let Some(ref tags) = repository.tags {
            for tag in tags {
                println!("          - {}", tag.name);
            }
        }
    }

    Ok(())
}
