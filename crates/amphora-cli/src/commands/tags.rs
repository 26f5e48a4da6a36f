//! Tags command implementation.
//!
//! Lists the tags of a registry repository.

use anyhow::{Context, Result};
use clap::Args;

use amphora_registry::ResourceId;

use super::ConnectionArgs;

/// Arguments for the tags command.
#[derive(Args)]
pub struct TagsArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Project id or namespaced path (e.g. `group/project`)
    pub project: ResourceId,

    /// Registry repository id
    pub repository: ResourceId,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

/// Runs the tags command.
///
/// # Errors
///
/// Returns an error if the tags cannot be listed.
pub async fn run(args: &TagsArgs) -> Result<()> {
    let client = args.connection.client()?;

    let tags = client
        .list_tags(args.project.clone(), args.repository.clone())
        .await
        .context("Failed to list registry tags")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tags)?);
        return Ok(());
    }

    if tags.is_empty() {
        println!("No tags found.");
        return Ok(());
    }

    for tag in &tags {
        println!("{}  {}", tag.name, tag.location);
    }

    Ok(())
}
