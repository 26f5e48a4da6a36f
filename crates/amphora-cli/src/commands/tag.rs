//! Tag command implementation.
//!
//! Shows a single registry tag.

use anyhow::{Context, Result};
use clap::Args;

use amphora_registry::ResourceId;

use super::ConnectionArgs;

/// Arguments for the tag command.
#[derive(Args)]
pub struct TagArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Project id or namespaced path (e.g. `group/project`)
    pub project: ResourceId,

    /// Registry repository id
    pub repository: ResourceId,

    /// Tag name
    pub tag_name: String,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

/// Runs the tag command.
///
/// # Errors
///
/// Returns an error if the tag cannot be fetched.
pub async fn run(args: &TagArgs) -> Result<()> {
    let client = args.connection.client()?;

    let tag = client
        .show_tag(
            args.project.clone(),
            args.repository.clone(),
            &args.tag_name,
        )
        .await
        .context("Failed to fetch registry tag")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&tag)?);
        return Ok(());
    }

    println!("Tag Information:");
    println!("  Name:     {}", tag.name);
    println!("  Path:     {}", tag.path);
    println!("  Location: {}", tag.location);

    if let Some(ref digest) = tag.digest {
        println!("  Digest:   {digest}");
    }
    if let Some(created_at) = tag.created_at {
        println!("  Created:  {created_at}");
    }
    if let Some(total_size) = tag.total_size {
        println!("  Size:     {total_size} bytes");
    }

    Ok(())
}
