//! Show command implementation.
//!
//! Shows a single registry repository. Repositories are addressed by their
//! own id here, without a project scope.

use anyhow::{Context, Result};
use clap::Args;

use amphora_registry::{ResourceId, ShowParams};

use super::ConnectionArgs;

/// Arguments for the show command.
#[derive(Args)]
pub struct ShowArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Registry repository id
    pub repository: ResourceId,

    /// Include the tag list
    #[arg(long)]
    pub tags: bool,

    /// Include the tag count
    #[arg(long)]
    pub tags_count: bool,

    /// Include the repository size
    #[arg(long)]
    pub size: bool,

    /// Print the raw JSON response
    #[arg(long)]
    pub json: bool,
}

/// Runs the show command.
///
/// # Errors
///
/// Returns an error if the repository cannot be fetched.
pub async fn run(args: &ShowArgs) -> Result<()> {
    let client = args.connection.client()?;

    let mut params = ShowParams::default();
    if args.tags {
        params = params.with_tags(true);
    }
    if args.tags_count {
        params = params.with_tags_count(true);
    }
    if args.size {
        params = params.with_size(true);
    }

    let repository = client
        .show(args.repository.clone(), params)
        .await
        .context("Failed to fetch registry repository")?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&repository)?);
        return Ok(());
    }

    println!("Repository Information:");
    println!("  Id:       {}", repository.id);
    println!("  Path:     {}", repository.path);
    println!("  Location: {}", repository.location);
    println!("  Created:  {}", repository.created_at);

    if let Some(size) = repository.size {
        println!("  Size:     {size} bytes");
    }
    if let Some(count) = repository.tags_count {
        println!("  Tags:     {count}");
    }
    if let Some(ref tags) = repository.tags {
        for tag in tags {
            println!("    - {}", tag.name);
        }
    }

    Ok(())
}
