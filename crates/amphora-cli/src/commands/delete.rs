//! Delete command implementation.
//!
//! Deletes a whole registry repository, all tags included.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use amphora_registry::ResourceId;

use super::ConnectionArgs;

/// Arguments for the delete command.
#[derive(Args)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Project id or namespaced path (e.g. `group/project`)
    pub project: ResourceId,

    /// Registry repository id
    pub repository: ResourceId,
}

/// Runs the delete command.
///
/// # Errors
///
/// Returns an error if the repository cannot be deleted.
pub async fn run(args: &DeleteArgs) -> Result<()> {
    info!(
        project = %args.project,
        repository = %args.repository,
        "Deleting registry repository"
    );

    let client = args.connection.client()?;

    client
        .remove(args.project.clone(), args.repository.clone())
        .await
        .context("Failed to delete registry repository")?;

    println!(
        "Registry repository {} deleted from project {}.",
        args.repository, args.project
    );

    Ok(())
}
