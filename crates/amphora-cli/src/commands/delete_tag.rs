//! Delete-tag command implementation.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use amphora_registry::ResourceId;

use super::ConnectionArgs;

/// Arguments for the delete-tag command.
#[derive(Args)]
pub struct DeleteTagArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Project id or namespaced path (e.g. `group/project`)
    pub project: ResourceId,

    /// Registry repository id
    pub repository: ResourceId,

    /// Tag name
    pub tag_name: String,
}

/// Runs the delete-tag command.
///
/// # Errors
///
/// Returns an error if the tag cannot be deleted.
pub async fn run(args: &DeleteTagArgs) -> Result<()> {
    info!(
        project = %args.project,
        repository = %args.repository,
        tag = %args.tag_name,
        "Deleting registry tag"
    );

    let client = args.connection.client()?;

    client
        .remove_tag(
            args.project.clone(),
            args.repository.clone(),
            &args.tag_name,
        )
        .await
        .context("Failed to delete registry tag")?;

    println!("Tag '{}' deleted.", args.tag_name);

    Ok(())
}
