//! Visibility command implementation.
//!
//! Changes a project's container registry access level. The level is a
//! field on the project resource, so the update addresses the project
//! itself rather than a registry sub-resource.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use amphora_registry::{AccessLevel, ResourceId, VisibilityParams};

use super::ConnectionArgs;

/// Arguments for the visibility command.
#[derive(Args)]
pub struct VisibilityArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Project id or namespaced path (e.g. `group/project`)
    pub project: ResourceId,

    /// Desired access level: enabled, private or disabled
    pub level: AccessLevel,
}

/// Runs the visibility command.
///
/// # Errors
///
/// Returns an error if the visibility cannot be changed.
pub async fn run(args: &VisibilityArgs) -> Result<()> {
    info!(
        project = %args.project,
        level = %args.level,
        "Changing container registry visibility"
    );

    let client = args.connection.client()?;

    let project = client
        .change_visibility(args.project.clone(), VisibilityParams::new(args.level))
        .await
        .context("Failed to change container registry visibility")?;

    match project.container_registry_access_level {
        Some(level) => println!(
            "Container registry of project {} is now '{level}'.",
            args.project
        ),
        None => println!("Container registry visibility of project {} updated.", args.project),
    }

    Ok(())
}
