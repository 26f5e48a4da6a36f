//! Cleanup command implementation.
//!
//! Bulk-deletes registry tags according to a cleanup policy. The instance
//! executes the deletion in the background; this command only submits it.

use anyhow::{Context, Result};
use clap::Args;
use tracing::info;

use amphora_registry::{BulkDeleteParams, ResourceId};

use super::ConnectionArgs;

/// Arguments for the cleanup command.
#[derive(Args)]
pub struct CleanupArgs {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Project id or namespaced path (e.g. `group/project`)
    pub project: ResourceId,

    /// Registry repository id
    pub repository: ResourceId,

    /// Delete all tags matching this regex (e.g. `.*` or `v.+`)
    #[arg(long)]
    pub delete_regex: String,

    /// Keep all tags matching this regex, even if they match the
    /// delete regex
    #[arg(long)]
    pub keep_regex: Option<String>,

    /// Keep the N most recent tags per matching name
    #[arg(long)]
    pub keep_n: Option<u64>,

    /// Only delete tags older than this age (e.g. `1h`, `1d`, `1month`)
    #[arg(long)]
    pub older_than: Option<String>,
}

impl CleanupArgs {
    fn to_params(&self) -> BulkDeleteParams {
        let mut params = BulkDeleteParams::new(&self.delete_regex);
        if let Some(ref keep_regex) = self.keep_regex {
            params = params.with_keep_regex(keep_regex);
        }
        if let Some(keep_n) = self.keep_n {
            params = params.with_keep_n(keep_n);
        }
        if let Some(ref older_than) = self.older_than {
            params = params.with_older_than(older_than);
        }
        params
    }
}

/// Runs the cleanup command.
///
/// # Errors
///
/// Returns an error if the bulk deletion cannot be submitted.
pub async fn run(args: &CleanupArgs) -> Result<()> {
    info!(
        project = %args.project,
        repository = %args.repository,
        delete_regex = %args.delete_regex,
        "Submitting bulk tag deletion"
    );

    let client = args.connection.client()?;

    client
        .remove_tags(
            args.project.clone(),
            args.repository.clone(),
            args.to_params(),
        )
        .await
        .context("Failed to submit bulk tag deletion")?;

    println!("Bulk tag deletion submitted.");
    println!("  Delete regex: {}", args.delete_regex);
    if let Some(ref keep_regex) = args.keep_regex {
        println!("  Keep regex:   {keep_regex}");
    }
    if let Some(keep_n) = args.keep_n {
        println!("  Keep newest:  {keep_n}");
    }
    if let Some(ref older_than) = args.older_than {
        println!("  Older than:   {older_than}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_params_maps_all_fields() {
        let args = CleanupArgs {
            connection: ConnectionArgs {
                gitlab: "https://gitlab.example.com".to_string(),
                token: None,
                oauth_token: None,
                job_token: None,
                timeout: 30,
                ca_cert: None,
                insecure: false,
            },
            project: ResourceId::Id(1),
            repository: ResourceId::Id(2),
            delete_regex: "test-.+".to_string(),
            keep_regex: Some("test-foo".to_string()),
            keep_n: Some(1),
            older_than: Some("1month".to_string()),
        };

        let params = args.to_params();
        assert_eq!(params.name_regex_delete, "test-.+");
        assert_eq!(params.name_regex_keep.as_deref(), Some("test-foo"));
        assert_eq!(params.keep_n, Some(1));
        assert_eq!(params.older_than.as_deref(), Some("1month"));
    }

    #[test]
    fn test_to_params_minimal() {
        let args = CleanupArgs {
            connection: ConnectionArgs {
                gitlab: "https://gitlab.example.com".to_string(),
                token: None,
                oauth_token: None,
                job_token: None,
                timeout: 30,
                ca_cert: None,
                insecure: false,
            },
            project: ResourceId::Id(1),
            repository: ResourceId::Id(2),
            delete_regex: ".*".to_string(),
            keep_regex: None,
            keep_n: None,
            older_than: None,
        };

        let params = args.to_params();
        assert_eq!(params.name_regex_delete, ".*");
        assert!(params.name_regex_keep.is_none());
        assert!(params.keep_n.is_none());
        assert!(params.older_than.is_none());
    }
}
