//! CLI commands and argument parsing.

pub mod cleanup;
pub mod delete;
pub mod delete_tag;
pub mod list;
pub mod show;
pub mod tag;
pub mod tags;
pub mod visibility;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use amphora_registry::{Auth, GitlabConfig, RegistryClient, TlsConfig};

/// Amphora - Container registry housekeeping for GitLab projects
#[derive(Parser)]
#[command(name = "amphora")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
pub enum Commands {
    /// List a project's registry repositories
    List(list::ListArgs),

    /// Show a single registry repository
    Show(show::ShowArgs),

    /// Delete a registry repository
    Delete(delete::DeleteArgs),

    /// List the tags of a registry repository
    Tags(tags::TagsArgs),

    /// Show a single registry tag
    Tag(tag::TagArgs),

    /// Delete a single registry tag
    DeleteTag(delete_tag::DeleteTagArgs),

    /// Bulk-delete tags according to a cleanup policy
    Cleanup(cleanup::CleanupArgs),

    /// Change a project's container registry visibility
    Visibility(visibility::VisibilityArgs),

    /// Print version information
    Version,
}

/// Connection options shared by all commands.
#[derive(Args)]
pub struct ConnectionArgs {
    /// GitLab instance URL (e.g. `<https://gitlab.example.com>`)
    #[arg(long, env = "AMPHORA_GITLAB_URL")]
    pub gitlab: String,

    /// Personal, group or project access token
    #[arg(long, env = "AMPHORA_TOKEN", hide_env_values = true)]
    pub token: Option<String>,

    /// OAuth2 access token
    #[arg(long, env = "AMPHORA_OAUTH_TOKEN", hide_env_values = true)]
    pub oauth_token: Option<String>,

    /// CI job token
    #[arg(long, env = "CI_JOB_TOKEN", hide_env_values = true)]
    pub job_token: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value = "30")]
    pub timeout: u64,

    /// Path to an additional CA certificate (PEM)
    #[arg(long)]
    pub ca_cert: Option<PathBuf>,

    /// Skip TLS certificate verification (testing only)
    #[arg(long)]
    pub insecure: bool,
}

impl ConnectionArgs {
    /// Builds a registry client from the connection flags.
    ///
    /// # Errors
    ///
    /// Returns an error if conflicting token kinds are supplied or the
    /// client cannot be created.
    pub fn client(&self) -> Result<RegistryClient> {
        let mut config = GitlabConfig::new(&self.gitlab)
            .with_timeout(Duration::from_secs(self.timeout))
            .with_auth(self.determine_auth()?);

        if self.ca_cert.is_some() || self.insecure {
            let mut tls = TlsConfig::new();
            if let Some(ref ca_cert) = self.ca_cert {
                tls = tls.with_ca_cert(ca_cert);
            }
            if self.insecure {
                tls = tls.insecure();
            }
            config = config.with_tls(tls);
        }

        RegistryClient::new(config).context("Failed to create registry client")
    }

    /// Determines the authentication method from the supplied flags.
    fn determine_auth(&self) -> Result<Auth> {
        let supplied = [&self.token, &self.oauth_token, &self.job_token]
            .iter()
            .filter(|token| token.is_some())
            .count();
        if supplied > 1 {
            anyhow::bail!("Supply at most one of --token, --oauth-token and --job-token");
        }

        if let Some(ref token) = self.token {
            return Ok(Auth::private_token(token));
        }
        if let Some(ref token) = self.oauth_token {
            return Ok(Auth::oauth(token));
        }
        if let Some(ref token) = self.job_token {
            return Ok(Auth::job_token(token));
        }

        // No auth - public endpoints only
        Ok(Auth::None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn connection() -> ConnectionArgs {
        ConnectionArgs {
            gitlab: "https://gitlab.example.com".to_string(),
            token: None,
            oauth_token: None,
            job_token: None,
            timeout: 30,
            ca_cert: None,
            insecure: false,
        }
    }

    #[test]
    fn test_determine_auth_none() {
        let auth = connection().determine_auth().unwrap();
        assert!(matches!(auth, Auth::None));
    }

    #[test]
    fn test_determine_auth_private_token() {
        let args = ConnectionArgs {
            token: Some("glpat-abc".to_string()),
            ..connection()
        };

        let auth = args.determine_auth().unwrap();
        assert!(matches!(auth, Auth::PrivateToken { token } if token == "glpat-abc"));
    }

    #[test]
    fn test_determine_auth_job_token() {
        let args = ConnectionArgs {
            job_token: Some("ci-token".to_string()),
            ..connection()
        };

        let auth = args.determine_auth().unwrap();
        assert!(matches!(auth, Auth::JobToken { token } if token == "ci-token"));
    }

    #[test]
    fn test_determine_auth_rejects_conflicting_tokens() {
        let args = ConnectionArgs {
            token: Some("glpat-abc".to_string()),
            oauth_token: Some("oauth".to_string()),
            ..connection()
        };

        assert!(args.determine_auth().is_err());
    }
}
