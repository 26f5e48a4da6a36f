//! Response types returned by the container registry API.
//!
//! Field inventory follows the GitLab v4 payloads. Optional fields only
//! appear when the corresponding request parameter asked for them, or when
//! the instance populates them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::params::AccessLevel;

/// A container registry repository within a project.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository identifier.
    pub id: u64,

    /// Repository name; empty for the project's root repository.
    pub name: String,

    /// Repository path, including the project namespace.
    pub path: String,

    /// Owning project identifier.
    pub project_id: u64,

    /// Full pullable location of the repository.
    pub location: String,

    /// Creation timestamp.
    pub created_at: DateTime<Utc>,

    /// When the last cleanup run started, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cleanup_policy_started_at: Option<DateTime<Utc>>,

    /// Number of tags; present when requested via `tags_count`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags_count: Option<u64>,

    /// Tag summaries; present when requested via `tags`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<TagSummary>>,

    /// Repository size in bytes; present when requested via `size`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// Abbreviated tag entry embedded in repository listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TagSummary {
    /// Tag name.
    pub name: String,

    /// Tag path, including the repository path.
    pub path: String,

    /// Full pullable location of the tag.
    pub location: String,
}

/// A tag within a registry repository.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RepositoryTag {
    /// Tag name.
    pub name: String,

    /// Tag path, including the repository path.
    pub path: String,

    /// Full pullable location of the tag.
    pub location: String,

    /// Manifest revision the tag points at.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revision: Option<String>,

    /// Abbreviated manifest revision.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub short_revision: Option<String>,

    /// Image digest.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub digest: Option<String>,

    /// Creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,

    /// Total size of the image in bytes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_size: Option<u64>,
}

/// Subset of the project resource returned by visibility updates.
///
/// The remote API replies with the full project; only the fields this
/// crate acts on are decoded, the rest are ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Project identifier.
    pub id: u64,

    /// Namespaced project path.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path_with_namespace: Option<String>,

    /// Current container registry access level.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub container_registry_access_level: Option<AccessLevel>,
}
