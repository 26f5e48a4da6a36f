//! Typed request parameters for registry operations.
//!
//! The remote API takes per-operation option bags; here each operation gets
//! its own struct, with optional options as `Option` fields and required
//! ones as plain fields. Fields left unset are omitted from the request
//! entirely.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Visibility of a project's container registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccessLevel {
    /// Registry follows the project's own visibility.
    Enabled,

    /// Registry visible to project members only.
    Private,

    /// Registry turned off for the project.
    Disabled,
}

impl AccessLevel {
    /// String form used by the remote API.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Enabled => "enabled",
            Self::Private => "private",
            Self::Disabled => "disabled",
        }
    }
}

impl fmt::Display for AccessLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AccessLevel {
    type Err = Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "enabled" => Ok(Self::Enabled),
            "private" => Ok(Self::Private),
            "disabled" => Ok(Self::Disabled),
            other => Err(Error::InvalidAccessLevel {
                value: other.to_string(),
            }),
        }
    }
}

/// Parameters for listing a project's registry repositories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListParams {
    /// Include the tag list of each repository in the response.
    pub tags: Option<bool>,

    /// Include the tag count of each repository in the response.
    pub tags_count: Option<bool>,
}

impl ListParams {
    /// Requests tag lists in the response.
    #[must_use]
    pub const fn with_tags(mut self, tags: bool) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Requests tag counts in the response.
    #[must_use]
    pub const fn with_tags_count(mut self, tags_count: bool) -> Self {
        self.tags_count = Some(tags_count);
        self
    }

    pub(crate) fn to_query(self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(tags) = self.tags {
            query.push(("tags".to_string(), tags.to_string()));
        }
        if let Some(tags_count) = self.tags_count {
            query.push(("tags_count".to_string(), tags_count.to_string()));
        }
        query
    }
}

/// Parameters for showing a single registry repository.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShowParams {
    /// Include the tag list in the response.
    pub tags: Option<bool>,

    /// Include the tag count in the response.
    pub tags_count: Option<bool>,

    /// Include the repository size in the response.
    pub size: Option<bool>,
}

impl ShowParams {
    /// Requests the tag list in the response.
    #[must_use]
    pub const fn with_tags(mut self, tags: bool) -> Self {
        self.tags = Some(tags);
        self
    }

    /// Requests the tag count in the response.
    #[must_use]
    pub const fn with_tags_count(mut self, tags_count: bool) -> Self {
        self.tags_count = Some(tags_count);
        self
    }

    /// Requests the repository size in the response.
    #[must_use]
    pub const fn with_size(mut self, size: bool) -> Self {
        self.size = Some(size);
        self
    }

    pub(crate) fn to_query(self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(tags) = self.tags {
            query.push(("tags".to_string(), tags.to_string()));
        }
        if let Some(tags_count) = self.tags_count {
            query.push(("tags_count".to_string(), tags_count.to_string()));
        }
        if let Some(size) = self.size {
            query.push(("size".to_string(), size.to_string()));
        }
        query
    }
}

/// Parameters for changing a project's container registry visibility.
///
/// Serialized as the PUT body; an unset level produces an empty update.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct VisibilityParams {
    /// Desired registry access level.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub container_registry_access_level: Option<AccessLevel>,
}

impl VisibilityParams {
    /// Creates parameters that set the given access level.
    ///
    /// # Examples
    ///
    /// ```
    /// use amphora_registry::{AccessLevel, VisibilityParams};
    ///
    /// let params = VisibilityParams::new(AccessLevel::Private);
    /// assert_eq!(
    ///     params.container_registry_access_level,
    ///     Some(AccessLevel::Private)
    /// );
    /// ```
    #[must_use]
    pub const fn new(level: AccessLevel) -> Self {
        Self {
            container_registry_access_level: Some(level),
        }
    }
}

/// Parameters for deleting registry tags in bulk.
///
/// `name_regex_delete` selects the candidate tags; the remaining fields
/// narrow the set that is actually deleted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkDeleteParams {
    /// Delete all tags matching this regex.
    pub name_regex_delete: String,

    /// Keep all tags matching this regex, even if they match the
    /// delete regex.
    pub name_regex_keep: Option<String>,

    /// Keep the N most recent tags per matching name.
    pub keep_n: Option<u64>,

    /// Only delete tags older than this age, written in human-readable
    /// form (`1h`, `1d`, `1month`). Passed through verbatim; the remote
    /// API validates the grammar.
    pub older_than: Option<String>,
}

impl BulkDeleteParams {
    /// Creates bulk-delete parameters with the required delete regex.
    #[must_use]
    pub fn new(name_regex_delete: impl Into<String>) -> Self {
        Self {
            name_regex_delete: name_regex_delete.into(),
            name_regex_keep: None,
            keep_n: None,
            older_than: None,
        }
    }

    /// Keeps tags matching the given regex.
    #[must_use]
    pub fn with_keep_regex(mut self, name_regex_keep: impl Into<String>) -> Self {
        self.name_regex_keep = Some(name_regex_keep.into());
        self
    }

    /// Keeps the N most recent tags per matching name.
    #[must_use]
    pub const fn with_keep_n(mut self, keep_n: u64) -> Self {
        self.keep_n = Some(keep_n);
        self
    }

    /// Only deletes tags older than the given age (e.g. `1h`, `1d`,
    /// `1month`).
    #[must_use]
    pub fn with_older_than(mut self, older_than: impl Into<String>) -> Self {
        self.older_than = Some(older_than.into());
        self
    }

    pub(crate) fn to_query(&self) -> Vec<(String, String)> {
        let mut query = vec![(
            "name_regex_delete".to_string(),
            self.name_regex_delete.clone(),
        )];
        if let Some(ref name_regex_keep) = self.name_regex_keep {
            query.push(("name_regex_keep".to_string(), name_regex_keep.clone()));
        }
        if let Some(keep_n) = self.keep_n {
            query.push(("keep_n".to_string(), keep_n.to_string()));
        }
        if let Some(ref older_than) = self.older_than {
            query.push(("older_than".to_string(), older_than.clone()));
        }
        query
    }
}
