//! Identifiers for projects and registry repositories.

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Identifier for a project or a registry repository.
///
/// The remote API accepts either a numeric id or a namespaced path
/// (e.g. `group/project`) wherever one of these resources is addressed.
/// Paths must be percent-encoded when embedded in a URL path segment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceId {
    /// Numeric identifier.
    Id(u64),

    /// Namespaced path (e.g. `group/project`).
    Path(String),
}

impl ResourceId {
    /// Returns the identifier encoded for use as a single URL path segment.
    ///
    /// Every byte outside `[A-Za-z0-9_.~-]` is percent-encoded, including
    /// `/`, so a namespaced path occupies exactly one segment.
    ///
    /// # Examples
    ///
    /// ```
    /// use amphora_registry::ResourceId;
    ///
    /// assert_eq!(ResourceId::Id(42).path_segment(), "42");
    /// assert_eq!(
    ///     ResourceId::Path("group/project".into()).path_segment(),
    ///     "group%2Fproject"
    /// );
    /// ```
    #[must_use]
    pub fn path_segment(&self) -> String {
        match self {
            Self::Id(id) => id.to_string(),
            Self::Path(path) => encode_segment(path),
        }
    }
}

/// Percent-encodes a raw string for use as a single URL path segment.
pub(crate) fn encode_segment(raw: &str) -> String {
    urlencoding::encode(raw).into_owned()
}

impl From<u64> for ResourceId {
    fn from(id: u64) -> Self {
        Self::Id(id)
    }
}

impl From<&str> for ResourceId {
    fn from(raw: &str) -> Self {
        if !raw.is_empty() && raw.bytes().all(|b| b.is_ascii_digit()) {
            // Purely numeric namespaces are reserved by the remote API,
            // so digits always mean a numeric id.
            raw.parse::<u64>().map_or_else(|_| Self::Path(raw.to_string()), Self::Id)
        } else {
            Self::Path(raw.to_string())
        }
    }
}

impl From<String> for ResourceId {
    fn from(raw: String) -> Self {
        Self::from(raw.as_str())
    }
}

impl FromStr for ResourceId {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(raw))
    }
}

impl fmt::Display for ResourceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "{id}"),
            Self::Path(path) => write!(f, "{path}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_id_segment() {
        assert_eq!(ResourceId::Id(1).path_segment(), "1");
    }

    #[test]
    fn test_path_segment_encodes_slash() {
        let id = ResourceId::Path("group/sub/project".to_string());
        assert_eq!(id.path_segment(), "group%2Fsub%2Fproject");
    }

    #[test]
    fn test_path_segment_keeps_unreserved() {
        let id = ResourceId::Path("my-project_1.0~rc".to_string());
        assert_eq!(id.path_segment(), "my-project_1.0~rc");
    }

    #[test]
    fn test_from_str_digits_is_id() {
        let id: ResourceId = "42".parse().unwrap();
        assert_eq!(id, ResourceId::Id(42));
    }

    #[test]
    fn test_from_str_path() {
        let id: ResourceId = "group/project".parse().unwrap();
        assert_eq!(id, ResourceId::Path("group/project".to_string()));
    }

    #[test]
    fn test_display_is_raw() {
        assert_eq!(ResourceId::Path("a/b".to_string()).to_string(), "a/b");
        assert_eq!(ResourceId::Id(7).to_string(), "7");
    }
}
