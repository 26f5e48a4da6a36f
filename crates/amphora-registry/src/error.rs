//! Error types for registry API operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when talking to the registry API.
#[derive(Debug, Error)]
pub enum Error {
    /// Failed to connect to the GitLab instance.
    #[error("Failed to connect to {url}: {source}")]
    ConnectionFailed {
        /// Instance URL.
        url: String,
        /// Underlying error.
        #[source]
        source: reqwest::Error,
    },

    /// The remote API answered with a non-success status.
    #[error("API request failed: {status} - {message}")]
    Http {
        /// HTTP status code.
        status: u16,
        /// Message extracted from the error body, or the raw body.
        message: String,
    },

    /// Response body could not be decoded.
    #[error("JSON error: {source}")]
    Json {
        /// Underlying error.
        #[source]
        source: serde_json::Error,
    },

    /// The configured base URL is not a valid URL.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidBaseUrl {
        /// URL string as configured.
        url: String,
        /// Underlying error.
        #[source]
        source: url::ParseError,
    },

    /// Credentials could not be turned into request headers.
    #[error("Authentication failed: {message}")]
    AuthenticationFailed {
        /// Error message.
        message: String,
    },

    /// TLS material could not be loaded.
    #[error("TLS configuration error: {message}")]
    Tls {
        /// Error message.
        message: String,
    },

    /// File I/O error while reading TLS material.
    #[error("File I/O error at {path}: {source}")]
    Io {
        /// File path.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// A string is not one of the legal registry access levels.
    #[error("Invalid access level '{value}': expected 'enabled', 'private' or 'disabled'")]
    InvalidAccessLevel {
        /// Rejected input.
        value: String,
    },
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        if err.is_connect() {
            Self::ConnectionFailed {
                url: err
                    .url()
                    .map_or_else(|| "unknown".to_string(), ToString::to_string),
                source: err,
            }
        } else if err.is_status() {
            let status = err.status().map_or(0, |s| s.as_u16());
            Self::Http {
                status,
                message: err.to_string(),
            }
        } else {
            Self::Http {
                status: 0,
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Json { source: err }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_http() {
        let err = Error::Http {
            status: 404,
            message: "404 Project Not Found".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "API request failed: 404 - 404 Project Not Found"
        );
    }

    #[test]
    fn test_error_display_invalid_access_level() {
        let err = Error::InvalidAccessLevel {
            value: "public".to_string(),
        };
        assert!(err.to_string().contains("'public'"));
        assert!(err.to_string().contains("'enabled'"));
    }

    #[test]
    fn test_error_display_auth_failed() {
        let err = Error::AuthenticationFailed {
            message: "token contains invalid characters".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Authentication failed: token contains invalid characters"
        );
    }
}
