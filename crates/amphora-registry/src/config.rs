//! Configuration types for the registry API client.

use std::path::PathBuf;
use std::time::Duration;

/// Configuration for connecting to a GitLab instance.
#[derive(Debug, Clone)]
pub struct GitlabConfig {
    /// Base URL of the instance (e.g. "<https://gitlab.example.com>").
    /// API paths are resolved under `/api/v4/`.
    pub url: String,

    /// Authentication configuration.
    pub auth: Auth,

    /// Request timeout.
    pub timeout: Duration,

    /// TLS trust configuration for self-hosted instances.
    pub tls: Option<TlsConfig>,

    /// User agent string.
    pub user_agent: String,
}

impl GitlabConfig {
    /// Creates a new configuration with the given instance URL.
    ///
    /// # Examples
    ///
    /// ```
    /// use amphora_registry::GitlabConfig;
    ///
    /// let config = GitlabConfig::new("https://gitlab.example.com");
    /// assert_eq!(config.url, "https://gitlab.example.com");
    /// ```
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            auth: Auth::None,
            timeout: Duration::from_secs(30),
            tls: None,
            user_agent: format!("amphora-registry/{}", env!("CARGO_PKG_VERSION")),
        }
    }

    /// Sets the authentication method.
    #[must_use]
    pub fn with_auth(mut self, auth: Auth) -> Self {
        self.auth = auth;
        self
    }

    /// Sets the request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Sets the TLS trust configuration.
    #[must_use]
    pub fn with_tls(mut self, tls: TlsConfig) -> Self {
        self.tls = Some(tls);
        self
    }
}

/// Authentication methods for the GitLab API.
#[derive(Debug, Clone)]
pub enum Auth {
    /// No authentication (public endpoints only).
    None,

    /// Personal, group or project access token (`PRIVATE-TOKEN` header).
    PrivateToken {
        /// Token value.
        token: String,
    },

    /// `OAuth2` access token (`Authorization: Bearer` header).
    OAuth {
        /// Token value.
        token: String,
    },

    /// CI job token (`JOB-TOKEN` header).
    JobToken {
        /// Token value.
        token: String,
    },
}

impl Auth {
    /// Creates private-token authentication.
    ///
    /// # Examples
    ///
    /// ```
    /// use amphora_registry::Auth;
    ///
    /// let auth = Auth::private_token("glpat-abc123");
    /// ```
    #[must_use]
    pub fn private_token(token: impl Into<String>) -> Self {
        Self::PrivateToken {
            token: token.into(),
        }
    }

    /// Creates OAuth2 bearer authentication.
    #[must_use]
    pub fn oauth(token: impl Into<String>) -> Self {
        Self::OAuth {
            token: token.into(),
        }
    }

    /// Creates CI job-token authentication.
    #[must_use]
    pub fn job_token(token: impl Into<String>) -> Self {
        Self::JobToken {
            token: token.into(),
        }
    }
}

/// TLS trust configuration for self-hosted instances.
#[derive(Debug, Clone, Default)]
pub struct TlsConfig {
    /// Path to an additional CA certificate file (PEM).
    pub ca_cert: Option<PathBuf>,

    /// Whether to skip certificate verification (NOT recommended for
    /// production).
    pub insecure_skip_verify: bool,
}

impl TlsConfig {
    /// Creates a new TLS configuration with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            ca_cert: None,
            insecure_skip_verify: false,
        }
    }

    /// Sets the CA certificate path.
    #[must_use]
    pub fn with_ca_cert(mut self, path: impl Into<PathBuf>) -> Self {
        self.ca_cert = Some(path.into());
        self
    }

    /// Enables insecure mode (skips certificate verification).
    ///
    /// # Warning
    ///
    /// This should only be used for testing. Never use in production.
    #[must_use]
    pub const fn insecure(mut self) -> Self {
        self.insecure_skip_verify = true;
        self
    }
}
