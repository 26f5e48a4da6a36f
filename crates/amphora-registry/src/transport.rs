//! HTTP transport for the GitLab REST API.
//!
//! The registry client addresses endpoints by path relative to the API
//! root; the transport owns URL construction, authentication headers and
//! response decoding. Injecting the [`HttpTransport`] trait keeps the
//! client testable without a network.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION};
use serde_json::Value;
use url::Url;

use crate::config::{Auth, GitlabConfig};
use crate::error::Error;

/// Verb-level access to the remote API.
///
/// Implementations must be safe for concurrent use; the registry client
/// performs no synchronization of its own. Responses are the decoded JSON
/// body, or `Value::Null` for empty bodies.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Issues a GET request against `path` with the given query pairs.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error>;

    /// Issues a PUT request against `path` with a JSON `body`.
    async fn put(&self, path: &str, body: Value) -> Result<Value, Error>;

    /// Issues a DELETE request against `path` with the given query pairs.
    async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error>;
}

/// Default transport backed by `reqwest`.
///
/// Resolves paths under `<base>/api/v4/`, attaches the configured
/// authentication header to every request, and maps non-success responses
/// to [`Error::Http`]. No retries and no interpretation of remote
/// failures happen here.
#[derive(Debug)]
pub struct ApiTransport {
    base: Url,
    http: reqwest::Client,
    auth: Auth,
}

impl ApiTransport {
    /// Creates a transport from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL cannot be parsed, TLS material
    /// cannot be loaded, or the HTTP client cannot be created.
    pub fn new(config: GitlabConfig) -> Result<Self, Error> {
        let mut base = Url::parse(&config.url).map_err(|source| Error::InvalidBaseUrl {
            url: config.url.clone(),
            source,
        })?;

        // Url::join replaces the last segment unless the base path ends
        // with a slash.
        if !base.path().ends_with('/') {
            let path = format!("{}/", base.path());
            base.set_path(&path);
        }

        let http = Self::build_http_client(&config)?;

        Ok(Self {
            base,
            http,
            auth: config.auth,
        })
    }

    /// Resolves a relative API path against the instance base URL.
    fn endpoint(&self, path: &str) -> Result<Url, Error> {
        self.base
            .join(&format!("api/v4/{path}"))
            .map_err(|source| Error::InvalidBaseUrl {
                url: format!("{}api/v4/{path}", self.base),
                source,
            })
    }

    /// Builds the authentication headers for the configured method.
    fn auth_headers(&self) -> Result<HeaderMap, Error> {
        let mut headers = HeaderMap::new();

        match &self.auth {
            Auth::None => {}
            Auth::PrivateToken { token } => {
                headers.insert(
                    "PRIVATE-TOKEN",
                    HeaderValue::from_str(token).map_err(|_| Error::AuthenticationFailed {
                        message: "Private token contains invalid characters".to_string(),
                    })?,
                );
            }
            Auth::OAuth { token } => {
                headers.insert(
                    AUTHORIZATION,
                    HeaderValue::from_str(&format!("Bearer {token}")).map_err(|_| {
                        Error::AuthenticationFailed {
                            message: "OAuth token contains invalid characters".to_string(),
                        }
                    })?,
                );
            }
            Auth::JobToken { token } => {
                headers.insert(
                    "JOB-TOKEN",
                    HeaderValue::from_str(token).map_err(|_| Error::AuthenticationFailed {
                        message: "Job token contains invalid characters".to_string(),
                    })?,
                );
            }
        }

        Ok(headers)
    }

    /// Sends a prepared request and decodes the response body.
    async fn execute(&self, request: reqwest::RequestBuilder) -> Result<Value, Error> {
        let response = request.headers(self.auth_headers()?).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(Error::Http {
                status: status.as_u16(),
                message: Self::error_message(response).await,
            });
        }

        // Deletes answer 204 or a success status with an empty body.
        let bytes = response.bytes().await?;
        if bytes.is_empty() {
            return Ok(Value::Null);
        }

        serde_json::from_slice(&bytes).map_err(|source| Error::Json { source })
    }

    /// Extracts the `message` or `error` field from an error body.
    async fn error_message(response: reqwest::Response) -> String {
        let body = response.text().await.unwrap_or_default();

        serde_json::from_str::<Value>(&body)
            .ok()
            .and_then(|value| {
                value
                    .get("message")
                    .or_else(|| value.get("error"))
                    .map(|field| match field {
                        Value::String(message) => message.clone(),
                        other => other.to_string(),
                    })
            })
            .unwrap_or(body)
    }

    /// Builds the HTTP client with proper configuration.
    fn build_http_client(config: &GitlabConfig) -> Result<reqwest::Client, Error> {
        let mut builder = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent);

        if let Some(ref tls) = config.tls {
            if tls.insecure_skip_verify {
                builder = builder.danger_accept_invalid_certs(true);
            }

            if let Some(ref ca_cert) = tls.ca_cert {
                let cert_pem = std::fs::read(ca_cert).map_err(|source| Error::Io {
                    path: ca_cert.clone(),
                    source,
                })?;
                let cert = reqwest::Certificate::from_pem(&cert_pem).map_err(|e| Error::Tls {
                    message: format!("Invalid CA certificate: {e}"),
                })?;
                builder = builder.add_root_certificate(cert);
            }
        }

        builder.build().map_err(|source| Error::ConnectionFailed {
            url: config.url.clone(),
            source,
        })
    }
}

#[async_trait]
impl HttpTransport for ApiTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "GET");

        let mut request = self.http.get(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        self.execute(request).await
    }

    async fn put(&self, path: &str, body: Value) -> Result<Value, Error> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "PUT");

        self.execute(self.http.put(url).json(&body)).await
    }

    async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error> {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "DELETE");

        let mut request = self.http.delete(url);
        if !query.is_empty() {
            request = request.query(query);
        }

        self.execute(request).await
    }
}
