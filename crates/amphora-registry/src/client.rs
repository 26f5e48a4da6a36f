//! Typed client for the container registry repository API.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::GitlabConfig;
use crate::error::Error;
use crate::id::{encode_segment, ResourceId};
use crate::params::{BulkDeleteParams, ListParams, ShowParams, VisibilityParams};
use crate::transport::{ApiTransport, HttpTransport};
use crate::types::{Project, Repository, RepositoryTag};

/// Client for container registry repositories and tags.
///
/// Each method translates its arguments into a single HTTP request against
/// a fixed URL template and returns the decoded response. Calls are
/// stateless and independent; transport failures surface unchanged, and no
/// retries happen at this layer.
pub struct RegistryClient {
    transport: Arc<dyn HttpTransport>,
}

impl RegistryClient {
    /// Creates a client with the default `reqwest`-backed transport.
    ///
    /// # Errors
    ///
    /// Returns an error if the transport cannot be constructed from the
    /// configuration.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use amphora_registry::{Auth, GitlabConfig, RegistryClient};
    ///
    /// let config = GitlabConfig::new("https://gitlab.example.com")
    ///     .with_auth(Auth::private_token("glpat-abc123"));
    /// let client = RegistryClient::new(config)?;
    /// # Ok::<(), amphora_registry::Error>(())
    /// ```
    pub fn new(config: GitlabConfig) -> Result<Self, Error> {
        Ok(Self {
            transport: Arc::new(ApiTransport::new(config)?),
        })
    }

    /// Creates a client over a caller-supplied transport.
    ///
    /// Useful for testing with a substitute implementation.
    #[must_use]
    pub fn with_transport(transport: Arc<dyn HttpTransport>) -> Self {
        Self { transport }
    }

    /// Lists the registry repositories of a project.
    ///
    /// `GET projects/{project}/registry/repositories`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn list(
        &self,
        project: impl Into<ResourceId>,
        params: ListParams,
    ) -> Result<Vec<Repository>, Error> {
        let path = project_path(&project.into(), "registry/repositories");
        let response = self.transport.get(&path, &params.to_query()).await?;
        decode(response)
    }

    /// Changes the visibility of a project's container registry.
    ///
    /// `PUT projects/{project}/`
    ///
    /// The access level is a field on the project resource itself, so this
    /// targets the bare project path rather than a `registry/...`
    /// sub-resource.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn change_visibility(
        &self,
        project: impl Into<ResourceId>,
        params: VisibilityParams,
    ) -> Result<Project, Error> {
        let path = project_path(&project.into(), "");
        let body = serde_json::to_value(params)?;
        let response = self.transport.put(&path, body).await?;
        decode(response)
    }

    /// Shows a single registry repository.
    ///
    /// `GET registry/repositories/{repository}`
    ///
    /// Unlike the other operations, repositories are addressed here
    /// without a project scope.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn show(
        &self,
        repository: impl Into<ResourceId>,
        params: ShowParams,
    ) -> Result<Repository, Error> {
        let repository: ResourceId = repository.into();
        let path = format!("registry/repositories/{}", repository.path_segment());
        let response = self.transport.get(&path, &params.to_query()).await?;
        decode(response)
    }

    /// Deletes a registry repository.
    ///
    /// `DELETE projects/{project}/registry/repositories/{repository}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove(
        &self,
        project: impl Into<ResourceId>,
        repository: impl Into<ResourceId>,
    ) -> Result<(), Error> {
        let project: ResourceId = project.into();
        let repository: ResourceId = repository.into();

        tracing::info!(%project, %repository, "Deleting registry repository");

        let path = project_path(
            &project,
            &format!("registry/repositories/{}", repository.path_segment()),
        );
        self.transport.delete(&path, &[]).await?;
        Ok(())
    }

    /// Lists the tags of a registry repository.
    ///
    /// `GET projects/{project}/registry/repositories/{repository}/tags`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn list_tags(
        &self,
        project: impl Into<ResourceId>,
        repository: impl Into<ResourceId>,
    ) -> Result<Vec<RepositoryTag>, Error> {
        let repository: ResourceId = repository.into();
        let path = project_path(
            &project.into(),
            &format!("registry/repositories/{}/tags", repository.path_segment()),
        );
        let response = self.transport.get(&path, &[]).await?;
        decode(response)
    }

    /// Shows a single registry tag.
    ///
    /// `GET projects/{project}/registry/repositories/{repository}/tags/{tag}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    pub async fn show_tag(
        &self,
        project: impl Into<ResourceId>,
        repository: impl Into<ResourceId>,
        tag_name: &str,
    ) -> Result<RepositoryTag, Error> {
        let path = tag_path(&project.into(), &repository.into(), tag_name);
        let response = self.transport.get(&path, &[]).await?;
        decode(response)
    }

    /// Deletes a single registry tag.
    ///
    /// `DELETE projects/{project}/registry/repositories/{repository}/tags/{tag}`
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove_tag(
        &self,
        project: impl Into<ResourceId>,
        repository: impl Into<ResourceId>,
        tag_name: &str,
    ) -> Result<(), Error> {
        let path = tag_path(&project.into(), &repository.into(), tag_name);
        self.transport.delete(&path, &[]).await?;
        Ok(())
    }

    /// Deletes registry tags in bulk according to a cleanup policy.
    ///
    /// `DELETE projects/{project}/registry/repositories/{repository}/tags`
    ///
    /// The policy fields are passed as query parameters exactly as
    /// supplied; nothing is defaulted on the client side.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    pub async fn remove_tags(
        &self,
        project: impl Into<ResourceId>,
        repository: impl Into<ResourceId>,
        params: BulkDeleteParams,
    ) -> Result<(), Error> {
        let project: ResourceId = project.into();
        let repository: ResourceId = repository.into();

        tracing::info!(
            %project,
            %repository,
            name_regex_delete = %params.name_regex_delete,
            "Bulk-deleting registry tags"
        );

        let path = project_path(
            &project,
            &format!(
                "registry/repositories/{}/tags",
                repository.path_segment()
            ),
        );
        self.transport.delete(&path, &params.to_query()).await?;
        Ok(())
    }
}

/// Builds a project-scoped path (`projects/{id}/{suffix}`).
///
/// An empty suffix yields the bare project path with its trailing slash,
/// which `change_visibility` depends on.
fn project_path(project: &ResourceId, suffix: &str) -> String {
    format!("projects/{}/{suffix}", project.path_segment())
}

/// Builds the path of a single tag within a repository.
fn tag_path(project: &ResourceId, repository: &ResourceId, tag_name: &str) -> String {
    project_path(
        project,
        &format!(
            "registry/repositories/{}/tags/{}",
            repository.path_segment(),
            encode_segment(tag_name)
        ),
    )
}

fn decode<T: DeserializeOwned>(value: Value) -> Result<T, Error> {
    serde_json::from_value(value).map_err(|source| Error::Json { source })
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use async_trait::async_trait;
    use serde_json::json;

    use super::*;
    use crate::params::AccessLevel;

    /// Recorded transport call.
    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Get {
            path: String,
            query: Vec<(String, String)>,
        },
        Put {
            path: String,
            body: Value,
        },
        Delete {
            path: String,
            query: Vec<(String, String)>,
        },
    }

    /// Transport substitute that records calls and replays a canned body.
    struct MockTransport {
        calls: Mutex<Vec<Call>>,
        response: Value,
    }

    impl MockTransport {
        fn returning(response: Value) -> Arc<Self> {
            Arc::new(Self {
                calls: Mutex::new(Vec::new()),
                response,
            })
        }

        fn calls(&self) -> Vec<Call> {
            self.calls.lock().unwrap().clone()
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error> {
            self.calls.lock().unwrap().push(Call::Get {
                path: path.to_string(),
                query: query.to_vec(),
            });
            Ok(self.response.clone())
        }

        async fn put(&self, path: &str, body: Value) -> Result<Value, Error> {
            self.calls.lock().unwrap().push(Call::Put {
                path: path.to_string(),
                body,
            });
            Ok(self.response.clone())
        }

        async fn delete(&self, path: &str, query: &[(String, String)]) -> Result<Value, Error> {
            self.calls.lock().unwrap().push(Call::Delete {
                path: path.to_string(),
                query: query.to_vec(),
            });
            Ok(self.response.clone())
        }
    }

    fn repository_json() -> Value {
        json!({
            "id": 1,
            "name": "",
            "path": "group/project",
            "project_id": 9,
            "location": "gitlab.example.com:5050/group/project",
            "created_at": "2019-01-10T13:38:57.391Z"
        })
    }

    fn tag_json(name: &str) -> Value {
        json!({
            "name": name,
            "path": format!("group/project:{name}"),
            "location": format!("gitlab.example.com:5050/group/project:{name}")
        })
    }

    fn project_json(level: &str) -> Value {
        json!({
            "id": 1,
            "path_with_namespace": "group/project",
            "container_registry_access_level": level
        })
    }

    #[tokio::test]
    async fn test_list_without_params() {
        let transport = MockTransport::returning(json!([repository_json()]));
        let client = RegistryClient::with_transport(transport.clone());

        let repositories = client.list(1, ListParams::default()).await.unwrap();

        assert_eq!(repositories.len(), 1);
        assert_eq!(repositories[0].id, 1);
        assert_eq!(
            transport.calls(),
            vec![Call::Get {
                path: "projects/1/registry/repositories".to_string(),
                query: Vec::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_with_params() {
        let transport = MockTransport::returning(json!([repository_json()]));
        let client = RegistryClient::with_transport(transport.clone());

        let params = ListParams::default().with_tags(true).with_tags_count(true);
        client.list(1, params).await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![Call::Get {
                path: "projects/1/registry/repositories".to_string(),
                query: vec![
                    ("tags".to_string(), "true".to_string()),
                    ("tags_count".to_string(), "true".to_string()),
                ],
            }]
        );
    }

    #[tokio::test]
    async fn test_change_visibility_targets_bare_project_path() {
        let transport = MockTransport::returning(project_json("private"));
        let client = RegistryClient::with_transport(transport.clone());

        let project = client
            .change_visibility(1, VisibilityParams::new(AccessLevel::Private))
            .await
            .unwrap();

        assert_eq!(
            project.container_registry_access_level,
            Some(AccessLevel::Private)
        );
        assert_eq!(
            transport.calls(),
            vec![Call::Put {
                path: "projects/1/".to_string(),
                body: json!({ "container_registry_access_level": "private" }),
            }]
        );
    }

    #[tokio::test]
    async fn test_change_visibility_accepts_each_level() {
        for level in [
            AccessLevel::Enabled,
            AccessLevel::Private,
            AccessLevel::Disabled,
        ] {
            let transport = MockTransport::returning(project_json(level.as_str()));
            let client = RegistryClient::with_transport(transport.clone());

            client
                .change_visibility(1, VisibilityParams::new(level))
                .await
                .unwrap();

            assert_eq!(
                transport.calls(),
                vec![Call::Put {
                    path: "projects/1/".to_string(),
                    body: json!({ "container_registry_access_level": level.as_str() }),
                }]
            );
        }
    }

    #[tokio::test]
    async fn test_show_without_params() {
        let transport = MockTransport::returning(repository_json());
        let client = RegistryClient::with_transport(transport.clone());

        let repository = client.show(1, ShowParams::default()).await.unwrap();

        assert_eq!(repository.id, 1);
        assert_eq!(
            transport.calls(),
            vec![Call::Get {
                path: "registry/repositories/1".to_string(),
                query: Vec::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_show_with_params() {
        let transport = MockTransport::returning(repository_json());
        let client = RegistryClient::with_transport(transport.clone());

        let params = ShowParams::default()
            .with_tags(true)
            .with_tags_count(true)
            .with_size(true);
        client.show(1, params).await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![Call::Get {
                path: "registry/repositories/1".to_string(),
                query: vec![
                    ("tags".to_string(), "true".to_string()),
                    ("tags_count".to_string(), "true".to_string()),
                    ("size".to_string(), "true".to_string()),
                ],
            }]
        );
    }

    #[tokio::test]
    async fn test_remove_repository() {
        let transport = MockTransport::returning(Value::Null);
        let client = RegistryClient::with_transport(transport.clone());

        client.remove(1, 2).await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![Call::Delete {
                path: "projects/1/registry/repositories/2".to_string(),
                query: Vec::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_list_tags() {
        let transport = MockTransport::returning(json!([tag_json("0.0.1"), tag_json("latest")]));
        let client = RegistryClient::with_transport(transport.clone());

        let tags = client.list_tags(1, 2).await.unwrap();

        assert_eq!(tags.len(), 2);
        assert_eq!(tags[1].name, "latest");
        assert_eq!(
            transport.calls(),
            vec![Call::Get {
                path: "projects/1/registry/repositories/2/tags".to_string(),
                query: Vec::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_show_tag() {
        let transport = MockTransport::returning(tag_json("foo"));
        let client = RegistryClient::with_transport(transport.clone());

        let tag = client.show_tag(1, 2, "foo").await.unwrap();

        assert_eq!(tag.name, "foo");
        assert_eq!(
            transport.calls(),
            vec![Call::Get {
                path: "projects/1/registry/repositories/2/tags/foo".to_string(),
                query: Vec::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_remove_tag() {
        let transport = MockTransport::returning(Value::Null);
        let client = RegistryClient::with_transport(transport.clone());

        client.remove_tag(1, 2, "foo").await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![Call::Delete {
                path: "projects/1/registry/repositories/2/tags/foo".to_string(),
                query: Vec::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_remove_tags_bulk() {
        let transport = MockTransport::returning(Value::Null);
        let client = RegistryClient::with_transport(transport.clone());

        let params = BulkDeleteParams::new("test-.+")
            .with_keep_regex("test-foo")
            .with_keep_n(1)
            .with_older_than("1month");
        client.remove_tags(1, 2, params).await.unwrap();

        assert_eq!(
            transport.calls(),
            vec![Call::Delete {
                path: "projects/1/registry/repositories/2/tags".to_string(),
                query: vec![
                    ("name_regex_delete".to_string(), "test-.+".to_string()),
                    ("name_regex_keep".to_string(), "test-foo".to_string()),
                    ("keep_n".to_string(), "1".to_string()),
                    ("older_than".to_string(), "1month".to_string()),
                ],
            }]
        );
    }

    #[tokio::test]
    async fn test_identifiers_are_encoded_in_every_segment() {
        let transport = MockTransport::returning(tag_json("v1.0+beta"));
        let client = RegistryClient::with_transport(transport.clone());

        client
            .show_tag("group/app", "group/app/cache", "v1.0+beta")
            .await
            .unwrap();

        assert_eq!(
            transport.calls(),
            vec![Call::Get {
                path: "projects/group%2Fapp/registry/repositories/group%2Fapp%2Fcache/tags/v1.0%2Bbeta"
                    .to_string(),
                query: Vec::new(),
            }]
        );
    }

    #[tokio::test]
    async fn test_transport_errors_surface_unchanged() {
        struct FailingTransport;

        #[async_trait]
        impl HttpTransport for FailingTransport {
            async fn get(&self, _: &str, _: &[(String, String)]) -> Result<Value, Error> {
                Err(Error::Http {
                    status: 403,
                    message: "403 Forbidden".to_string(),
                })
            }

            async fn put(&self, _: &str, _: Value) -> Result<Value, Error> {
                unreachable!()
            }

            async fn delete(&self, _: &str, _: &[(String, String)]) -> Result<Value, Error> {
                unreachable!()
            }
        }

        let client = RegistryClient::with_transport(Arc::new(FailingTransport));
        let err = client.list(1, ListParams::default()).await.unwrap_err();

        assert!(matches!(err, Error::Http { status: 403, .. }));
    }
}
