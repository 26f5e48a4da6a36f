//! # Amphora Registry
//!
//! Typed client for the container registry repository API of a GitLab
//! instance (API v4).
//!
//! Each operation is a single stateless request/response translation: the
//! call's typed parameters become query or body fields, identifiers are
//! percent-encoded into a fixed URL template, and the decoded response is
//! returned. Connections, authentication headers and TLS trust live in
//! the transport underneath.
//!
//! ## Features
//!
//! - **Repositories**: list, show, delete registry repositories
//! - **Tags**: list, show, delete single tags; bulk-delete by cleanup policy
//! - **Visibility**: change a project's registry access level
//! - **Auth**: private token, OAuth2 bearer, CI job token
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use amphora_registry::{Auth, GitlabConfig, ListParams, RegistryClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = GitlabConfig::new("https://gitlab.example.com")
//!         .with_auth(Auth::private_token("glpat-abc123"));
//!
//!     let client = RegistryClient::new(config)?;
//!
//!     // List a project's registry repositories, tag counts included.
//!     let params = ListParams::default().with_tags_count(true);
//!     let repositories = client.list("group/project", params).await?;
//!
//!     for repository in repositories {
//!         println!("{} ({:?} tags)", repository.location, repository.tags_count);
//!     }
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────┐
//! │                  RegistryClient                      │
//! │   typed params ──► path template ──► verb call       │
//! └──────────────────────────┬───────────────────────────┘
//!                            ▼
//! ┌──────────────────────────────────────────────────────┐
//! │            HttpTransport (get/put/delete)            │
//! │        ApiTransport: reqwest + auth + /api/v4        │
//! └──────────────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

mod client;
mod config;
mod error;
mod id;
mod params;
mod transport;
mod types;

#[cfg(test)]
mod proptest_tests;

pub use client::RegistryClient;
pub use config::{Auth, GitlabConfig, TlsConfig};
pub use error::Error;
pub use id::ResourceId;
pub use params::{AccessLevel, BulkDeleteParams, ListParams, ShowParams, VisibilityParams};
pub use transport::{ApiTransport, HttpTransport};
pub use types::{Project, Repository, RepositoryTag, TagSummary};
