//! Repository host adapters
//!
//! This module provides:
//! - HTTP client shared foundation with retry logic
//! - The `GitHost` trait covering the four remote operations a check needs
//! - GitHub REST API adapter

mod client;
mod github;

pub use client::HttpClient;
pub use github::{GitHubAdapter, GITHUB_API_URL};

use crate::domain::RepositoryIdentity;
use crate::error::RegistryError;
use async_trait::async_trait;

/// Remote version-control host
///
/// Every operation reports not-found / forbidden as
/// `RegistryError::RepositoryInaccessible`, separate from other failures.
#[async_trait]
pub trait GitHost: Send + Sync {
    /// Get the host name used in error messages
    fn host_name(&self) -> &'static str;

    /// List tag names, most relevant first, bounded to one page
    async fn list_tags(&self, repo: &RepositoryIdentity) -> Result<Vec<String>, RegistryError>;

    /// Name of the repository's default branch
    async fn default_branch(&self, repo: &RepositoryIdentity) -> Result<String, RegistryError>;

    /// Commit hash at the head of a branch
    async fn branch_head(
        &self,
        repo: &RepositoryIdentity,
        branch: &str,
    ) -> Result<String, RegistryError>;

    /// Number of commits `head` is ahead of `base`
    async fn compare(
        &self,
        repo: &RepositoryIdentity,
        base: &str,
        head: &str,
    ) -> Result<u64, RegistryError>;
}
