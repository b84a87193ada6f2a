//! Run-scoped tag directory

use crate::domain::RepositoryIdentity;
use crate::error::RegistryError;
use crate::registry::GitHost;
use std::collections::HashMap;
use tracing::debug;

/// Tag names per repository, filled at most once per repository per run
#[derive(Debug, Default)]
pub struct TagCache {
    tags: HashMap<RepositoryIdentity, Vec<String>>,
}

impl TagCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the cache for a repository
    pub fn insert(&mut self, repo: RepositoryIdentity, tags: Vec<String>) {
        self.tags.insert(repo, tags);
    }

    pub fn get(&self, repo: &RepositoryIdentity) -> Option<&[String]> {
        self.tags.get(repo).map(Vec::as_slice)
    }

    pub fn contains(&self, repo: &RepositoryIdentity) -> bool {
        self.tags.contains_key(repo)
    }
}

/// Resolves tag names for a repository through a `TagCache`
pub struct TagDirectory<'h> {
    host: &'h dyn GitHost,
}

impl<'h> TagDirectory<'h> {
    pub fn new(host: &'h dyn GitHost) -> Self {
        Self { host }
    }

    /// Tags for `repo`, fetched on first request and served from `cache` after
    ///
    /// An empty list is a valid answer. Failures are not cached.
    pub async fn tags<'c>(
        &self,
        cache: &'c mut TagCache,
        repo: &RepositoryIdentity,
    ) -> Result<&'c [String], RegistryError> {
        if cache.contains(repo) {
            debug!(%repo, "tag cache hit");
        } else {
            let tags = self.host.list_tags(repo).await?;
            debug!(%repo, count = tags.len(), "fetched tags");
            cache.insert(repo.clone(), tags);
        }

        Ok(cache.get(repo).unwrap_or_default())
    }
}
