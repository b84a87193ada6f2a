//! Commit distance for hash-pinned references

use crate::domain::RepositoryIdentity;
use crate::error::RegistryError;
use crate::registry::GitHost;
use std::collections::HashMap;
use tracing::debug;

/// How far a pinned commit trails its default branch head
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitDistance {
    pub latest_hash: String,
    /// Zero when the pin is the head
    pub commits_behind: u64,
}

/// Branch heads and compare results, filled at most once per key per run
#[derive(Debug, Default)]
pub struct CommitCache {
    heads: HashMap<RepositoryIdentity, String>,
    distances: HashMap<(RepositoryIdentity, String), u64>,
}

impl CommitCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn head(&self, repo: &RepositoryIdentity) -> Option<&str> {
        self.heads.get(repo).map(String::as_str)
    }
}

/// Returns true when one hash is a prefix of the other, ignoring case
fn is_same_commit(pinned: &str, head: &str) -> bool {
    if pinned.is_empty() || head.is_empty() {
        return false;
    }
    let pinned = pinned.to_ascii_lowercase();
    let head = head.to_ascii_lowercase();
    head.starts_with(&pinned) || pinned.starts_with(&head)
}

/// Resolves commit distance through a `CommitCache`
pub struct CommitDistanceResolver<'h> {
    host: &'h dyn GitHost,
}

impl<'h> CommitDistanceResolver<'h> {
    pub fn new(host: &'h dyn GitHost) -> Self {
        Self { host }
    }

    /// Head of the default branch for `repo`
    async fn branch_head(
        &self,
        cache: &mut CommitCache,
        repo: &RepositoryIdentity,
    ) -> Result<String, RegistryError> {
        if let Some(head) = cache.head(repo) {
            debug!(%repo, "branch head cache hit");
            return Ok(head.to_string());
        }

        let branch = self.host.default_branch(repo).await?;
        let head = self.host.branch_head(repo, &branch).await?;
        debug!(%repo, %branch, %head, "resolved default branch head");
        cache.heads.insert(repo.clone(), head.clone());
        Ok(head)
    }

    /// Count the commits the default branch head is ahead of `pinned`
    ///
    /// Short and full forms of the same hash resolve to zero without a
    /// compare request.
    pub async fn resolve(
        &self,
        cache: &mut CommitCache,
        repo: &RepositoryIdentity,
        pinned: &str,
    ) -> Result<CommitDistance, RegistryError> {
        let head = self.branch_head(cache, repo).await?;

        if is_same_commit(pinned, &head) {
            return Ok(CommitDistance {
                latest_hash: head,
                commits_behind: 0,
            });
        }

        let key = (repo.clone(), pinned.to_ascii_lowercase());
        let commits_behind = match cache.distances.get(&key) {
            Some(&distance) => distance,
            None => {
                let distance = self.host.compare(repo, pinned, &head).await?;
                debug!(%repo, pinned, distance, "compared pin with head");
                cache.distances.insert(key, distance);
                distance
            }
        };

        Ok(CommitDistance {
            latest_hash: head,
            commits_behind,
        })
    }
}
