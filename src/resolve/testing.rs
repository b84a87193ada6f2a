//! In-memory `GitHost` for unit tests

use crate::domain::RepositoryIdentity;
use crate::error::RegistryError;
use crate::registry::GitHost;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

#[derive(Default)]
pub struct FakeHost {
    tags: HashMap<String, Vec<String>>,
    branches: HashMap<String, (String, String)>,
    compares: HashMap<(String, String), u64>,
    inaccessible: HashMap<String, u16>,
    broken: Vec<String>,
    tag_fetches: AtomicUsize,
    default_branch_calls: AtomicUsize,
    branch_head_calls: AtomicUsize,
    compare_calls: AtomicUsize,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tags(mut self, repo: &str, tags: &[&str]) -> Self {
        self.tags
            .insert(repo.to_string(), tags.iter().map(|t| t.to_string()).collect());
        self
    }

    pub fn with_head(mut self, repo: &str, branch: &str, head: &str) -> Self {
        self.branches
            .insert(repo.to_string(), (branch.to_string(), head.to_string()));
        self
    }

    pub fn with_compare(mut self, repo: &str, base: &str, ahead_by: u64) -> Self {
        self.compares
            .insert((repo.to_string(), base.to_string()), ahead_by);
        self
    }

    pub fn with_inaccessible(mut self, repo: &str, status: u16) -> Self {
        self.inaccessible.insert(repo.to_string(), status);
        self
    }

    /// Every call for `repo` fails with a network error
    pub fn with_broken(mut self, repo: &str) -> Self {
        self.broken.push(repo.to_string());
        self
    }

    pub fn tag_fetches(&self) -> usize {
        self.tag_fetches.load(Ordering::SeqCst)
    }

    pub fn default_branch_calls(&self) -> usize {
        self.default_branch_calls.load(Ordering::SeqCst)
    }

    pub fn branch_head_calls(&self) -> usize {
        self.branch_head_calls.load(Ordering::SeqCst)
    }

    pub fn compare_calls(&self) -> usize {
        self.compare_calls.load(Ordering::SeqCst)
    }

    pub fn total_calls(&self) -> usize {
        self.tag_fetches()
            + self.default_branch_calls()
            + self.branch_head_calls()
            + self.compare_calls()
    }

    fn check(&self, repo: &RepositoryIdentity) -> Result<(), RegistryError> {
        if let Some(&status) = self.inaccessible.get(repo.as_str()) {
            return Err(RegistryError::inaccessible(repo.as_str(), status));
        }
        if self.broken.iter().any(|r| r == repo.as_str()) {
            return Err(RegistryError::network_error(
                repo.as_str(),
                "fake",
                "HTTP 500 Internal Server Error",
            ));
        }
        Ok(())
    }

    fn missing(repo: &RepositoryIdentity, what: &str) -> RegistryError {
        RegistryError::invalid_response(repo.as_str(), "fake", format!("no {} configured", what))
    }
}

#[async_trait]
impl GitHost for FakeHost {
    fn host_name(&self) -> &'static str {
        "fake"
    }

    async fn list_tags(&self, repo: &RepositoryIdentity) -> Result<Vec<String>, RegistryError> {
        self.tag_fetches.fetch_add(1, Ordering::SeqCst);
        self.check(repo)?;
        self.tags
            .get(repo.as_str())
            .cloned()
            .ok_or_else(|| Self::missing(repo, "tags"))
    }

    async fn default_branch(&self, repo: &RepositoryIdentity) -> Result<String, RegistryError> {
        self.default_branch_calls.fetch_add(1, Ordering::SeqCst);
        self.check(repo)?;
        self.branches
            .get(repo.as_str())
            .map(|(branch, _)| branch.clone())
            .ok_or_else(|| Self::missing(repo, "default branch"))
    }

    async fn branch_head(
        &self,
        repo: &RepositoryIdentity,
        branch: &str,
    ) -> Result<String, RegistryError> {
        self.branch_head_calls.fetch_add(1, Ordering::SeqCst);
        self.check(repo)?;
        self.branches
            .get(repo.as_str())
            .filter(|(b, _)| b == branch)
            .map(|(_, head)| head.clone())
            .ok_or_else(|| Self::missing(repo, "branch"))
    }

    async fn compare(
        &self,
        repo: &RepositoryIdentity,
        base: &str,
        _head: &str,
    ) -> Result<u64, RegistryError> {
        self.compare_calls.fetch_add(1, Ordering::SeqCst);
        self.check(repo)?;
        self.compares
            .get(&(repo.to_string(), base.to_string()))
            .copied()
            .ok_or_else(|| Self::missing(repo, "compare"))
    }
}
