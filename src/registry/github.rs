//! GitHub REST API adapter
//!
//! Endpoints used:
//! - Tags: {base}/repos/{owner}/{repo}/tags?per_page=100
//! - Repository: {base}/repos/{owner}/{repo}
//! - Branch: {base}/repos/{owner}/{repo}/branches/{branch}
//! - Compare: {base}/repos/{owner}/{repo}/compare/{base}...{head}

use crate::domain::RepositoryIdentity;
use crate::error::RegistryError;
use crate::registry::{GitHost, HttpClient};
use async_trait::async_trait;
use serde::Deserialize;

/// Default GitHub API base URL
pub const GITHUB_API_URL: &str = "https://api.github.com";

/// Page size for tag listing; only the most recent page is compared
const TAGS_PER_PAGE: u32 = 100;

/// GitHub adapter
pub struct GitHubAdapter {
    client: HttpClient,
    base_url: String,
}

#[derive(Debug, Deserialize)]
struct TagResponse {
    name: String,
}

#[derive(Debug, Deserialize)]
struct RepositoryResponse {
    default_branch: String,
}

#[derive(Debug, Deserialize)]
struct BranchResponse {
    commit: CommitRef,
}

#[derive(Debug, Deserialize)]
struct CommitRef {
    sha: String,
}

#[derive(Debug, Deserialize)]
struct CompareResponse {
    ahead_by: u64,
}

impl GitHubAdapter {
    /// Create a GitHub adapter against a custom API base (GHES, test servers)
    pub fn with_base_url(client: HttpClient, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn repo_url(&self, repo: &RepositoryIdentity) -> String {
        format!("{}/repos/{}", self.base_url, repo)
    }

    fn build_tags_url(&self, repo: &RepositoryIdentity) -> String {
        format!("{}/tags?per_page={}", self.repo_url(repo), TAGS_PER_PAGE)
    }

    fn build_branch_url(&self, repo: &RepositoryIdentity, branch: &str) -> String {
        format!("{}/branches/{}", self.repo_url(repo), branch)
    }

    fn build_compare_url(&self, repo: &RepositoryIdentity, base: &str, head: &str) -> String {
        format!("{}/compare/{}...{}", self.repo_url(repo), base, head)
    }
}

#[async_trait]
impl GitHost for GitHubAdapter {
    fn host_name(&self) -> &'static str {
        "GitHub"
    }

    async fn list_tags(&self, repo: &RepositoryIdentity) -> Result<Vec<String>, RegistryError> {
        let url = self.build_tags_url(repo);
        let tags: Vec<TagResponse> = self
            .client
            .get_json(&url, repo.as_str(), self.host_name())
            .await?;

        Ok(tags.into_iter().map(|t| t.name).collect())
    }

    async fn default_branch(&self, repo: &RepositoryIdentity) -> Result<String, RegistryError> {
        let url = self.repo_url(repo);
        let response: RepositoryResponse = self
            .client
            .get_json(&url, repo.as_str(), self.host_name())
            .await?;

        Ok(response.default_branch)
    }

    async fn branch_head(
        &self,
        repo: &RepositoryIdentity,
        branch: &str,
    ) -> Result<String, RegistryError> {
        let url = self.build_branch_url(repo, branch);
        let response: BranchResponse = self
            .client
            .get_json(&url, repo.as_str(), self.host_name())
            .await?;

        Ok(response.commit.sha)
    }

    async fn compare(
        &self,
        repo: &RepositoryIdentity,
        base: &str,
        head: &str,
    ) -> Result<u64, RegistryError> {
        let url = self.build_compare_url(repo, base, head);
        let response: CompareResponse = self
            .client
            .get_json(&url, repo.as_str(), self.host_name())
            .await?;

        Ok(response.ahead_by)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    fn repo(name: &str) -> RepositoryIdentity {
        RepositoryIdentity::from_action_name(name)
    }

    fn adapter(base_url: &str) -> GitHubAdapter {
        let client = HttpClient::new(None).unwrap().with_max_retries(0);
        GitHubAdapter::with_base_url(client, base_url)
    }

    #[test]
    fn test_github_adapter_host_name() {
        assert_eq!(adapter(GITHUB_API_URL).host_name(), "GitHub");
    }

    #[test]
    fn test_build_urls() {
        let adapter = adapter("https://api.github.com/");
        let r = repo("actions/checkout");
        assert_eq!(
            adapter.build_tags_url(&r),
            "https://api.github.com/repos/actions/checkout/tags?per_page=100"
        );
        assert_eq!(
            adapter.build_branch_url(&r, "main"),
            "https://api.github.com/repos/actions/checkout/branches/main"
        );
        assert_eq!(
            adapter.build_compare_url(&r, "abc1234", "def5678"),
            "https://api.github.com/repos/actions/checkout/compare/abc1234...def5678"
        );
    }

    #[tokio::test]
    async fn list_tags_returns_names_in_order() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/actions/checkout/tags")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"[{"name": "v4.1.0"}, {"name": "v4"}, {"name": "v3.6.0"}]"#)
            .create_async()
            .await;

        let tags = adapter(&server.url())
            .list_tags(&repo("actions/checkout"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(tags, vec!["v4.1.0", "v4", "v3.6.0"]);
    }

    #[tokio::test]
    async fn list_tags_empty_is_ok() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/some/repo/tags")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body("[]")
            .create_async()
            .await;

        let tags = adapter(&server.url())
            .list_tags(&repo("some/repo"))
            .await
            .unwrap();

        mock.assert_async().await;
        assert!(tags.is_empty());
    }

    #[tokio::test]
    async fn list_tags_not_found_is_inaccessible() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/missing/repo/tags")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(404)
            .with_body(r#"{"message": "Not Found"}"#)
            .create_async()
            .await;

        let result = adapter(&server.url()).list_tags(&repo("missing/repo")).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(RegistryError::RepositoryInaccessible { status: 404, .. })
        ));
    }

    #[tokio::test]
    async fn list_tags_forbidden_is_inaccessible() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/private/repo/tags")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(403)
            .create_async()
            .await;

        let result = adapter(&server.url()).list_tags(&repo("private/repo")).await;

        mock.assert_async().await;
        assert!(matches!(
            result,
            Err(RegistryError::RepositoryInaccessible { status: 403, .. })
        ));
    }

    #[tokio::test]
    async fn server_error_is_network_error() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/actions/checkout/tags")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(500)
            .create_async()
            .await;

        let result = adapter(&server.url())
            .list_tags(&repo("actions/checkout"))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::NetworkError { .. })));
    }

    #[tokio::test]
    async fn malformed_body_is_invalid_response() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/actions/checkout/tags")
            .match_query(Matcher::UrlEncoded("per_page".into(), "100".into()))
            .with_status(200)
            .with_body("not json")
            .create_async()
            .await;

        let result = adapter(&server.url())
            .list_tags(&repo("actions/checkout"))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(RegistryError::InvalidResponse { .. })));
    }

    #[tokio::test]
    async fn default_branch_and_head() {
        let mut server = Server::new_async().await;
        let repo_mock = server
            .mock("GET", "/repos/actions/checkout")
            .with_status(200)
            .with_body(r#"{"name": "checkout", "default_branch": "main"}"#)
            .create_async()
            .await;
        let branch_mock = server
            .mock("GET", "/repos/actions/checkout/branches/main")
            .with_status(200)
            .with_body(r#"{"name": "main", "commit": {"sha": "def5678def5678"}}"#)
            .create_async()
            .await;

        let adapter = adapter(&server.url());
        let r = repo("actions/checkout");
        let branch = adapter.default_branch(&r).await.unwrap();
        let head = adapter.branch_head(&r, &branch).await.unwrap();

        repo_mock.assert_async().await;
        branch_mock.assert_async().await;
        assert_eq!(branch, "main");
        assert_eq!(head, "def5678def5678");
    }

    #[tokio::test]
    async fn compare_returns_ahead_by() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/repos/actions/checkout/compare/abc1234...def5678")
            .with_status(200)
            .with_body(r#"{"status": "ahead", "ahead_by": 3, "behind_by": 0}"#)
            .create_async()
            .await;

        let ahead = adapter(&server.url())
            .compare(&repo("actions/checkout"), "abc1234", "def5678")
            .await
            .unwrap();

        mock.assert_async().await;
        assert_eq!(ahead, 3);
    }
}
