//! HTTP client shared foundation
//!
//! This module provides a shared HTTP client with:
//! - Configurable timeout and User-Agent
//! - Optional bearer credential for higher rate limits
//! - Exponential backoff retry logic (max 3 retries)
//! - Not-found / forbidden mapped to `RepositoryInaccessible`

use crate::error::RegistryError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, AUTHORIZATION, RETRY_AFTER};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use tracing::debug;

/// Default timeout for HTTP requests (30 seconds)
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Default User-Agent header
const DEFAULT_USER_AGENT: &str = concat!("aver/", env!("CARGO_PKG_VERSION"));

/// GitHub REST media type
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// Remaining request quota reported by GitHub
const RATELIMIT_REMAINING: &str = "x-ratelimit-remaining";

/// Maximum number of retry attempts
const MAX_RETRIES: u32 = 3;

/// Base delay for exponential backoff (in milliseconds)
const BASE_DELAY_MS: u64 = 100;

/// HTTP client wrapper with retry logic
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
    max_retries: u32,
}

/// 429, or GitHub's 403 with an exhausted quota or a `retry-after` hint
fn is_rate_limited(response: &reqwest::Response) -> bool {
    match response.status() {
        StatusCode::TOO_MANY_REQUESTS => true,
        StatusCode::FORBIDDEN => {
            let headers = response.headers();
            headers.contains_key(RETRY_AFTER)
                || headers
                    .get(RATELIMIT_REMAINING)
                    .and_then(|v| v.to_str().ok())
                    .is_some_and(|v| v.trim() == "0")
        }
        _ => false,
    }
}

impl HttpClient {
    /// Create a new HTTP client with default settings and an optional token
    pub fn new(token: Option<&str>) -> Result<Self, RegistryError> {
        Self::with_config(DEFAULT_TIMEOUT, DEFAULT_USER_AGENT, token)
    }

    /// Create a new HTTP client with custom configuration
    pub fn with_config(
        timeout: Duration,
        user_agent: &str,
        token: Option<&str>,
    ) -> Result<Self, RegistryError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));
        if let Some(token) = token.filter(|t| !t.is_empty()) {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| RegistryError::client_setup(format!("invalid token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .default_headers(headers)
            .build()
            .map_err(|e| RegistryError::client_setup(e.to_string()))?;

        Ok(Self {
            client,
            max_retries: MAX_RETRIES,
        })
    }

    /// Set the maximum number of retries
    pub fn with_max_retries(mut self, max_retries: u32) -> Self {
        self.max_retries = max_retries;
        self
    }

    /// Perform a GET request with retry logic and error context
    pub async fn get_with_context(
        &self,
        url: &str,
        repo: &str,
        registry: &str,
    ) -> Result<reqwest::Response, RegistryError> {
        let mut last_error = None;
        let mut delay = BASE_DELAY_MS;

        for attempt in 0..=self.max_retries {
            debug!(url, attempt, "GET");
            match self.client.get(url).send().await {
                Ok(response) => {
                    let status = response.status();

                    if is_rate_limited(&response) {
                        last_error = Some(RegistryError::rate_limit_exceeded(registry));

                        if attempt < self.max_retries {
                            tokio::time::sleep(Duration::from_millis(delay)).await;
                            delay *= 2;
                            continue;
                        }
                        break;
                    }

                    if status == StatusCode::NOT_FOUND || status == StatusCode::FORBIDDEN {
                        return Err(RegistryError::inaccessible(repo, status.as_u16()));
                    }

                    if !status.is_success() {
                        return Err(RegistryError::network_error(
                            repo,
                            registry,
                            format!("HTTP {}", status),
                        ));
                    }

                    return Ok(response);
                }
                Err(e) => {
                    if e.is_timeout() {
                        last_error = Some(RegistryError::timeout(repo, registry));
                    } else {
                        last_error = Some(RegistryError::network_error(
                            repo,
                            registry,
                            e.to_string(),
                        ));
                    }

                    if attempt < self.max_retries {
                        tokio::time::sleep(Duration::from_millis(delay)).await;
                        delay *= 2;
                    }
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| RegistryError::network_error(repo, registry, "unknown error")))
    }

    /// Perform a GET request and decode the JSON body
    ///
    /// A body that does not decode is a fatal `InvalidResponse`; it is not retried.
    pub async fn get_json<T: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        repo: &str,
        registry: &str,
    ) -> Result<T, RegistryError> {
        let response = self.get_with_context(url, repo, registry).await?;
        response.json::<T>().await.map_err(|e| {
            RegistryError::invalid_response(repo, registry, format!("failed to parse JSON: {}", e))
        })
    }
}
