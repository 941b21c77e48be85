//! # Web Search Collaborator
//!
//! The only external interface of the pipeline. The research stage talks
//! to a `SearchProvider` trait object; the production implementation
//! queries SearXNG-style endpoints with a bounded per-request budget.
//! Failures surface as typed errors and the caller degrades, it never
//! aborts the run.

use async_trait::async_trait;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A single search hit
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Errors at the search collaborator boundary
#[derive(Debug, Error)]
pub enum SearchError {
    #[error("search request failed: {0}")]
    Request(#[from] reqwest::Error),
    #[error("search backend returned malformed response: {0}")]
    MalformedResponse(String),
    #[error("no search backend available")]
    NoBackend,
}

/// Search collaborator contract consumed by the research stage
#[async_trait]
pub trait SearchProvider: Send + Sync {
    /// Run a query and return up to `num_results` hits
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError>;
}

/// HTTP search provider backed by SearXNG instances
///
/// Endpoint resolution order:
/// 1. An explicit instance URL passed at construction
/// 2. The `SEARXNG_URL` environment variable
/// 3. Public instances, then a local fallback
///
/// With an explicit instance only that endpoint is queried and its errors
/// are reported precisely; in auto-discovery mode endpoints are tried in
/// order and exhaustion maps to [`SearchError::NoBackend`].
pub struct HttpSearchProvider {
    client: reqwest::Client,
    endpoints: Vec<String>,
    pinned: bool,
}

impl HttpSearchProvider {
    /// Create a provider, optionally pinned to a custom SearXNG instance
    pub fn new(custom_url: Option<&str>) -> Result<Self, SearchError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(10))
            .build()?;

        if let Some(url) = custom_url {
            return Ok(Self {
                client,
                endpoints: vec![format!("{}/search", url.trim_end_matches('/'))],
                pinned: true,
            });
        }

        let mut endpoints: Vec<String> = Vec::new();

        // User-configured via env var takes priority
        if let Ok(env_url) = std::env::var("SEARXNG_URL") {
            endpoints.push(format!("{}/search", env_url.trim_end_matches('/')));
        }

        // Public SearXNG instances (subset of reliable ones)
        endpoints.extend([
            "https://searx.be/search".to_string(),
            "https://search.sapti.me/search".to_string(),
            "https://searx.tiekoetter.com/search".to_string(),
        ]);

        // Local fallback
        endpoints.push("http://localhost:8888/search".to_string());
        endpoints.push("http://127.0.0.1:8888/search".to_string());

        Ok(Self {
            client,
            endpoints,
            pinned: false,
        })
    }

    async fn query_endpoint(
        &self,
        endpoint: &str,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        let url = format!("{}?q={}&format=json", endpoint, urlencoding::encode(query));
        let response = self.client.get(&url).send().await?;
        let json = response.json::<serde_json::Value>().await?;

        let results = json
            .get("results")
            .and_then(|r| r.as_array())
            .ok_or_else(|| {
                SearchError::MalformedResponse("missing 'results' array".to_string())
            })?;

        Ok(results
            .iter()
            .take(num_results)
            .map(|r| SearchResult {
                title: r
                    .get("title")
                    .and_then(|t| t.as_str())
                    .unwrap_or("")
                    .to_string(),
                url: r
                    .get("url")
                    .and_then(|u| u.as_str())
                    .unwrap_or("")
                    .to_string(),
                snippet: r
                    .get("content")
                    .and_then(|c| c.as_str())
                    .unwrap_or("")
                    .to_string(),
            })
            .collect())
    }
}

#[async_trait]
impl SearchProvider for HttpSearchProvider {
    async fn search(
        &self,
        query: &str,
        num_results: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if self.pinned {
            return self.query_endpoint(&self.endpoints[0], query, num_results).await;
        }

        for endpoint in &self.endpoints {
            if let Ok(results) = self.query_endpoint(endpoint, query, num_results).await {
                return Ok(results);
            }
        }

        Err(SearchError::NoBackend)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pinned_endpoint_construction() {
        let provider = HttpSearchProvider::new(Some("https://searx.example.org/")).unwrap();
        assert!(provider.pinned);
        assert_eq!(provider.endpoints, vec!["https://searx.example.org/search"]);
    }

    #[test]
    fn test_auto_discovery_has_fallbacks() {
        let provider = HttpSearchProvider::new(None).unwrap();
        assert!(!provider.pinned);
        assert!(provider.endpoints.len() >= 5);
        assert!(provider
            .endpoints
            .iter()
            .any(|e| e.contains("localhost:8888")));
    }

    #[test]
    fn test_search_result_serialization() {
        let result = SearchResult {
            title: "Remote Work Guide".to_string(),
            url: "https://example.org/guide".to_string(),
            snippet: "Working remotely requires structure.".to_string(),
        };
        let json = serde_json::to_string(&result).unwrap();
        assert!(json.contains("Remote Work Guide"));
    }
}
