//! HTTP client for the ticker search endpoint
//!
//! Issues `GET <endpoint>?query=<text>` and decodes the JSON array of
//! `SearchResults`. Requests race against a `CancellationToken` so a newer
//! keystroke can abort a fetch that is still waiting on the network.

use std::time::Duration;

use reqwest::Url;
use thiserror::Error;
use tokio_util::sync::CancellationToken;

use super::document::SearchResults;
use crate::config::SearchConfig;
use crate::error::TickrError;

/// Errors that can occur while searching
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum SearchError {
    /// Connection, DNS, TLS or timeout failure
    #[error("Network error: {0}")]
    Network(String),

    /// Endpoint answered with a non-success status
    #[error("Search service error ({code}): {message}")]
    Status { code: u16, message: String },

    /// Response body was not a JSON array of results
    #[error("Invalid search response: {0}")]
    Parse(String),

    /// Request was cancelled
    #[error("Search cancelled")]
    Cancelled,
}

/// Client for the remote search service
#[derive(Debug, Clone)]
pub struct SearchClient {
    client: reqwest::Client,
    endpoint: Url,
}

impl SearchClient {
    /// Create a client from configuration
    ///
    /// Fails if the endpoint is not an absolute URL or the HTTP client cannot be built.
    pub fn new(config: &SearchConfig) -> Result<Self, TickrError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| TickrError::InvalidEndpoint {
            url: config.endpoint.clone(),
            message: e.to_string(),
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .build()
            .map_err(|e| TickrError::HttpClient(e.to_string()))?;

        Ok(Self { client, endpoint })
    }

    /// Build the request URL for a query
    ///
    /// The query is appended as the `query` parameter and percent-encoded, so
    /// text such as `"s&p 500"` reaches the service intact.
    pub fn request_url(&self, query: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("query", query);
        url
    }

    /// Search for securities matching `query`
    ///
    /// An empty query resolves to no results without touching the network.
    pub async fn search(&self, query: &str) -> Result<Vec<SearchResults>, SearchError> {
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let url = self.request_url(query);
        log::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(SearchError::Status {
                code: status.as_u16(),
                message,
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| SearchError::Network(e.to_string()))?;

        parse_results(&body)
    }

    /// Search with cancellation support
    ///
    /// Uses `tokio::select!` in biased mode so a cancelled token wins over a
    /// response that arrives in the same poll.
    pub async fn search_with_cancel(
        &self,
        query: &str,
        cancel_token: &CancellationToken,
    ) -> Result<Vec<SearchResults>, SearchError> {
        if cancel_token.is_cancelled() {
            return Err(SearchError::Cancelled);
        }

        tokio::select! {
            biased;

            _ = cancel_token.cancelled() => Err(SearchError::Cancelled),
            result = self.search(query) => result,
        }
    }
}

/// Decode a response body into search results, keeping the service's order
pub fn parse_results(body: &str) -> Result<Vec<SearchResults>, SearchError> {
    serde_json::from_str(body).map_err(|e| SearchError::Parse(e.to_string()))
}

#[cfg(test)]
#[path = "client_tests.rs"]
mod client_tests;
