// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP search client.

use std::time::Duration;

use async_trait::async_trait;
use kora_config::model::SearchConfig;
use kora_core::{KoraError, SearchClient};
use tracing::{debug, info, warn};

use crate::format::format_results;
use crate::parse::{SearchHit, parse_bing, parse_duckduckgo};

const DUCKDUCKGO_URL: &str = "https://html.duckduckgo.com/html/";
const BING_URL: &str = "https://www.bing.com/search";
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Web search over DuckDuckGo's HTML endpoint with Bing as a fallback.
#[derive(Debug, Clone)]
pub struct WebSearch {
    client: reqwest::Client,
    duckduckgo_url: String,
    bing_url: String,
}

impl WebSearch {
    pub fn new(config: &SearchConfig) -> Result<Self, KoraError> {
        Self::with_endpoints(
            Duration::from_secs(config.timeout_secs),
            DUCKDUCKGO_URL,
            BING_URL,
        )
    }

    /// A client against explicit engine URLs, e.g. a local mock server.
    pub fn with_endpoints(
        timeout: Duration,
        duckduckgo_url: impl Into<String>,
        bing_url: impl Into<String>,
    ) -> Result<Self, KoraError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| KoraError::Search {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            duckduckgo_url: duckduckgo_url.into(),
            bing_url: bing_url.into(),
        })
    }

    async fn fetch(&self, url: &str, query: &str) -> Result<String, KoraError> {
        let url = reqwest::Url::parse_with_params(url, &[("q", query)])
            .map_err(|e| KoraError::search(format!("invalid search URL '{url}': {e}")))?;
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .map_err(|e| KoraError::Search {
                message: format!("HTTP request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(KoraError::search(format!("{url} returned {status}")));
        }
        response.text().await.map_err(|e| KoraError::Search {
            message: format!("failed to read search page: {e}"),
            source: Some(Box::new(e)),
        })
    }

    async fn duckduckgo(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, KoraError> {
        let html = self.fetch(&self.duckduckgo_url, query).await?;
        parse_duckduckgo(&html, limit)
    }

    async fn bing(&self, query: &str, limit: usize) -> Result<Vec<SearchHit>, KoraError> {
        let html = self.fetch(&self.bing_url, query).await?;
        parse_bing(&html, limit)
    }
}

#[async_trait]
impl SearchClient for WebSearch {
    async fn search_web(&self, query: &str, max_results: usize) -> Result<String, KoraError> {
        let primary = match self.duckduckgo(query, max_results).await {
            Ok(hits) => hits,
            Err(e) => {
                warn!(error = %e, "duckduckgo search failed");
                Vec::new()
            }
        };

        let hits = if primary.is_empty() {
            info!("no duckduckgo results, trying bing");
            self.bing(query, max_results).await?
        } else {
            primary
        };

        debug!(query, hits = hits.len(), "web search finished");
        Ok(format_results(query, &hits, chrono::Local::now()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kora_core::SEARCH_FOUND_MARKER;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const DDG_PAGE: &str = r#"<div class="result">
        <a class="result__a" href="https://www.rust-lang.org/">Rust</a>
        <a class="result__snippet">Fast and reliable.</a>
    </div>"#;

    const BING_PAGE: &str =
        r#"<li class="b_algo"><h2>Rust on Bing</h2><p>Memory safety without GC.</p></li>"#;

    fn client(server: &MockServer) -> WebSearch {
        WebSearch::with_endpoints(
            Duration::from_secs(5),
            format!("{}/ddg", server.uri()),
            format!("{}/bing", server.uri()),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn duckduckgo_results_are_formatted() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ddg"))
            .and(query_param("q", "rust language"))
            .respond_with(ResponseTemplate::new(200).set_body_string(DDG_PAGE))
            .expect(1)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/bing"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BING_PAGE))
            .expect(0)
            .mount(&server)
            .await;

        let text = client(&server).search_web("rust language", 5).await.unwrap();
        assert!(text.starts_with("Here's what I found about 'rust language':"));
        assert!(text.contains("1. Rust\n   Fast and reliable."));
    }

    #[tokio::test]
    async fn empty_duckduckgo_falls_back_to_bing() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/ddg"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path("/bing"))
            .respond_with(ResponseTemplate::new(200).set_body_string(BING_PAGE))
            .mount(&server)
            .await;

        let text = client(&server).search_web("rust", 5).await.unwrap();
        assert!(text.contains("1. Rust on Bing"));
    }

    #[tokio::test]
    async fn nothing_anywhere_is_reported_without_marker() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html></html>"))
            .mount(&server)
            .await;

        let text = client(&server).search_web("zzzz", 5).await.unwrap();
        assert!(!text.contains(SEARCH_FOUND_MARKER));
    }

    #[tokio::test]
    async fn both_engines_down_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let err = client(&server).search_web("rust", 5).await.unwrap_err();
        assert!(matches!(err, KoraError::Search { .. }));
    }
}
