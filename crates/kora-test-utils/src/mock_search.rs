// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Scripted search client.

use std::collections::VecDeque;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use kora_core::{KoraError, SEARCH_FOUND_MARKER, SearchClient};

/// Returns queued result texts in order, then a fixed "found" result
/// built from the query.
#[derive(Clone, Default)]
pub struct ScriptedSearch {
    results: Arc<Mutex<VecDeque<Result<String, String>>>>,
    queries: Arc<Mutex<Vec<String>>>,
}

impl ScriptedSearch {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a result text returned verbatim.
    pub async fn push_result(&self, text: impl Into<String>) -> &Self {
        self.results.lock().await.push_back(Ok(text.into()));
        self
    }

    /// Queue a transport-level failure.
    pub async fn push_error(&self, message: impl Into<String>) -> &Self {
        self.results.lock().await.push_back(Err(message.into()));
        self
    }

    /// Queries received so far, after any cleaning by the caller.
    pub async fn queries(&self) -> Vec<String> {
        self.queries.lock().await.clone()
    }
}

#[async_trait]
impl SearchClient for ScriptedSearch {
    async fn search_web(&self, query: &str, _max_results: usize) -> Result<String, KoraError> {
        self.queries.lock().await.push(query.to_string());
        match self.results.lock().await.pop_front() {
            Some(Ok(text)) => Ok(text),
            Some(Err(message)) => Err(KoraError::search(message)),
            None => Ok(format!(
                "{SEARCH_FOUND_MARKER} about '{query}':\n\n1. Mock result\n   Mock snippet"
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn queued_then_default() {
        let search = ScriptedSearch::new();
        search.push_result("Search error: offline").await;
        search.push_error("blocked").await;

        assert_eq!(search.search_web("a", 5).await.unwrap(), "Search error: offline");
        assert!(search.search_web("b", 5).await.is_err());
        let fallback = search.search_web("rust", 5).await.unwrap();
        assert!(fallback.starts_with(SEARCH_FOUND_MARKER));
        assert_eq!(search.queries().await, vec!["a", "b", "rust"]);
    }
}
