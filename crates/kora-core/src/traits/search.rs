// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Web search client trait.

use async_trait::async_trait;

use crate::error::KoraError;

/// A web search collaborator returning human-readable formatted text.
///
/// A successful result contains [`SEARCH_FOUND_MARKER`](crate::types::SEARCH_FOUND_MARKER).
/// "Nothing found" is reported inline as plain text, not as an `Err`.
#[async_trait]
pub trait SearchClient: Send + Sync {
    /// Searches the web and formats up to `max_results` hits.
    async fn search_web(&self, query: &str, max_results: usize) -> Result<String, KoraError>;
}
