// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! HTTP client for the Ollama chat API.
//!
//! Provides [`OllamaClient`] which handles request construction and one
//! retry on transient server errors.

use std::time::Duration;

use kora_core::KoraError;
use tracing::{debug, warn};

use crate::types::{ApiError, ChatCall, ChatReply};

/// Delay before the single retry of a transient failure.
const RETRY_DELAY: Duration = Duration::from_millis(500);

#[derive(Debug, Clone)]
pub struct OllamaClient {
    client: reqwest::Client,
    endpoint: String,
    max_retries: u32,
}

impl OllamaClient {
    /// Creates a client for the server at `base_url`, e.g. `http://localhost:11434`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, KoraError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| KoraError::Backend {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            endpoint: format!("{}/api/chat", base_url.trim_end_matches('/')),
            max_retries: 1,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Sends a non-streaming chat call and returns the parsed reply.
    ///
    /// On transient errors (429, 500, 502, 503), retries once.
    pub async fn chat(&self, call: &ChatCall) -> Result<ChatReply, KoraError> {
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, "retrying chat request after transient error");
                tokio::time::sleep(RETRY_DELAY).await;
            }

            let response = self
                .client
                .post(&self.endpoint)
                .json(call)
                .send()
                .await
                .map_err(|e| KoraError::Backend {
                    message: format!("HTTP request failed: {e}"),
                    source: Some(Box::new(e)),
                })?;

            let status = response.status();
            debug!(status = %status, attempt, "chat response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| KoraError::Backend {
                    message: format!("failed to read response body: {e}"),
                    source: Some(Box::new(e)),
                })?;
                return serde_json::from_str(&body).map_err(|e| KoraError::Backend {
                    message: format!("failed to parse chat reply: {e}"),
                    source: Some(Box::new(e)),
                });
            }

            let body = response.text().await.unwrap_or_default();
            if is_transient_error(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(KoraError::backend(format!("server returned {status}: {body}")));
                continue;
            }

            let message = match serde_json::from_str::<ApiError>(&body) {
                Ok(api_err) => format!("Ollama error ({status}): {}", api_err.error),
                Err(_) => format!("server returned {status}: {body}"),
            };
            return Err(KoraError::backend(message));
        }

        Err(last_error
            .unwrap_or_else(|| KoraError::backend("chat request failed after retries")))
    }
}

/// Returns true for HTTP status codes that indicate transient errors worth retrying.
fn is_transient_error(status: reqwest::StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 502 | 503)
}
