// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock chat backend for deterministic testing.
//!
//! `MockBackend` implements `ChatBackend` with pre-configured replies and
//! records every request it receives.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::sync::Mutex;

use kora_core::{ChatBackend, ChatRequest, KoraError};

#[derive(Debug, Clone)]
enum Mode {
    Scripted,
    Failing,
    Hanging(Duration),
}

/// A mock chat backend that returns pre-configured replies.
///
/// Replies are popped from a FIFO queue. When the queue is empty,
/// `"mock response"` is returned.
#[derive(Clone)]
pub struct MockBackend {
    replies: Arc<Mutex<VecDeque<String>>>,
    requests: Arc<Mutex<Vec<ChatRequest>>>,
    mode: Mode,
}

impl MockBackend {
    /// Create a mock backend with an empty reply queue.
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(VecDeque::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
            mode: Mode::Scripted,
        }
    }

    /// Create a mock backend pre-loaded with the given replies.
    pub fn with_replies<I, S>(replies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let backend = Self::new();
        let queue = replies.into_iter().map(Into::into).collect();
        Self {
            replies: Arc::new(Mutex::new(queue)),
            ..backend
        }
    }

    /// A backend whose every call fails.
    pub fn always_fail() -> Self {
        Self {
            mode: Mode::Failing,
            ..Self::new()
        }
    }

    /// A backend that sleeps for `delay` before answering.
    pub fn hanging(delay: Duration) -> Self {
        Self {
            mode: Mode::Hanging(delay),
            ..Self::new()
        }
    }

    /// Add a reply to the end of the queue.
    pub async fn push_reply(&self, text: impl Into<String>) {
        self.replies.lock().await.push_back(text.into());
    }

    /// Number of calls received, failed ones included.
    pub async fn call_count(&self) -> usize {
        self.requests.lock().await.len()
    }

    /// Every request received so far, oldest first.
    pub async fn requests(&self) -> Vec<ChatRequest> {
        self.requests.lock().await.clone()
    }

    async fn next_reply(&self) -> String {
        self.replies
            .lock()
            .await
            .pop_front()
            .unwrap_or_else(|| "mock response".to_string())
    }
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ChatBackend for MockBackend {
    fn name(&self) -> &str {
        "mock-backend"
    }

    async fn chat(&self, request: ChatRequest) -> Result<String, KoraError> {
        self.requests.lock().await.push(request);
        match self.mode {
            Mode::Scripted => Ok(self.next_reply().await),
            Mode::Failing => Err(KoraError::backend("mock backend configured to fail")),
            Mode::Hanging(delay) => {
                tokio::time::sleep(delay).await;
                Ok(self.next_reply().await)
            }
        }
    }
}
