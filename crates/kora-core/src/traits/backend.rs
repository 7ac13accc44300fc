// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Chat backend trait for LLM integrations (Ollama and compatible servers).

use async_trait::async_trait;

use crate::error::KoraError;
use crate::types::ChatRequest;

/// An opaque chat-completion call.
///
/// Implementations may fail or time out. Callers are expected to catch the
/// error and substitute a fallback reply.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    /// Short identifier used in logs and status output.
    fn name(&self) -> &str;

    /// Sends the request and returns the reply text.
    async fn chat(&self, request: ChatRequest) -> Result<String, KoraError>;
}
