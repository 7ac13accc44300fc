// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Ollama chat backend for the Kora assistant.
//!
//! Talks to a local or remote Ollama server through its `/api/chat`
//! endpoint with streaming disabled.

pub mod client;
pub mod types;

use async_trait::async_trait;
use kora_config::model::BackendConfig;
use kora_core::{ChatBackend, ChatRequest, KoraError};
use tracing::debug;

use crate::client::OllamaClient;
use crate::types::{ChatCall, ChatMessage};

/// [`ChatBackend`] backed by an Ollama server.
#[derive(Debug, Clone)]
pub struct OllamaBackend {
    client: OllamaClient,
    model: String,
}

impl OllamaBackend {
    pub fn new(config: &BackendConfig) -> Result<Self, KoraError> {
        let client = OllamaClient::new(&config.base_url, config.timeout())?;
        Ok(Self {
            client,
            model: config.model.clone(),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl ChatBackend for OllamaBackend {
    fn name(&self) -> &str {
        "ollama"
    }

    async fn chat(&self, request: ChatRequest) -> Result<String, KoraError> {
        let call = ChatCall {
            model: self.model.clone(),
            messages: vec![
                ChatMessage::system(request.system_prompt),
                ChatMessage::user(request.user_prompt),
            ],
            stream: false,
        };

        let reply = tokio::time::timeout(request.timeout, self.client.chat(&call))
            .await
            .map_err(|_| KoraError::Timeout {
                duration: request.timeout,
            })??;

        let text = reply.message.content.trim().to_string();
        debug!(model = %self.model, chars = text.len(), "ollama reply received");
        if text.is_empty() {
            return Err(KoraError::backend("empty reply content"));
        }
        Ok(text)
    }
}
