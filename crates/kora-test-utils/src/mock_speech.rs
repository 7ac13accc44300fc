// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::Mutex;

use kora_core::SpeechClient;

/// Records spoken text and always reports success.
#[derive(Clone, Default)]
pub struct RecordingSpeech {
    spoken: Arc<Mutex<Vec<String>>>,
}

impl RecordingSpeech {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn spoken(&self) -> Vec<String> {
        self.spoken.lock().await.clone()
    }
}

#[async_trait]
impl SpeechClient for RecordingSpeech {
    async fn speak(&self, text: &str) -> bool {
        self.spoken.lock().await.push(text.to_string());
        true
    }
}
