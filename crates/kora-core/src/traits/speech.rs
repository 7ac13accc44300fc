// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech playback trait.

use async_trait::async_trait;

/// Text-to-speech playback. Returns `true` when the text was spoken.
#[async_trait]
pub trait SpeechClient: Send + Sync {
    async fn speak(&self, text: &str) -> bool;
}
