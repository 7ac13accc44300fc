// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Speech shaping and the speech collaborators used by the binary.

use std::process::Stdio;

use async_trait::async_trait;
use kora_core::SpeechClient;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::{debug, warn};

/// Text longer than this is cut to its first three sentences.
const MAX_SPOKEN_CHARS: usize = 500;
const SPOKEN_SENTENCES: usize = 3;

/// Tidy punctuation for speech and shorten long text.
pub fn shape_for_speech(text: &str) -> String {
    let text = text
        .replace("...", ". ")
        .replace("!!", "!")
        .replace("??", "?");

    if text.chars().count() > MAX_SPOKEN_CHARS {
        let sentences: Vec<&str> = text.split(". ").take(SPOKEN_SENTENCES).collect();
        return format!("{}.", sentences.join(". "));
    }
    text
}

/// Speaks by piping text into an external TTS program's stdin.
#[derive(Debug, Clone)]
pub struct CommandSpeech {
    command: String,
    args: Vec<String>,
}

impl CommandSpeech {
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }
}

#[async_trait]
impl SpeechClient for CommandSpeech {
    async fn speak(&self, text: &str) -> bool {
        let child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn();
        let mut child = match child {
            Ok(child) => child,
            Err(e) => {
                warn!(command = %self.command, error = %e, "failed to start speech program");
                return false;
            }
        };

        if let Some(mut stdin) = child.stdin.take() {
            if let Err(e) = stdin.write_all(text.as_bytes()).await {
                warn!(error = %e, "failed to write to speech program");
            }
        }

        match child.wait().await {
            Ok(status) if status.success() => true,
            Ok(status) => {
                debug!(%status, "speech program exited unsuccessfully");
                false
            }
            Err(e) => {
                warn!(error = %e, "speech program did not finish");
                false
            }
        }
    }
}

/// Never speaks. Used when speech is disabled.
#[derive(Debug, Clone, Copy, Default)]
pub struct SilentSpeech;

#[async_trait]
impl SpeechClient for SilentSpeech {
    async fn speak(&self, _text: &str) -> bool {
        false
    }
}
