// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types shared by the classifiers, stores, and orchestrator.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Phrase a successful web search result starts with.
///
/// Search collaborators report failure inline, so the orchestrator inspects the
/// returned text for this marker instead of receiving a structured error.
pub const SEARCH_FOUND_MARKER: &str = "Here's what I found";

/// One user input and the reply that was given to it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// What the user typed.
    pub input: String,
    /// The final reply shown to the user.
    pub response: String,
    /// When the exchange happened.
    pub timestamp: DateTime<Utc>,
}

impl Turn {
    /// Creates a turn stamped with the current time.
    pub fn new(input: impl Into<String>, response: impl Into<String>) -> Self {
        Self::at(input, response, Utc::now())
    }

    /// Creates a turn with an explicit timestamp.
    pub fn at(
        input: impl Into<String>,
        response: impl Into<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            input: input.into(),
            response: response.into(),
            timestamp,
        }
    }
}

/// A single-shot chat completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    /// Instructions describing the assistant's persona.
    pub system_prompt: String,
    /// The fully assembled user prompt.
    pub user_prompt: String,
    /// Upper bound the backend should apply to the call.
    pub timeout: Duration,
}

/// User feedback attached to a turn when recording what was learned from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Feedback {
    Positive,
    Negative,
}

/// The assistant's speaking style.
///
/// Parsing is case-insensitive; unknown names fail to parse.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Display,
    EnumString,
    EnumIter,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Personality {
    #[default]
    Friendly,
    Professional,
    Funny,
    Wise,
    Energetic,
}
