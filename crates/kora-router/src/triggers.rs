// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Trigger phrases that switch optional enhancement stages on.

/// Phrases that refer back to earlier conversation.
pub const MEMORY_TRIGGERS: &[&str] = &[
    "remember", "earlier", "before", "previous", "last time",
    "you said", "we talked", "mentioned", "discussed",
];

/// Harm-adjacent words that, in a reply, call for the common-sense pass.
pub const SAFETY_KEYWORDS: &[&str] = &["dangerous", "harmful", "illegal", "unsafe", "hurt", "damage"];

/// Query phrases describing physically impossible scenarios.
pub const IMPOSSIBLE_SCENARIOS: &[&str] =
    &["fly without", "breathe underwater", "time travel", "live forever"];

/// Whether the query explicitly refers back to the conversation.
pub fn mentions_memory(query: &str) -> bool {
    let lower = query.to_lowercase();
    MEMORY_TRIGGERS.iter().any(|t| lower.contains(t))
}

/// Whether a reply should go through the common-sense correction pass.
pub fn needs_common_sense_check(query: &str, response: &str) -> bool {
    let response_lower = response.to_lowercase();
    if SAFETY_KEYWORDS.iter().any(|k| response_lower.contains(k)) {
        return true;
    }
    let query_lower = query.to_lowercase();
    IMPOSSIBLE_SCENARIOS.iter().any(|p| query_lower.contains(p))
}
