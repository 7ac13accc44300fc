// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Prompt assembly and canned fallback replies.

use kora_core::clip_with_ellipsis;
use kora_persona::PersonalityInfo;

/// Supplied context longer than this is clipped before prompting.
pub const MAX_PROMPT_CONTEXT_CHARS: usize = 1000;

/// Search output passed to the backend is cut to this many characters.
pub const MAX_SEARCH_CONTEXT_CHARS: usize = 1200;

/// Substring-matched fallbacks, checked in order.
const FALLBACKS: &[(&str, &str)] = &[
    ("hello", "Hello! How can I help you today?"),
    ("hi", "Hi there! What can I do for you?"),
    ("how are you", "I'm doing well, thank you! How are you?"),
    ("thanks", "You're welcome! Happy to help!"),
    ("bye", "Goodbye! Have a great day!"),
];

/// Used when no fallback phrase matches.
pub const GENERIC_FALLBACK: &str =
    "I'm having trouble processing that right now. Could you please try again or rephrase your question?";

/// Persona instructions for the active personality.
pub fn system_prompt(personality: &PersonalityInfo) -> String {
    format!(
        "You are a helpful AI assistant. Respond naturally and conversationally. \
         For greetings, respond with simple greetings. For questions, provide clear and accurate answers. \
         Your personality is {} - {}. ",
        personality.name, personality.style
    )
}

/// The user prompt, grounded in `context` when there is any.
pub fn full_prompt(prompt: &str, context: &str) -> String {
    if context.trim().is_empty() {
        return prompt.to_string();
    }
    let context = clip_with_ellipsis(context, MAX_PROMPT_CONTEXT_CHARS);
    format!(
        "Based on this information: {context}\n\n\
         Question: {prompt}\n\n\
         Provide a helpful response in 2-3 sentences."
    )
}

/// Instructions for answering from fresh search results.
pub fn search_prompt(query: &str, pincode: Option<&str>, year: i32) -> String {
    let mut prompt = format!(
        "Using the latest search results provided, give current {year} information about: {query}. \
         Focus on recent data and current trends. Avoid outdated information."
    );
    if let Some(pincode) = pincode {
        prompt.push_str(&format!(" Location context: {pincode}"));
    }
    prompt
}

/// A direct-path prompt that carries remembered conversation.
pub fn memory_prompt(memory_context: &str, query: &str) -> String {
    format!("Conversation context: {memory_context}\nCurrent question: {query}")
}

/// Canned reply used when the backend fails.
pub fn fallback_response(prompt: &str) -> &'static str {
    let lower = prompt.trim().to_lowercase();
    FALLBACKS
        .iter()
        .find(|(needle, _)| lower.contains(needle))
        .map_or(GENERIC_FALLBACK, |(_, reply)| *reply)
}

/// Reduce a prompt to the question itself and cap it at `max_words` words.
pub fn clean_search_query(query: &str, max_words: usize) -> String {
    let mut query = query;
    if let Some((_, after)) = query.rsplit_once("Current question:") {
        query = after.trim();
    }
    if let Some((before, _)) = query.split_once("Conversation context:") {
        query = before.trim();
    }
    query
        .split_whitespace()
        .take(max_words)
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info() -> PersonalityInfo {
        PersonalityInfo {
            name: "wise".into(),
            style: "thoughtful and philosophical",
            traits: &[],
        }
    }

    #[test]
    fn system_prompt_names_personality() {
        let p = system_prompt(&info());
        assert!(p.starts_with("You are a helpful AI assistant."));
        assert!(p.ends_with("Your personality is wise - thoughtful and philosophical. "));
    }

    #[test]
    fn full_prompt_without_context_is_prompt() {
        assert_eq!(full_prompt("hi", ""), "hi");
        assert_eq!(full_prompt("hi", "   "), "hi");
    }

    #[test]
    fn full_prompt_clips_long_context() {
        let ctx = "c".repeat(1500);
        let p = full_prompt("q", &ctx);
        assert!(p.starts_with(&format!("Based on this information: {}...\n\n", "c".repeat(1000))));
        assert!(p.ends_with("Question: q\n\nProvide a helpful response in 2-3 sentences."));
    }

    #[test]
    fn search_prompt_mentions_year_and_location() {
        let p = search_prompt("gold price", Some("110001"), 2026);
        assert!(p.contains("give current 2026 information about: gold price."));
        assert!(p.ends_with(" Location context: 110001"));
        assert!(!search_prompt("x", None, 2026).contains("Location"));
    }

    #[test]
    fn fallback_matches_by_substring_in_order() {
        assert_eq!(fallback_response("hello"), "Hello! How can I help you today?");
        assert_eq!(fallback_response("Oh hi"), "Hi there! What can I do for you?");
        assert_eq!(fallback_response("ok bye"), "Goodbye! Have a great day!");
        assert_eq!(fallback_response("quantum gravity"), GENERIC_FALLBACK);
    }

    #[test]
    fn clean_search_query_strips_sections_and_caps_words() {
        let q = "Conversation context: old stuff\nCurrent question: what is the latest news";
        assert_eq!(clean_search_query(q, 10), "what is the latest news");

        let q = "one two three four five six seven eight nine ten eleven twelve";
        assert_eq!(
            clean_search_query(q, 10),
            "one two three four five six seven eight nine ten"
        );

        let q = "weather today Conversation context: ignore me";
        assert_eq!(clean_search_query(q, 10), "weather today");
    }
}
