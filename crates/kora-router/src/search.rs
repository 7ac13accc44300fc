// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Search-need classification.
//!
//! Decides per turn whether the orchestrator should consult the web search
//! collaborator or answer from model knowledge alone. Tiers are evaluated in
//! [`SEARCH_TIERS`] order and the first tier with a matching phrase decides,
//! regardless of how specific a later match would be.

use tracing::debug;

/// One ordered rule tier: any phrase contained in the query yields `verdict`.
#[derive(Debug, Clone, Copy)]
pub struct SearchTier {
    /// Stable name reported in [`SearchDecision::reason`].
    pub name: &'static str,
    pub phrases: &'static [&'static str],
    pub verdict: bool,
}

/// Greetings and acknowledgements.
const IMMEDIATE_SKIP: &[&str] = &[
    "hello", "hi", "hey", "thanks", "thank you", "bye", "goodbye",
    "how are you", "what can you do", "who are you", "good morning",
    "good evening", "nice", "great", "okay", "yes", "no", "sure",
    "alright", "fine", "cool", "awesome", "perfect",
];

/// App-internal commands routed elsewhere by the shell.
const COMMANDS: &[&str] = &[
    "personality", "memory stats", "voice test", "breaking news",
    "news", "search live", "ask me a question", "quiz me",
];

/// Temporal and recency words.
const PRIORITY_TRIGGERS: &[&str] = &[
    "current", "latest", "recent", "today", "now", "2024", "2025",
    "breaking", "live", "real-time", "up-to-date",
];

/// Requests for figures that go stale.
const INFO_REQUESTS: &[&str] = &[
    "price of", "cost of", "statistics", "population", "rate",
    "weather in", "temperature", "forecast", "news about",
    "best colleges", "best hospitals", "best restaurants",
    "deaths in", "mortality", "crime rate", "happened in",
];

const LOCATION_INDICATORS: &[&str] = &["near me", "in my area", "pincode", "pin code"];

/// Timeless questions the model answers well on its own.
const BASIC_KNOWLEDGE: &[&str] = &[
    "what is love", "what is life", "what is happiness",
    "what is water", "what is fire", "what is human",
    "bones in human", "human bones",
];

/// Interrogative openers that make an unmatched query count as a question.
const INTERROGATIVES: &[&str] = &["what", "how", "when", "where", "why", "who"];

/// The ordered rule table. Earlier tiers always win.
pub const SEARCH_TIERS: &[SearchTier] = &[
    SearchTier { name: "immediate skip", phrases: IMMEDIATE_SKIP, verdict: false },
    SearchTier { name: "command", phrases: COMMANDS, verdict: false },
    SearchTier { name: "priority trigger", phrases: PRIORITY_TRIGGERS, verdict: true },
    SearchTier { name: "information request", phrases: INFO_REQUESTS, verdict: true },
    SearchTier { name: "location", phrases: LOCATION_INDICATORS, verdict: true },
    SearchTier { name: "basic knowledge", phrases: BASIC_KNOWLEDGE, verdict: false },
];

/// Outcome of a search-need classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchDecision {
    pub needs_search: bool,
    /// Name of the deciding tier, or `"question"` / `"statement"` for the default rule.
    pub reason: &'static str,
}

/// Table-driven search-need classifier.
pub struct SearchClassifier {
    tiers: &'static [SearchTier],
}

impl SearchClassifier {
    /// Create a classifier over the built-in [`SEARCH_TIERS`].
    pub fn new() -> Self {
        Self { tiers: SEARCH_TIERS }
    }

    /// Classify a query. Deterministic and case-insensitive.
    pub fn classify(&self, query: &str) -> SearchDecision {
        let lower = query.trim().to_lowercase();

        for tier in self.tiers {
            if let Some(phrase) = tier.phrases.iter().find(|p| lower.contains(*p)) {
                debug!(tier = tier.name, phrase, "search tier matched");
                return SearchDecision {
                    needs_search: tier.verdict,
                    reason: tier.name,
                };
            }
        }

        let is_question =
            query.contains('?') || INTERROGATIVES.iter().any(|w| lower.starts_with(w));
        SearchDecision {
            needs_search: is_question,
            reason: if is_question { "question" } else { "statement" },
        }
    }
}

impl Default for SearchClassifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Shorthand for `SearchClassifier::new().classify(query).needs_search`.
pub fn needs_search(query: &str) -> bool {
    SearchClassifier::new().classify(query).needs_search
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_greetings_skip_search() {
        assert!(!needs_search("hello"));
        assert!(!needs_search("Thank you so much"));
        assert!(!needs_search("how are you?"));
        assert!(!needs_search("GOOD MORNING"));
    }

    #[test]
    fn classify_commands_skip_search() {
        let c = SearchClassifier::new();
        let d = c.classify("switch personality please");
        assert!(!d.needs_search);
        assert_eq!(d.reason, "command");
        assert!(!needs_search("memory stats"));
    }

    #[test]
    fn classify_recency_triggers_search() {
        let d = SearchClassifier::new().classify("latest iphone release date");
        assert!(d.needs_search);
        assert_eq!(d.reason, "priority trigger");
        assert!(needs_search("World cup 2025 results"));
    }

    #[test]
    fn classify_information_requests_search() {
        let d = SearchClassifier::new().classify("what's the price of gold");
        assert!(d.needs_search);
        assert_eq!(d.reason, "information request");
        assert!(needs_search("population of japan"));
    }

    #[test]
    fn classify_location_triggers_search() {
        let d = SearchClassifier::new().classify("pizza near me");
        assert!(d.needs_search);
        assert_eq!(d.reason, "location");
    }

    #[test]
    fn classify_basic_knowledge_skips_search() {
        let d = SearchClassifier::new().classify("what is love?");
        assert!(!d.needs_search);
        assert_eq!(d.reason, "basic knowledge");
    }

    #[test]
    fn default_rule_uses_question_shape() {
        let c = SearchClassifier::new();
        assert_eq!(
            c.classify("why do cats purr"),
            SearchDecision { needs_search: true, reason: "question" }
        );
        assert_eq!(c.classify("Tell me about Rust?").reason, "question");
        assert_eq!(
            c.classify("tell me a story"),
            SearchDecision { needs_search: false, reason: "statement" }
        );
    }

    #[test]
    fn skip_tier_outranks_priority_tier() {
        // Both "hello" (tier 1) and "latest" (tier 3) match; tier order decides.
        let d = SearchClassifier::new().classify("hello, what's the latest on mars?");
        assert!(!d.needs_search);
        assert_eq!(d.reason, "immediate skip");
    }

    #[test]
    fn substrings_inside_words_match() {
        // "hi" inside "this" is a skip hit.
        assert_eq!(SearchClassifier::new().classify("is this right?").reason, "immediate skip");
    }

    #[test]
    fn empty_query_is_a_statement() {
        assert!(!needs_search(""));
        assert!(!needs_search("   "));
    }
}
