// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Learned preferences, conversation patterns, and successful responses.
//!
//! Three JSON documents live side by side in the data directory. All three are
//! rewritten after every recorded outcome.

use std::collections::{BTreeMap, VecDeque};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use kora_core::{Feedback, Turn, lowercase_prefix};
use kora_router::{InputType, classify_input};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::UserInfo;
use crate::persist;
use crate::{LEARNED_FILE, PATTERNS_FILE, PREFERENCES_FILE};

/// Default number of exchanges kept per input type.
pub const DEFAULT_PATTERN_CAPACITY: usize = 10;

/// Learned-knowledge keys are the first 50 lowercased characters of the input.
const KNOWLEDGE_KEY_CHARS: usize = 50;

/// Input tokens that count as implicit positive feedback.
const PRAISE_TOKENS: &[&str] = &["thanks", "good", "great", "perfect"];

const PREFERENCE_CUES: &[&str] = &["my favorite", "i like", "i love"];
const COLORS: &[&str] = &["red", "blue", "green", "yellow", "purple", "orange", "black", "white"];
const FOODS: &[&str] = &["pizza", "burger", "pasta", "rice", "chicken", "fish", "salad"];

/// A reply that earned positive feedback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LearnedResponse {
    pub response: String,
    pub success_count: u32,
    pub timestamp: DateTime<Utc>,
}

/// One exchange remembered under its input type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PatternEntry {
    pub input: String,
    pub response: String,
    pub timestamp: DateTime<Utc>,
}

/// Counters reported in the system status.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LearningStats {
    pub total_knowledge_items: usize,
    pub user_preferences: usize,
    pub conversation_patterns: usize,
    pub preferences: BTreeMap<String, String>,
}

/// The learning documents and the rules that update them.
pub struct LearningStore {
    dir: PathBuf,
    pattern_capacity: usize,
    knowledge: BTreeMap<String, Vec<LearnedResponse>>,
    preferences: BTreeMap<String, String>,
    patterns: BTreeMap<String, VecDeque<PatternEntry>>,
}

impl LearningStore {
    /// Load all three documents from `dir`. Missing or corrupt ones start empty.
    pub async fn open(dir: impl Into<PathBuf>, pattern_capacity: usize) -> Self {
        let dir = dir.into();
        let knowledge = persist::load_or_default(&dir.join(LEARNED_FILE)).await;
        let preferences = persist::load_or_default(&dir.join(PREFERENCES_FILE)).await;
        let patterns = persist::load_or_default(&dir.join(PATTERNS_FILE)).await;
        Self {
            dir,
            pattern_capacity: pattern_capacity.max(1),
            knowledge,
            preferences,
            patterns,
        }
    }

    /// Learn from one exchange and persist.
    ///
    /// Preferences and patterns are always updated. The response is stored as
    /// a success only on explicit positive feedback or when the input itself
    /// contains praise.
    pub async fn record_outcome(&mut self, turn: &Turn, feedback: Option<Feedback>) {
        self.learn(turn, feedback);
        self.save().await;
    }

    /// The in-memory half of [`record_outcome`](Self::record_outcome).
    pub fn learn(&mut self, turn: &Turn, feedback: Option<Feedback>) {
        self.extract_preferences(&turn.input);
        self.remember_pattern(turn);

        let lower = turn.input.to_lowercase();
        let praised = PRAISE_TOKENS.iter().any(|t| lower.contains(t));
        if feedback == Some(Feedback::Positive) || praised {
            let key = lowercase_prefix(&turn.input, KNOWLEDGE_KEY_CHARS);
            debug!(key = %key, "storing successful response");
            self.knowledge.entry(key).or_default().push(LearnedResponse {
                response: turn.response.clone(),
                success_count: 1,
                timestamp: turn.timestamp,
            });
        }
    }

    fn extract_preferences(&mut self, input: &str) {
        let text = input.to_lowercase();

        if PREFERENCE_CUES.iter().any(|c| text.contains(c)) {
            // The last listed match wins, so "red or blue" records blue.
            if text.contains("color") {
                if let Some(color) = COLORS.iter().rev().find(|c| text.contains(*c)) {
                    self.preferences.insert("favorite_color".into(), color.to_string());
                }
            }
            if text.contains("food") {
                if let Some(food) = FOODS.iter().rev().find(|f| text.contains(*f)) {
                    self.preferences.insert("favorite_food".into(), food.to_string());
                }
            }
        }

        let mut info = UserInfo::default();
        info.absorb(input);
        if let Some(name) = info.name {
            self.preferences.insert("name".into(), name);
        }
        if let Some(location) = info.location {
            self.preferences.insert("location".into(), location);
        }
    }

    fn remember_pattern(&mut self, turn: &Turn) {
        let kind = classify_input(&turn.input).to_string();
        let entries = self.patterns.entry(kind).or_default();
        entries.push_back(PatternEntry {
            input: turn.input.clone(),
            response: turn.response.clone(),
            timestamp: turn.timestamp,
        });
        while entries.len() > self.pattern_capacity {
            entries.pop_front();
        }
    }

    /// A learned reply for `query`, if one applies.
    ///
    /// Prefers the stored success with the highest count for the same 50-char
    /// key (the earliest wins ties). Without one, a known user name yields a
    /// greeting plus a contextual line. Otherwise `None`, meaning no
    /// personalization is available.
    pub fn personalized_response(&self, query: &str) -> Option<String> {
        let key = lowercase_prefix(query, KNOWLEDGE_KEY_CHARS);
        if let Some(best) = self.knowledge.get(&key).and_then(|entries| best_response(entries)) {
            return Some(best.response.clone());
        }

        self.preferences
            .get("name")
            .map(|name| format!("Hi {name}! {}", self.contextual_response(query)))
    }

    fn contextual_response(&self, query: &str) -> String {
        let kind = classify_input(query).to_string();
        match self.patterns.get(&kind).and_then(|p| p.back()) {
            Some(latest) => format!("Based on our previous conversations, {}", latest.response),
            None => "Let me help you with that.".to_string(),
        }
    }

    pub fn stats(&self) -> LearningStats {
        LearningStats {
            total_knowledge_items: self.knowledge.len(),
            user_preferences: self.preferences.len(),
            conversation_patterns: self.patterns.len(),
            preferences: self.preferences.clone(),
        }
    }

    pub fn preferences(&self) -> &BTreeMap<String, String> {
        &self.preferences
    }

    /// Stored exchanges for one input type, oldest first.
    pub fn patterns_for(&self, kind: InputType) -> impl Iterator<Item = &PatternEntry> {
        self.patterns.get(&kind.to_string()).into_iter().flatten()
    }

    /// Rewrite all three documents, logging failures.
    pub async fn save(&self) {
        persist::save_logged(&self.dir.join(LEARNED_FILE), &self.knowledge).await;
        persist::save_logged(&self.dir.join(PREFERENCES_FILE), &self.preferences).await;
        persist::save_logged(&self.dir.join(PATTERNS_FILE), &self.patterns).await;
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

/// First entry with the maximum success count.
fn best_response(entries: &[LearnedResponse]) -> Option<&LearnedResponse> {
    entries.iter().fold(None, |best, entry| match best {
        Some(top) if top.success_count >= entry.success_count => Some(top),
        _ => Some(entry),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store(dir: &Path) -> LearningStore {
        LearningStore::open(dir, DEFAULT_PATTERN_CAPACITY).await
    }

    #[tokio::test]
    async fn praise_stores_success_and_personalizes() {
        let dir = tempfile::tempdir().unwrap();
        let mut learning = store(dir.path()).await;
        learning.learn(&Turn::new("Great, what is rust", "A language."), None);

        assert_eq!(
            learning.personalized_response("great, WHAT is rust").as_deref(),
            Some("A language.")
        );
        assert_eq!(learning.stats().total_knowledge_items, 1);
    }

    #[tokio::test]
    async fn no_praise_and_no_feedback_stores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut learning = store(dir.path()).await;
        learning.learn(&Turn::new("what is rust", "A language."), None);
        assert_eq!(learning.stats().total_knowledge_items, 0);
        assert_eq!(learning.personalized_response("what is rust"), None);

        learning.learn(&Turn::new("what is rust", "A language."), Some(Feedback::Positive));
        assert_eq!(learning.stats().total_knowledge_items, 1);
    }

    #[test]
    fn best_response_prefers_count_then_first() {
        let now = Utc::now();
        let entry = |r: &str, n| LearnedResponse {
            response: r.to_string(),
            success_count: n,
            timestamp: now,
        };
        let entries = [entry("a", 1), entry("b", 3), entry("c", 3)];
        assert_eq!(best_response(&entries).unwrap().response, "b");
        assert!(best_response(&[]).is_none());
    }

    #[tokio::test]
    async fn known_name_gives_contextual_fallback() {
        let dir = tempfile::tempdir().unwrap();
        let mut learning = store(dir.path()).await;
        learning.learn(&Turn::new("my name is Zoe", "Hello Zoe"), None);
        assert_eq!(
            learning.personalized_response("please help me").as_deref(),
            Some("Hi zoe! Let me help you with that.")
        );

        learning.learn(&Turn::new("is it sunny?", "Yes it is."), None);
        assert_eq!(
            learning.personalized_response("will it rain?").as_deref(),
            Some("Hi zoe! Based on our previous conversations, Yes it is.")
        );
    }

    #[tokio::test]
    async fn preferences_learn_color_and_food() {
        let dir = tempfile::tempdir().unwrap();
        let mut learning = store(dir.path()).await;
        learning.learn(&Turn::new("My favorite color is purple", "Nice"), None);
        learning.learn(&Turn::new("I love the food here, mostly pasta", "Yum"), None);
        learning.learn(&Turn::new("the color red", "ok"), None);

        let prefs = learning.preferences();
        assert_eq!(prefs.get("favorite_color").map(String::as_str), Some("purple"));
        assert_eq!(prefs.get("favorite_food").map(String::as_str), Some("pasta"));
    }

    #[tokio::test]
    async fn patterns_are_capped_per_type() {
        let dir = tempfile::tempdir().unwrap();
        let mut learning = LearningStore::open(dir.path(), 3).await;
        for i in 0..5 {
            learning.learn(&Turn::new(format!("question {i}?"), "a"), None);
        }
        let inputs: Vec<&str> = learning
            .patterns_for(InputType::Question)
            .map(|p| p.input.as_str())
            .collect();
        assert_eq!(inputs, ["question 2?", "question 3?", "question 4?"]);
        assert_eq!(learning.stats().conversation_patterns, 1);
    }

    #[tokio::test]
    async fn record_outcome_persists_all_documents() {
        let dir = tempfile::tempdir().unwrap();
        let mut learning = store(dir.path()).await;
        learning
            .record_outcome(&Turn::new("thanks, my name is Ola", "Welcome Ola"), None)
            .await;

        let reopened = store(dir.path()).await;
        assert_eq!(reopened.stats(), learning.stats());
        assert!(dir.path().join(LEARNED_FILE).exists());
        assert!(dir.path().join(PREFERENCES_FILE).exists());
        assert!(dir.path().join(PATTERNS_FILE).exists());
    }
}
