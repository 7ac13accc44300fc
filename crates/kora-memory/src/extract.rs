// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Best-effort extraction of user attributes and conversation topics.
//!
//! Attribute parsing splits on fixed trigger phrases and takes what follows
//! the last occurrence. Phrasing it does not anticipate is skipped silently:
//! "call me Sam" sets no name, and "my name is" at the very end of the input
//! leaves the stored name untouched.

use serde::{Deserialize, Serialize};

/// What the assistant has learned about the user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<u32>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub interests: Vec<String>,
}

impl UserInfo {
    /// Number of attributes that have a value.
    pub fn item_count(&self) -> usize {
        usize::from(self.name.is_some())
            + usize::from(self.location.is_some())
            + usize::from(self.age.is_some())
            + usize::from(!self.interests.is_empty())
    }

    pub fn is_empty(&self) -> bool {
        self.item_count() == 0
    }

    /// Update attributes from one user input.
    pub fn absorb(&mut self, input: &str) {
        let text = input.to_lowercase();

        if let Some(name) = after_last(&text, "my name is").and_then(first_word) {
            self.name = Some(name);
        }

        let location = after_last(&text, "i live in").or_else(|| after_last(&text, "i am from"));
        if let Some(location) = location.and_then(non_empty) {
            self.location = Some(location);
        }

        if text.contains("i am") && text.contains("years old") {
            if let Some(age) = text.split_whitespace().find_map(|w| w.parse::<u32>().ok()) {
                self.age = Some(age);
            }
        }

        let interest = after_last(&text, "i like").or_else(|| after_last(&text, "i love"));
        if let Some(interest) = interest.and_then(non_empty) {
            if !self.interests.contains(&interest) {
                self.interests.push(interest);
            }
        }
    }
}

fn after_last<'a>(text: &'a str, phrase: &str) -> Option<&'a str> {
    text.rfind(phrase).map(|idx| &text[idx + phrase.len()..])
}

fn first_word(rest: &str) -> Option<String> {
    rest.split_whitespace()
        .next()
        .map(trim_punctuation)
        .filter(|w| !w.is_empty())
        .map(str::to_string)
}

/// The clause up to the first sentence break, trimmed.
fn non_empty(rest: &str) -> Option<String> {
    let clause = rest
        .split(|c: char| matches!(c, '.' | '!' | '?' | ','))
        .next()
        .unwrap_or_default();
    let value = trim_punctuation(clause.trim());
    (!value.is_empty()).then(|| value.to_string())
}

fn trim_punctuation(s: &str) -> &str {
    s.trim_matches(|c: char| matches!(c, '.' | ',' | '!' | '?' | ';' | ':'))
}

/// Topic categories and the keywords that count toward them.
pub const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    ("technology", &["computer", "software", "ai", "robot", "internet", "phone"]),
    ("science", &["physics", "chemistry", "biology", "space", "research"]),
    ("entertainment", &["movie", "music", "game", "book", "tv", "show"]),
    ("food", &["eat", "food", "cook", "recipe", "restaurant", "meal"]),
    ("travel", &["travel", "trip", "vacation", "country", "city", "visit"]),
    ("work", &["job", "work", "career", "office", "business", "company"]),
    ("health", &["health", "exercise", "doctor", "medicine", "fitness"]),
    ("education", &["school", "study", "learn", "university", "course"]),
];

/// Every topic with at least one keyword in `input`. Topics are not exclusive.
pub fn extract_topics(input: &str) -> Vec<&'static str> {
    let text = input.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .filter(|(_, keywords)| keywords.iter().any(|k| text.contains(k)))
        .map(|(topic, _)| *topic)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_location_and_age() {
        let mut info = UserInfo::default();
        info.absorb("Hi, my name is Priya.");
        info.absorb("I live in New Delhi");
        info.absorb("I am 29 years old");
        assert_eq!(info.name.as_deref(), Some("priya"));
        assert_eq!(info.location.as_deref(), Some("new delhi"));
        assert_eq!(info.age, Some(29));
        assert_eq!(info.item_count(), 3);
    }

    #[test]
    fn interests_accumulate_without_duplicates() {
        let mut info = UserInfo::default();
        info.absorb("I like chess");
        info.absorb("i love jazz!");
        info.absorb("I like chess");
        assert_eq!(info.interests, ["chess", "jazz"]);
    }

    #[test]
    fn unexpected_phrasing_is_skipped() {
        let mut info = UserInfo::default();
        info.absorb("call me Sam");
        info.absorb("my name is");
        info.absorb("I am years old");
        assert!(info.is_empty());
    }

    #[test]
    fn values_stop_at_the_first_sentence_break() {
        let mut info = UserInfo::default();
        info.absorb("I live in Pune. I like tea and long walks.");
        assert_eq!(info.location.as_deref(), Some("pune"));
        assert_eq!(info.interests, ["tea and long walks"]);

        info.absorb("I am from Lisbon, Portugal");
        assert_eq!(info.location.as_deref(), Some("lisbon"));
    }

    #[test]
    fn topics_are_non_exclusive() {
        let topics = extract_topics("I want to study computer science and cook dinner");
        assert!(topics.contains(&"technology"));
        assert!(topics.contains(&"education"));
        assert!(topics.contains(&"food"));
        assert!(extract_topics("zzz").is_empty());
    }
}
