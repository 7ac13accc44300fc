// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Last answer given per query, with a usage counter.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use kora_core::lowercase_prefix;
use serde::{Deserialize, Serialize};

use crate::persist;

/// Keys are the first 100 lowercased characters of the query.
const KEY_CHARS: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KnowledgeEntry {
    pub answer: String,
    pub timestamp: DateTime<Utc>,
    /// How many times this key has been answered.
    pub usage_count: u32,
}

/// Persisted query → answer map.
pub struct AnswerKnowledgeBase {
    path: PathBuf,
    entries: BTreeMap<String, KnowledgeEntry>,
}

impl AnswerKnowledgeBase {
    pub async fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = persist::load_or_default(&path).await;
        Self { path, entries }
    }

    /// Overwrite the answer for `query`, bump its usage count, and persist.
    pub async fn record(&mut self, query: &str, answer: &str) {
        self.insert(query, answer, Utc::now());
        persist::save_logged(&self.path, &self.entries).await;
    }

    fn insert(&mut self, query: &str, answer: &str, timestamp: DateTime<Utc>) {
        let key = lowercase_prefix(query, KEY_CHARS);
        let usage_count = self.entries.get(&key).map_or(0, |e| e.usage_count) + 1;
        self.entries.insert(
            key,
            KnowledgeEntry {
                answer: answer.to_string(),
                timestamp,
                usage_count,
            },
        );
    }

    pub fn get(&self, query: &str) -> Option<&KnowledgeEntry> {
        self.entries.get(&lowercase_prefix(query, KEY_CHARS))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn repeated_query_overwrites_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let mut kb = AnswerKnowledgeBase::open(dir.path().join("ai_knowledge.json")).await;
        kb.record("What is Rust?", "A language.").await;
        kb.record("what is rust?", "A systems language.").await;

        let entry = kb.get("WHAT IS RUST?").unwrap();
        assert_eq!(entry.answer, "A systems language.");
        assert_eq!(entry.usage_count, 2);
        assert_eq!(kb.len(), 1);

        let reopened = AnswerKnowledgeBase::open(kb.path()).await;
        assert_eq!(reopened.get("what is rust?"), Some(entry));
    }
}
