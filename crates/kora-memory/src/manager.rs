// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Session and long-term memory behind one interface.

use std::path::Path;

use kora_core::Turn;
use serde::Serialize;

use crate::LONG_TERM_FILE;
use crate::long_term::{LongTermStore, StoredTurn};
use crate::session::SessionBuffer;

/// Number of session turns included in [`MemoryManager::relevant_context`].
const CONTEXT_TURNS: usize = 3;

/// Counters reported by the `memory stats` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemoryStats {
    pub session_conversations: usize,
    pub total_conversations: usize,
    pub user_info_items: usize,
    pub topics_discussed: usize,
    /// `"None"` until a topic has been seen.
    pub most_discussed_topic: String,
}

/// Owns the session buffer and the long-term store.
pub struct MemoryManager {
    session: SessionBuffer,
    long_term: LongTermStore,
}

impl MemoryManager {
    pub fn new(session: SessionBuffer, long_term: LongTermStore) -> Self {
        Self { session, long_term }
    }

    /// Open the long-term document inside `data_dir`.
    pub async fn open(data_dir: &Path, session_capacity: usize, long_term_capacity: usize) -> Self {
        let long_term = LongTermStore::open(data_dir.join(LONG_TERM_FILE), long_term_capacity).await;
        Self::new(SessionBuffer::new(session_capacity), long_term)
    }

    pub fn record_session(&mut self, turn: Turn) {
        self.session.record(turn);
    }

    /// Insert into long-term memory and persist. Write failures are logged only.
    pub async fn record_long_term(&mut self, turn: Turn) {
        self.long_term.record(turn).await;
    }

    /// Recent session turns plus known user attributes, one item per line.
    ///
    /// Returns an empty string when there is nothing to report. Calling it
    /// again without new turns yields the same text.
    pub fn relevant_context(&self) -> String {
        let mut lines = Vec::new();

        if !self.session.is_empty() {
            lines.push("Recent conversation:".to_string());
            for turn in self.session.recent(CONTEXT_TURNS) {
                lines.push(format!("You: {}", turn.input));
                lines.push(format!("AI: {}", turn.response));
            }
        }

        let info = &self.long_term.memory().user_info;
        let mut known = Vec::new();
        if let Some(name) = &info.name {
            known.push(format!("User's name: {name}"));
        }
        if let Some(location) = &info.location {
            known.push(format!("Location: {location}"));
        }
        if !known.is_empty() {
            lines.push(format!("User information: {}", known.join(", ")));
        }

        lines.join("\n")
    }

    /// Up to the last five long-term conversations mentioning `query`.
    pub fn search_memory(&self, query: &str) -> Vec<&StoredTurn> {
        self.long_term.memory().search(query)
    }

    pub fn stats(&self) -> MemoryStats {
        let memory = self.long_term.memory();
        MemoryStats {
            session_conversations: self.session.len(),
            total_conversations: memory.conversations.len(),
            user_info_items: memory.user_info.item_count(),
            topics_discussed: memory.topics.len(),
            most_discussed_topic: memory
                .most_discussed_topic()
                .unwrap_or("None")
                .to_string(),
        }
    }

    pub fn session(&self) -> &SessionBuffer {
        &self.session
    }

    pub fn long_term(&self) -> &LongTermStore {
        &self.long_term
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn manager(dir: &Path) -> MemoryManager {
        MemoryManager::open(dir, 20, 100).await
    }

    #[tokio::test]
    async fn empty_memory_has_empty_context() {
        let dir = tempfile::tempdir().unwrap();
        let mem = manager(dir.path()).await;
        assert_eq!(mem.relevant_context(), "");
        assert_eq!(mem.stats().most_discussed_topic, "None");
    }

    #[tokio::test]
    async fn context_lists_last_three_turns_and_user_info() {
        let dir = tempfile::tempdir().unwrap();
        let mut mem = manager(dir.path()).await;
        for i in 0..4 {
            mem.record_session(Turn::new(format!("q{i}"), format!("a{i}")));
        }
        mem.record_long_term(Turn::new("my name is ravi", "Hi Ravi")).await;
        mem.record_long_term(Turn::new("i am from chennai", "Nice")).await;

        let ctx = mem.relevant_context();
        assert_eq!(
            ctx,
            "Recent conversation:\nYou: q1\nAI: a1\nYou: q2\nAI: a2\nYou: q3\nAI: a3\n\
             User information: User's name: ravi, Location: chennai"
        );
        assert_eq!(mem.relevant_context(), ctx);
    }

    #[tokio::test]
    async fn stats_reflect_both_tiers() {
        let dir = tempfile::tempdir().unwrap();
        let mut mem = manager(dir.path()).await;
        mem.record_session(Turn::new("hello", "hi"));
        mem.record_long_term(Turn::new("I need a new job", "Good luck")).await;

        let stats = mem.stats();
        assert_eq!(stats.session_conversations, 1);
        assert_eq!(stats.total_conversations, 1);
        assert_eq!(stats.user_info_items, 0);
        assert_eq!(stats.topics_discussed, 1);
        assert_eq!(stats.most_discussed_topic, "work");
    }
}
