// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Importance-ranked long-term conversation memory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use kora_core::{KoraError, Turn};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::extract::{UserInfo, extract_topics};
use crate::importance::importance_score;
use crate::persist;

/// Default number of conversations retained.
pub const DEFAULT_LONG_TERM_CAPACITY: usize = 100;

/// A turn together with the importance it scored on insert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredTurn {
    #[serde(flatten)]
    pub turn: Turn,
    pub importance: u32,
}

/// The persisted long-term document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LongTermMemory {
    #[serde(default)]
    pub conversations: Vec<StoredTurn>,
    #[serde(default)]
    pub user_info: UserInfo,
    #[serde(default)]
    pub topics: BTreeMap<String, u64>,
}

impl LongTermMemory {
    /// Score and append a turn, update attributes and topics, then enforce
    /// `capacity`.
    ///
    /// When over capacity the `capacity` highest-importance conversations are
    /// kept. Equal scores favour the earlier conversation. Survivors stay in
    /// insertion order.
    pub fn insert(&mut self, turn: Turn, capacity: usize) {
        let importance = importance_score(&turn.input);
        self.user_info.absorb(&turn.input);
        for topic in extract_topics(&turn.input) {
            *self.topics.entry(topic.to_string()).or_insert(0) += 1;
        }
        self.conversations.push(StoredTurn { turn, importance });

        if self.conversations.len() > capacity {
            self.retain_most_important(capacity);
        }
    }

    fn retain_most_important(&mut self, capacity: usize) {
        let mut ranked: Vec<usize> = (0..self.conversations.len()).collect();
        // Stable sort keeps earlier entries ahead of later ones with equal scores.
        ranked.sort_by(|a, b| {
            self.conversations[*b]
                .importance
                .cmp(&self.conversations[*a].importance)
        });
        let mut keep = vec![false; self.conversations.len()];
        for idx in ranked.into_iter().take(capacity) {
            keep[idx] = true;
        }

        let before = self.conversations.len();
        let mut flags = keep.into_iter();
        self.conversations.retain(|_| flags.next().unwrap_or(false));
        debug!(
            dropped = before - self.conversations.len(),
            kept = self.conversations.len(),
            "trimmed long-term memory by importance"
        );
    }

    /// Conversations whose input or response contains `query`
    /// (case-insensitive), in stored order, limited to the last five.
    pub fn search(&self, query: &str) -> Vec<&StoredTurn> {
        let needle = query.to_lowercase();
        let hits: Vec<&StoredTurn> = self
            .conversations
            .iter()
            .filter(|c| {
                c.turn.input.to_lowercase().contains(&needle)
                    || c.turn.response.to_lowercase().contains(&needle)
            })
            .collect();
        let skip = hits.len().saturating_sub(5);
        hits.into_iter().skip(skip).collect()
    }

    /// Topic with the highest count. Equal counts resolve to the
    /// alphabetically first topic.
    pub fn most_discussed_topic(&self) -> Option<&str> {
        self.topics
            .iter()
            .fold(None, |best: Option<(&String, u64)>, (topic, count)| match best {
                Some((_, top)) if top >= *count => best,
                _ => Some((topic, *count)),
            })
            .map(|(topic, _)| topic.as_str())
    }
}

/// [`LongTermMemory`] bound to its JSON file.
///
/// Every insert rewrites the file. Write failures are logged and swallowed.
pub struct LongTermStore {
    path: PathBuf,
    capacity: usize,
    memory: LongTermMemory,
}

impl LongTermStore {
    /// Load the document at `path`, starting empty when it is missing or corrupt.
    pub async fn open(path: impl Into<PathBuf>, capacity: usize) -> Self {
        let path = path.into();
        let memory: LongTermMemory = persist::load_or_default(&path).await;
        debug!(
            path = %path.display(),
            conversations = memory.conversations.len(),
            "loaded long-term memory"
        );
        Self {
            path,
            capacity: capacity.max(1),
            memory,
        }
    }

    /// Insert a turn and persist the whole document.
    pub async fn record(&mut self, turn: Turn) {
        self.memory.insert(turn, self.capacity);
        persist::save_logged(&self.path, &self.memory).await;
    }

    /// Persist the current document, surfacing any failure.
    pub async fn save(&self) -> Result<(), KoraError> {
        persist::save(&self.path, &self.memory).await
    }

    pub fn memory(&self) -> &LongTermMemory {
        &self.memory
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}
