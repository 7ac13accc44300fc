// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Short in-process log of recent question/answer pairs.

use chrono::{DateTime, Utc};
use serde::Serialize;

/// Above this many entries the log is compacted.
const HIGH_WATER: usize = 15;
/// Entries kept after compaction.
const KEEP: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecentAnswer {
    pub question: String,
    pub answer: String,
    pub timestamp: DateTime<Utc>,
}

/// Grows to 15 entries, then drops back to the newest 10.
#[derive(Debug, Clone, Default)]
pub struct RecentAnswers {
    entries: Vec<RecentAnswer>,
}

impl RecentAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, question: &str, answer: &str) {
        self.entries.push(RecentAnswer {
            question: question.to_string(),
            answer: answer.to_string(),
            timestamp: Utc::now(),
        });
        if self.entries.len() > HIGH_WATER {
            self.entries.drain(..self.entries.len() - KEEP);
        }
    }

    pub fn last(&self) -> Option<&RecentAnswer> {
        self.entries.last()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compacts_to_ten_after_fifteen() {
        let mut log = RecentAnswers::new();
        for i in 0..15 {
            log.push(&format!("q{i}"), "a");
        }
        assert_eq!(log.len(), 15);
        log.push("q15", "a");
        assert_eq!(log.len(), 10);
        assert_eq!(log.last().unwrap().question, "q15");
        assert_eq!(log.entries[0].question, "q6");
    }
}
