// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Retention bounds and persistence round-trips for the memory tiers.

use kora_core::Turn;
use kora_memory::{
    LONG_TERM_FILE, LongTermMemory, LongTermStore, MemoryManager, SessionBuffer, importance_score,
};
use proptest::prelude::*;

fn inputs() -> impl Strategy<Value = Vec<String>> {
    let phrase = prop::sample::select(vec![
        "hello there",
        "can you help me?",
        "my name is ada",
        "i hate mondays",
        "what is the weather like in the mountains during a long winter season",
        "ok",
        "please",
    ]);
    prop::collection::vec(phrase.prop_map(str::to_string), 0..260)
}

proptest! {
    #[test]
    fn session_never_exceeds_capacity(inputs in inputs()) {
        let mut buf = SessionBuffer::new(20);
        for input in &inputs {
            buf.record(Turn::new(input.clone(), "r"));
            prop_assert!(buf.len() <= 20);
        }
        let expected: Vec<&String> = inputs.iter().skip(inputs.len().saturating_sub(20)).collect();
        let actual: Vec<&String> = buf.iter().map(|t| &t.input).collect();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn long_term_keeps_the_most_important(inputs in inputs()) {
        let mut mem = LongTermMemory::default();
        for (i, input) in inputs.iter().enumerate() {
            mem.insert(Turn::new(format!("{input} #{i}"), "r"), 100);
            prop_assert!(mem.conversations.len() <= 100);
        }

        let all: Vec<u32> = inputs.iter().map(|s| importance_score(s)).collect();
        let mut sorted = all.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        sorted.truncate(100);
        let mut kept: Vec<u32> = mem.conversations.iter().map(|c| c.importance).collect();
        kept.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(kept, sorted);
    }
}

#[tokio::test]
async fn long_term_roundtrip_is_field_for_field() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(LONG_TERM_FILE);

    let mut store = LongTermStore::open(&path, 100).await;
    store.record(Turn::new("my name is ada and i love robots", "Hi Ada")).await;
    store.record(Turn::new("I am 36 years old", "Noted")).await;
    store.record(Turn::new("can you recommend a book?", "Try Dune")).await;

    let reopened = LongTermStore::open(&path, 100).await;
    assert_eq!(reopened.memory(), store.memory());
    assert_eq!(reopened.memory().user_info.age, Some(36));
}

#[tokio::test]
async fn corrupt_long_term_file_starts_empty() {
    let dir = tempfile::tempdir().unwrap();
    tokio::fs::write(dir.path().join(LONG_TERM_FILE), b"[1, 2, oops")
        .await
        .unwrap();

    let mem = MemoryManager::open(dir.path(), 20, 100).await;
    assert_eq!(mem.stats().total_conversations, 0);
    assert_eq!(mem.relevant_context(), "");
}
