// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversational memory for the Kora assistant.
//!
//! This crate provides:
//! - [`SessionBuffer`]: bounded FIFO of the most recent turns
//! - [`LongTermStore`]: importance-ranked, persisted conversation history with
//!   extracted user attributes and topic counters
//! - [`MemoryManager`]: the session and long-term tiers behind one interface
//! - [`LearningStore`]: learned preferences, conversation patterns, and
//!   responses that earned positive feedback
//! - [`AnswerKnowledgeBase`]: the last answer given per query prefix
//! - [`RecentAnswers`]: short in-process question/answer log
//!
//! Every persisted document is read whole at startup and rewritten whole after
//! each mutation. A missing or corrupt file loads as an empty document; a failed
//! write is logged and otherwise ignored.

pub mod extract;
pub mod importance;
pub mod knowledge;
pub mod learning;
pub mod long_term;
pub mod manager;
pub mod persist;
pub mod recent;
pub mod session;

pub use extract::{TOPIC_KEYWORDS, UserInfo, extract_topics};
pub use importance::importance_score;
pub use knowledge::{AnswerKnowledgeBase, KnowledgeEntry};
pub use learning::{LearnedResponse, LearningStats, LearningStore, PatternEntry};
pub use long_term::{LongTermMemory, LongTermStore, StoredTurn};
pub use manager::{MemoryManager, MemoryStats};
pub use recent::{RecentAnswer, RecentAnswers};
pub use session::SessionBuffer;

/// File name of the long-term memory document.
pub const LONG_TERM_FILE: &str = "context_memory.json";
/// File name of the success-keyed learned responses.
pub const LEARNED_FILE: &str = "ai_learned_knowledge.json";
/// File name of the learned user preferences.
pub const PREFERENCES_FILE: &str = "user_preferences.json";
/// File name of the per-input-type conversation patterns.
pub const PATTERNS_FILE: &str = "conversation_patterns.json";
/// File name of the answer knowledge base.
pub const KNOWLEDGE_FILE: &str = "ai_knowledge.json";
