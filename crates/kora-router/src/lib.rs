// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Lexical classification for the Kora assistant.
//!
//! This crate provides:
//! - [`SearchClassifier`]: decides whether a turn needs a live web search
//! - [`detect_emotion`]: keyword-scored emotion reading with a confidence proxy
//! - [`InputType`]: first-match input category used by the learning store
//! - [`triggers`]: memory-reference and common-sense trigger phrases
//!
//! Every classifier is a pure function over built-in phrase tables. Matching is
//! case-insensitive substring matching, so a phrase also matches inside a longer
//! word ("hi" matches "this"). Rule precedence is carried by table order.

pub mod emotion;
pub mod input_type;
pub mod search;
pub mod triggers;

pub use emotion::{Emotion, EmotionReading, detect_emotion};
pub use input_type::{InputType, classify_input};
pub use search::{SearchClassifier, SearchDecision, needs_search};
pub use triggers::{mentions_memory, needs_common_sense_check};
