// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Additive importance scoring for long-term retention.

const PERSONAL_INFO: &[&str] = &["my name", "i am", "i live", "my age", "my job"];
const EMOTIONAL: &[&str] = &["love", "hate", "sad", "happy", "angry", "excited"];
const HELP_REQUEST: &[&str] = &["help", "please", "can you", "need"];

/// Score one user input. Each signal contributes at most once.
///
/// | signal | points |
/// |---|---|
/// | personal information | 5 |
/// | question mark | 2 |
/// | emotional word | 3 |
/// | help request | 2 |
/// | more than 10 words | 1 |
pub fn importance_score(input: &str) -> u32 {
    let text = input.to_lowercase();
    let has_any = |phrases: &[&str]| phrases.iter().any(|p| text.contains(p));

    let mut score = 0;
    if has_any(PERSONAL_INFO) {
        score += 5;
    }
    if text.contains('?') {
        score += 2;
    }
    if has_any(EMOTIONAL) {
        score += 3;
    }
    if has_any(HELP_REQUEST) {
        score += 2;
    }
    if text.split_whitespace().count() > 10 {
        score += 1;
    }
    score
}
