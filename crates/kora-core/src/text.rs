// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Small text helpers shared by stores and caches.

/// Lowercase `text` and keep at most `max_chars` characters.
///
/// Used for every prefix-derived key (cache keys, learned-knowledge keys).
/// Counting is by `char`, so multi-byte input never splits a code point.
pub fn lowercase_prefix(text: &str, max_chars: usize) -> String {
    text.to_lowercase().chars().take(max_chars).collect()
}

/// Keep at most `max_chars` characters of `text`, appending `...` when cut.
pub fn clip_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}
