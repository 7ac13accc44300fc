// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Keyword-scored emotion detection.
//!
//! Each category scores one point per keyword contained anywhere in the
//! lowercased text. The confidence value is an intensity proxy bounded to
//! `[0, 1]`, not a probability.

use strum::{Display, EnumIter};

/// Emotion categories, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Emotion {
    Happy,
    Sad,
    Angry,
    Anxious,
    Confused,
    Tired,
    Excited,
    /// Nothing scored.
    Neutral,
}

/// Confidence reported when no category scores.
pub const NEUTRAL_CONFIDENCE: f64 = 0.5;

const EMOTION_KEYWORDS: &[(Emotion, &[&str])] = &[
    (
        Emotion::Happy,
        &[
            "happy", "joy", "excited", "great", "awesome", "wonderful", "amazing",
            "fantastic", "good", "smile", "laugh",
        ],
    ),
    (
        Emotion::Sad,
        &[
            "sad", "depressed", "down", "upset", "cry", "terrible", "awful", "bad",
            "disappointed", "hurt",
        ],
    ),
    (
        Emotion::Angry,
        &[
            "angry", "mad", "furious", "annoyed", "frustrated", "hate", "stupid", "idiot",
            "damn",
        ],
    ),
    (
        Emotion::Anxious,
        &["worried", "nervous", "scared", "afraid", "anxious", "stress", "panic", "fear"],
    ),
    (
        Emotion::Confused,
        &[
            "confused", "lost", "dont understand", "don't get", "unclear", "what", "how",
            "why",
        ],
    ),
    (
        Emotion::Tired,
        &["tired", "exhausted", "sleepy", "fatigue", "worn out", "drained"],
    ),
    (
        Emotion::Excited,
        &["excited", "thrilled", "pumped", "eager", "cant wait", "can't wait"],
    ),
];

/// A detected emotion with its heuristic intensity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmotionReading {
    pub emotion: Emotion,
    pub confidence: f64,
}

impl EmotionReading {
    /// The reading returned when no keyword matched.
    pub fn neutral() -> Self {
        Self {
            emotion: Emotion::Neutral,
            confidence: NEUTRAL_CONFIDENCE,
        }
    }
}

/// Detect the dominant emotion in `text`.
///
/// The label is the highest-scoring category; ties go to the category listed
/// first. Confidence is `min(1, score / word_count * 10)`.
pub fn detect_emotion(text: &str) -> EmotionReading {
    let lower = text.to_lowercase();

    let mut best: Option<(Emotion, usize)> = None;
    for (emotion, keywords) in EMOTION_KEYWORDS {
        let score = keywords.iter().filter(|k| lower.contains(*k)).count();
        if score > 0 && best.is_none_or(|(_, top)| score > top) {
            best = Some((*emotion, score));
        }
    }

    match best {
        Some((emotion, score)) => {
            let word_count = text.split_whitespace().count().max(1);
            let confidence = (score as f64 / word_count as f64 * 10.0).min(1.0);
            EmotionReading {
                emotion,
                confidence,
            }
        }
        None => EmotionReading::neutral(),
    }
}
