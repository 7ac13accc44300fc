// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Empathetic openers keyed by detected emotion.

use kora_router::Emotion;

use crate::dice::Dice;

/// Used for emotions without a phrase table.
pub const DEFAULT_EMPATHY: &str = "I'm here to help you with whatever you need.";

fn phrases(emotion: Emotion) -> &'static [&'static str] {
    match emotion {
        Emotion::Happy => &[
            "That's wonderful to hear! I'm glad you're feeling good.",
            "Your happiness is contagious! What's making you so happy?",
            "I love your positive energy! Keep that smile going.",
        ],
        Emotion::Sad => &[
            "I'm sorry you're feeling down. I'm here to listen if you want to talk.",
            "It sounds like you're going through a tough time. How can I help?",
            "I understand you're feeling sad. Sometimes talking helps.",
        ],
        Emotion::Angry => &[
            "I can sense you're frustrated. Let's work through this together.",
            "It sounds like something really bothered you. Want to tell me about it?",
            "I hear your frustration. Let me try to help you with this.",
        ],
        Emotion::Anxious => &[
            "I can tell you're feeling worried. Let's take this step by step.",
            "It's okay to feel anxious. I'm here to help you through this.",
            "Take a deep breath. We can figure this out together.",
        ],
        Emotion::Confused => &[
            "I can see this is confusing. Let me try to explain it more clearly.",
            "No worries about being confused. Let's break this down together.",
            "I understand this might be unclear. Let me help clarify.",
        ],
        Emotion::Tired => &[
            "You sound exhausted. Make sure you're getting enough rest.",
            "It seems like you need a break. Take care of yourself.",
            "Being tired can make everything harder. How can I help?",
        ],
        Emotion::Excited => &[
            "I can feel your excitement! That's amazing!",
            "Your enthusiasm is wonderful! Tell me more!",
            "I love your energy! What's got you so excited?",
        ],
        Emotion::Neutral => &[],
    }
}

/// A random phrase acknowledging `emotion`.
pub fn empathetic_phrase(emotion: Emotion, dice: &mut dyn Dice) -> &'static str {
    match phrases(emotion) {
        [] => DEFAULT_EMPATHY,
        table => dice.choose(table),
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;
    use crate::dice::FixedDice;

    #[test]
    fn every_emotion_has_a_phrase() {
        let mut dice = FixedDice { roll: 0.0, pick: 2 };
        for emotion in Emotion::iter() {
            assert!(!empathetic_phrase(emotion, &mut dice).is_empty());
        }
    }

    #[test]
    fn neutral_uses_default() {
        let mut dice = FixedDice::always();
        assert_eq!(empathetic_phrase(Emotion::Neutral, &mut dice), DEFAULT_EMPATHY);
        assert_eq!(
            empathetic_phrase(Emotion::Tired, &mut dice),
            "You sound exhausted. Make sure you're getting enough rest."
        );
    }
}
