// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Structural properties of the style transform under random dice.

use kora_core::Personality;
use kora_persona::{PersonalityEngine, SeededDice};
use proptest::prelude::*;

proptest! {
    #[test]
    fn friendly_and_funny_keep_original_text(text in "[a-z ,.]{1,60}", seed in any::<u64>()) {
        for personality in [Personality::Friendly, Personality::Funny] {
            let mut engine =
                PersonalityEngine::with_personality(personality, Box::new(SeededDice::new(seed)));
            let styled = engine.apply_style(&text);
            prop_assert!(styled.contains(&text), "{personality}: {styled:?} lost {text:?}");
        }
    }

    #[test]
    fn wise_keeps_lowercased_text(text in "[a-z ]{1,60}", seed in any::<u64>()) {
        let mut engine =
            PersonalityEngine::with_personality(Personality::Wise, Box::new(SeededDice::new(seed)));
        let styled = engine.apply_style(&text);
        prop_assert!(styled.to_lowercase().contains(&text));
    }

    #[test]
    fn energetic_always_ends_in_punctuation(text in "[a-z ]{1,60}", seed in any::<u64>()) {
        let mut engine = PersonalityEngine::with_personality(
            Personality::Energetic,
            Box::new(SeededDice::new(seed)),
        );
        let styled = engine.apply_style(&text);
        prop_assert!(styled.ends_with(['!', '?', '.']));
    }
}
