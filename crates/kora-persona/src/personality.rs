// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Personality state and the style transform it applies to replies.

use std::str::FromStr;

use kora_core::Personality;
use serde::Serialize;
use strum::IntoEnumIterator;
use tracing::info;

use crate::dice::Dice;

/// Static description of one personality.
#[derive(Debug)]
pub struct PersonalityProfile {
    pub greetings: &'static [&'static str],
    /// Short label used in the system prompt.
    pub style: &'static str,
    pub traits: &'static [&'static str],
    /// Phrases that may open a styled reply.
    pub speech_patterns: &'static [&'static str],
}

const FRIENDLY: PersonalityProfile = PersonalityProfile {
    greetings: &[
        "Hello there! How can I help you today?",
        "Hi! Great to see you!",
        "Hey! What's on your mind?",
    ],
    style: "warm and welcoming",
    traits: &["helpful", "cheerful", "supportive"],
    speech_patterns: &["I'd love to help!", "That sounds interesting!", "Great question!"],
};

const PROFESSIONAL: PersonalityProfile = PersonalityProfile {
    greetings: &[
        "Good day. How may I assist you?",
        "Hello. What can I help you with?",
        "Greetings. How can I be of service?",
    ],
    style: "formal and efficient",
    traits: &["precise", "knowledgeable", "reliable"],
    speech_patterns: &[
        "I can provide information on",
        "According to my analysis",
        "The optimal solution would be",
    ],
};

const FUNNY: PersonalityProfile = PersonalityProfile {
    greetings: &[
        "Hey there, human! Ready for some fun?",
        "Hello! I promise not to make too many bad jokes... maybe.",
        "Hi! Warning: Dad jokes may occur.",
    ],
    style: "humorous and playful",
    traits: &["witty", "playful", "entertaining"],
    speech_patterns: &["That reminds me of a joke...", "Funny you should ask!", "Here's a fun fact:"],
};

const WISE: PersonalityProfile = PersonalityProfile {
    greetings: &[
        "Greetings, seeker of knowledge.",
        "Hello. What wisdom do you seek today?",
        "Welcome. I sense you have questions.",
    ],
    style: "thoughtful and philosophical",
    traits: &["contemplative", "insightful", "patient"],
    speech_patterns: &["Consider this perspective:", "In my experience,", "Wisdom suggests that"],
};

const ENERGETIC: PersonalityProfile = PersonalityProfile {
    greetings: &[
        "HEY THERE! Ready to tackle the day?",
        "Hello! I'm super excited to help!",
        "Hi! Let's make something awesome happen!",
    ],
    style: "enthusiastic and motivating",
    traits: &["energetic", "motivational", "optimistic"],
    speech_patterns: &["That's AMAZING!", "Let's do this!", "You've got this!"],
};

/// The profile for `personality`.
pub fn profile(personality: Personality) -> &'static PersonalityProfile {
    match personality {
        Personality::Friendly => &FRIENDLY,
        Personality::Professional => &PROFESSIONAL,
        Personality::Funny => &FUNNY,
        Personality::Wise => &WISE,
        Personality::Energetic => &ENERGETIC,
    }
}

const PATTERN_CHANCE: f64 = 0.3;

const JOKES: &[&str] = &[
    " (No pun intended... okay, maybe a little intended!)",
    " Speaking of which, why don't scientists trust atoms? Because they make up everything!",
    " That's what I call a 'byte' of information! Get it? Byte? I'll see myself out...",
];

const PROFESSIONAL_STARTERS: &[&str] = &[
    "Based on available information, ",
    "According to current data, ",
    "From a professional standpoint, ",
];

const ENERGETIC_ADDITIONS: &[&str] = &[
    " Let's make it happen!",
    " This is going to be great!",
    " I'm excited to help with this!",
];

const WISE_STARTERS: &[&str] = &[
    "In my contemplation, ",
    "Through careful consideration, ",
    "Reflecting on this matter, ",
];

const WISE_ENDINGS: &[&str] = &[
    " Such is the nature of knowledge.",
    " This requires thoughtful consideration.",
    " Wisdom comes through understanding.",
];

/// Summary shown by `status` and the `personality` command.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PersonalityInfo {
    pub name: String,
    pub style: &'static str,
    pub traits: &'static [&'static str],
}

/// The active personality plus the dice its transform rolls.
///
/// Changes only through [`set_personality`](Self::set_personality).
pub struct PersonalityEngine {
    current: Personality,
    dice: Box<dyn Dice>,
}

impl PersonalityEngine {
    pub fn new(dice: Box<dyn Dice>) -> Self {
        Self::with_personality(Personality::default(), dice)
    }

    pub fn with_personality(current: Personality, dice: Box<dyn Dice>) -> Self {
        Self { current, dice }
    }

    /// Switch by name (case-insensitive). Unknown names return `false` and
    /// leave the active personality unchanged.
    pub fn set_personality(&mut self, name: &str) -> bool {
        match Personality::from_str(name.trim()) {
            Ok(next) => {
                info!(from = %self.current, to = %next, "personality changed");
                self.current = next;
                true
            }
            Err(_) => false,
        }
    }

    pub fn current(&self) -> Personality {
        self.current
    }

    pub fn info(&self) -> PersonalityInfo {
        let p = profile(self.current);
        PersonalityInfo {
            name: self.current.to_string(),
            style: p.style,
            traits: p.traits,
        }
    }

    /// All personalities in display order.
    pub fn available() -> Vec<Personality> {
        Personality::iter().collect()
    }

    /// A random greeting of the active personality.
    pub fn greeting(&mut self) -> &'static str {
        self.dice.choose(profile(self.current).greetings)
    }

    /// Restyle `text` for the active personality.
    ///
    /// A speech pattern is prepended 30% of the time, then the personality's
    /// own rewrite runs: substitutions are deterministic, additions are rolled.
    pub fn apply_style(&mut self, text: &str) -> String {
        let profile = profile(self.current);
        let mut out = text.to_string();

        if self.dice.chance(PATTERN_CHANCE) {
            let pattern = self.dice.choose(profile.speech_patterns);
            out = format!("{pattern} {out}");
        }

        match self.current {
            Personality::Friendly => out,
            Personality::Funny => self.add_humor(out),
            Personality::Professional => self.make_professional(out),
            Personality::Energetic => self.add_energy(out),
            Personality::Wise => self.add_wisdom(out),
        }
    }

    fn add_humor(&mut self, mut text: String) -> String {
        if self.dice.chance(0.2) {
            text.push_str(self.dice.choose(JOKES));
        }
        text.replace("I think", "I reckon").replace("However", "But hey")
    }

    fn make_professional(&mut self, text: String) -> String {
        let text = text
            .replace("I think", "I believe")
            .replace("pretty good", "quite effective")
            .replace("really", "particularly");
        if self.dice.chance(0.3) {
            let starter = self.dice.choose(PROFESSIONAL_STARTERS);
            return format!("{starter}{}", text.to_lowercase());
        }
        text
    }

    fn add_energy(&mut self, mut text: String) -> String {
        if !text.ends_with(['!', '?', '.']) {
            text.push('!');
        }
        let mut text = text
            .replace("good", "AWESOME")
            .replace("yes", "ABSOLUTELY YES")
            .replace("I can", "I'd LOVE to");
        if self.dice.chance(0.4) {
            text.push_str(self.dice.choose(ENERGETIC_ADDITIONS));
        }
        text
    }

    fn add_wisdom(&mut self, text: String) -> String {
        let mut text = if self.dice.chance(0.3) {
            format!("{}{}", self.dice.choose(WISE_STARTERS), text.to_lowercase())
        } else {
            text
        };
        if self.dice.chance(0.2) {
            text.push_str(self.dice.choose(WISE_ENDINGS));
        }
        text
    }
}
