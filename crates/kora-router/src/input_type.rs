// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Input-type classification used to bucket conversation patterns.

use strum::{Display, EnumIter, EnumString};

/// Coarse category of a user input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum InputType {
    Greeting,
    Question,
    Closing,
    Request,
    General,
}

/// How a rule inspects the lowercased input.
#[derive(Debug, Clone, Copy)]
enum Rule {
    AnyPhrase(&'static [&'static str]),
    Char(char),
}

impl Rule {
    fn matches(self, lower: &str) -> bool {
        match self {
            Rule::AnyPhrase(phrases) => phrases.iter().any(|p| lower.contains(p)),
            Rule::Char(c) => lower.contains(c),
        }
    }
}

/// Ordered rules; the first match decides.
const INPUT_RULES: &[(Rule, InputType)] = &[
    (
        Rule::AnyPhrase(&["hello", "hi", "hey", "good morning"]),
        InputType::Greeting,
    ),
    (Rule::Char('?'), InputType::Question),
    (
        Rule::AnyPhrase(&["thanks", "thank you", "bye", "goodbye"]),
        InputType::Closing,
    ),
    (
        Rule::AnyPhrase(&["help", "can you", "please"]),
        InputType::Request,
    ),
];

/// Classify `input`, falling back to [`InputType::General`].
pub fn classify_input(input: &str) -> InputType {
    let lower = input.to_lowercase();
    INPUT_RULES
        .iter()
        .find(|(rule, _)| rule.matches(&lower))
        .map(|(_, kind)| *kind)
        .unwrap_or(InputType::General)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_each_type() {
        assert_eq!(classify_input("Hello there"), InputType::Greeting);
        assert_eq!(classify_input("Is it raining?"), InputType::Question);
        assert_eq!(classify_input("thanks a lot"), InputType::Closing);
        assert_eq!(classify_input("please fix my bug"), InputType::Request);
        assert_eq!(classify_input("I went running"), InputType::General);
    }

    #[test]
    fn greeting_outranks_question() {
        assert_eq!(classify_input("hey, are you awake?"), InputType::Greeting);
    }

    #[test]
    fn question_outranks_closing_and_request() {
        assert_eq!(classify_input("can you help, thanks?"), InputType::Question);
    }

    #[test]
    fn display_matches_storage_key() {
        assert_eq!(InputType::Request.to_string(), "request");
        assert_eq!("closing".parse::<InputType>().unwrap(), InputType::Closing);
    }
}
