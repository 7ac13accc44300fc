// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response-rewriting stages for the Kora assistant.
//!
//! - [`PersonalityEngine`]: the active personality and its style transform
//! - [`empathetic_phrase`]: openers keyed by detected emotion
//! - [`CommonSense`]: consistency, practicality, safety, and time-of-day pass
//! - [`Dice`]: the random source every probabilistic stage draws from
//!
//! Stages that roll dice produce different output for the same input unless
//! they are given a [`SeededDice`] or [`FixedDice`].

pub mod common_sense;
pub mod dice;
pub mod empathy;
pub mod personality;

pub use common_sense::CommonSense;
pub use dice::{Dice, FixedDice, SeededDice};
pub use empathy::{DEFAULT_EMPATHY, empathetic_phrase};
pub use personality::{PersonalityEngine, PersonalityInfo, PersonalityProfile, profile};
