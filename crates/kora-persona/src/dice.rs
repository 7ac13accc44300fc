// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable random source for probabilistic text transforms.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Source of the random draws made by response transforms.
pub trait Dice: Send {
    /// A value in `[0, 1)`.
    fn roll(&mut self) -> f64;

    /// An index in `0..len`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;

    /// `true` with probability `p`.
    fn chance(&mut self, p: f64) -> bool {
        self.roll() < p
    }

    /// One element of a non-empty phrase table.
    fn choose(&mut self, items: &[&'static str]) -> &'static str {
        match items.len() {
            0 => "",
            len => items[self.pick(len).min(len - 1)],
        }
    }
}

/// [`Dice`] backed by a seedable PRNG. Equal seeds give equal sequences.
pub struct SeededDice {
    rng: StdRng,
}

impl SeededDice {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Seeded from OS entropy; used outside tests.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Dice for SeededDice {
    fn roll(&mut self) -> f64 {
        self.rng.gen_range(0.0..1.0)
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.gen_range(0..len.max(1))
    }
}

/// [`Dice`] that always returns the same values.
#[derive(Debug, Clone, Copy)]
pub struct FixedDice {
    pub roll: f64,
    pub pick: usize,
}

impl FixedDice {
    /// Every probabilistic effect is skipped.
    pub fn never() -> Self {
        Self { roll: 0.99, pick: 0 }
    }

    /// Every probabilistic effect fires with the first phrase of its table.
    pub fn always() -> Self {
        Self { roll: 0.0, pick: 0 }
    }
}

impl Dice for FixedDice {
    fn roll(&mut self) -> f64 {
        self.roll
    }

    fn pick(&mut self, _len: usize) -> usize {
        self.pick
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_dice_are_reproducible() {
        let mut a = SeededDice::new(7);
        let mut b = SeededDice::new(7);
        for _ in 0..20 {
            assert_eq!(a.roll(), b.roll());
            assert_eq!(a.pick(3), b.pick(3));
        }
    }

    #[test]
    fn seeded_values_are_in_range() {
        let mut dice = SeededDice::new(42);
        for _ in 0..200 {
            let r = dice.roll();
            assert!((0.0..1.0).contains(&r));
            assert!(dice.pick(3) < 3);
        }
    }

    #[test]
    fn fixed_dice_choose_clamps_index() {
        let mut dice = FixedDice { roll: 0.5, pick: 9 };
        assert_eq!(dice.choose(&["a", "b"]), "b");
        assert!(!FixedDice::never().chance(0.4));
        assert!(FixedDice::always().chance(0.2));
    }
}
