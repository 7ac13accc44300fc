// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Bounded buffer of the current session's turns.

use std::collections::VecDeque;

use kora_core::Turn;

/// Default number of turns a session keeps.
pub const DEFAULT_SESSION_CAPACITY: usize = 20;

/// FIFO of the most recent turns; the oldest is dropped on overflow.
#[derive(Debug, Clone)]
pub struct SessionBuffer {
    turns: VecDeque<Turn>,
    capacity: usize,
}

impl SessionBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            turns: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Append a turn, evicting from the front until within capacity.
    pub fn record(&mut self, turn: Turn) {
        self.turns.push_back(turn);
        while self.turns.len() > self.capacity {
            self.turns.pop_front();
        }
    }

    /// The last `n` turns, oldest first.
    pub fn recent(&self, n: usize) -> impl Iterator<Item = &Turn> {
        self.turns.iter().skip(self.turns.len().saturating_sub(n))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Turn> {
        self.turns.iter()
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl Default for SessionBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_SESSION_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn overflow_drops_oldest() {
        let mut buf = SessionBuffer::new(3);
        for i in 0..5 {
            buf.record(Turn::new(format!("q{i}"), format!("a{i}")));
        }
        let inputs: Vec<&str> = buf.iter().map(|t| t.input.as_str()).collect();
        assert_eq!(inputs, ["q2", "q3", "q4"]);
    }

    #[test]
    fn recent_returns_tail_in_order() {
        let mut buf = SessionBuffer::default();
        for i in 0..4 {
            buf.record(Turn::new(format!("q{i}"), "a"));
        }
        let tail: Vec<&str> = buf.recent(3).map(|t| t.input.as_str()).collect();
        assert_eq!(tail, ["q1", "q2", "q3"]);
        assert_eq!(buf.recent(10).count(), 4);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut buf = SessionBuffer::new(0);
        buf.record(Turn::new("a", "b"));
        assert_eq!(buf.len(), 1);
        assert_eq!(buf.capacity(), 1);
    }
}
