// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Response and search caches with a shared TTL and per-cache size cap.

use std::collections::{HashMap, VecDeque};
use std::time::{Duration, Instant};

use kora_core::lowercase_prefix;
use tracing::info;

/// Insertion-ordered string cache with truncated, lowercased keys.
#[derive(Debug, Clone)]
pub struct BoundedCache {
    entries: HashMap<String, String>,
    order: VecDeque<String>,
    max_entries: usize,
    max_key_chars: usize,
}

impl BoundedCache {
    pub fn new(max_entries: usize, max_key_chars: usize) -> Self {
        Self {
            entries: HashMap::new(),
            order: VecDeque::new(),
            max_entries: max_entries.max(1),
            max_key_chars,
        }
    }

    /// Normalize a raw key: lowercase, then keep `max_key_chars` characters.
    ///
    /// Inputs that agree on their first `max_key_chars` characters share a key.
    pub fn key(&self, raw: &str) -> String {
        lowercase_prefix(raw, self.max_key_chars)
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Insert or overwrite. Overwriting keeps the entry's original position.
    pub fn insert(&mut self, key: String, value: String) {
        if self.entries.insert(key.clone(), value).is_none() {
            self.order.push_back(key);
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.order.clear();
    }

    fn is_over_capacity(&self) -> bool {
        self.entries.len() > self.max_entries
    }

    /// Keep only the newest `max_entries / 2` entries.
    fn trim_to_newest_half(&mut self) {
        let keep = self.max_entries / 2;
        while self.order.len() > keep {
            if let Some(oldest) = self.order.pop_front() {
                self.entries.remove(&oldest);
            }
        }
    }
}

/// What a maintenance pass did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CacheMaintenance {
    Untouched,
    /// The TTL elapsed and both caches were emptied.
    Expired,
    /// At least one cache exceeded its cap and was trimmed.
    Trimmed,
}

/// The response cache and the search cache, cleared together on TTL expiry.
#[derive(Debug, Clone)]
pub struct CacheSet {
    pub response: BoundedCache,
    pub search: BoundedCache,
    ttl: Duration,
    last_clear: Instant,
}

impl CacheSet {
    pub fn new(ttl: Duration, max_entries: usize, max_key_chars: usize) -> Self {
        Self::starting_at(ttl, max_entries, max_key_chars, Instant::now())
    }

    /// As [`new`](Self::new), with an explicit start of the first TTL window.
    pub fn starting_at(
        ttl: Duration,
        max_entries: usize,
        max_key_chars: usize,
        now: Instant,
    ) -> Self {
        Self {
            response: BoundedCache::new(max_entries, max_key_chars),
            search: BoundedCache::new(max_entries, max_key_chars),
            ttl,
            last_clear: now,
        }
    }

    pub fn maintain(&mut self) -> CacheMaintenance {
        self.maintain_at(Instant::now())
    }

    /// Clear both caches once the TTL has elapsed since the last clear;
    /// otherwise trim any cache above its cap to its newest half.
    pub fn maintain_at(&mut self, now: Instant) -> CacheMaintenance {
        if now.saturating_duration_since(self.last_clear) > self.ttl {
            self.response.clear();
            self.search.clear();
            self.last_clear = now;
            info!("cache cleared (ttl expired)");
            return CacheMaintenance::Expired;
        }

        let mut trimmed = false;
        for (name, cache) in [("response", &mut self.response), ("search", &mut self.search)] {
            if cache.is_over_capacity() {
                cache.trim_to_newest_half();
                info!(cache = name, kept = cache.len(), "cache trimmed (size limit)");
                trimmed = true;
            }
        }
        if trimmed {
            CacheMaintenance::Trimmed
        } else {
            CacheMaintenance::Untouched
        }
    }
}
