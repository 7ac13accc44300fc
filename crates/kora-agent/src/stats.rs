// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Running performance counters.

use std::time::Duration;

use serde::Serialize;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PerformanceStats {
    /// Backend requests made through the response path, hits included.
    pub total_queries: u64,
    /// Backend requests answered from the response cache.
    pub cache_hits: u64,
    /// Searches dispatched to the search collaborator.
    pub search_requests: u64,
    /// Searches answered from the search cache. Not part of the hit rate.
    pub search_cache_hits: u64,
    /// Mean latency of answered backend and search calls, in seconds.
    pub average_response_time: f64,
    samples: u64,
}

impl PerformanceStats {
    /// Fold one latency sample into the running mean:
    /// `new = (old * n + sample) / (n + 1)`.
    pub fn record_response_time(&mut self, elapsed: Duration) {
        let n = self.samples as f64;
        self.average_response_time =
            (self.average_response_time * n + elapsed.as_secs_f64()) / (n + 1.0);
        self.samples += 1;
    }

    /// Response-cache hits as a percentage of total queries, at most 100.
    pub fn cache_hit_rate(&self) -> f64 {
        self.cache_hits as f64 / self.total_queries.max(1) as f64 * 100.0
    }

    pub fn report(&self, cache_size: usize, search_cache_size: usize) -> PerformanceReport {
        PerformanceReport {
            total_queries: self.total_queries,
            cache_hits: self.cache_hits,
            search_requests: self.search_requests,
            search_cache_hits: self.search_cache_hits,
            average_response_time: self.average_response_time,
            cache_hit_rate: format!("{:.1}%", self.cache_hit_rate()),
            cache_size,
            search_cache_size,
        }
    }
}

/// Snapshot for status output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceReport {
    pub total_queries: u64,
    pub cache_hits: u64,
    pub search_requests: u64,
    pub search_cache_hits: u64,
    pub average_response_time: f64,
    pub cache_hit_rate: String,
    pub cache_size: usize,
    pub search_cache_size: usize,
}
