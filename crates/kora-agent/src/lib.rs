// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Turn orchestration for the Kora assistant.
//!
//! The [`Orchestrator`] decides per turn whether to search the web, builds the
//! prompt, calls the chat backend under a timeout, runs the enhancement
//! pipeline, and hands memory writes to a bounded [`WorkerPool`]. Caches,
//! performance counters, and the rolling context are plain fields of the
//! orchestrator; the memory stores sit behind per-store async mutexes shared
//! with the background jobs.

pub mod cache;
pub mod location;
pub mod orchestrator;
pub mod pool;
pub mod prompt;
pub mod speech;
pub mod stats;
pub mod status;

pub use cache::{BoundedCache, CacheMaintenance, CacheSet};
pub use orchestrator::{AgentSettings, Collaborators, MemoryStores, Orchestrator};
pub use pool::WorkerPool;
pub use speech::{CommandSpeech, SilentSpeech, shape_for_speech};
pub use stats::{PerformanceReport, PerformanceStats};
pub use status::{ComponentStatus, SystemStatus};
