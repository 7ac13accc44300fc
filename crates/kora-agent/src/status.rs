// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Aggregate status snapshot for the `status` command.

use kora_memory::{LearningStats, MemoryStats};
use kora_persona::PersonalityInfo;
use serde::Serialize;

use crate::stats::PerformanceReport;

#[derive(Debug, Clone, Serialize)]
pub struct SystemStatus {
    pub status: &'static str,
    pub performance: PerformanceReport,
    pub memory: MemoryStats,
    pub learning: LearningStats,
    pub personality: PersonalityInfo,
    pub language: String,
    pub components: ComponentStatus,
}

/// Which collaborators are wired in and how busy the worker pool is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentStatus {
    pub backend: String,
    pub search: bool,
    pub workers: usize,
    /// Background jobs queued or running when the snapshot was taken.
    pub background_jobs: usize,
    pub debug: bool,
}
