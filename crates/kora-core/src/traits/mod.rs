// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Collaborator traits the orchestrator depends on.
//!
//! All collaborators use `#[async_trait]` so they can be held as trait objects.

pub mod backend;
pub mod search;
pub mod speech;

pub use backend::ChatBackend;
pub use search::SearchClient;
pub use speech::SpeechClient;
