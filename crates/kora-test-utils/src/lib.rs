// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test utilities for Kora integration tests.
//!
//! Provides mock collaborators for fast, deterministic tests without a
//! running model server, network access, or a speech device.
//!
//! # Components
//!
//! - [`MockBackend`] - Chat backend with scripted replies or forced failures
//! - [`ScriptedSearch`] - Search client returning queued result texts
//! - [`RecordingSpeech`] - Speech client that records what it was asked to say

pub mod mock_backend;
pub mod mock_search;
pub mod mock_speech;

pub use mock_backend::MockBackend;
pub use mock_search::ScriptedSearch;
pub use mock_speech::RecordingSpeech;
