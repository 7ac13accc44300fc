// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Error types for the Kora assistant.

use thiserror::Error;

/// The error type shared by collaborators and stores across the workspace.
///
/// The orchestrator never lets one of these reach its caller; every variant is
/// converted into a fallback reply at the call site.
#[derive(Debug, Error)]
pub enum KoraError {
    /// Configuration errors (invalid TOML, missing required fields, bad values).
    #[error("configuration error: {0}")]
    Config(String),

    /// Persistence errors (file I/O, JSON encoding).
    #[error("storage error: {source}")]
    Storage {
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Chat backend errors (HTTP failure, malformed reply, empty content).
    #[error("backend error: {message}")]
    Backend {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Web search errors (HTTP failure, unparseable page).
    #[error("search error: {message}")]
    Search {
        message: String,
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// Speech playback errors.
    #[error("speech error: {0}")]
    Speech(String),

    /// Operation timed out.
    #[error("operation timed out after {duration:?}")]
    Timeout { duration: std::time::Duration },

    /// Internal or unexpected errors.
    #[error("internal error: {0}")]
    Internal(String),
}

impl KoraError {
    /// Wraps any I/O or serialization failure as a storage error.
    pub fn storage(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        KoraError::Storage {
            source: Box::new(err),
        }
    }

    /// Creates a backend error without an underlying source.
    pub fn backend(message: impl Into<String>) -> Self {
        KoraError::Backend {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a search error without an underlying source.
    pub fn search(message: impl Into<String>) -> Self {
        KoraError::Search {
            message: message.into(),
            source: None,
        }
    }
}
