// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Kora assistant.
//!
//! This crate provides the error type, the shared turn and request types, and
//! the collaborator traits (chat backend, web search, speech) that the
//! orchestrator is written against.

pub mod error;
pub mod text;
pub mod traits;
pub mod types;

pub use error::KoraError;
pub use text::{clip_with_ellipsis, lowercase_prefix};
pub use traits::{ChatBackend, SearchClient, SpeechClient};
pub use types::{ChatRequest, Feedback, Personality, SEARCH_FOUND_MARKER, Turn};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kora_error_variants_render() {
        let storage = KoraError::storage(std::io::Error::other("disk full"));
        assert_eq!(storage.to_string(), "storage error: disk full");

        let backend = KoraError::backend("connection refused");
        assert_eq!(backend.to_string(), "backend error: connection refused");

        let search = KoraError::search("blocked");
        assert_eq!(search.to_string(), "search error: blocked");

        let timeout = KoraError::Timeout {
            duration: std::time::Duration::from_secs(30),
        };
        assert!(timeout.to_string().contains("30s"));

        let _config = KoraError::Config("bad".into());
        let _speech = KoraError::Speech("no device".into());
        let _internal = KoraError::Internal("oops".into());
    }

    #[test]
    fn turn_serde_roundtrip_is_lossless() {
        let turn = Turn::new("hello", "Hi there!");
        let json = serde_json::to_string(&turn).expect("should serialize");
        let back: Turn = serde_json::from_str(&json).expect("should deserialize");
        assert_eq!(turn, back);
    }

    #[test]
    fn personality_parses_case_insensitively() {
        use std::str::FromStr;
        use strum::IntoEnumIterator;

        assert_eq!(Personality::from_str("Energetic").unwrap(), Personality::Energetic);
        assert!(Personality::from_str("bogus").is_err());
        assert_eq!(Personality::iter().count(), 5);
        for p in Personality::iter() {
            assert_eq!(Personality::from_str(&p.to_string()).unwrap(), p);
        }
    }

    #[test]
    fn all_collaborator_traits_are_object_safe() {
        fn _backend(_: &dyn ChatBackend) {}
        fn _search(_: &dyn SearchClient) {}
        fn _speech(_: &dyn SpeechClient) {}
    }
}
