// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Checks semantic constraints serde attributes cannot express: non-zero
//! capacities, a parseable personality, non-empty endpoints and paths.

use std::str::FromStr;

use kora_core::Personality;

use crate::diagnostic::ConfigError;
use crate::model::KoraConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Collects every failure instead of stopping at the first one.
pub fn validate_config(config: &KoraConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if Personality::from_str(&config.agent.personality).is_err() {
        errors.push(ConfigError::Validation {
            message: format!(
                "agent.personality `{}` is not one of friendly, professional, funny, wise, energetic",
                config.agent.personality
            ),
        });
    }

    let non_zero = [
        ("agent.workers", config.agent.workers as u64),
        ("agent.queue_capacity", config.agent.queue_capacity as u64),
        ("backend.timeout_secs", config.backend.timeout_secs),
        ("search.max_results", config.search.max_results as u64),
        ("search.max_query_words", config.search.max_query_words as u64),
        ("cache.max_entries", config.cache.max_entries as u64),
        ("cache.max_key_chars", config.cache.max_key_chars as u64),
        ("memory.session_capacity", config.memory.session_capacity as u64),
        ("memory.long_term_capacity", config.memory.long_term_capacity as u64),
        ("memory.pattern_capacity", config.memory.pattern_capacity as u64),
    ];
    for (key, value) in non_zero {
        if value == 0 {
            errors.push(ConfigError::Validation {
                message: format!("{key} must be greater than zero"),
            });
        }
    }

    let non_empty = [
        ("backend.base_url", &config.backend.base_url),
        ("backend.model", &config.backend.model),
        ("memory.data_dir", &config.memory.data_dir),
    ];
    for (key, value) in non_empty {
        if value.trim().is_empty() {
            errors.push(ConfigError::Validation {
                message: format!("{key} must not be empty"),
            });
        }
    }

    let base_url = config.backend.base_url.trim();
    if !base_url.is_empty() && !(base_url.starts_with("http://") || base_url.starts_with("https://"))
    {
        errors.push(ConfigError::Validation {
            message: format!("backend.base_url `{base_url}` must start with http:// or https://"),
        });
    }

    if config.speech.enabled && config.speech.command.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "speech.command must be set when speech.enabled = true".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn has_error(errors: &[ConfigError], needle: &str) -> bool {
        errors
            .iter()
            .any(|e| matches!(e, ConfigError::Validation { message } if message.contains(needle)))
    }

    #[test]
    fn default_config_validates() {
        assert!(validate_config(&KoraConfig::default()).is_ok());
    }

    #[test]
    fn unknown_personality_fails_validation() {
        let mut config = KoraConfig::default();
        config.agent.personality = "grumpy".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "agent.personality"));
    }

    #[test]
    fn personality_is_case_insensitive() {
        let mut config = KoraConfig::default();
        config.agent.personality = "Wise".to_string();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn zero_workers_fails_validation() {
        let mut config = KoraConfig::default();
        config.agent.workers = 0;
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "agent.workers"));
    }

    #[test]
    fn all_failures_are_collected() {
        let mut config = KoraConfig::default();
        config.cache.max_entries = 0;
        config.backend.model = "  ".to_string();
        config.backend.base_url = "localhost:11434".to_string();
        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(has_error(&errors, "cache.max_entries"));
        assert!(has_error(&errors, "backend.model"));
        assert!(has_error(&errors, "http://"));
    }

    #[test]
    fn enabled_speech_needs_command() {
        let mut config = KoraConfig::default();
        config.speech.enabled = true;
        config.speech.command = String::new();
        let errors = validate_config(&config).unwrap_err();
        assert!(has_error(&errors, "speech.command"));
    }
}
