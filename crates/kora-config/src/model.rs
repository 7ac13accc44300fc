// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Kora assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Top-level Kora configuration.
///
/// Every section is optional and defaults to values that work against a local
/// Ollama server with no config file at all.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct KoraConfig {
    /// Assistant identity and runtime settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Chat backend settings.
    #[serde(default)]
    pub backend: BackendConfig,

    /// Web search settings.
    #[serde(default)]
    pub search: SearchConfig,

    /// Response and search cache settings.
    #[serde(default)]
    pub cache: CacheConfig,

    /// Memory store settings.
    #[serde(default)]
    pub memory: MemoryConfig,

    /// Speech playback settings.
    #[serde(default)]
    pub speech: SpeechConfig,
}

/// Assistant identity and runtime configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name used in the shell prompt.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Personality active at startup.
    #[serde(default = "default_personality")]
    pub personality: String,

    /// Reply language. Anything other than english goes through the translation stage.
    #[serde(default = "default_language")]
    pub language: String,

    /// Number of background workers for persistence and speech jobs.
    #[serde(default = "default_workers")]
    pub workers: usize,

    /// Maximum number of queued background jobs.
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Print timing and routing details in the shell.
    #[serde(default)]
    pub debug: bool,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            personality: default_personality(),
            language: default_language(),
            workers: default_workers(),
            queue_capacity: default_queue_capacity(),
            debug: false,
        }
    }
}

fn default_agent_name() -> String {
    "kora".to_string()
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_personality() -> String {
    "friendly".to_string()
}

fn default_language() -> String {
    "english".to_string()
}

fn default_workers() -> usize {
    6
}

fn default_queue_capacity() -> usize {
    256
}

/// Chat backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct BackendConfig {
    /// Base URL of the Ollama-compatible server.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model name passed with every chat request.
    #[serde(default = "default_model")]
    pub model: String,

    /// Hard timeout for a single chat call.
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

impl BackendConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            timeout_secs: default_backend_timeout(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:11434".to_string()
}

fn default_model() -> String {
    "llama3.2".to_string()
}

fn default_backend_timeout() -> u64 {
    30
}

/// Web search configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SearchConfig {
    /// Disable to always answer from model knowledge.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Number of results requested per search.
    #[serde(default = "default_max_results")]
    pub max_results: usize,

    /// HTTP timeout for the search request.
    #[serde(default = "default_search_timeout")]
    pub timeout_secs: u64,

    /// Queries are truncated to this many words before dispatch.
    #[serde(default = "default_max_query_words")]
    pub max_query_words: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            max_results: default_max_results(),
            timeout_secs: default_search_timeout(),
            max_query_words: default_max_query_words(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_max_results() -> usize {
    5
}

fn default_search_timeout() -> u64 {
    10
}

fn default_max_query_words() -> usize {
    10
}

/// Response and search cache configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct CacheConfig {
    /// Both caches are cleared once this many seconds pass since the last clear.
    #[serde(default = "default_cache_ttl")]
    pub ttl_secs: u64,

    /// Above this many entries a cache is trimmed to its newest half.
    #[serde(default = "default_cache_entries")]
    pub max_entries: usize,

    /// Cache keys are truncated to this many characters.
    #[serde(default = "default_max_key_chars")]
    pub max_key_chars: usize,
}

impl CacheConfig {
    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.ttl_secs)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            ttl_secs: default_cache_ttl(),
            max_entries: default_cache_entries(),
            max_key_chars: default_max_key_chars(),
        }
    }
}

fn default_cache_ttl() -> u64 {
    3600
}

fn default_cache_entries() -> usize {
    1000
}

fn default_max_key_chars() -> usize {
    100
}

/// Memory store configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MemoryConfig {
    /// Directory holding the JSON documents.
    #[serde(default = "default_data_dir")]
    pub data_dir: String,

    /// Recent turns kept in the session buffer.
    #[serde(default = "default_session_capacity")]
    pub session_capacity: usize,

    /// Long-term conversations retained (highest importance first).
    #[serde(default = "default_long_term_capacity")]
    pub long_term_capacity: usize,

    /// Recent exchanges kept per input type.
    #[serde(default = "default_pattern_capacity")]
    pub pattern_capacity: usize,
}

impl MemoryConfig {
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(&self.data_dir)
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            session_capacity: default_session_capacity(),
            long_term_capacity: default_long_term_capacity(),
            pattern_capacity: default_pattern_capacity(),
        }
    }
}

fn default_data_dir() -> String {
    dirs::data_dir()
        .map(|p| p.join("kora"))
        .unwrap_or_else(|| PathBuf::from(".kora"))
        .to_string_lossy()
        .to_string()
}

fn default_session_capacity() -> usize {
    20
}

fn default_long_term_capacity() -> usize {
    100
}

fn default_pattern_capacity() -> usize {
    10
}

/// Speech playback configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct SpeechConfig {
    /// Speak every reply through `command`.
    #[serde(default)]
    pub enabled: bool,

    /// Text-to-speech program; the text is written to its stdin.
    #[serde(default = "default_speech_command")]
    pub command: String,

    /// Extra arguments for the program.
    #[serde(default)]
    pub args: Vec<String>,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            command: default_speech_command(),
            args: Vec::new(),
        }
    }
}

fn default_speech_command() -> String {
    "espeak".to_string()
}
