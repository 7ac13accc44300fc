// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Lookup order: `./kora.toml` > `~/.config/kora/kora.toml` > `/etc/kora/kora.toml`,
//! with environment variable overrides via the `KORA_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::{Path, PathBuf};

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};

use crate::model::KoraConfig;

/// Sections that `KORA_<SECTION>_<KEY>` variables may target.
const ENV_SECTIONS: &[&str] = &["agent", "backend", "search", "cache", "memory", "speech"];

/// Config files consulted by [`load_config`], lowest precedence first.
pub fn config_file_candidates() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("/etc/kora/kora.toml")];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("kora/kora.toml"));
    }
    paths.push(PathBuf::from("kora.toml"));
    paths
}

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/kora/kora.toml`
/// 3. `~/.config/kora/kora.toml`
/// 4. `./kora.toml`
/// 5. `KORA_*` environment variables
pub fn load_config() -> Result<KoraConfig, figment::Error> {
    build_figment().extract()
}

/// Load configuration from a TOML string only (no files, no env).
pub fn load_config_from_str(toml_content: &str) -> Result<KoraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KoraConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<KoraConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(KoraConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Build the Figment used for hierarchy loading, before extraction.
pub fn build_figment() -> Figment {
    config_file_candidates().into_iter().fold(
        Figment::new().merge(Serialized::defaults(KoraConfig::default())),
        |figment, path| figment.merge(Toml::file(path)),
    )
    .merge(env_provider())
}

/// Map `KORA_BACKEND_TIMEOUT_SECS` to `backend.timeout_secs`.
///
/// Only the first underscore after a known section name becomes a dot, so keys
/// that contain underscores themselves stay intact.
fn env_provider() -> Env {
    Env::prefixed("KORA_").map(|key| map_env_key(key.as_str()).into())
}

/// Figment hands over the variable name as written, so it is lowercased here.
pub(crate) fn map_env_key(key: &str) -> String {
    let key = key.to_ascii_lowercase();
    for section in ENV_SECTIONS {
        if let Some(rest) = key.strip_prefix(section).and_then(|r| r.strip_prefix('_')) {
            return format!("{section}.{rest}");
        }
    }
    key
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn env_keys_map_to_sections() {
        assert_eq!(map_env_key("backend_timeout_secs"), "backend.timeout_secs");
        assert_eq!(map_env_key("memory_data_dir"), "memory.data_dir");
        assert_eq!(map_env_key("agent_log_level"), "agent.log_level");
    }

    #[test]
    fn uppercase_env_keys_map_to_sections() {
        assert_eq!(map_env_key("BACKEND_TIMEOUT_SECS"), "backend.timeout_secs");
        assert_eq!(map_env_key("Cache_Max_Key_Chars"), "cache.max_key_chars");
    }

    #[test]
    fn unknown_env_section_is_left_alone() {
        assert_eq!(map_env_key("telemetry_url"), "telemetry_url");
    }

    #[test]
    fn candidates_end_with_local_file() {
        let paths = config_file_candidates();
        assert_eq!(paths.first(), Some(&PathBuf::from("/etc/kora/kora.toml")));
        assert_eq!(paths.last(), Some(&PathBuf::from("kora.toml")));
    }
}
