// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `kora status` and the shell's `status` / `memory stats` output.

use std::io::IsTerminal;
use std::time::Duration;

use colored::Colorize;
use kora_agent::SystemStatus;
use kora_config::KoraConfig;
use kora_core::KoraError;

use crate::setup::assemble;

/// Run the `kora status` command.
///
/// Loads the stores, prints a snapshot, and exits. With `--json` the
/// snapshot is printed as JSON for scripting.
pub async fn run_status(config: KoraConfig, json: bool, plain: bool) -> Result<(), KoraError> {
    let assembled = assemble(&config).await?;
    let status = assembled.orchestrator.status().await;

    if json {
        let rendered = serde_json::to_string_pretty(&status)
            .map_err(|e| KoraError::Internal(format!("failed to render status: {e}")))?;
        println!("{rendered}");
    } else {
        let use_color = !plain && std::io::stdout().is_terminal();
        print_status(&status, use_color);
    }

    assembled.orchestrator.shutdown(Duration::from_secs(1)).await;
    Ok(())
}

/// Label/value rows of the status view.
pub fn status_rows(status: &SystemStatus) -> Vec<(&'static str, String)> {
    let perf = &status.performance;
    let components = &status.components;
    vec![
        ("State", status.status.to_string()),
        (
            "Personality",
            format!("{} ({})", status.personality.name, status.personality.style),
        ),
        ("Language", status.language.clone()),
        ("Backend", components.backend.clone()),
        (
            "Search",
            if components.search { "enabled" } else { "disabled" }.to_string(),
        ),
        (
            "Queries",
            format!("{} ({} cache hit rate)", perf.total_queries, perf.cache_hit_rate),
        ),
        (
            "Searches",
            format!("{} ({} from cache)", perf.search_requests, perf.search_cache_hits),
        ),
        ("Avg response", format!("{:.2}s", perf.average_response_time)),
        (
            "Caches",
            format!("{} responses, {} searches", perf.cache_size, perf.search_cache_size),
        ),
        (
            "Memory",
            format!(
                "{} conversations ({} this session)",
                status.memory.total_conversations, status.memory.session_conversations
            ),
        ),
        (
            "Learning",
            format!(
                "{} knowledge items, {} preferences",
                status.learning.total_knowledge_items, status.learning.user_preferences
            ),
        ),
        (
            "Workers",
            format!(
                "{} ({} background jobs)",
                components.workers, components.background_jobs
            ),
        ),
    ]
}

/// Print the status view with optional colors.
pub fn print_status(status: &SystemStatus, use_color: bool) {
    println!();
    println!("  kora status");
    println!("  {}", "-".repeat(35));

    for (label, value) in status_rows(status) {
        let label = format!("{label}:");
        if use_color && label == "State:" {
            println!("    {label:<14}{} {}", "✓".green(), value.green());
        } else {
            println!("    {label:<14}{value}");
        }
    }
    println!();
}

/// Print the `memory stats` view.
pub fn print_memory_stats(status: &SystemStatus) {
    let memory = &status.memory;
    println!();
    println!("Memory Statistics:");
    println!("Session conversations: {}", memory.session_conversations);
    println!("Total conversations: {}", memory.total_conversations);
    println!("User info items: {}", memory.user_info_items);
    println!("Topics discussed: {}", memory.topics_discussed);
    println!("Most discussed topic: {}", memory.most_discussed_topic);
    println!("Learning items: {}", status.learning.total_knowledge_items);
    println!("Conversation patterns: {}", status.learning.conversation_patterns);
}

#[cfg(test)]
mod tests {
    use super::*;
    use kora_agent::PerformanceStats;
    use kora_agent::ComponentStatus;
    use kora_memory::{LearningStats, MemoryStats};
    use kora_persona::PersonalityInfo;

    fn sample() -> SystemStatus {
        let mut stats = PerformanceStats::default();
        stats.total_queries = 8;
        stats.cache_hits = 2;
        stats.search_requests = 3;
        stats.search_cache_hits = 1;
        stats.record_response_time(Duration::from_millis(1500));
        SystemStatus {
            status: "operational",
            performance: stats.report(4, 1),
            memory: MemoryStats {
                session_conversations: 2,
                total_conversations: 12,
                user_info_items: 1,
                topics_discussed: 3,
                most_discussed_topic: "technology".into(),
            },
            learning: LearningStats {
                total_knowledge_items: 5,
                user_preferences: 2,
                conversation_patterns: 3,
                preferences: Default::default(),
            },
            personality: PersonalityInfo {
                name: "wise".into(),
                style: "thoughtful and philosophical",
                traits: &[],
            },
            language: "english".into(),
            components: ComponentStatus {
                backend: "ollama".into(),
                search: true,
                workers: 6,
                background_jobs: 0,
                debug: false,
            },
        }
    }

    #[test]
    fn rows_summarize_status() {
        let rows = status_rows(&sample());
        let get = |label: &str| {
            rows.iter()
                .find(|(l, _)| *l == label)
                .map(|(_, v)| v.clone())
                .unwrap()
        };
        assert_eq!(get("State"), "operational");
        assert_eq!(get("Personality"), "wise (thoughtful and philosophical)");
        assert_eq!(get("Queries"), "8 (25.0% cache hit rate)");
        assert_eq!(get("Searches"), "3 (1 from cache)");
        assert_eq!(get("Avg response"), "1.50s");
        assert_eq!(get("Caches"), "4 responses, 1 searches");
        assert_eq!(get("Memory"), "12 conversations (2 this session)");
        assert_eq!(get("Search"), "enabled");
    }

    #[test]
    fn status_serializes_to_json() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["status"], "operational");
        assert_eq!(json["performance"]["cache_hit_rate"], "25.0%");
        assert_eq!(json["personality"]["name"], "wise");
        assert_eq!(json["components"]["workers"], 6);
    }
}
