// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Wiring of concrete collaborators into an orchestrator.

use std::str::FromStr;
use std::sync::Arc;

use kora_agent::{AgentSettings, Collaborators, CommandSpeech, MemoryStores, Orchestrator, SilentSpeech};
use kora_config::KoraConfig;
use kora_core::{KoraError, Personality, SearchClient, SpeechClient};
use kora_ollama::OllamaBackend;
use kora_persona::{PersonalityEngine, SeededDice};
use kora_search::WebSearch;
use tracing::info;

/// A ready orchestrator plus the search client the shell's news command reuses.
pub struct Assembled {
    pub orchestrator: Orchestrator,
    pub search: Arc<dyn SearchClient>,
}

pub async fn assemble(config: &KoraConfig) -> Result<Assembled, KoraError> {
    let backend = Arc::new(OllamaBackend::new(&config.backend)?);
    let search: Arc<dyn SearchClient> = Arc::new(WebSearch::new(&config.search)?);
    let speech: Arc<dyn SpeechClient> = if config.speech.enabled {
        Arc::new(CommandSpeech::new(&config.speech.command, config.speech.args.clone()))
    } else {
        Arc::new(SilentSpeech)
    };

    let stores = MemoryStores::open(&config.memory).await;

    // Validation has already rejected unknown names.
    let personality = Personality::from_str(&config.agent.personality).unwrap_or_default();
    let persona =
        PersonalityEngine::with_personality(personality, Box::new(SeededDice::from_entropy()));

    info!(
        model = config.backend.model.as_str(),
        base_url = config.backend.base_url.as_str(),
        "collaborators ready"
    );

    let orchestrator = Orchestrator::new(
        AgentSettings::from_config(config),
        Collaborators {
            backend,
            search: Arc::clone(&search),
            speech,
        },
        stores,
        persona,
        Box::new(SeededDice::from_entropy()),
    );

    Ok(Assembled {
        orchestrator,
        search,
    })
}
