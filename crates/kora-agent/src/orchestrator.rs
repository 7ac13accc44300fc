// SPDX-FileCopyrightText: 2026 Kora Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! The per-turn pipeline: classify, answer, enhance, persist.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Datelike;
use kora_config::KoraConfig;
use kora_config::model::MemoryConfig;
use kora_core::{
    ChatBackend, ChatRequest, SEARCH_FOUND_MARKER, SearchClient, SpeechClient, Turn,
};
use kora_memory::{
    AnswerKnowledgeBase, KNOWLEDGE_FILE, LearningStats, LearningStore, MemoryManager,
    MemoryStats, RecentAnswers,
};
use kora_persona::{
    CommonSense, Dice, PersonalityEngine, PersonalityInfo, empathetic_phrase,
};
use kora_router::{SearchClassifier, detect_emotion, mentions_memory, needs_common_sense_check};
use tokio::sync::Mutex;
use tracing::{debug, info, warn};

use crate::cache::CacheSet;
use crate::location::augment_with_location;
use crate::pool::WorkerPool;
use crate::prompt::{
    MAX_SEARCH_CONTEXT_CHARS, clean_search_query, fallback_response, full_prompt,
    memory_prompt, search_prompt, system_prompt,
};
use crate::speech::shape_for_speech;
use crate::stats::{PerformanceReport, PerformanceStats};
use crate::status::{ComponentStatus, SystemStatus};

/// Emotion confidence above which an empathetic phrase is prepended.
const EMPATHY_THRESHOLD: f64 = 0.85;

/// Rolling context lines kept before compaction.
const CONTEXT_CAPACITY: usize = 20;

/// Lines left after compacting the rolling context.
const CONTEXT_KEEP: usize = 15;

const MEMORY_FRAMING: &str = "Based on our conversation, ";

/// Orchestrator knobs, usually taken from a loaded [`KoraConfig`].
#[derive(Debug, Clone)]
pub struct AgentSettings {
    pub backend_timeout: Duration,
    pub search_enabled: bool,
    pub max_results: usize,
    pub max_query_words: usize,
    pub cache_ttl: Duration,
    pub cache_max_entries: usize,
    pub cache_max_key_chars: usize,
    pub workers: usize,
    pub queue_capacity: usize,
    pub language: String,
    pub debug: bool,
}

impl AgentSettings {
    pub fn from_config(config: &KoraConfig) -> Self {
        Self {
            backend_timeout: config.backend.timeout(),
            search_enabled: config.search.enabled,
            max_results: config.search.max_results,
            max_query_words: config.search.max_query_words,
            cache_ttl: config.cache.ttl(),
            cache_max_entries: config.cache.max_entries,
            cache_max_key_chars: config.cache.max_key_chars,
            workers: config.agent.workers,
            queue_capacity: config.agent.queue_capacity,
            language: config.agent.language.clone(),
            debug: config.agent.debug,
        }
    }
}

impl Default for AgentSettings {
    fn default() -> Self {
        Self::from_config(&KoraConfig::default())
    }
}

/// The external services a turn may call.
#[derive(Clone)]
pub struct Collaborators {
    pub backend: Arc<dyn ChatBackend>,
    pub search: Arc<dyn SearchClient>,
    pub speech: Arc<dyn SpeechClient>,
}

/// Persisted stores shared between the foreground turn and background jobs.
///
/// Each store has its own lock so a slow write to one never blocks reads of
/// another.
#[derive(Clone)]
pub struct MemoryStores {
    pub memory: Arc<Mutex<MemoryManager>>,
    pub learning: Arc<Mutex<LearningStore>>,
    pub knowledge: Arc<Mutex<AnswerKnowledgeBase>>,
    pub recent_answers: Arc<Mutex<RecentAnswers>>,
}

impl MemoryStores {
    pub fn new(
        memory: MemoryManager,
        learning: LearningStore,
        knowledge: AnswerKnowledgeBase,
    ) -> Self {
        Self {
            memory: Arc::new(Mutex::new(memory)),
            learning: Arc::new(Mutex::new(learning)),
            knowledge: Arc::new(Mutex::new(knowledge)),
            recent_answers: Arc::new(Mutex::new(RecentAnswers::new())),
        }
    }

    /// Load every store from `config.data_dir`. Missing or corrupt files start empty.
    pub async fn open(config: &MemoryConfig) -> Self {
        let dir = config.data_path();
        let memory =
            MemoryManager::open(&dir, config.session_capacity, config.long_term_capacity).await;
        let learning = LearningStore::open(&dir, config.pattern_capacity).await;
        let knowledge = AnswerKnowledgeBase::open(dir.join(KNOWLEDGE_FILE)).await;
        info!(data_dir = %dir.display(), "memory stores loaded");
        Self::new(memory, learning, knowledge)
    }
}

/// Drives one conversation.
///
/// Every turn returns non-empty text: backend and search failures are logged
/// and replaced with fallbacks. Memory writes for a turn run on the worker
/// pool after the turn returns, so an immediate follow-up turn may read
/// memory that does not include the previous exchange yet.
pub struct Orchestrator {
    settings: AgentSettings,
    backend: Arc<dyn ChatBackend>,
    search: Arc<dyn SearchClient>,
    speech: Arc<dyn SpeechClient>,
    stores: MemoryStores,
    persona: PersonalityEngine,
    dice: Box<dyn Dice>,
    classifier: SearchClassifier,
    common_sense: CommonSense,
    caches: CacheSet,
    stats: PerformanceStats,
    context: Vec<String>,
    pool: WorkerPool,
}

impl Orchestrator {
    /// Build an orchestrator and start its worker pool.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn new(
        settings: AgentSettings,
        collaborators: Collaborators,
        stores: MemoryStores,
        persona: PersonalityEngine,
        dice: Box<dyn Dice>,
    ) -> Self {
        let caches = CacheSet::new(
            settings.cache_ttl,
            settings.cache_max_entries,
            settings.cache_max_key_chars,
        );
        let pool = WorkerPool::new(settings.workers, settings.queue_capacity);
        info!(
            backend = collaborators.backend.name(),
            personality = %persona.current(),
            workers = settings.workers,
            search = settings.search_enabled,
            "orchestrator ready"
        );

        Self {
            settings,
            backend: collaborators.backend,
            search: collaborators.search,
            speech: collaborators.speech,
            stores,
            persona,
            dice,
            classifier: SearchClassifier::new(),
            common_sense: CommonSense::new(),
            caches,
            stats: PerformanceStats::default(),
            context: Vec::new(),
            pool,
        }
    }

    /// Answer one user input.
    pub async fn smart_response(&mut self, query: &str) -> String {
        let decision = self.classifier.classify(query);
        debug!(
            needs_search = decision.needs_search,
            reason = decision.reason,
            "classified query"
        );

        let searched = if decision.needs_search && self.settings.search_enabled {
            self.search_path(query).await
        } else {
            None
        };
        let raw = match searched {
            Some(answer) => answer,
            None => self.direct_path(query).await,
        };

        let enhanced = self.enhance_response(query, &raw).await;
        let mut response = self.translate(enhanced);
        if response.is_empty() {
            response = fallback_response(query).to_string();
        }

        self.persist(query, &response);
        self.push_context(query, &response);
        response
    }

    /// `None` when the search failed and the turn should be answered directly.
    async fn search_path(&mut self, query: &str) -> Option<String> {
        let (augmented, location) = augment_with_location(query);
        if let Some(hint) = &location {
            debug!(pincode = hint.pincode.as_str(), "location added to search query");
        }

        let results = self.search_web(&augmented).await;
        if search_failed(&results) {
            info!("search returned nothing usable, answering directly");
            return None;
        }

        let context: String = results.chars().take(MAX_SEARCH_CONTEXT_CHARS).collect();
        let prompt = search_prompt(
            query,
            location.as_ref().map(|hint| hint.pincode.as_str()),
            chrono::Utc::now().year(),
        );
        Some(self.get_ai_response(&prompt, &context).await)
    }

    async fn direct_path(&mut self, query: &str) -> String {
        let prompt = match self.memory_context(query).await {
            Some(context) => memory_prompt(&context, query),
            None => query.to_string(),
        };
        self.get_ai_response(&prompt, "").await
    }

    /// Recent conversation and known user details, if the query asks for them.
    async fn memory_context(&self, query: &str) -> Option<String> {
        if !mentions_memory(query) {
            return None;
        }
        let context = self.stores.memory.lock().await.relevant_context();
        (!context.is_empty()).then_some(context)
    }

    /// Ask the backend, through the response cache.
    ///
    /// Failures, timeouts and empty replies become a canned fallback, which
    /// is never cached.
    pub async fn get_ai_response(&mut self, prompt: &str, context: &str) -> String {
        self.stats.total_queries += 1;
        self.caches.maintain();

        let key = self.caches.response.key(&format!("{prompt}:{context}"));
        if let Some(hit) = self.caches.response.get(&key) {
            self.stats.cache_hits += 1;
            debug!("response cache hit");
            return hit.to_string();
        }

        let request = ChatRequest {
            system_prompt: system_prompt(&self.persona.info()),
            user_prompt: full_prompt(prompt, context),
            timeout: self.settings.backend_timeout,
        };

        let started = Instant::now();
        let reply = match tokio::time::timeout(
            self.settings.backend_timeout,
            self.backend.chat(request),
        )
        .await
        {
            Ok(Ok(text)) => text.trim().to_string(),
            Ok(Err(e)) => {
                warn!(backend = self.backend.name(), error = %e, "backend call failed");
                String::new()
            }
            Err(_) => {
                warn!(
                    backend = self.backend.name(),
                    timeout_secs = self.settings.backend_timeout.as_secs(),
                    "backend call timed out"
                );
                String::new()
            }
        };

        if reply.is_empty() {
            return fallback_response(prompt).to_string();
        }

        self.stats.record_response_time(started.elapsed());
        self.caches.response.insert(key, reply.clone());
        reply
    }

    /// Search the web, through the search cache.
    ///
    /// Only results carrying the found marker are cached. A failed search
    /// returns an explanatory sentence without the marker.
    pub async fn search_web(&mut self, query: &str) -> String {
        let cleaned = clean_search_query(query, self.settings.max_query_words);
        self.caches.maintain();

        let key = self.caches.search.key(&cleaned);
        if let Some(hit) = self.caches.search.get(&key) {
            self.stats.search_cache_hits += 1;
            debug!("search cache hit");
            return hit.to_string();
        }

        self.stats.search_requests += 1;
        let started = Instant::now();
        match self.search.search_web(&cleaned, self.settings.max_results).await {
            Ok(results) => {
                self.stats.record_response_time(started.elapsed());
                if !search_failed(&results) {
                    self.caches.search.insert(key, results.clone());
                }
                results
            }
            Err(e) => {
                warn!(error = %e, "web search failed");
                format!(
                    "I couldn't search for '{cleaned}' right now, but I can provide general information."
                )
            }
        }
    }

    /// Run the fixed enhancement stages over a raw reply.
    pub async fn enhance_response(&mut self, query: &str, raw: &str) -> String {
        let mut response = raw.to_string();

        let reading = detect_emotion(query);
        if reading.confidence > EMPATHY_THRESHOLD {
            let phrase = empathetic_phrase(reading.emotion, self.dice.as_mut());
            response = format!("{phrase} {response}");
        }

        response = self.persona.apply_style(&response);

        if needs_common_sense_check(query, &response) {
            response = self.common_sense.enhance(query, &response);
        }

        if self.memory_context(query).await.is_some() {
            response = format!("{MEMORY_FRAMING}{response}");
        }

        let personalized = self.stores.learning.lock().await.personalized_response(query);
        if let Some(personal) = personalized {
            if personal.chars().count() < response.chars().count() {
                debug!("personalized response replaces reply");
                response = personal;
            }
        }

        response.trim().to_string()
    }

    /// Pass-through until a translator is configured.
    fn translate(&self, text: String) -> String {
        if !self.settings.language.eq_ignore_ascii_case("english") {
            debug!(
                language = self.settings.language.as_str(),
                "no translator configured, replying in english"
            );
        }
        text
    }

    /// Queue the five memory writes for this exchange.
    fn persist(&self, query: &str, response: &str) {
        let turn = Turn::new(query, response);

        let recent = Arc::clone(&self.stores.recent_answers);
        let (question, answer) = (turn.input.clone(), turn.response.clone());
        self.pool.submit("recent_answers", async move {
            recent.lock().await.push(&question, &answer);
        });

        let knowledge = Arc::clone(&self.stores.knowledge);
        let (question, answer) = (turn.input.clone(), turn.response.clone());
        self.pool.submit("knowledge", async move {
            knowledge.lock().await.record(&question, &answer).await;
        });

        let memory = Arc::clone(&self.stores.memory);
        let session_turn = turn.clone();
        self.pool.submit("session_memory", async move {
            memory.lock().await.record_session(session_turn);
        });

        let memory = Arc::clone(&self.stores.memory);
        let long_term_turn = turn.clone();
        self.pool.submit("long_term_memory", async move {
            memory.lock().await.record_long_term(long_term_turn).await;
        });

        let learning = Arc::clone(&self.stores.learning);
        self.pool.submit("learning", async move {
            learning.lock().await.record_outcome(&turn, None).await;
        });
    }

    fn push_context(&mut self, query: &str, response: &str) {
        self.context.push(format!("Q: {query} A: {response}"));
        if self.context.len() > CONTEXT_CAPACITY {
            let excess = self.context.len() - CONTEXT_KEEP;
            self.context.drain(..excess);
        }
    }

    /// Read `text` aloud on the worker pool. Returns `false` if the job was dropped.
    pub fn speak(&self, text: &str) -> bool {
        let shaped = shape_for_speech(text);
        if shaped.is_empty() {
            return false;
        }
        let speech = Arc::clone(&self.speech);
        self.pool.submit("speech", async move {
            if !speech.speak(&shaped).await {
                debug!("speech playback failed");
            }
        })
    }

    pub fn set_personality(&mut self, name: &str) -> bool {
        self.persona.set_personality(name)
    }

    pub fn personality_info(&self) -> PersonalityInfo {
        self.persona.info()
    }

    pub fn greeting(&mut self) -> &'static str {
        self.persona.greeting()
    }

    pub async fn memory_stats(&self) -> MemoryStats {
        self.stores.memory.lock().await.stats()
    }

    pub async fn learning_stats(&self) -> LearningStats {
        self.stores.learning.lock().await.stats()
    }

    pub fn performance(&self) -> PerformanceReport {
        self.stats
            .report(self.caches.response.len(), self.caches.search.len())
    }

    pub async fn status(&self) -> SystemStatus {
        SystemStatus {
            status: "operational",
            performance: self.performance(),
            memory: self.memory_stats().await,
            learning: self.learning_stats().await,
            personality: self.personality_info(),
            language: self.settings.language.clone(),
            components: ComponentStatus {
                backend: self.backend.name().to_string(),
                search: self.settings.search_enabled,
                workers: self.pool.worker_count(),
                background_jobs: self.pool.in_flight(),
                debug: self.settings.debug,
            },
        }
    }

    /// `Q: .. A: ..` lines of the most recent exchanges, oldest first.
    pub fn conversation_context(&self) -> &[String] {
        &self.context
    }

    pub fn stores(&self) -> &MemoryStores {
        &self.stores
    }

    /// Resolve once all queued background jobs have finished.
    pub async fn wait_idle(&self) {
        self.pool.wait_idle().await;
    }

    /// Drain background jobs, waiting at most `timeout`.
    pub async fn shutdown(self, timeout: Duration) {
        info!(
            queries = self.stats.total_queries,
            cache_hits = self.stats.cache_hits,
            "orchestrator shutting down"
        );
        self.pool.shutdown(timeout).await;
    }
}

/// Search output that cannot ground an answer.
fn search_failed(results: &str) -> bool {
    results.trim().is_empty()
        || !results.contains(SEARCH_FOUND_MARKER)
        || results.to_lowercase().contains("error")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn search_failure_detection() {
        assert!(search_failed(""));
        assert!(search_failed("No results found for 'x'."));
        assert!(search_failed("Here's what I found: Error 503"));
        assert!(!search_failed("Here's what I found about 'rust':\n\n1. Rust"));
    }

    #[test]
    fn settings_follow_config_defaults() {
        let settings = AgentSettings::default();
        assert_eq!(settings.backend_timeout, Duration::from_secs(30));
        assert_eq!(settings.max_query_words, 10);
        assert_eq!(settings.cache_max_key_chars, 100);
        assert_eq!(settings.cache_ttl, Duration::from_secs(3600));
        assert_eq!(settings.workers, 6);
        assert_eq!(settings.language, "english");
    }
}
