use super::classify::classify;
use super::compose::compose;
use super::history::extract_carried_topics;
use super::tables::{self, FallbackTables};
use super::topics::extract_topics;
use super::types::{normalize_language, FallbackOutcome};
use crate::models::ConversationHistory;

/// Single entry point for no-results turns.
///
/// Coordinates: extract query topics → extract carried topics → classify → compose.
/// Call it only when the search returned no sources and the history is not
/// empty; with an empty history the caller shows a plain no-results message.
pub struct FallbackOrchestrator<'a> {
    tables: &'a FallbackTables,
    lang: String,
}

impl FallbackOrchestrator<'static> {
    /// Orchestrator over the built-in tables, answering in English.
    pub fn builtin() -> Self {
        Self::new(tables::global())
    }
}

impl<'a> FallbackOrchestrator<'a> {
    pub fn new(tables: &'a FallbackTables) -> Self {
        Self {
            tables,
            lang: crate::config::DEFAULT_LANGUAGE.to_string(),
        }
    }

    /// Create an orchestrator that answers in `lang`.
    pub fn with_language(tables: &'a FallbackTables, lang: &str) -> Self {
        Self {
            tables,
            lang: normalize_language(lang),
        }
    }

    pub fn language(&self) -> &str {
        &self.lang
    }

    /// The reply text for this turn.
    pub fn handle_fallback(&self, query: &str, history: &ConversationHistory) -> String {
        self.decide(query, history).text
    }

    /// The full decision for this turn, including the topics behind it.
    pub fn decide(&self, query: &str, history: &ConversationHistory) -> FallbackOutcome {
        let sentinels = self.tables.sentinels();

        // Step 1: Topics named in the query
        let query_topics = extract_topics(query, &self.tables.vocabulary);

        // Step 2: Topics carried by earlier sermon-bearing answers
        let carried_topics = extract_carried_topics(history, &self.tables.vocabulary, &sentinels);

        // Step 3: Strategy
        let strategy = classify(query, history, &self.lang, self.tables);

        tracing::debug!(
            %strategy,
            lang = %self.lang,
            history_len = history.len(),
            query_topics = query_topics.len(),
            carried_topics = carried_topics.len(),
            "Fallback strategy selected"
        );

        // Step 4: Reply
        let text = compose(
            strategy,
            query,
            history,
            &self.lang,
            &query_topics,
            &carried_topics,
            self.tables,
        );

        FallbackOutcome {
            strategy,
            language: self.lang.clone(),
            query_topics,
            carried_topics,
            text,
        }
    }
}

/// Convenience wrapper over the process tables: the `PULPIT_TABLES` or
/// config-dir override when present, the built-ins otherwise.
pub fn handle_fallback(query: &str, history: &ConversationHistory, lang: &str) -> String {
    FallbackOrchestrator::with_language(tables::configured(), lang).handle_fallback(query, history)
}
