//! Turns a sermon-search API result into the reply the chat shows.
//!
//! This is the thin adapter every chat surface calls: real answers pass
//! straight through, empty searches go to the fallback classifier, and a
//! first-turn miss gets the plain no-results message.

use serde::{Deserialize, Serialize};

use crate::fallback::orchestrator::FallbackOrchestrator;
use crate::fallback::tables::FallbackTables;
use crate::models::{ConversationHistory, FallbackStrategy, Message};

/// One sermon passage backing an answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Source {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub score: Option<f32>,
}

/// The part of the search API response the chat relies on.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub answer: String,
    #[serde(default)]
    pub sources: Option<Vec<Source>>,
    #[serde(default)]
    pub query: String,
}

impl SearchResult {
    pub fn has_sources(&self) -> bool {
        self.sources.as_ref().is_some_and(|s| !s.is_empty())
    }
}

/// What to render for a search turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Reply {
    /// The API's own answer.
    Answer { text: String },
    /// Nothing found and nothing to build on.
    NoResults { text: String },
    /// Nothing found; the classifier chose how to keep going.
    Fallback {
        strategy: FallbackStrategy,
        text: String,
    },
}

impl Reply {
    pub fn text(&self) -> &str {
        match self {
            Reply::Answer { text } | Reply::NoResults { text } | Reply::Fallback { text, .. } => text,
        }
    }

    /// The assistant message to append to history after rendering.
    pub fn to_message(&self) -> Message {
        Message::assistant(self.text())
    }
}

/// True when the API reported no relevant content for `lang`.
pub fn is_empty_result(result: &SearchResult, lang: &str, tables: &FallbackTables) -> bool {
    if result.has_sources() {
        return false;
    }
    tables
        .sentinel_for(lang)
        .is_some_and(|sentinel| result.answer.contains(sentinel))
}

/// Decide what the chat shows for `result`.
///
/// `history` is the conversation before this turn's answer, i.e. it already
/// holds the user's query but not the reply. A miss before any assistant
/// reply has nothing to build on and gets the plain no-results message.
pub fn resolve_reply(
    result: &SearchResult,
    history: &ConversationHistory,
    lang: &str,
    tables: &FallbackTables,
) -> Reply {
    if !is_empty_result(result, lang, tables) {
        return Reply::Answer {
            text: result.answer.clone(),
        };
    }

    if history.assistant_messages_newest_first().next().is_none() {
        return Reply::NoResults {
            text: tables.no_results_message(lang).to_string(),
        };
    }

    let outcome = FallbackOrchestrator::with_language(tables, lang).decide(&result.query, history);
    Reply::Fallback {
        strategy: outcome.strategy,
        text: outcome.text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fallback::tables::NO_RESULTS_MESSAGE_EN;

    fn empty_result(query: &str) -> SearchResult {
        SearchResult {
            answer: "No relevant sermon content found for your question.".into(),
            sources: None,
            query: query.into(),
        }
    }

    fn faith_exchange() -> ConversationHistory {
        ConversationHistory::from(vec![
            Message::user("What is faith?"),
            Message::assistant("Faith is trust in God."),
        ])
    }

    #[test]
    fn answer_with_sources_passes_through() {
        let result = SearchResult {
            answer: "Grace is unmerited favor.".into(),
            sources: Some(vec![Source {
                title: Some("Amazing Grace".into()),
                url: None,
                text: None,
                score: Some(0.9),
            }]),
            query: "grace".into(),
        };
        let reply = resolve_reply(&result, &faith_exchange(), "en", &FallbackTables::builtin());
        assert_eq!(reply, Reply::Answer { text: "Grace is unmerited favor.".into() });
    }

    #[test]
    fn sources_win_over_sentinel_text() {
        let mut result = empty_result("grace");
        result.sources = Some(vec![Source {
            title: None,
            url: Some("https://example.org/s/1".into()),
            text: None,
            score: None,
        }]);
        assert!(!is_empty_result(&result, "en", &FallbackTables::builtin()));
    }

    #[test]
    fn missing_sources_without_sentinel_is_an_answer() {
        let result = SearchResult {
            answer: "Here is what I found.".into(),
            sources: Some(vec![]),
            query: "grace".into(),
        };
        let reply = resolve_reply(&result, &faith_exchange(), "en", &FallbackTables::builtin());
        assert!(matches!(reply, Reply::Answer { .. }));
    }

    #[test]
    fn empty_history_gets_plain_no_results() {
        let reply = resolve_reply(
            &empty_result("grace"),
            &ConversationHistory::new(),
            "en",
            &FallbackTables::builtin(),
        );
        assert!(matches!(reply, Reply::NoResults { .. }));
        assert!(reply.text().starts_with("No relevant sermon content found"));
    }

    #[test]
    fn first_turn_miss_gets_plain_no_results() {
        let history = ConversationHistory::from(vec![Message::user("grace")]);
        let reply = resolve_reply(&empty_result("grace"), &history, "en", &FallbackTables::builtin());
        assert_eq!(
            reply,
            Reply::NoResults {
                text: NO_RESULTS_MESSAGE_EN.to_string()
            }
        );
    }

    #[test]
    fn repeated_misses_without_answers_stay_plain() {
        let history = ConversationHistory::from(vec![
            Message::user("grace"),
            Message::user("tell me more about grace"),
        ]);
        let reply = resolve_reply(
            &empty_result("tell me more about grace"),
            &history,
            "es",
            &FallbackTables::builtin(),
        );
        assert!(matches!(reply, Reply::NoResults { .. }));
        assert!(reply.text().starts_with("No se encontró"));
    }

    #[test]
    fn empty_result_with_history_falls_back() {
        let reply = resolve_reply(
            &empty_result("what do you mean?"),
            &faith_exchange(),
            "en",
            &FallbackTables::builtin(),
        );
        match reply {
            Reply::Fallback { strategy, text } => {
                assert_eq!(strategy, FallbackStrategy::ClarifyPrevious);
                assert!(text.contains("previous sermon content"));
            }
            other => panic!("expected fallback, got {other:?}"),
        }
    }

    #[test]
    fn sentinel_is_checked_in_reply_language() {
        let result = SearchResult {
            answer: "No se encontró contenido relevante de sermones.".into(),
            sources: None,
            query: "perdón".into(),
        };
        let tables = FallbackTables::builtin();
        assert!(is_empty_result(&result, "es", &tables));
        assert!(!is_empty_result(&result, "en", &tables));
    }

    #[test]
    fn reply_message_is_assistant_text() {
        let reply = Reply::NoResults { text: "nothing".into() };
        assert_eq!(reply.to_message(), Message::assistant("nothing"));
    }

    #[test]
    fn search_result_deserializes_without_sources() {
        let result: SearchResult =
            serde_json::from_str(r#"{"answer":"No relevant sermon content found","query":"x"}"#)
                .unwrap();
        assert!(!result.has_sources());
        assert!(is_empty_result(&result, "en", &FallbackTables::builtin()));
    }

    #[test]
    fn reply_serializes_with_kind_tag() {
        let reply = Reply::Fallback {
            strategy: FallbackStrategy::RefineSearch,
            text: "t".into(),
        };
        let json = serde_json::to_value(&reply).unwrap();
        assert_eq!(json["kind"], "fallback");
        assert_eq!(json["strategy"], "refine_search");
    }
}
