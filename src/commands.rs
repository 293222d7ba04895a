//! Request handling for the `pulpit` command-line driver.
//!
//! Commands:
//! - `fallback`: classify a no-results turn and compose the reply
//! - `reply`: resolve a full search result (answer, no-results, or fallback)
//!
//! A request carries `search` to select `reply`; otherwise it is `fallback`.

use serde::{Deserialize, Serialize};

use crate::fallback::orchestrator::FallbackOrchestrator;
use crate::fallback::tables::FallbackTables;
use crate::fallback::types::FallbackOutcome;
use crate::models::ConversationHistory;
use crate::search::{resolve_reply, Reply, SearchResult};

/// One JSON request read from stdin.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatRequest {
    pub query: String,
    #[serde(default)]
    pub history: ConversationHistory,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub search: Option<SearchResult>,
}

/// What the driver prints for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ChatResponse {
    Reply(Reply),
    Fallback(FallbackOutcome),
}

impl ChatResponse {
    pub fn text(&self) -> &str {
        match self {
            ChatResponse::Reply(reply) => reply.text(),
            ChatResponse::Fallback(outcome) => &outcome.text,
        }
    }
}

pub fn handle_request(request: &ChatRequest, tables: &FallbackTables) -> ChatResponse {
    let lang = request
        .language
        .as_deref()
        .unwrap_or(crate::config::DEFAULT_LANGUAGE);

    match &request.search {
        Some(search) => {
            let mut search = search.clone();
            if search.query.is_empty() {
                search.query = request.query.clone();
            }
            ChatResponse::Reply(resolve_reply(&search, &request.history, lang, tables))
        }
        None => ChatResponse::Fallback(
            FallbackOrchestrator::with_language(tables, lang).decide(&request.query, &request.history),
        ),
    }
}
