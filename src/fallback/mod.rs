//! Conversational fallback for searches that found no sermon passages.
//!
//! Flow: query + history → topics → strategy → composed reply.
//! Everything here is synchronous and pure over read-only tables.

pub mod types;
pub mod vocabulary;
pub mod patterns;
pub mod templates;
pub mod tables;
pub mod topics;
pub mod history;
pub mod classify;
pub mod related;
pub mod compose;
pub mod orchestrator;

#[cfg(test)]
mod proptests;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FallbackError {
    #[error("Failed to read tables: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse tables: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid topic {0:?}: topics must be non-empty, trimmed and lowercase")]
    InvalidTopic(String),

    #[error("Duplicate topic in vocabulary: {0}")]
    DuplicateTopic(String),

    #[error("Invalid synonym {synonym:?} for topic {topic}: synonyms must be non-empty and lowercase")]
    InvalidSynonym { topic: String, synonym: String },

    #[error("Relationship graph entry for unknown topic: {0}")]
    UnknownRelationshipTopic(String),

    #[error("Topic {topic} is related to unknown topic {related}")]
    UnknownRelatedTopic { topic: String, related: String },

    #[error("No pattern table for default language {0:?}")]
    MissingDefaultPatterns(String),

    #[error("Invalid {list} phrase {phrase:?} for language {language}: phrases must be non-empty and lowercase")]
    InvalidPattern {
        language: String,
        list: &'static str,
        phrase: String,
    },

    #[error("Empty no-results sentinel for language {0}")]
    EmptySentinel(String),

    #[error("Empty {strategy} template for language {language}")]
    EmptyTemplate { language: String, strategy: String },
}
