//! The complete, read-only table set behind the fallback classifier.
//!
//! Built in by default; a JSON file with the same shape can replace it at
//! startup. Tables are validated once on load and never mutated afterwards,
//! so a shared `&FallbackTables` is safe to read from any thread.

use std::collections::{BTreeMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use super::patterns::{LanguagePatterns, EMPTY_PATTERNS};
use super::templates::StaticTemplates;
use super::types::normalize_language;
use super::vocabulary::{builtin_generic_suggestions, RelationshipGraph, TopicVocabulary};
use super::FallbackError;
use crate::config::{self, DEFAULT_LANGUAGE};
use crate::models::FallbackStrategy;

/// Shown when a search finds nothing and there is no conversation to build on.
pub const NO_RESULTS_MESSAGE_EN: &str = "No relevant sermon content found. \
    Try asking about a specific topic, Bible passage, or question.";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FallbackTables {
    pub vocabulary: TopicVocabulary,
    #[serde(default)]
    pub relationships: RelationshipGraph,
    #[serde(default)]
    pub generic_suggestions: Vec<String>,
    /// Pattern tables keyed by language code. Must include the default language.
    pub patterns: BTreeMap<String, LanguagePatterns>,
    /// Curated templates keyed by language code. The default language is
    /// always composed dynamically, even if listed here.
    #[serde(default)]
    pub templates: BTreeMap<String, StaticTemplates>,
    /// "No relevant content" sentinel per language, as the search API words it.
    #[serde(default)]
    pub sentinels: BTreeMap<String, String>,
    /// Plain no-results replies per language.
    #[serde(default)]
    pub no_results: BTreeMap<String, String>,
}

static BUILTIN: LazyLock<FallbackTables> = LazyLock::new(FallbackTables::builtin);

static CONFIGURED: LazyLock<FallbackTables> =
    LazyLock::new(|| tables_or_builtin(load_configured()));

/// The built-in tables, constructed once per process.
pub fn global() -> &'static FallbackTables {
    &BUILTIN
}

/// The tables this process runs with: the override file when one is
/// configured, otherwise the built-ins. Loaded once on first use.
///
/// A broken override file is logged and replaced by the built-ins.
pub fn configured() -> &'static FallbackTables {
    &CONFIGURED
}

/// Load the override file from `config::tables_path()` if one is configured,
/// otherwise use the built-in tables.
pub fn load_configured() -> Result<FallbackTables, FallbackError> {
    load_from(config::tables_path())
}

/// Load `path` when given, otherwise use the built-in tables.
pub fn load_from(path: Option<PathBuf>) -> Result<FallbackTables, FallbackError> {
    match path {
        Some(path) => FallbackTables::load(&path),
        None => Ok(global().clone()),
    }
}

fn tables_or_builtin(loaded: Result<FallbackTables, FallbackError>) -> FallbackTables {
    loaded.unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Fallback tables override unusable; using built-in tables");
        FallbackTables::builtin()
    })
}

impl FallbackTables {
    pub fn builtin() -> Self {
        let own = |pairs: &[(&str, &str)]| -> BTreeMap<String, String> {
            pairs
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect()
        };

        Self {
            vocabulary: TopicVocabulary::builtin(),
            relationships: RelationshipGraph::builtin(),
            generic_suggestions: builtin_generic_suggestions(),
            patterns: BTreeMap::from([
                ("en".to_string(), LanguagePatterns::english()),
                ("es".to_string(), LanguagePatterns::spanish()),
                ("zh".to_string(), LanguagePatterns::chinese()),
            ]),
            templates: BTreeMap::from([
                ("es".to_string(), StaticTemplates::spanish()),
                ("zh".to_string(), StaticTemplates::chinese()),
            ]),
            sentinels: own(&[
                ("en", "No relevant sermon content found"),
                ("es", "No se encontró contenido relevante de sermones"),
                ("zh", "未找到相关的讲道内容"),
            ]),
            no_results: own(&[
                ("en", NO_RESULTS_MESSAGE_EN),
                (
                    "es",
                    "No se encontró contenido relevante de sermones. \
                     Intenta preguntar sobre un tema, un pasaje bíblico o una pregunta específica.",
                ),
                (
                    "zh",
                    "未找到相关的讲道内容。请尝试询问具体的主题、经文或问题。",
                ),
            ]),
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, FallbackError> {
        let tables: FallbackTables = serde_json::from_str(json)?;
        tables.validate()?;
        Ok(tables)
    }

    pub fn load(path: &Path) -> Result<Self, FallbackError> {
        let json = std::fs::read_to_string(path)?;
        let tables = Self::from_json_str(&json)?;
        tracing::info!(
            path = %path.display(),
            topics = tables.vocabulary.entries().len(),
            languages = tables.patterns.len(),
            "Loaded fallback tables"
        );
        Ok(tables)
    }

    /// Reject tables that would make classification or composition misbehave.
    pub fn validate(&self) -> Result<(), FallbackError> {
        let mut seen = HashSet::new();
        for entry in self.vocabulary.entries() {
            if !is_canonical(&entry.topic) {
                return Err(FallbackError::InvalidTopic(entry.topic.clone()));
            }
            if !seen.insert(entry.topic.as_str()) {
                return Err(FallbackError::DuplicateTopic(entry.topic.clone()));
            }
            if let Some(bad) = entry.synonyms.iter().find(|s| !is_lowercase_phrase(s)) {
                return Err(FallbackError::InvalidSynonym {
                    topic: entry.topic.clone(),
                    synonym: bad.clone(),
                });
            }
        }

        for (topic, related) in self.relationships.edges() {
            if !self.vocabulary.contains(topic) {
                return Err(FallbackError::UnknownRelationshipTopic(topic.to_string()));
            }
            if let Some(bad) = related.iter().find(|r| !self.vocabulary.contains(r)) {
                return Err(FallbackError::UnknownRelatedTopic {
                    topic: topic.to_string(),
                    related: bad.clone(),
                });
            }
        }

        if !self.patterns.contains_key(DEFAULT_LANGUAGE) {
            return Err(FallbackError::MissingDefaultPatterns(DEFAULT_LANGUAGE.to_string()));
        }
        for (language, patterns) in &self.patterns {
            for (list, phrases) in patterns.lists() {
                if let Some(bad) = phrases.iter().find(|p| !is_lowercase_phrase(p)) {
                    return Err(FallbackError::InvalidPattern {
                        language: language.clone(),
                        list,
                        phrase: bad.clone(),
                    });
                }
            }
        }

        for (language, templates) in &self.templates {
            for strategy in FallbackStrategy::ALL {
                if templates.for_strategy(strategy).trim().is_empty() {
                    return Err(FallbackError::EmptyTemplate {
                        language: language.clone(),
                        strategy: strategy.as_str().to_string(),
                    });
                }
            }
        }

        if let Some((language, _)) = self.sentinels.iter().find(|(_, s)| s.trim().is_empty()) {
            return Err(FallbackError::EmptySentinel(language.clone()));
        }

        if self.generic_suggestions.is_empty() && self.relationships.is_empty() {
            tracing::warn!("No relationships or generic suggestions; related-topic lists will be empty");
        }

        Ok(())
    }

    /// Pattern table for `lang`, or the default language's when absent.
    pub fn patterns_for(&self, lang: &str) -> &LanguagePatterns {
        let lang = normalize_language(lang);
        if let Some(patterns) = self.patterns.get(&lang) {
            return patterns;
        }
        tracing::warn!(lang = %lang, "No pattern table; using default language");
        self.patterns
            .get(DEFAULT_LANGUAGE)
            .unwrap_or(&EMPTY_PATTERNS)
    }

    /// Curated templates for `lang`. Always `None` for the default language.
    pub fn static_templates(&self, lang: &str) -> Option<&StaticTemplates> {
        let lang = normalize_language(lang);
        if lang == DEFAULT_LANGUAGE {
            return None;
        }
        self.templates.get(&lang)
    }

    /// Every configured sentinel, whatever its language.
    ///
    /// History may hold answers in more than one language, so a message is
    /// checked against all of them.
    pub fn sentinels(&self) -> Vec<&str> {
        self.sentinels.values().map(String::as_str).collect()
    }

    /// Sentinel the search API uses for `lang`. Blank entries never match.
    pub fn sentinel_for(&self, lang: &str) -> Option<&str> {
        let lang = normalize_language(lang);
        self.sentinels
            .get(&lang)
            .or_else(|| self.sentinels.get(DEFAULT_LANGUAGE))
            .map(String::as_str)
            .filter(|s| !s.trim().is_empty())
    }

    pub fn no_results_message(&self, lang: &str) -> &str {
        let lang = normalize_language(lang);
        self.no_results
            .get(&lang)
            .or_else(|| self.no_results.get(DEFAULT_LANGUAGE))
            .map(String::as_str)
            .unwrap_or(NO_RESULTS_MESSAGE_EN)
    }
}

fn is_canonical(topic: &str) -> bool {
    !topic.is_empty() && topic.trim() == topic && topic.to_lowercase() == topic
}

fn is_lowercase_phrase(phrase: &str) -> bool {
    !phrase.is_empty() && phrase.to_lowercase() == phrase
}
