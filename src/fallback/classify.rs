use super::patterns::LanguagePatterns;
use super::tables::FallbackTables;
use super::topics::extract_topics;
use crate::models::{ConversationHistory, FallbackStrategy};

/// Minimum history length before a query can count as a follow-up.
const MIN_FOLLOW_UP_HISTORY: usize = 2;

/// Decide how to answer a query whose search came back empty.
///
/// Checks run in priority order and the first hit wins: clarification,
/// follow-up, related-topic suggestion, then refine-search as the default.
pub fn classify(
    query: &str,
    history: &ConversationHistory,
    lang: &str,
    tables: &FallbackTables,
) -> FallbackStrategy {
    let lower = query.to_lowercase();
    let patterns = tables.patterns_for(lang);

    if has_clarification_pattern(&lower, patterns) {
        return FallbackStrategy::ClarifyPrevious;
    }

    if is_follow_up(query, &lower, history, patterns, tables) {
        return FallbackStrategy::FollowUp;
    }

    if !extract_topics(query, &tables.vocabulary).is_empty() {
        return FallbackStrategy::SuggestRelated;
    }

    FallbackStrategy::RefineSearch
}

/// True when the query asks about, or points back at, the previous answer.
pub fn is_clarification(query: &str, lang: &str, tables: &FallbackTables) -> bool {
    has_clarification_pattern(&query.to_lowercase(), tables.patterns_for(lang))
}

fn has_clarification_pattern(lower: &str, patterns: &LanguagePatterns) -> bool {
    contains_any(lower, &patterns.clarification) || contains_any(lower, &patterns.reference)
}

fn is_follow_up(
    query: &str,
    lower: &str,
    history: &ConversationHistory,
    patterns: &LanguagePatterns,
    tables: &FallbackTables,
) -> bool {
    if history.len() < MIN_FOLLOW_UP_HISTORY {
        return false;
    }

    if contains_any(lower, &patterns.follow_up) {
        return true;
    }

    let sentinels = tables.sentinels();
    let Some(previous) = history.last_sermon_bearing_answer(&sentinels) else {
        return false;
    };

    let query_topics = extract_topics(query, &tables.vocabulary);
    let previous_topics = extract_topics(&previous.content, &tables.vocabulary);
    query_topics.intersects(&previous_topics)
}

fn contains_any(text: &str, phrases: &[String]) -> bool {
    phrases.iter().any(|p| text.contains(p.as_str()))
}
