//! Property-based tests for the fallback classifier
//!
//! These tests verify invariants that must hold for any input:
//! - Related-topic lists never repeat the seed and never exceed three entries
//! - Composed replies are never blank
//! - Classification and composition are deterministic
//! - Short histories never produce a follow-up
//! - Clarification language always wins over topic words

use std::collections::HashSet;

use proptest::prelude::*;

use super::classify::{classify, is_clarification};
use super::compose::compose;
use super::orchestrator::FallbackOrchestrator;
use super::related::{related_topics, MAX_RELATED_TOPICS};
use super::tables::{global, FallbackTables};
use super::types::TopicSet;
use crate::models::{ConversationHistory, FallbackStrategy, Message};

// ============================================================================
// Strategies
// ============================================================================

fn arb_topic() -> impl Strategy<Value = String> {
    let topics: Vec<String> = global()
        .vocabulary
        .all_topics()
        .map(str::to_string)
        .collect();
    prop::sample::select(topics)
}

fn arb_topic_set() -> impl Strategy<Value = TopicSet> {
    prop::collection::vec(arb_topic(), 0..6)
        .prop_map(|topics| topics.iter().map(String::as_str).collect::<TopicSet>())
}

fn arb_strategy() -> impl Strategy<Value = FallbackStrategy> {
    prop::sample::select(FallbackStrategy::ALL.to_vec())
}

fn arb_language() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("en".to_string()),
        Just("es".to_string()),
        Just("zh".to_string()),
        "[a-z]{2}",
    ]
}

/// Free text that sometimes mentions topics or trigger phrases.
fn arb_text() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-zA-Z ?!.,']{0,60}",
        (arb_topic(), "[a-z ]{0,20}").prop_map(|(t, rest)| format!("{rest} {t}")),
        Just("tell me more".to_string()),
        Just("what do you mean".to_string()),
        Just("No relevant sermon content found".to_string()),
    ]
}

fn arb_message() -> impl Strategy<Value = Message> {
    (any::<bool>(), arb_text()).prop_map(|(is_user, text)| {
        if is_user {
            Message::user(text)
        } else {
            Message::assistant(text)
        }
    })
}

fn arb_history(max: usize) -> impl Strategy<Value = ConversationHistory> {
    prop::collection::vec(arb_message(), 0..=max).prop_map(ConversationHistory::from)
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn related_topics_exclude_seed_and_stay_small(seed in arb_topic_set()) {
        let tables = global();
        let related = related_topics(&seed, &tables.relationships, &tables.generic_suggestions);

        prop_assert!(related.len() <= MAX_RELATED_TOPICS);
        for topic in &related {
            prop_assert!(!seed.contains(topic), "{topic} is in the seed");
        }
        let unique: HashSet<&String> = related.iter().collect();
        prop_assert_eq!(unique.len(), related.len());
    }

    #[test]
    fn compose_is_never_blank(
        strategy in arb_strategy(),
        lang in arb_language(),
        query in arb_text(),
        history in arb_history(6),
        query_topics in arb_topic_set(),
        carried in arb_topic_set(),
    ) {
        let text = compose(strategy, &query, &history, &lang, &query_topics, &carried, global());
        prop_assert!(!text.trim().is_empty());
    }

    #[test]
    fn fallback_is_deterministic(
        query in arb_text(),
        history in arb_history(8),
        lang in arb_language(),
    ) {
        let orchestrator = FallbackOrchestrator::with_language(global(), &lang);
        let first = orchestrator.decide(&query, &history);
        let second = orchestrator.decide(&query, &history);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn short_history_never_follows_up(
        query in arb_text(),
        history in arb_history(1),
        lang in arb_language(),
    ) {
        prop_assert_ne!(classify(&query, &history, &lang, global()), FallbackStrategy::FollowUp);
    }

    #[test]
    fn clarification_dominates_topics(
        topic in arb_topic(),
        history in arb_history(6),
    ) {
        let query = format!("What do you mean about {topic}?");
        prop_assert!(is_clarification(&query, "en", global()));
        prop_assert_eq!(
            classify(&query, &history, "en", global()),
            FallbackStrategy::ClarifyPrevious
        );
    }

    #[test]
    fn unconfigured_language_matches_english(
        query in arb_text(),
        history in arb_history(6),
    ) {
        let tables = FallbackTables::builtin();
        let en = FallbackOrchestrator::with_language(&tables, "en").handle_fallback(&query, &history);
        let xx = FallbackOrchestrator::with_language(&tables, "xx").handle_fallback(&query, &history);
        prop_assert_eq!(en, xx);
    }
}
