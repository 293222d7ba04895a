use super::related::related_topics;
use super::tables::FallbackTables;
use super::templates::{
    clarify_previous_en, follow_up_en, suggest_related_en, CLARIFY_NO_TOPIC, FOLLOW_UP_NO_TOPIC,
    REFINE_SEARCH_EN, SUGGEST_NO_TOPIC, SUGGEST_REPHRASE,
};
use super::types::TopicSet;
use crate::models::{ConversationHistory, FallbackStrategy};

/// Render the fallback reply for an already-chosen strategy.
///
/// Languages with curated templates get them verbatim. Everything else,
/// English included, is composed from the topics found.
pub fn compose(
    strategy: FallbackStrategy,
    query: &str,
    history: &ConversationHistory,
    lang: &str,
    query_topics: &TopicSet,
    carried_topics: &TopicSet,
    tables: &FallbackTables,
) -> String {
    if let Some(templates) = tables.static_templates(lang) {
        return templates.for_strategy(strategy).to_string();
    }

    tracing::trace!(query_len = query.len(), %strategy, "Composing dynamic fallback");

    match strategy {
        FallbackStrategy::ClarifyPrevious => {
            let sentinels = tables.sentinels();
            if history.last_sermon_bearing_answer(&sentinels).is_none() {
                return REFINE_SEARCH_EN.to_string();
            }
            let topic_phrase = if query_topics.is_empty() {
                CLARIFY_NO_TOPIC.to_string()
            } else {
                format!("about {}", query_topics.joined())
            };
            clarify_previous_en(&topic_phrase)
        }
        FallbackStrategy::FollowUp => {
            let focus = if query_topics.is_empty() {
                FOLLOW_UP_NO_TOPIC.to_string()
            } else {
                query_topics.joined()
            };
            follow_up_en(&focus)
        }
        FallbackStrategy::SuggestRelated => {
            compose_suggestions(query_topics, carried_topics, tables)
        }
        FallbackStrategy::RefineSearch => REFINE_SEARCH_EN.to_string(),
    }
}

fn compose_suggestions(
    query_topics: &TopicSet,
    carried_topics: &TopicSet,
    tables: &FallbackTables,
) -> String {
    let seed = query_topics.union(carried_topics);
    let related = related_topics(&seed, &tables.relationships, &tables.generic_suggestions);

    let subject = if query_topics.is_empty() {
        SUGGEST_NO_TOPIC.to_string()
    } else {
        query_topics.joined()
    };

    if related.is_empty() {
        return suggest_related_en(&subject, SUGGEST_REPHRASE);
    }

    let bullets = related
        .iter()
        .map(|topic| match query_topics.first() {
            Some(anchor) => format!("- \"{anchor} and {topic}\""),
            None => format!("- \"{topic}\""),
        })
        .collect::<Vec<_>>()
        .join("\n");

    suggest_related_en(
        &subject,
        &format!("These related searches might help:\n{bullets}"),
    )
}
