use super::types::TopicSet;
use super::vocabulary::TopicVocabulary;

/// Find every vocabulary topic mentioned in `text`, directly or by synonym.
///
/// Matching is plain substring containment on the lower-cased text, so
/// "heal" also fires inside "health". Results follow vocabulary order.
pub fn extract_topics(text: &str, vocabulary: &TopicVocabulary) -> TopicSet {
    let lower = text.to_lowercase();
    let mut topics = TopicSet::new();

    for entry in vocabulary.entries() {
        if lower.contains(entry.topic.as_str())
            || entry.synonyms.iter().any(|s| lower.contains(s.as_str()))
        {
            topics.insert(&entry.topic);
        }
    }

    topics
}
