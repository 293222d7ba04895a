use super::topics::extract_topics;
use super::types::TopicSet;
use super::vocabulary::TopicVocabulary;
use crate::models::ConversationHistory;

/// Topics from earlier answers that actually carried sermon content.
///
/// Answers containing a "no relevant content" sentinel are skipped so a run
/// of failed searches cannot seed its own context.
pub fn extract_carried_topics<S: AsRef<str>>(
    history: &ConversationHistory,
    vocabulary: &TopicVocabulary,
    sentinels: &[S],
) -> TopicSet {
    let mut carried = TopicSet::new();

    for message in history
        .assistant_messages_newest_first()
        .filter(|m| m.is_sermon_bearing(sentinels))
    {
        carried.extend(extract_topics(&message.content, vocabulary).iter());
    }

    carried
}
