use super::types::TopicSet;
use super::vocabulary::RelationshipGraph;

/// Most suggestions ever offered in one reply.
pub const MAX_RELATED_TOPICS: usize = 3;

/// Expand `seed` into up to three "try searching for…" topics.
///
/// Graph neighbours come first, in first-seen order; the generic list tops
/// up a short result. Nothing already in `seed` is ever returned.
pub fn related_topics(
    seed: &TopicSet,
    graph: &RelationshipGraph,
    generic: &[String],
) -> Vec<String> {
    let mut collected: Vec<String> = Vec::new();

    let neighbours = seed.iter().flat_map(|topic| graph.related_to(topic));
    let candidates = neighbours.chain(generic.iter());

    for candidate in candidates {
        if collected.len() >= MAX_RELATED_TOPICS {
            break;
        }
        if seed.contains(candidate) || collected.contains(candidate) {
            continue;
        }
        collected.push(candidate.clone());
    }

    collected
}
