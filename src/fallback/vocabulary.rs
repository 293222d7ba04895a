use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A canonical topic and the phrases that also count as a mention of it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicEntry {
    pub topic: String,
    #[serde(default)]
    pub synonyms: Vec<String>,
}

/// Closed list of sermon topics, in canonical (rendering) order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TopicVocabulary {
    entries: Vec<TopicEntry>,
}

impl TopicVocabulary {
    pub fn new(entries: Vec<TopicEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[TopicEntry] {
        &self.entries
    }

    pub fn all_topics(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.topic.as_str())
    }

    /// Synonyms of `topic`, empty when it has none or is not a topic.
    pub fn synonyms_of(&self, topic: &str) -> &[String] {
        self.entries
            .iter()
            .find(|e| e.topic == topic)
            .map(|e| e.synonyms.as_slice())
            .unwrap_or_default()
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.entries.iter().any(|e| e.topic == topic)
    }

    /// The built-in sermon vocabulary.
    pub fn builtin() -> Self {
        let entry = |topic: &str, synonyms: &[&str]| TopicEntry {
            topic: topic.to_string(),
            synonyms: synonyms.iter().map(|s| s.to_string()).collect(),
        };

        Self::new(vec![
            entry("prayer", &["praying", "pray", "intercession", "supplication"]),
            entry("faith", &["believe", "belief", "trust in god", "trusting god"]),
            entry("forgiveness", &["forgive", "forgiving", "forgiven", "pardon"]),
            entry("grace", &["mercy", "unmerited favor"]),
            entry("love", &["loving", "charity", "compassion"]),
            entry("hope", &["hopeful", "hopeless", "despair"]),
            entry("salvation", &["saved", "redemption", "born again", "eternal life"]),
            entry("worship", &["praise", "adoration"]),
            entry("healing", &["heal", "restoration", "sickness"]),
            entry("relationships", &["relationship", "marriage", "friendship", "family"]),
            entry("reconciliation", &["reconcile", "making peace"]),
            entry("suffering", &["grief", "hardship", "trials", "pain"]),
            entry("anxiety", &["worry", "worried", "fear", "stress"]),
            entry("spiritual growth", &["discipleship", "sanctification", "spiritual maturity"]),
        ])
    }
}

/// Directed topic → related-topics graph, used only for suggestions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelationshipGraph {
    edges: BTreeMap<String, Vec<String>>,
}

impl RelationshipGraph {
    pub fn new(edges: BTreeMap<String, Vec<String>>) -> Self {
        Self { edges }
    }

    pub fn related_to(&self, topic: &str) -> &[String] {
        self.edges
            .get(topic)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn edges(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.edges.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    pub fn builtin() -> Self {
        let edges = [
            ("prayer", ["faith", "worship", "anxiety"]),
            ("faith", ["hope", "salvation", "prayer"]),
            ("forgiveness", ["reconciliation", "healing", "relationships"]),
            ("grace", ["salvation", "forgiveness", "love"]),
            ("love", ["relationships", "grace", "forgiveness"]),
            ("hope", ["faith", "suffering", "healing"]),
            ("salvation", ["grace", "faith", "spiritual growth"]),
            ("worship", ["prayer", "love", "spiritual growth"]),
            ("healing", ["prayer", "suffering", "hope"]),
            ("relationships", ["love", "forgiveness", "reconciliation"]),
            ("reconciliation", ["forgiveness", "relationships", "healing"]),
            ("suffering", ["hope", "healing", "faith"]),
            ("anxiety", ["prayer", "hope", "faith"]),
            ("spiritual growth", ["prayer", "faith", "worship"]),
        ]
        .into_iter()
        .map(|(topic, related)| {
            (
                topic.to_string(),
                related.iter().map(|r| r.to_string()).collect(),
            )
        })
        .collect();

        Self::new(edges)
    }
}

/// Suggestions used to top up a short related-topic list.
pub fn builtin_generic_suggestions() -> Vec<String> {
    ["prayer", "faith", "biblical teaching", "spiritual growth"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
