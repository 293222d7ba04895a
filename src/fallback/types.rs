use serde::Serialize;

use crate::config::DEFAULT_LANGUAGE;
use crate::models::FallbackStrategy;

/// De-duplicated, ordered set of canonical topics.
///
/// Order is insertion order. Extraction inserts in vocabulary order, so two
/// extractions of the same text always list topics identically.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct TopicSet(Vec<String>);

impl TopicSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a topic; returns false if it was already present.
    pub fn insert(&mut self, topic: &str) -> bool {
        if self.contains(topic) {
            return false;
        }
        self.0.push(topic.to_string());
        true
    }

    pub fn contains(&self, topic: &str) -> bool {
        self.0.iter().any(|t| t == topic)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn first(&self) -> Option<&str> {
        self.0.first().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// `self` followed by the topics of `other` not already in `self`.
    pub fn union(&self, other: &TopicSet) -> TopicSet {
        let mut merged = self.clone();
        merged.extend(other.iter());
        merged
    }

    pub fn intersects(&self, other: &TopicSet) -> bool {
        self.iter().any(|t| other.contains(t))
    }

    /// Topics joined with `" and "`, e.g. "prayer and faith".
    pub fn joined(&self) -> String {
        self.0.join(" and ")
    }
}

impl<'a> Extend<&'a str> for TopicSet {
    fn extend<I: IntoIterator<Item = &'a str>>(&mut self, iter: I) {
        for topic in iter {
            self.insert(topic);
        }
    }
}

impl<'a> FromIterator<&'a str> for TopicSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = TopicSet::new();
        set.extend(iter);
        set
    }
}

/// Everything decided for one no-results turn.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FallbackOutcome {
    pub strategy: FallbackStrategy,
    pub language: String,
    pub query_topics: TopicSet,
    pub carried_topics: TopicSet,
    pub text: String,
}

/// Reduce a locale tag to its primary language subtag: "es-MX" → "es".
///
/// Blank input maps to the default language.
pub fn normalize_language(lang: &str) -> String {
    let primary = lang
        .trim()
        .split(['-', '_'])
        .next()
        .unwrap_or_default()
        .to_lowercase();
    if primary.is_empty() {
        DEFAULT_LANGUAGE.to_string()
    } else {
        primary
    }
}
