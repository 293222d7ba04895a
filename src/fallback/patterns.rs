use serde::{Deserialize, Serialize};

/// Phrase lists that drive intent classification for one language.
///
/// All phrases are lowercase substrings matched against the lower-cased query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguagePatterns {
    /// "What do you mean", "can you explain", ...
    #[serde(default)]
    pub clarification: Vec<String>,
    /// Pointers back at the previous answer: "you said", "that sermon", ...
    #[serde(default)]
    pub reference: Vec<String>,
    /// Continuation of the current thread: "tell me more", "also", ...
    #[serde(default)]
    pub follow_up: Vec<String>,
}

/// Used when no table exists, not even for the default language.
pub static EMPTY_PATTERNS: LanguagePatterns = LanguagePatterns {
    clarification: Vec::new(),
    reference: Vec::new(),
    follow_up: Vec::new(),
};

impl LanguagePatterns {
    fn from_lists(clarification: &[&str], reference: &[&str], follow_up: &[&str]) -> Self {
        let own = |list: &[&str]| list.iter().map(|s| s.to_string()).collect();
        Self {
            clarification: own(clarification),
            reference: own(reference),
            follow_up: own(follow_up),
        }
    }

    /// Named lists, for validation and diagnostics.
    pub fn lists(&self) -> [(&'static str, &[String]); 3] {
        [
            ("clarification", self.clarification.as_slice()),
            ("reference", self.reference.as_slice()),
            ("follow_up", self.follow_up.as_slice()),
        ]
    }

    pub fn english() -> Self {
        Self::from_lists(
            &[
                "what do you mean",
                "what does that mean",
                "can you explain",
                "could you explain",
                "explain that",
                "i don't understand",
                "i do not understand",
                "i didn't understand",
                "clarify",
                "confused",
            ],
            &[
                "you said",
                "you mentioned",
                "that sermon",
                "the sermon you",
                "your last answer",
                "your previous answer",
                "earlier you",
                "that passage",
            ],
            &[
                "more about",
                "tell me more",
                "also",
                "what else",
                "another",
                "in addition",
                "go deeper",
                "expand on",
                "related to",
            ],
        )
    }

    pub fn spanish() -> Self {
        Self::from_lists(
            &[
                "qué quieres decir",
                "que quieres decir",
                "qué significa",
                "que significa",
                "puedes explicar",
                "podrías explicar",
                "podrias explicar",
                "explícame",
                "explicame",
                "no entiendo",
                "a qué te refieres",
                "a que te refieres",
                "aclarar",
            ],
            &[
                "dijiste",
                "mencionaste",
                "ese sermón",
                "ese sermon",
                "tu respuesta anterior",
                "tu última respuesta",
                "tu ultima respuesta",
                "ese pasaje",
            ],
            &[
                "más sobre",
                "mas sobre",
                "cuéntame más",
                "cuentame mas",
                "también",
                "tambien",
                "qué más",
                "que mas",
                "además",
                "ademas",
                "profundizar",
            ],
        )
    }

    pub fn chinese() -> Self {
        Self::from_lists(
            &[
                "什么意思",
                "你的意思是",
                "不明白",
                "不懂",
                "请解释",
                "能解释",
                "解释一下",
                "澄清",
            ],
            &["你说", "你提到", "那篇讲道", "那个讲道", "刚才", "上一个回答"],
            &["更多", "多讲", "告诉我更多", "还有", "另外", "继续", "进一步"],
        )
    }
}
