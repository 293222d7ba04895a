use serde::{Deserialize, Serialize};

use crate::models::FallbackStrategy;

/// Curated, fixed fallback prose for one language, one text per strategy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticTemplates {
    pub clarify_previous: String,
    pub follow_up: String,
    pub suggest_related: String,
    pub refine_search: String,
}

impl StaticTemplates {
    pub fn for_strategy(&self, strategy: FallbackStrategy) -> &str {
        match strategy {
            FallbackStrategy::ClarifyPrevious => &self.clarify_previous,
            FallbackStrategy::FollowUp => &self.follow_up,
            FallbackStrategy::SuggestRelated => &self.suggest_related,
            FallbackStrategy::RefineSearch => &self.refine_search,
        }
    }

    pub fn spanish() -> Self {
        Self {
            clarify_previous: "Entiendo que quieres más aclaración sobre nuestra conversación anterior. \
                Lamentablemente, no encontré contenido adicional de sermones que responda esta pregunta específica.\n\n\
                ¿Te gustaría que:\n\
                - Resuma los puntos clave del contenido anterior\n\
                - Sugiera otro aspecto de este tema para explorar\n\
                - Busque temas de sermones relacionados\n\n\
                No dudes en reformular tu pregunta y haré lo posible por encontrar contenido relevante."
                .to_string(),
            follow_up: "No encontré contenido adicional de sermones sobre ese aspecto más allá de lo que ya hemos conversado.\n\n\
                Puedes intentar:\n\
                - Preguntar sobre otro aspecto del tema\n\
                - Usar palabras clave diferentes\n\
                - Preguntar sobre un pasaje bíblico relacionado\n\n\
                ¿Qué más te gustaría saber?"
                .to_string(),
            suggest_related: "No encontré contenido de sermones específicamente sobre ese tema. \
                Sin embargo, estas búsquedas relacionadas podrían ayudarte:\n\n\
                - \"oración y fe\"\n\
                - \"esperanza en tiempos difíciles\"\n\
                - \"crecimiento espiritual\"\n\n\
                ¿Te gustaría buscar alguno de estos temas?"
                .to_string(),
            refine_search: "No encontré contenido de sermones que coincida con tu pregunta.\n\n\
                Para obtener mejores resultados, puedes intentar:\n\
                - Usar un tema específico en tu búsqueda\n\
                - Preguntar sobre un pasaje o libro de la Biblia\n\
                - Reformular tu pregunta con otras palabras\n\n\
                ¿Qué te gustaría explorar?"
                .to_string(),
        }
    }

    pub fn chinese() -> Self {
        Self {
            clarify_previous: "我明白您希望进一步澄清我们之前的对话。很抱歉，我没有找到能回答这个具体问题的其他讲道内容。\n\n\
                您希望我：\n\
                - 总结之前讲道内容的要点\n\
                - 建议探讨这个主题的其他方面\n\
                - 搜索相关的讲道主题\n\n\
                欢迎您换一种方式提问，我会尽力找到相关的讲道内容。"
                .to_string(),
            follow_up: "除了我们已经讨论过的内容之外，我没有找到关于这方面的更多讲道内容。\n\n\
                您可以尝试：\n\
                - 询问这个主题的其他方面\n\
                - 使用不同的关键词\n\
                - 询问相关的圣经经文\n\n\
                您还想了解什么？"
                .to_string(),
            suggest_related: "我没有找到专门针对这个主题的讲道内容。不过，以下相关搜索可能对您有帮助：\n\n\
                - \"祷告与信心\"\n\
                - \"困难中的盼望\"\n\
                - \"属灵成长\"\n\n\
                您想搜索其中的某个主题吗？"
                .to_string(),
            refine_search: "我没有找到与您的问题相匹配的讲道内容。\n\n\
                为了获得更好的结果，您可以尝试：\n\
                - 使用具体的主题进行搜索\n\
                - 询问某段经文或圣经书卷\n\
                - 用不同的词语重新表述您的问题\n\n\
                您想探索什么内容？"
                .to_string(),
        }
    }
}

// ── English (dynamic) ───────────────────────────────────────────────────────

/// Placeholder when a clarification request names no topic.
pub const CLARIFY_NO_TOPIC: &str = "on that topic";

/// Placeholder when a follow-up names no topic.
pub const FOLLOW_UP_NO_TOPIC: &str = "that specific aspect";

/// Subject placeholder for related-topic suggestions without query topics.
pub const SUGGEST_NO_TOPIC: &str = "that topic";

/// Replaces the bullet list when no related topics are available.
pub const SUGGEST_REPHRASE: &str = "Try rephrasing your question, or search for a broader theme \
    such as a book of the Bible or a season of life.";

pub const REFINE_SEARCH_EN: &str = "I couldn't find any sermon content that matches your question.\n\n\
    To get better results, you could try:\n\
    - Naming a specific theme or subject you'd like to explore\n\
    - Asking about a particular Bible passage or book\n\
    - Rephrasing your question with different keywords\n\n\
    What would you like to explore?";

pub fn clarify_previous_en(topic_phrase: &str) -> String {
    format!(
        "I understand you'd like more clarification {topic_phrase}. \
         Unfortunately, I couldn't find additional sermon content that addresses this specific question.\n\n\
         Based on our previous conversation, I shared some sermon content that may help. Would you like me to:\n\
         - Summarize the key points from the previous sermon content\n\
         - Suggest a different aspect of this topic to explore\n\
         - Search for related sermon topics\n\n\
         Feel free to rephrase your question, and I'll do my best to find relevant sermon content."
    )
}

pub fn follow_up_en(focus: &str) -> String {
    format!(
        "I couldn't find additional sermon content about {focus} beyond what we've already discussed.\n\n\
         You might try:\n\
         - Asking about a different aspect of this topic\n\
         - Using different keywords or phrases\n\
         - Asking about a related Bible passage or theme\n\n\
         What else would you like to know?"
    )
}

/// `suggestions` is either a bulleted block or `SUGGEST_REPHRASE`.
pub fn suggest_related_en(subject: &str, suggestions: &str) -> String {
    format!(
        "I couldn't find sermon content specifically about {subject}.\n\n\
         {suggestions}\n\n\
         Would you like me to search for something else?"
    )
}
