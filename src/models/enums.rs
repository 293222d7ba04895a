use serde::{Deserialize, Serialize};

use super::ModelError;

/// Macro to generate enum with as_str + std::str::FromStr pattern
macro_rules! str_enum {
    ($(#[$meta:meta])* $name:ident { $($(#[$vmeta:meta])* $variant:ident => $s:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($(#[$vmeta])* $variant),+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $s),+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = ModelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($s => Ok(Self::$variant)),+,
                    _ => Err(ModelError::InvalidEnum {
                        field: stringify!($name).into(),
                        value: s.into(),
                    }),
                }
            }
        }
    };
}

str_enum!(MessageRole {
    User => "user",
    Assistant => "assistant",
});

str_enum!(
    /// How a no-results turn is answered. Variant order is classification priority.
    FallbackStrategy {
        /// The user is asking about the previous answer.
        ClarifyPrevious => "clarify_previous",
        /// The user continues the current thread.
        FollowUp => "follow_up",
        /// The query names a topic we can branch out from.
        SuggestRelated => "suggest_related",
        /// Nothing recognizable; ask the user to rephrase.
        RefineSearch => "refine_search",
    }
);

impl FallbackStrategy {
    pub const ALL: [FallbackStrategy; 4] = [
        FallbackStrategy::ClarifyPrevious,
        FallbackStrategy::FollowUp,
        FallbackStrategy::SuggestRelated,
        FallbackStrategy::RefineSearch,
    ];
}
