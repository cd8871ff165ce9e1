//! Occupation choice decided once at the form boundary

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the user asked for in the occupation field.
///
/// The form offers two sentinel entries, "Optimal ..." and "Random ...",
/// next to the real occupations. They are resolved here so the request
/// builder never inspects the raw phrase.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum OccupationChoice {
    /// Let the service pick the best fitting occupation (its default).
    #[default]
    Default,
    /// Ask the service for a random occupation.
    Random,
    /// A specific occupation, lowercased.
    Named(String),
}

impl OccupationChoice {
    /// Resolve the phrase typed or selected in the occupation field.
    ///
    /// A blank phrase, or one whose first word is `optimal`, is `Default`.
    /// A first word of `random` is `Random`. Matching is case-insensitive.
    pub fn from_phrase(phrase: &str) -> Self {
        let normalized = phrase.trim().to_lowercase();
        match normalized.split_whitespace().next() {
            None | Some("optimal") => Self::Default,
            Some("random") => Self::Random,
            Some(_) => Self::Named(normalized),
        }
    }

    /// The occupation name to send, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Named(name) => Some(name),
            _ => None,
        }
    }

    pub fn is_random(&self) -> bool {
        matches!(self, Self::Random)
    }
}

impl fmt::Display for OccupationChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Default => f.write_str("optimal"),
            Self::Random => f.write_str("random"),
            Self::Named(name) => f.write_str(name),
        }
    }
}
