//! Sex selection as offered by the character form

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// The sex option picked on the form.
///
/// `Random` is a UI-only choice: it means "let the service decide" and
/// never reaches the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SexChoice {
    Male,
    Female,
    Random,
}

impl SexChoice {
    /// All choices in form order.
    pub const ALL: [SexChoice; 3] = [SexChoice::Male, SexChoice::Female, SexChoice::Random];

    /// Resolve a form label. Labels are matched exactly.
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "Male" => Some(Self::Male),
            "Female" => Some(Self::Female),
            "Random" => Some(Self::Random),
            _ => None,
        }
    }

    /// The label shown on the form.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
            Self::Random => "Random",
        }
    }

    /// Single-letter code sent to the service, `None` for `Random`.
    pub fn code(&self) -> Option<&'static str> {
        match self {
            Self::Male => Some("M"),
            Self::Female => Some("F"),
            Self::Random => None,
        }
    }
}

impl fmt::Display for SexChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for SexChoice {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_label(s).ok_or_else(|| DomainError::unknown_label("sex", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for choice in SexChoice::ALL {
            assert_eq!(SexChoice::from_label(choice.label()), Some(choice));
        }
    }

    #[test]
    fn random_has_no_code() {
        assert_eq!(SexChoice::Random.code(), None);
        assert_eq!(SexChoice::Male.code(), Some("M"));
        assert_eq!(SexChoice::Female.code(), Some("F"));
    }

    #[test]
    fn labels_are_case_sensitive() {
        assert_eq!(SexChoice::from_label("male"), None);
        assert!("FEMALE".parse::<SexChoice>().is_err());
    }
}
