//! Logical names of the character form fields

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DomainError;

/// One field of the character form.
///
/// Ordering follows the form layout, which is also the order failures are
/// reported in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldId {
    FirstName,
    LastName,
    Country,
    Age,
    Year,
    Sex,
    Occupation,
    Era,
    OccupationSet,
    Tags,
}

impl FieldId {
    pub const ALL: [FieldId; 10] = [
        FieldId::FirstName,
        FieldId::LastName,
        FieldId::Country,
        FieldId::Age,
        FieldId::Year,
        FieldId::Sex,
        FieldId::Occupation,
        FieldId::Era,
        FieldId::OccupationSet,
        FieldId::Tags,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::FirstName => "first_name",
            Self::LastName => "last_name",
            Self::Country => "country",
            Self::Age => "age",
            Self::Year => "year",
            Self::Sex => "sex",
            Self::Occupation => "occupation",
            Self::Era => "era",
            Self::OccupationSet => "occupation_set",
            Self::Tags => "tags",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FieldId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        FieldId::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| DomainError::parse(format!("Unknown form field: {s}")))
    }
}
