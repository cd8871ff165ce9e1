//! Query parameters for character generation

use serde::{Deserialize, Serialize};

/// Path of the generation endpoint, relative to the service origin.
pub const GENERATE_CHARACTER_PATH: &str = "/api/v1/get";

/// Query parameter names understood by the service.
pub mod query_params {
    pub const FIRST_NAME: &str = "first_name";
    pub const LAST_NAME: &str = "last_name";
    pub const AGE: &str = "age";
    pub const YEAR: &str = "year";
    pub const COUNTRY: &str = "country";
    pub const SEX: &str = "sex";
    pub const RANDOM_MODE: &str = "random_mode";
    pub const OCCUPATION: &str = "occupation";
    pub const OCCUPATION_TYPE: &str = "occup_type";
    pub const ERA: &str = "era";
    pub const TAGS: &str = "tags";
}

/// One generation request. Every field is optional; an absent field is
/// left to the service default and never sent as an empty parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerateCharacterQuery {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub age: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub year: Option<String>,
    /// Alpha-2 country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    /// `M` or `F`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sex: Option<String>,
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub random_mode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occupation: Option<String>,
    /// Occupation set code (`classic`, `expansion`, `custom`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occup_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub era: Option<String>,
    /// Comma separated tags
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl GenerateCharacterQuery {
    /// Parameters in wire order, skipping absent ones.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        use query_params::*;

        let random_mode = self.random_mode.then(|| "true".to_string());
        [
            (FIRST_NAME, &self.first_name),
            (LAST_NAME, &self.last_name),
            (AGE, &self.age),
            (YEAR, &self.year),
            (COUNTRY, &self.country),
            (SEX, &self.sex),
            (RANDOM_MODE, &random_mode),
            (OCCUPATION, &self.occupation),
            (OCCUPATION_TYPE, &self.occup_type),
            (ERA, &self.era),
            (TAGS, &self.tags),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.as_ref().map(|v| (name, v.clone())))
        .collect()
    }

    /// Value of one parameter as it would be sent.
    pub fn param(&self, name: &str) -> Option<String> {
        self.to_query_pairs()
            .into_iter()
            .find(|(param, _)| *param == name)
            .map(|(_, value)| value)
    }

    pub fn is_empty(&self) -> bool {
        self.to_query_pairs().is_empty()
    }
}
