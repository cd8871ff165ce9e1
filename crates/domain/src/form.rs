//! The character form as a bundle of raw field values

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::catalog::DEFAULT_COUNTRY_LABEL;
use crate::error::DomainError;
use crate::value_objects::FieldId;

/// Raw form values for one submission, keyed by field.
///
/// Values are stored exactly as entered. A field missing from the bundle is
/// "not applicable" and is skipped by validation; an empty string is a
/// present but blank field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldBundle {
    values: BTreeMap<FieldId, String>,
}

impl FieldBundle {
    pub fn new() -> Self {
        Self::default()
    }

    /// A bundle pre-filled the way the form is first shown.
    pub fn with_form_defaults() -> Self {
        Self::new().with(FieldId::Country, DEFAULT_COUNTRY_LABEL)
    }

    /// Build a bundle from `(name, value)` pairs such as decoded form data.
    pub fn from_pairs<'a>(
        pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
    ) -> Result<Self, DomainError> {
        let mut bundle = Self::new();
        for (name, value) in pairs {
            bundle.set(name.parse()?, value);
        }
        Ok(bundle)
    }

    pub fn with(mut self, field: FieldId, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn set(&mut self, field: FieldId, value: impl Into<String>) {
        self.values.insert(field, value.into());
    }

    pub fn get(&self, field: FieldId) -> Option<&str> {
        self.values.get(&field).map(String::as_str)
    }

    /// The value with surrounding whitespace removed, or `None` when the
    /// field is absent or blank.
    pub fn non_blank(&self, field: FieldId) -> Option<&str> {
        self.get(field).map(str::trim).filter(|v| !v.is_empty())
    }

    pub fn iter(&self) -> impl Iterator<Item = (FieldId, &str)> {
        self.values.iter().map(|(field, value)| (*field, value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_select_united_states() {
        let bundle = FieldBundle::with_form_defaults();
        assert_eq!(bundle.get(FieldId::Country), Some("(US) United States"));
        assert_eq!(bundle.len(), 1);
    }

    #[test]
    fn absent_and_blank_are_distinct() {
        let bundle = FieldBundle::new().with(FieldId::FirstName, "  ");
        assert_eq!(bundle.get(FieldId::FirstName), Some("  "));
        assert_eq!(bundle.non_blank(FieldId::FirstName), None);
        assert_eq!(bundle.get(FieldId::LastName), None);
    }

    #[test]
    fn from_pairs_rejects_unknown_names() {
        let bundle = FieldBundle::from_pairs([("age", "30"), ("sex", "Male")])
            .expect("known field names");
        assert_eq!(bundle.get(FieldId::Age), Some("30"));

        assert!(FieldBundle::from_pairs([("nickname", "Bob")]).is_err());
    }

    #[test]
    fn serializes_as_plain_object() {
        let bundle = FieldBundle::new().with(FieldId::Tags, "criminal");
        let json = serde_json::to_value(&bundle).expect("serialize bundle");
        assert_eq!(json, serde_json::json!({ "tags": "criminal" }));
    }
}
