//! Form validation
//!
//! Each rule is a pure predicate over the raw field value. `FormValidator`
//! applies them to a whole `FieldBundle` and returns a structured report;
//! deciding how to present a failing field is left to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::catalog::Catalog;
use crate::common::parse_form_number;
use crate::form::FieldBundle;
use crate::value_objects::FieldId;

/// Youngest investigator age accepted by the form.
pub const MIN_AGE: f64 = 15.0;

/// Oldest investigator age accepted by the form.
pub const MAX_AGE: f64 = 90.0;

/// Blank passes (the service picks an age); otherwise a number in [15, 90].
pub fn validate_age(age: &str) -> bool {
    if age.is_empty() {
        return true;
    }
    parse_form_number(age).is_some_and(|n| (MIN_AGE..=MAX_AGE).contains(&n))
}

/// Any number, no range check.
pub fn validate_year(year: &str) -> bool {
    parse_form_number(year).is_some()
}

/// Rejects whitespace-only names. An empty name is fine.
pub fn validate_name(name: &str) -> bool {
    name.is_empty() || !name.trim().is_empty()
}

pub fn validate_country(catalog: &Catalog, label: &str) -> bool {
    catalog.countries().accepts(label)
}

pub fn validate_sex(catalog: &Catalog, label: &str) -> bool {
    catalog.is_known_sex(label)
}

pub fn validate_era(catalog: &Catalog, label: &str) -> bool {
    catalog.eras().accepts(label)
}

/// Occupation sets are not constrained on the form. An unmapped label is
/// still refused later, when the request is built.
pub fn validate_occupation_set(_catalog: &Catalog, _label: &str) -> bool {
    true
}

/// Blank passes; otherwise every comma separated tag must be known.
///
/// Tags are compared exactly, so `"criminal, lovecraftian"` fails on the
/// leading space and a trailing comma fails on the empty tag.
pub fn validate_tags(catalog: &Catalog, tags: &str) -> bool {
    if tags.is_empty() {
        return true;
    }
    tags.split(',').all(|tag| catalog.is_known_tag(tag))
}

/// Per-field outcome of validating a bundle.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    results: BTreeMap<FieldId, bool>,
}

impl ValidationReport {
    /// True when every checked field passed.
    pub fn is_valid(&self) -> bool {
        self.results.values().all(|passed| *passed)
    }

    /// Outcome for one field, `None` if it was not checked.
    pub fn outcome(&self, field: FieldId) -> Option<bool> {
        self.results.get(&field).copied()
    }

    /// Failing fields in form order.
    pub fn failed_fields(&self) -> Vec<FieldId> {
        self.results
            .iter()
            .filter(|(_, passed)| !**passed)
            .map(|(field, _)| *field)
            .collect()
    }

    pub fn checked_fields(&self) -> impl Iterator<Item = FieldId> + '_ {
        self.results.keys().copied()
    }

    fn record(&mut self, field: FieldId, passed: bool) {
        self.results.insert(field, passed);
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let failed = self.failed_fields();
        if failed.is_empty() {
            return f.write_str("all fields valid");
        }
        let names: Vec<&str> = failed.iter().map(FieldId::as_str).collect();
        write!(f, "invalid fields: {}", names.join(", "))
    }
}

/// Applies the field rules against one catalog.
#[derive(Debug, Clone, Copy)]
pub struct FormValidator<'a> {
    catalog: &'a Catalog,
}

impl<'a> FormValidator<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    /// Check a single value. Returns `None` for fields with no rule
    /// (the free-text occupation phrase).
    pub fn check(&self, field: FieldId, value: &str) -> Option<bool> {
        let passed = match field {
            FieldId::Age => validate_age(value),
            FieldId::Year => validate_year(value),
            FieldId::FirstName | FieldId::LastName => validate_name(value),
            FieldId::Country => validate_country(self.catalog, value),
            FieldId::Sex => validate_sex(self.catalog, value),
            FieldId::Era => validate_era(self.catalog, value),
            FieldId::OccupationSet => validate_occupation_set(self.catalog, value),
            FieldId::Tags => validate_tags(self.catalog, value),
            FieldId::Occupation => return None,
        };
        Some(passed)
    }

    /// Validate every present field of the bundle. Absent fields are skipped.
    pub fn validate(&self, bundle: &FieldBundle) -> ValidationReport {
        let mut report = ValidationReport::default();
        for (field, value) in bundle.iter() {
            if let Some(passed) = self.check(field, value) {
                report.record(field, passed);
            }
        }
        report
    }
}
