//! Label-to-code catalog for the select-style form fields
//!
//! The form shows human readable labels ("(US) United States", "Classic 1920")
//! while the service expects backend codes ("US", "classic-1920"). A `Catalog`
//! is built once and handed to the validator and the request builder; it is
//! never mutated afterwards.

use std::collections::BTreeSet;

use crate::error::DomainError;
use crate::value_objects::SexChoice;

/// Country label selected when the form is first shown.
pub const DEFAULT_COUNTRY_LABEL: &str = "(US) United States";

/// One row of a label table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelEntry {
    pub label: String,
    /// Backend code; `None` means "send nothing" (e.g. the "All" occupation set).
    pub code: Option<String>,
}

/// A label-to-code map paired with the set of codes the service accepts.
///
/// The two halves are kept separately on purpose: a label is only accepted
/// when it maps to a code that is also in the allowed set, which is what
/// `check_consistency` verifies for every row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LabelTable {
    table: &'static str,
    entries: Vec<LabelEntry>,
    allowed: BTreeSet<Option<String>>,
}

impl LabelTable {
    pub fn new<'a>(
        table: &'static str,
        entries: impl IntoIterator<Item = (&'a str, Option<&'a str>)>,
        allowed: impl IntoIterator<Item = Option<&'a str>>,
    ) -> Self {
        Self {
            table,
            entries: entries
                .into_iter()
                .map(|(label, code)| LabelEntry {
                    label: label.to_string(),
                    code: code.map(str::to_string),
                })
                .collect(),
            allowed: allowed.into_iter().map(|c| c.map(str::to_string)).collect(),
        }
    }

    /// Table name used in error messages ("country", "era", ...).
    pub fn name(&self) -> &'static str {
        self.table
    }

    /// Look up a label. The outer `None` means the label is unknown.
    pub fn code_for(&self, label: &str) -> Option<Option<&str>> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| entry.code.as_deref())
    }

    /// True if the label is known and maps to an allowed code.
    pub fn accepts(&self, label: &str) -> bool {
        match self.code_for(label) {
            Some(code) => self.allows(code),
            None => false,
        }
    }

    /// Resolve a label to the code to send.
    pub fn resolve(&self, label: &str) -> Result<Option<&str>, DomainError> {
        let code = self
            .code_for(label)
            .ok_or_else(|| DomainError::unknown_label(self.table, label))?;
        if !self.allows(code) {
            return Err(DomainError::catalog_mismatch(self.table, label, code));
        }
        Ok(code)
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.label.as_str())
    }

    /// Every label must map to an allowed code.
    pub fn check_consistency(&self) -> Result<(), DomainError> {
        for entry in &self.entries {
            let code = entry.code.as_deref();
            if !self.allows(code) {
                return Err(DomainError::catalog_mismatch(self.table, &entry.label, code));
            }
        }
        Ok(())
    }

    fn allows(&self, code: Option<&str>) -> bool {
        self.allowed.iter().any(|allowed| allowed.as_deref() == code)
    }
}

/// Immutable vocabulary shared by the validator and the request builder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    countries: LabelTable,
    eras: LabelTable,
    occupation_sets: LabelTable,
    sexes: BTreeSet<String>,
    tags: BTreeSet<String>,
}

impl Catalog {
    pub fn new(
        countries: LabelTable,
        eras: LabelTable,
        occupation_sets: LabelTable,
        sexes: impl IntoIterator<Item = impl Into<String>>,
        tags: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        Self {
            countries,
            eras,
            occupation_sets,
            sexes: sexes.into_iter().map(Into::into).collect(),
            tags: tags.into_iter().map(Into::into).collect(),
        }
    }

    /// The vocabulary the public generator service understands.
    pub fn standard() -> Self {
        let countries = LabelTable::new(
            "country",
            [
                ("(US) United States", Some("US")),
                ("(PL) Poland", Some("PL")),
                ("(ES) Spain", Some("ES")),
            ],
            [Some("US"), Some("PL"), Some("ES")],
        );
        let eras = LabelTable::new(
            "era",
            [
                ("Modern", Some("modern")),
                ("Classic 1920", Some("classic-1920")),
                ("All", Some("classic-1920,modern")),
            ],
            [
                Some("classic-1920"),
                Some("modern"),
                Some("classic-1920,modern"),
            ],
        );
        let occupation_sets = LabelTable::new(
            "occupation set",
            [
                ("Keeper Rulebook", Some("classic")),
                ("Investigators Handbook", Some("expansion")),
                ("Custom", Some("custom")),
                ("All", None),
            ],
            [Some("classic"), Some("expansion"), Some("custom"), None],
        );

        Self::new(
            countries,
            eras,
            occupation_sets,
            SexChoice::ALL.iter().map(SexChoice::label),
            ["lovecraftian", "criminal"],
        )
    }

    pub fn countries(&self) -> &LabelTable {
        &self.countries
    }

    pub fn eras(&self) -> &LabelTable {
        &self.eras
    }

    pub fn occupation_sets(&self) -> &LabelTable {
        &self.occupation_sets
    }

    pub fn is_known_sex(&self, label: &str) -> bool {
        self.sexes.contains(label)
    }

    pub fn is_known_tag(&self, tag: &str) -> bool {
        self.tags.contains(tag)
    }

    pub fn sexes(&self) -> impl Iterator<Item = &str> {
        self.sexes.iter().map(String::as_str)
    }

    pub fn tags(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(String::as_str)
    }

    /// Verify the lockstep property between labels, codes and allowed sets.
    ///
    /// Also checks that every accepted sex label is one the request builder
    /// knows how to translate.
    pub fn check_consistency(&self) -> Result<(), DomainError> {
        self.countries.check_consistency()?;
        self.eras.check_consistency()?;
        self.occupation_sets.check_consistency()?;
        if let Some(label) = self.sexes.iter().find(|l| SexChoice::from_label(l).is_none()) {
            return Err(DomainError::unknown_label("sex", label.as_str()));
        }
        Ok(())
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::standard()
    }
}
