//! Turns a validated form bundle into generation query parameters

use std::str::FromStr;

use cochar_domain::{Catalog, DomainError, FieldBundle, FieldId, OccupationChoice, SexChoice};
use cochar_shared::GenerateCharacterQuery;

/// Builds queries against one catalog.
///
/// Select-style fields are translated to backend codes through the catalog
/// tables; a label with no mapping is an error rather than being sent as is.
#[derive(Debug, Clone, Copy)]
pub struct RequestBuilder<'a> {
    catalog: &'a Catalog,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self { catalog }
    }

    pub fn build(&self, bundle: &FieldBundle) -> Result<GenerateCharacterQuery, DomainError> {
        let occupation = bundle
            .get(FieldId::Occupation)
            .map(OccupationChoice::from_phrase)
            .unwrap_or_default();

        Ok(GenerateCharacterQuery {
            first_name: text(bundle, FieldId::FirstName),
            last_name: text(bundle, FieldId::LastName),
            age: text(bundle, FieldId::Age),
            year: text(bundle, FieldId::Year),
            country: self.code(bundle, FieldId::Country)?,
            sex: sex_code(bundle)?,
            random_mode: occupation.is_random(),
            occupation: occupation.name().map(str::to_string),
            occup_type: self.code(bundle, FieldId::OccupationSet)?,
            era: self.code(bundle, FieldId::Era)?,
            tags: text(bundle, FieldId::Tags),
        })
    }

    fn code(&self, bundle: &FieldBundle, field: FieldId) -> Result<Option<String>, DomainError> {
        let Some(label) = bundle.non_blank(field) else {
            return Ok(None);
        };
        let table = match field {
            FieldId::Country => self.catalog.countries(),
            FieldId::Era => self.catalog.eras(),
            FieldId::OccupationSet => self.catalog.occupation_sets(),
            other => {
                return Err(DomainError::parse(format!("{other} has no label table")));
            }
        };
        Ok(table.resolve(label)?.map(str::to_string))
    }
}

fn text(bundle: &FieldBundle, field: FieldId) -> Option<String> {
    bundle.non_blank(field).map(str::to_string)
}

fn sex_code(bundle: &FieldBundle) -> Result<Option<String>, DomainError> {
    match bundle.non_blank(FieldId::Sex) {
        Some(label) => Ok(SexChoice::from_str(label)?.code().map(str::to_string)),
        None => Ok(None),
    }
}
