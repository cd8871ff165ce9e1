//! Cochar Domain - the character form and its rules.
//!
//! Pure types and functions only: the vocabulary the generator service
//! understands, the immutable label catalog, and the per-field validation
//! rules. Nothing here performs I/O.

pub mod catalog;
pub mod common;
pub mod error;
pub mod form;
pub mod validation;
pub mod value_objects;

pub use catalog::{Catalog, LabelEntry, LabelTable, DEFAULT_COUNTRY_LABEL};
pub use error::DomainError;
pub use form::FieldBundle;
pub use validation::{
    validate_age, validate_country, validate_era, validate_name, validate_occupation_set,
    validate_sex, validate_tags, validate_year, FormValidator, ValidationReport, MAX_AGE,
    MIN_AGE,
};
pub use value_objects::{FieldId, OccupationChoice, SexChoice};
