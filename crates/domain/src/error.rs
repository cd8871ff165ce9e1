//! Unified error types for the domain layer
//!
//! Provides a common error type for label lookups, vocabulary parsing and
//! catalog consistency checks, so adapters never have to fall back to String.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// A UI label has no entry in its label-to-code table
    #[error("Unknown {table} label: {label}")]
    UnknownLabel { table: &'static str, label: String },

    /// A label table produces a code outside its allowed set
    #[error("Catalog out of sync: {table} label '{label}' maps to disallowed code {code:?}")]
    CatalogMismatch {
        table: &'static str,
        label: String,
        code: Option<String>,
    },

    /// Parse error (for value objects)
    #[error("Parse error: {0}")]
    Parse(String),
}

impl DomainError {
    /// Create an unknown label error
    pub fn unknown_label(table: &'static str, label: impl Into<String>) -> Self {
        Self::UnknownLabel {
            table,
            label: label.into(),
        }
    }

    /// Create a catalog mismatch error
    pub fn catalog_mismatch(
        table: &'static str,
        label: impl Into<String>,
        code: Option<&str>,
    ) -> Self {
        Self::CatalogMismatch {
            table,
            label: label.into(),
            code: code.map(str::to_string),
        }
    }

    /// Creates a parse error for string-to-type conversion failures.
    ///
    /// Use this in `FromStr` implementations when the input string
    /// doesn't match any known variant.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_label_error() {
        let err = DomainError::unknown_label("country", "France");
        assert!(matches!(err, DomainError::UnknownLabel { .. }));
        assert_eq!(err.to_string(), "Unknown country label: France");
    }

    #[test]
    fn test_catalog_mismatch_error() {
        let err = DomainError::catalog_mismatch("era", "Future", Some("future"));
        assert!(err.to_string().contains("era"));
        assert!(err.to_string().contains("\"future\""));
    }

    #[test]
    fn test_parse_error() {
        let err = DomainError::parse("Unknown field: nickname");
        assert_eq!(err.to_string(), "Parse error: Unknown field: nickname");
    }
}
