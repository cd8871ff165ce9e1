//! Errors surfaced by the generation use case

use std::fmt;
use std::time::Duration;

use cochar_domain::{DomainError, ValidationReport};

use crate::ports::outbound::ApiError;

/// The service refused to generate a character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    /// HTTP status the rejection arrived with
    pub status: u16,
    /// Which part of the service rejected (`cochar`, `flask_limiter`)
    pub origin: Option<String>,
    pub message: String,
}

impl Rejection {
    pub fn is_rate_limited(&self) -> bool {
        self.status == 429 || self.origin.as_deref() == Some("flask_limiter")
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// Why a submission did not produce a character.
///
/// Every variant is terminal for the submission; nothing is retried.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GenerateError {
    /// Local validation failed; no request was sent
    #[error("Form is invalid: {0}")]
    Invalid(ValidationReport),

    /// A label could not be translated into a backend code
    #[error("Cannot build request: {0}")]
    Build(#[from] DomainError),

    /// Transport failure or unexpected response
    #[error("Request failed: {0}")]
    Fetch(String),

    /// No response within the configured timeout
    #[error("Request timed out after {} ms", .0.as_millis())]
    TimedOut(Duration),

    /// The service answered with a rejection
    #[error("Service rejected the request: {0}")]
    Rejected(Rejection),

    /// Another submission is still in flight
    #[error("A character is already being generated")]
    Busy,
}

impl GenerateError {
    /// True for failures detected before anything was sent.
    pub fn is_local(&self) -> bool {
        matches!(self, Self::Invalid(_) | Self::Build(_) | Self::Busy)
    }
}

impl From<ApiError> for GenerateError {
    fn from(err: ApiError) -> Self {
        Self::Fetch(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rate_limit_detection() {
        let by_status = Rejection {
            status: 429,
            origin: None,
            message: "later".into(),
        };
        let by_origin = Rejection {
            status: 200,
            origin: Some("flask_limiter".into()),
            message: "later".into(),
        };
        let domain = Rejection {
            status: 400,
            origin: Some("cochar".into()),
            message: "no such occupation".into(),
        };
        assert!(by_status.is_rate_limited());
        assert!(by_origin.is_rate_limited());
        assert!(!domain.is_rate_limited());
    }

    #[test]
    fn messages() {
        assert_eq!(
            GenerateError::TimedOut(Duration::from_millis(1500)).to_string(),
            "Request timed out after 1500 ms"
        );
        let rejected = GenerateError::Rejected(Rejection {
            status: 429,
            origin: None,
            message: "rate limited".into(),
        });
        assert_eq!(rejected.to_string(), "Service rejected the request: rate limited");
        assert!(!rejected.is_local());
        assert!(GenerateError::Busy.is_local());
    }
}
