//! Character API Port - Object-safe HTTP boundary
//!
//! The adapter performs one GET and hands back the status and the decoded
//! JSON body untouched. Deciding what a reply means (character, rejection,
//! failure) is application logic and lives in `application::dispatch`.

use async_trait::async_trait;
use serde_json::Value;

use cochar_shared::GenerateCharacterQuery;

use super::ApiError;

/// Status line and body of one HTTP exchange.
#[derive(Debug, Clone, PartialEq)]
pub struct RawReply {
    pub status: u16,
    /// Canonical reason phrase for the status, if known
    pub reason: Option<String>,
    /// Body parsed as JSON; `None` when empty or not JSON
    pub body: Option<Value>,
}

impl RawReply {
    pub fn new(status: u16, body: Option<Value>) -> Self {
        Self {
            status,
            reason: None,
            body,
        }
    }

    pub fn with_reason(mut self, reason: impl Into<String>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// `"429 Too Many Requests"`, or just the code when the reason is unknown.
    pub fn status_line(&self) -> String {
        match &self.reason {
            Some(reason) => format!("{} {}", self.status, reason),
            None => self.status.to_string(),
        }
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CharacterApiPort: Send + Sync {
    /// Issue a single generation request. No retries.
    async fn get_character(&self, query: &GenerateCharacterQuery) -> Result<RawReply, ApiError>;
}
