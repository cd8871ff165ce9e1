//! Errors raised by the HTTP boundary

/// Transport-level failure talking to the generator service.
///
/// HTTP error statuses are not errors at this level; they come back as a
/// `RawReply` so the application can tell rejections from failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Invalid service URL: {0}")]
    InvalidUrl(String),
    #[error("Request failed: {0}")]
    RequestFailed(String),
    #[error("Request timed out")]
    Timeout,
}
