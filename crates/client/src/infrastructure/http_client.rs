//! reqwest adapter for the generator service

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use url::Url;

use cochar_shared::{GenerateCharacterQuery, GENERATE_CHARACTER_PATH};

use crate::ports::outbound::{ApiError, CharacterApiPort, RawReply};

/// HTTP client for `GET /api/v1/get`.
#[derive(Clone)]
pub struct HttpCharacterApi {
    client: Client,
    base_url: Url,
}

impl HttpCharacterApi {
    /// Create a client for the service at `base_url`: an http(s) origin with
    /// an optional path prefix, no query and no fragment.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ApiError> {
        let base_url = parse_base_url(base_url)?;

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::RequestFailed(e.to_string()))?;

        Ok(Self { client, base_url })
    }

    /// Full request URL. Absent parameters are left out entirely.
    pub fn endpoint_url(&self, query: &GenerateCharacterQuery) -> Result<Url, ApiError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::InvalidUrl(format!("{}: cannot be a base", self.base_url)))?
            .pop_if_empty()
            .extend(GENERATE_CHARACTER_PATH.split('/').filter(|s| !s.is_empty()));

        let pairs = query.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        Ok(url)
    }
}

fn parse_base_url(raw: &str) -> Result<Url, ApiError> {
    let invalid = |reason: &str| ApiError::InvalidUrl(format!("{raw}: {reason}"));

    let url = Url::parse(raw.trim()).map_err(|e| invalid(&e.to_string()))?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid("scheme must be http or https"));
    }
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("query and fragment are not allowed"));
    }
    Ok(url)
}

#[async_trait]
impl CharacterApiPort for HttpCharacterApi {
    async fn get_character(&self, query: &GenerateCharacterQuery) -> Result<RawReply, ApiError> {
        let url = self.endpoint_url(query)?;
        tracing::debug!(url = %url, "Requesting character");

        let response = self.client.get(url).send().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        })?;

        let status = response.status();
        let bytes = response.bytes().await.map_err(|e| {
            if e.is_timeout() {
                ApiError::Timeout
            } else {
                ApiError::RequestFailed(e.to_string())
            }
        })?;

        let body = serde_json::from_slice(&bytes).ok();
        if body.is_none() && !bytes.is_empty() {
            tracing::debug!(status = %status, "Response body is not JSON");
        }

        let mut reply = RawReply::new(status.as_u16(), body);
        if let Some(reason) = status.canonical_reason() {
            reply = reply.with_reason(reason);
        }
        Ok(reply)
    }
}
