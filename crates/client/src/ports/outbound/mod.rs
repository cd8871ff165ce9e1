//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to reach the generator service without
//! depending on a concrete HTTP client.

pub mod api_error;
pub mod character_api_port;

pub use api_error::ApiError;
pub use character_api_port::{CharacterApiPort, RawReply};

#[cfg(test)]
pub use character_api_port::MockCharacterApiPort;
