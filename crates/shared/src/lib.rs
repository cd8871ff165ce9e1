//! Cochar Protocol - Wire types for the character generation service
//!
//! This crate contains the request and response shapes of the
//! `GET /api/v1/get` endpoint:
//! - The query parameters the client may send
//! - The character sheet returned on success
//! - The failure body returned on rejection
//!
//! # Design Principles
//!
//! 1. **Minimal dependencies** - Only serde and serde_json
//! 2. **No business logic** - Pure data types and serialization
//! 3. **Forward compatible** - unknown response fields are kept, not rejected

pub mod requests;
pub mod responses;

pub use requests::{query_params, GenerateCharacterQuery, GENERATE_CHARACTER_PATH};
pub use responses::{CharacterData, FailureBody, FailureMessage, FAIL_STATUS};
