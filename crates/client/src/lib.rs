//! Cochar Client - validates the character form, calls the generator
//! service and renders the outcome.
//!
//! Layout follows ports and adapters:
//! - `ports`: the outbound HTTP boundary
//! - `infrastructure`: reqwest adapter and environment config
//! - `application`: request building, reply routing, the generation use case
//! - `presentation` and `cli`: terminal surface of the `cochar` binary

pub mod application;
pub mod cli;
pub mod infrastructure;
pub mod ports;
pub mod presentation;

pub use application::{GenerateError, GenerationService, GenerationSettings, Rejection};
pub use infrastructure::{ClientConfig, HttpCharacterApi};
