//! Application layer: request building, reply routing and the generation
//! use case. Depends on ports only.

pub mod dispatch;
pub mod error;
pub mod request_builder;
pub mod services;
pub mod submit_control;

pub use dispatch::route_reply;
pub use error::{GenerateError, Rejection};
pub use request_builder::RequestBuilder;
pub use services::{GenerationService, GenerationSettings};
pub use submit_control::{SubmitControl, SubmitPermit};
