//! Client port definitions.

pub mod outbound;
