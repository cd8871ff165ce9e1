//! Presentation adapter: renders outcomes for a terminal

pub mod character_card;

pub use character_card::{describe_failure, CharacterCard};
