//! Common utility functions shared by the validator and the request builder.
//!
//! - **Pure functions only** - no side effects, no I/O

pub mod number;

pub use number::parse_form_number;
