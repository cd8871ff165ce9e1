//! Infrastructure adapters

pub mod config;
pub mod http_client;

pub use config::ClientConfig;
pub use http_client::HttpCharacterApi;
