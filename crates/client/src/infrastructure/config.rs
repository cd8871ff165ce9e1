//! Client configuration read from the environment
//!
//! # Environment Variables
//!
//! - `COCHAR_API_URL` - Generator service origin (default: `http://127.0.0.1:5000`)
//! - `COCHAR_REQUEST_TIMEOUT_MS` - Request timeout (default: 15000)
//! - `COCHAR_REENABLE_DELAY_MS` - Pause before the next submit is accepted (default: 250)
//!
//! Missing values use the default. Unparseable values are logged and also
//! fall back to the default.

use std::time::Duration;

use crate::application::services::GenerationSettings;

pub const API_URL_VAR: &str = "COCHAR_API_URL";
pub const REQUEST_TIMEOUT_VAR: &str = "COCHAR_REQUEST_TIMEOUT_MS";
pub const REENABLE_DELAY_VAR: &str = "COCHAR_REENABLE_DELAY_MS";

pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub api_url: String,
    pub request_timeout: Duration,
    pub reenable_delay: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        let settings = GenerationSettings::default();
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            request_timeout: settings.request_timeout,
            reenable_delay: settings.reenable_delay,
        }
    }
}

impl ClientConfig {
    /// Load from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load through an arbitrary variable lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let api_url = lookup(API_URL_VAR)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or(defaults.api_url);

        Self {
            api_url,
            request_timeout: millis_or(&lookup, REQUEST_TIMEOUT_VAR, defaults.request_timeout),
            reenable_delay: millis_or(&lookup, REENABLE_DELAY_VAR, defaults.reenable_delay),
        }
    }

    pub fn settings(&self) -> GenerationSettings {
        GenerationSettings {
            request_timeout: self.request_timeout,
            reenable_delay: self.reenable_delay,
        }
    }
}

fn millis_or(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: Duration) -> Duration {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse::<u64>() {
        Ok(ms) => Duration::from_millis(ms),
        Err(_) => {
            tracing::warn!(
                var = key,
                value = %raw,
                default_ms = default.as_millis() as u64,
                "Ignoring unparseable duration"
            );
            default
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ClientConfig::from_lookup(lookup(&[]));
        assert_eq!(config.api_url, "http://127.0.0.1:5000");
        assert_eq!(config.request_timeout, Duration::from_secs(15));
        assert_eq!(config.reenable_delay, Duration::from_millis(250));
    }

    #[test]
    fn reads_every_variable() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("COCHAR_API_URL", "https://cochar.example.org"),
            ("COCHAR_REQUEST_TIMEOUT_MS", "3000"),
            ("COCHAR_REENABLE_DELAY_MS", "0"),
        ]));
        assert_eq!(config.api_url, "https://cochar.example.org");
        assert_eq!(config.settings().request_timeout, Duration::from_secs(3));
        assert_eq!(config.settings().reenable_delay, Duration::ZERO);
    }

    #[test]
    fn bad_values_fall_back() {
        let config = ClientConfig::from_lookup(lookup(&[
            ("COCHAR_API_URL", "   "),
            ("COCHAR_REQUEST_TIMEOUT_MS", "soon"),
        ]));
        assert_eq!(config, ClientConfig::default());
    }
}
