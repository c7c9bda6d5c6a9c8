//! State provider configuration.

use serde::Deserialize;

/// HTTP settings for the state endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderConfig {
    /// Full URL of the state endpoint.
    #[serde(default = "default_url")]
    pub url: String,
    /// Whole-request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Connect timeout in milliseconds.
    #[serde(default = "default_connect_timeout_ms")]
    pub connect_timeout_ms: u64,
    /// Attempts per fetch; timeouts and connect errors are retried.
    #[serde(default = "default_retry_max_attempts")]
    pub retry_max_attempts: u32,
    /// Pause between attempts in milliseconds.
    #[serde(default)]
    pub retry_backoff_ms: u64,
}

fn default_url() -> String {
    "http://localhost:7777/api/get_state".into()
}

const fn default_timeout_ms() -> u64 {
    5_000
}

const fn default_connect_timeout_ms() -> u64 {
    2_000
}

const fn default_retry_max_attempts() -> u32 {
    1
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_ms: default_timeout_ms(),
            connect_timeout_ms: default_connect_timeout_ms(),
            retry_max_attempts: default_retry_max_attempts(),
            retry_backoff_ms: 0,
        }
    }
}
