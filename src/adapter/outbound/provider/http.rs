//! HTTP client for the state endpoint.
//!
//! Performs a plain `GET` and decodes the JSON body into a
//! [`StateSnapshot`]. Timeouts and connect errors are retried up to the
//! configured attempt count; everything else fails the fetch immediately.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tokio::time::sleep;
use tracing::{debug, warn};

use crate::domain::StateSnapshot;
use crate::error::FetchError;
use crate::infrastructure::config::provider::ProviderConfig;
use crate::port::StateProvider;

/// [`StateProvider`] backed by an HTTP endpoint.
pub struct HttpStateProvider {
    http: HttpClient,
    url: String,
    retry_max_attempts: u32,
    retry_backoff_ms: u64,
}

impl HttpStateProvider {
    /// Create a provider with default HTTP settings.
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: HttpClient::new(),
            url: url.into(),
            retry_max_attempts: 1,
            retry_backoff_ms: 0,
        }
    }

    #[must_use]
    pub fn from_config(config: &ProviderConfig) -> Self {
        let http = HttpClient::builder()
            .timeout(Duration::from_millis(config.timeout_ms))
            .connect_timeout(Duration::from_millis(config.connect_timeout_ms))
            .build()
            .unwrap_or_else(|err| {
                warn!(error = %err, "Failed to build HTTP client, using defaults");
                HttpClient::new()
            });

        Self {
            http,
            url: config.url.clone(),
            retry_max_attempts: config.retry_max_attempts,
            retry_backoff_ms: config.retry_backoff_ms,
        }
    }

    fn should_retry(err: &reqwest::Error) -> bool {
        err.is_timeout() || err.is_connect()
    }

    async fn backoff(&self, attempt: u32, max_attempts: u32, err: &reqwest::Error) {
        warn!(
            attempt,
            max_attempts,
            error = %err,
            "State request failed, retrying"
        );
        if self.retry_backoff_ms > 0 {
            sleep(Duration::from_millis(self.retry_backoff_ms)).await;
        }
    }

    async fn get_body(&self) -> Result<Vec<u8>, FetchError> {
        let mut attempt = 0;
        let max_attempts = self.retry_max_attempts.max(1);

        loop {
            attempt += 1;
            let response = match self.http.get(&self.url).send().await {
                Ok(response) => response,
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(FetchError::Http(err));
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                    continue;
                }
            };

            let status = response.status();
            if !status.is_success() {
                return Err(FetchError::Status {
                    status: status.as_u16(),
                });
            }

            match response.bytes().await {
                Ok(body) => return Ok(body.to_vec()),
                Err(err) => {
                    if attempt >= max_attempts || !Self::should_retry(&err) {
                        return Err(FetchError::Http(err));
                    }
                    self.backoff(attempt, max_attempts, &err).await;
                }
            }
        }
    }
}

/// Decode a provider response body.
pub(crate) fn decode_snapshot(body: &[u8]) -> Result<StateSnapshot, FetchError> {
    serde_json::from_slice(body).map_err(|e| FetchError::Decode(e.to_string()))
}

#[async_trait]
impl StateProvider for HttpStateProvider {
    async fn fetch(&self) -> Result<StateSnapshot, FetchError> {
        let body = self.get_body().await?;
        let snapshot = decode_snapshot(&body)?;
        debug!(
            url = %self.url,
            rates = snapshot.currency_model.currency_rates.len(),
            selected = snapshot.currency_model.selected_currencies.len(),
            "Fetched state"
        );
        Ok(snapshot)
    }

    fn describe(&self) -> String {
        self.url.clone()
    }
}
