//! Application configuration loading and validation.
//!
//! Provides the main [`Config`] struct that aggregates all application settings.
//! Configuration is loaded from a TOML file with an environment variable
//! override for the bot token (`TELEGRAM_BOT_TOKEN`).
//!
//! # Example
//!
//! ```no_run
//! use exchange_robot::infrastructure::config::settings::Config;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load("config.toml")?;
//!     config.init_logging();
//!     Ok(())
//! }
//! ```

use serde::Deserialize;
use std::path::Path;

use super::logging::LoggingConfig;
use super::provider::ProviderConfig;
use super::runtime::RuntimeConfig;
use super::telegram::{TelegramAppConfig, BOT_TOKEN_ENV};
use crate::error::{ConfigError, Result};

/// Main application configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Telegram bot identity.
    #[serde(default)]
    pub telegram: TelegramAppConfig,

    /// State endpoint settings.
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Poll and send loop timing.
    #[serde(default)]
    pub runtime: RuntimeConfig,

    /// Logging and tracing configuration.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Parse configuration from TOML content.
    ///
    /// Reads the bot token override from `TELEGRAM_BOT_TOKEN`.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml(content: &str) -> Result<Self> {
        Self::parse_toml_with_token(content, std::env::var(BOT_TOKEN_ENV).ok())
    }

    /// Parse configuration from TOML content with an explicit token override.
    #[allow(clippy::result_large_err)]
    pub fn parse_toml_with_token(content: &str, token_override: Option<String>) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(ConfigError::Parse)?;

        if let Some(token) = token_override.filter(|t| !t.trim().is_empty()) {
            config.telegram.bot_token = token;
        }

        config.validate()?;

        Ok(config)
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The file cannot be read
    /// - The TOML content is malformed
    /// - Validation fails
    #[allow(clippy::result_large_err)]
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadFile)?;
        Self::parse_toml(&content)
    }

    /// Validate configuration values.
    ///
    /// The bot token is checked separately by [`Config::bot_token`] so that
    /// commands which never talk to Telegram work without one.
    #[allow(clippy::result_large_err)]
    fn validate(&self) -> Result<()> {
        if self.provider.url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "url" }.into());
        }
        let url = url::Url::parse(&self.provider.url).map_err(|e| ConfigError::InvalidValue {
            field: "url",
            reason: e.to_string(),
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "url",
                reason: format!("unsupported scheme '{}'", url.scheme()),
            }
            .into());
        }
        if self.provider.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "timeout_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.provider.retry_max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                field: "retry_max_attempts",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.runtime.poll_interval_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "poll_interval_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        if self.runtime.scheduler_tick_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "scheduler_tick_ms",
                reason: "must be greater than 0".to_string(),
            }
            .into());
        }
        Ok(())
    }

    /// The bot token, or an error when none is configured.
    #[allow(clippy::result_large_err)]
    pub fn bot_token(&self) -> Result<&str> {
        let token = self.telegram.bot_token.trim();
        if token.is_empty() {
            return Err(ConfigError::MissingField { field: "bot_token" }.into());
        }
        Ok(token)
    }

    /// Initialize logging with the configured settings.
    pub fn init_logging(&self) {
        self.logging.init();
    }
}
