use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

/// Failure to obtain a snapshot from the state provider.
///
/// Always recoverable: the poll loop logs it and tries again next tick.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("state request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("state provider returned status {status}")]
    Status { status: u16 },

    #[error("malformed state payload: {0}")]
    Decode(String),

    #[error("state provider unavailable: {0}")]
    Unavailable(String),
}

/// Failure to deliver one message to one recipient.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The destination no longer exists or refuses the bot.
    #[error("recipient no longer valid: {0}")]
    InvalidRecipient(String),

    #[error("delivery failed: {0}")]
    Other(String),
}

impl DeliveryError {
    #[must_use]
    pub fn is_invalid_recipient(&self) -> bool {
        matches!(self, Self::InvalidRecipient(_))
    }
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("background task failed: {0}")]
    Task(String),
}

pub type Result<T> = std::result::Result<T, Error>;
