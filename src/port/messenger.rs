//! Messenger port for outbound chat messages.
//!
//! This module defines the trait the dispatcher uses to deliver rate
//! broadcasts to a single chat destination.

use async_trait::async_trait;

use crate::domain::RecipientId;
use crate::error::DeliveryError;

/// Trait for sending text to a chat destination.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - A destination that no longer exists or has blocked the bot must be
///   reported as [`DeliveryError::InvalidRecipient`]; the dispatcher prunes
///   those recipients
/// - All other failures are [`DeliveryError::Other`] and are never retried
#[async_trait]
pub trait Messenger: Send + Sync {
    /// Deliver `text` to `recipient`.
    async fn send_text(&self, recipient: RecipientId, text: &str) -> Result<(), DeliveryError>;
}

/// A messenger that logs messages instead of sending them.
pub struct LogMessenger;

#[async_trait]
impl Messenger for LogMessenger {
    async fn send_text(&self, recipient: RecipientId, text: &str) -> Result<(), DeliveryError> {
        tracing::info!(recipient = %recipient, lines = text.lines().count(), "Message (log only)");
        Ok(())
    }
}
