//! Outbound Telegram messages.

use async_trait::async_trait;
use teloxide::prelude::*;
use teloxide::{ApiError, RequestError};
use tracing::debug;

use crate::domain::RecipientId;
use crate::error::DeliveryError;
use crate::port::Messenger;

/// [`Messenger`] that sends plain-text Telegram messages.
#[derive(Clone)]
pub struct TelegramMessenger {
    bot: Bot,
}

impl TelegramMessenger {
    #[must_use]
    pub fn new(bot: Bot) -> Self {
        Self { bot }
    }

    #[must_use]
    pub fn bot(&self) -> &Bot {
        &self.bot
    }
}

#[async_trait]
impl Messenger for TelegramMessenger {
    async fn send_text(&self, recipient: RecipientId, text: &str) -> Result<(), DeliveryError> {
        self.bot
            .send_message(ChatId(recipient.get()), text)
            .await
            .map_err(classify_request_error)?;
        debug!(recipient = %recipient, "Telegram message sent");
        Ok(())
    }
}

/// Map a Bot API failure onto a delivery error.
///
/// Failures that will repeat on every attempt for this chat (blocked,
/// kicked, deleted, migrated) are invalid-recipient errors.
#[must_use]
pub fn classify_request_error(err: RequestError) -> DeliveryError {
    match &err {
        RequestError::Api(
            ApiError::BotBlocked
            | ApiError::ChatNotFound
            | ApiError::UserNotFound
            | ApiError::BotKicked
            | ApiError::BotKickedFromSupergroup
            | ApiError::UserDeactivated
            | ApiError::CantInitiateConversation
            | ApiError::CantTalkWithBots
            | ApiError::GroupDeactivated,
        )
        | RequestError::MigrateToChatId(_) => DeliveryError::InvalidRecipient(err.to_string()),
        _ => DeliveryError::Other(err.to_string()),
    }
}
