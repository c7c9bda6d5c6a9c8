//! Inbound chat events.
//!
//! The platform binding classifies each update into an [`InboundEvent`] and
//! hands it to [`handle_inbound`]. Every kind registers the originating chat
//! as a recipient; some kinds also get a short reply.

use tracing::info;

use super::recipients::RecipientRegistry;
use crate::domain::RecipientId;

/// Reply to the `/start` command.
pub const START_REPLY: &str = "Exchange Robot";
/// Reply to any other private message.
pub const PRIVATE_REPLY: &str = "Bot Running";

/// Kind of chat activity that makes a chat a recipient.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InboundEvent {
    /// `/start` in any chat.
    StartCommand,
    /// Any other message in a one-to-one chat.
    PrivateMessage,
    /// Text or any message in a group, supergroup or channel.
    GroupOrChannelText,
    /// The bot itself was added to a chat.
    MembershipAdded,
}

/// Chat type as seen by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChatKind {
    Private,
    Group,
    Channel,
}

/// Classify a message by its text and chat type.
#[must_use]
pub fn classify_message(text: Option<&str>, chat: ChatKind) -> InboundEvent {
    if text.is_some_and(is_start_command) {
        return InboundEvent::StartCommand;
    }
    match chat {
        ChatKind::Private => InboundEvent::PrivateMessage,
        ChatKind::Group | ChatKind::Channel => InboundEvent::GroupOrChannelText,
    }
}

/// Whether a membership update moved the bot into the chat.
///
/// Promotions and other changes while already present do not count.
#[must_use]
pub fn is_membership_added(was_present: bool, is_present: bool) -> bool {
    is_present && !was_present
}

/// Whether `text` is `/start`, optionally addressed (`/start@bot`) or with
/// a deep-link payload.
#[must_use]
pub fn is_start_command(text: &str) -> bool {
    let Some(command) = text.split_whitespace().next() else {
        return false;
    };
    let command = command.split('@').next().unwrap_or(command);
    command.eq_ignore_ascii_case("/start")
}

/// Register the chat and return the reply to send, if any.
pub fn handle_inbound(
    event: InboundEvent,
    chat: RecipientId,
    recipients: &RecipientRegistry,
) -> Option<&'static str> {
    if recipients.add(chat) {
        info!(chat = %chat, event = ?event, recipients = recipients.len(), "Recipient registered");
    }

    match event {
        InboundEvent::StartCommand => Some(START_REPLY),
        InboundEvent::PrivateMessage => Some(PRIVATE_REPLY),
        InboundEvent::GroupOrChannelText | InboundEvent::MembershipAdded => None,
    }
}
