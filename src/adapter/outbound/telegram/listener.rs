//! Inbound Telegram updates.
//!
//! Every message, channel post and "bot added" membership update registers
//! the chat as a recipient. `/start` and private messages get a short reply.

use std::sync::Arc;

use teloxide::dispatching::Dispatcher as UpdateDispatcher;
use teloxide::prelude::*;
use teloxide::types::{BotCommand, ChatMemberUpdated};
use tracing::{error, info};

use crate::application::{
    classify_message, handle_inbound, is_membership_added, ChatKind, InboundEvent,
    RecipientRegistry,
};
use crate::domain::RecipientId;

fn chat_kind(chat: &teloxide::types::Chat) -> ChatKind {
    if chat.is_private() {
        ChatKind::Private
    } else if chat.is_channel() {
        ChatKind::Channel
    } else {
        ChatKind::Group
    }
}

async fn on_message(
    bot: Bot,
    msg: Message,
    recipients: Arc<RecipientRegistry>,
) -> ResponseResult<()> {
    let event = classify_message(msg.text(), chat_kind(&msg.chat));
    let chat = RecipientId::new(msg.chat.id.0);

    if let Some(reply) = handle_inbound(event, chat, &recipients) {
        if let Err(e) = bot.send_message(msg.chat.id, reply).await {
            error!(chat = %chat, error = %e, "Failed to send Telegram reply");
        }
    }
    Ok(())
}

async fn on_membership(
    update: ChatMemberUpdated,
    recipients: Arc<RecipientRegistry>,
) -> ResponseResult<()> {
    if is_membership_added(
        update.old_chat_member.is_present(),
        update.new_chat_member.is_present(),
    ) {
        let chat = RecipientId::new(update.chat.id.0);
        handle_inbound(InboundEvent::MembershipAdded, chat, &recipients);
    }
    Ok(())
}

/// Listen for updates until Ctrl-C.
///
/// Returns once the dispatcher has shut down.
pub async fn run_listener(bot: Bot, recipients: Arc<RecipientRegistry>) {
    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_channel_post().endpoint(on_message))
        .branch(Update::filter_my_chat_member().endpoint(on_membership));

    info!("Telegram listener started");

    UpdateDispatcher::builder(bot, handler)
        .dependencies(dptree::deps![recipients])
        .default_handler(|_| async {})
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    info!("Telegram listener stopped");
}

/// Register bot commands with Telegram for the "/" menu.
pub async fn register_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    let commands = vec![BotCommand::new("start", "Subscribe this chat to exchange rates")];

    bot.set_my_commands(commands).await?;
    info!("Registered bot commands with Telegram");
    Ok(())
}
