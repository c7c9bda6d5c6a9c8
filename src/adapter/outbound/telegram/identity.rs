//! Startup check of the bot credentials.

use teloxide::prelude::*;
use tracing::info;

use crate::error::{ConfigError, Result};

/// Ask Telegram who the bot is. Returns the bot's username.
///
/// A rejected token or an unreachable Bot API is a configuration error.
pub async fn verify_bot(bot: &Bot) -> Result<String> {
    let me = bot.get_me().await.map_err(|e| ConfigError::InvalidValue {
        field: "bot_token",
        reason: format!("Telegram did not accept the token: {e}"),
    })?;

    let username = me.username().to_string();
    info!(bot = %username, "Telegram bot authenticated");
    Ok(username)
}
