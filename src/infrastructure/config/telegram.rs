//! Telegram bot configuration.

use serde::Deserialize;

/// Environment variable that overrides `telegram.bot_token`.
pub const BOT_TOKEN_ENV: &str = "TELEGRAM_BOT_TOKEN";

/// Telegram bot identity.
#[derive(Clone, Deserialize)]
pub struct TelegramAppConfig {
    /// Bot API token from BotFather. `TELEGRAM_BOT_TOKEN` wins when set.
    #[serde(default)]
    pub bot_token: String,
    /// Register the bot's command menu on startup.
    #[serde(default = "default_register_commands")]
    pub register_commands: bool,
}

const fn default_register_commands() -> bool {
    true
}

impl Default for TelegramAppConfig {
    fn default() -> Self {
        Self {
            bot_token: String::new(),
            register_commands: default_register_commands(),
        }
    }
}

impl std::fmt::Debug for TelegramAppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramAppConfig")
            .field("bot_token", &"<redacted>")
            .field("register_commands", &self.register_commands)
            .finish()
    }
}
