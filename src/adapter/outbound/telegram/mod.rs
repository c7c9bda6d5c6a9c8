//! Telegram delivery and chat listener.
//!
//! Requires the `telegram` feature to be enabled.

mod identity;
mod listener;
mod messenger;

pub use identity::verify_bot;
pub use listener::{register_bot_commands, run_listener};
pub use messenger::{classify_request_error, TelegramMessenger};
