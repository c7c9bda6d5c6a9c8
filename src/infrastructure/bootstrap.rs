//! Composition root for runtime wiring.

use std::sync::Arc;

use tracing::info;
#[cfg(feature = "telegram")]
use tracing::warn;

use crate::adapter::outbound::provider::HttpStateProvider;
use crate::application::{
    Dispatcher, IntervalScheduler, Reconciler, RecipientRegistry, SnapshotStore,
};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::port::{Messenger, StateProvider};

/// Shared components of a running bot.
pub struct Runtime {
    pub recipients: Arc<RecipientRegistry>,
    pub reconciler: Arc<Reconciler>,
}

/// Wire the application services around the given ports.
///
/// The poll loop and the dispatcher share one provider.
pub fn build_runtime(provider: Arc<dyn StateProvider>, messenger: Arc<dyn Messenger>) -> Runtime {
    let recipients = Arc::new(RecipientRegistry::new());
    let snapshots = Arc::new(SnapshotStore::new());
    let scheduler = Arc::new(IntervalScheduler::new());
    let dispatcher = Arc::new(Dispatcher::new(
        Arc::clone(&provider),
        messenger,
        Arc::clone(&recipients),
        Arc::clone(&snapshots),
    ));
    let reconciler = Arc::new(Reconciler::new(provider, snapshots, scheduler, dispatcher));

    Runtime {
        recipients,
        reconciler,
    }
}

/// Build the HTTP provider from configuration.
#[must_use]
pub fn build_provider(config: &Config) -> Arc<dyn StateProvider> {
    Arc::new(HttpStateProvider::from_config(&config.provider))
}

/// Run the bot until Ctrl-C.
///
/// Fails before any loop starts when Telegram rejects the token.
#[cfg(feature = "telegram")]
pub async fn run(config: Config) -> Result<()> {
    use teloxide::Bot;

    use crate::adapter::outbound::telegram::{
        register_bot_commands, run_listener, verify_bot, TelegramMessenger,
    };

    let bot = Bot::new(config.bot_token()?);
    verify_bot(&bot).await?;
    if config.telegram.register_commands {
        if let Err(e) = register_bot_commands(&bot).await {
            warn!(error = %e, "Failed to register bot commands with Telegram");
        }
    }

    let provider = build_provider(&config);
    info!(provider = %provider.describe(), "State provider configured");

    let messenger: Arc<dyn Messenger> = Arc::new(TelegramMessenger::new(bot.clone()));
    let runtime = build_runtime(provider, messenger);
    let handle = Arc::clone(&runtime.reconciler).spawn(config.runtime.timing());

    run_listener(bot, Arc::clone(&runtime.recipients)).await;

    info!("Shutdown signal received");
    handle.shutdown().await
}

/// Run without a chat platform, logging every message instead of sending it.
#[cfg(not(feature = "telegram"))]
pub async fn run(config: Config) -> Result<()> {
    use crate::port::LogMessenger;

    let provider = build_provider(&config);
    info!(provider = %provider.describe(), "State provider configured");

    let runtime = build_runtime(provider, Arc::new(LogMessenger));
    let handle = Arc::clone(&runtime.reconciler).spawn(config.runtime.timing());

    tokio::signal::ctrl_c().await?;

    info!("Shutdown signal received");
    handle.shutdown().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::RefreshOutcome;
    use crate::domain::RecipientId;
    use crate::testkit::domain::SnapshotBuilder;
    use crate::testkit::messenger::RecordingMessenger;
    use crate::testkit::provider::ScriptedProvider;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn runtime_shares_registry_with_dispatcher() {
        let snapshot = SnapshotBuilder::new()
            .currency("USD", dec!(1))
            .select("USD")
            .build();
        let provider = ScriptedProvider::steady(snapshot);
        let messenger = RecordingMessenger::new();

        let runtime = build_runtime(Arc::new(provider), Arc::new(messenger.clone()));
        runtime.recipients.add(RecipientId::new(7));

        assert_eq!(runtime.reconciler.refresh().await, RefreshOutcome::Dispatched);
        assert_eq!(messenger.sent_to(RecipientId::new(7)).len(), 1);
    }
}
