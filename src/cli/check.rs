//! Configuration validation command.

use std::path::Path;
use std::time::Duration;

use crate::application::period_of;
use crate::cli::output;
use crate::domain::{Interval, IntervalUnit};
use crate::error::Result;
use crate::infrastructure::config::settings::Config;
use crate::infrastructure::config::telegram::BOT_TOKEN_ENV;

/// Validate configuration file without starting the bot.
pub fn execute_config(config_path: &Path) -> Result<()> {
    output::note(&format!("Checking configuration: {}", config_path.display()));

    let config = Config::load(config_path)?;
    output::ok("Configuration file is valid");

    output::note("Summary:");
    output::key_value("Provider", &config.provider.url);
    output::key_value("Timeout", format!("{} ms", config.provider.timeout_ms));
    output::key_value("Poll interval", format!("{} ms", config.runtime.poll_interval_ms));
    output::key_value("Scheduler tick", format!("{} ms", config.runtime.scheduler_tick_ms));
    output::key_value("Log level", &config.logging.level);

    config.bot_token()?;
    output::ok(&format!("Bot token configured ({BOT_TOKEN_ENV} overrides the file)"));

    let tick = Duration::from_millis(config.runtime.scheduler_tick_ms);
    let shortest = period_of(&Interval::new(IntervalUnit::Minute, 1));
    if shortest.is_some_and(|p| tick > p) {
        output::warn("Scheduler tick is longer than one minute; minute intervals will drift");
    }

    output::note("Configuration is ready to use.");
    Ok(())
}
