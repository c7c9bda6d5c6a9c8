//! Handler for the `run` command.

use tracing::info;

use crate::cli::RunArgs;
use crate::error::Result;
use crate::infrastructure::bootstrap;
use crate::infrastructure::config::settings::Config;

/// Execute the run command.
pub async fn execute(args: &RunArgs) -> Result<()> {
    let mut config = Config::load(&args.config)?;

    if let Some(ref level) = args.log_level {
        config.logging.level = level.clone();
    }
    if args.json_logs {
        config.logging.format = "json".to_string();
    }

    config.init_logging();

    info!(
        provider = %config.provider.url,
        poll_interval_ms = config.runtime.poll_interval_ms,
        "exchange-robot starting"
    );

    bootstrap::run(config).await?;

    info!("exchange-robot stopped");
    Ok(())
}
