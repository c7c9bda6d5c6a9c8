//! Handler for the `preview` command.

use crate::cli::output;
use crate::domain::rates_message;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_provider;
use crate::infrastructure::config::settings::Config;

/// Fetch the state once and print the message a broadcast would send.
///
/// Without a previous snapshot every line carries the unchanged marker.
pub async fn execute(config_path: &std::path::Path) -> Result<()> {
    let config = Config::load(config_path)?;
    let provider = build_provider(&config);

    let snapshot = provider.fetch().await?;
    let message = rates_message(&snapshot, None);

    if message.is_empty() {
        output::warn("No selected currencies, nothing would be sent");
    } else {
        print!("{message}");
    }
    Ok(())
}
