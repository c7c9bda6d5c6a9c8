//! Rate broadcast fan-out.
//!
//! # Flow
//!
//! ```text
//! StateProvider::fetch ──> rates_message(fresh, previous) ──> for each recipient
//!                                                               │
//!                                        InvalidRecipient ──────┤──> prune batch
//!                                        Other ─────────────────┘──> log only
//! ```

use std::sync::Arc;

use tracing::{debug, info, warn};

use super::recipients::RecipientRegistry;
use super::state::SnapshotStore;
use crate::domain::{rates_message, RecipientId};
use crate::error::FetchError;
use crate::port::{Messenger, StateProvider};

/// Result of one broadcast.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    /// Recipients that received the message.
    pub delivered: Vec<RecipientId>,
    /// Recipients removed from the registry after an invalid-destination failure.
    pub pruned: Vec<RecipientId>,
    /// Recipients whose delivery failed for any other reason.
    pub failed: Vec<RecipientId>,
    /// The message was empty and nothing was sent.
    pub skipped_empty: bool,
}

/// Renders the rates message once and delivers it to every recipient.
pub struct Dispatcher {
    provider: Arc<dyn StateProvider>,
    messenger: Arc<dyn Messenger>,
    recipients: Arc<RecipientRegistry>,
    snapshots: Arc<SnapshotStore>,
}

impl Dispatcher {
    pub fn new(
        provider: Arc<dyn StateProvider>,
        messenger: Arc<dyn Messenger>,
        recipients: Arc<RecipientRegistry>,
        snapshots: Arc<SnapshotStore>,
    ) -> Self {
        Self {
            provider,
            messenger,
            recipients,
            snapshots,
        }
    }

    #[must_use]
    pub fn recipients(&self) -> &Arc<RecipientRegistry> {
        &self.recipients
    }

    /// Fetch a fresh snapshot and broadcast its rates.
    ///
    /// Arrows compare against the poll loop's previous snapshot. Per-recipient
    /// failures never abort the fan-out; invalid recipients are removed in
    /// one batch after every recipient has been tried.
    pub async fn send_rates(&self) -> Result<DispatchReport, FetchError> {
        let fresh = self.provider.fetch().await?;
        let previous = self.snapshots.previous();
        let message = rates_message(&fresh, previous.as_ref());

        let mut report = DispatchReport::default();
        if message.is_empty() {
            debug!("No selected currencies to broadcast, skipping send");
            report.skipped_empty = true;
            return Ok(report);
        }

        let recipients = self.recipients.snapshot();
        debug!(recipients = recipients.len(), "Sending rates");

        for recipient in recipients {
            match self.messenger.send_text(recipient, &message).await {
                Ok(()) => report.delivered.push(recipient),
                Err(e) if e.is_invalid_recipient() => {
                    info!(recipient = %recipient, error = %e, "Recipient no longer valid");
                    report.pruned.push(recipient);
                }
                Err(e) => {
                    warn!(recipient = %recipient, error = %e, "Failed to deliver rates");
                    report.failed.push(recipient);
                }
            }
        }

        if !report.pruned.is_empty() {
            let removed = self.recipients.remove(&report.pruned);
            info!(removed, "Pruned invalid recipients");
        }

        info!(
            delivered = report.delivered.len(),
            pruned = report.pruned.len(),
            failed = report.failed.len(),
            "Rates dispatched"
        );

        Ok(report)
    }
}
