//! Recording [`Messenger`] for tests.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::Mutex;

use crate::domain::RecipientId;
use crate::error::DeliveryError;
use crate::port::Messenger;

/// Thread-safe delivery recorder with per-recipient scripted failures.
///
/// Clones share the same record.
#[derive(Clone, Default)]
pub struct RecordingMessenger {
    sent: Arc<Mutex<Vec<(RecipientId, String)>>>,
    failures: Arc<Mutex<HashMap<RecipientId, DeliveryError>>>,
}

impl RecordingMessenger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make every send to `recipient` fail with `error`.
    pub fn fail_for(&self, recipient: RecipientId, error: DeliveryError) {
        self.failures.lock().insert(recipient, error);
    }

    /// Every successful delivery, in order.
    pub fn sent(&self) -> Vec<(RecipientId, String)> {
        self.sent.lock().clone()
    }

    /// Messages delivered to one recipient.
    pub fn sent_to(&self, recipient: RecipientId) -> Vec<String> {
        self.sent()
            .into_iter()
            .filter(|(id, _)| *id == recipient)
            .map(|(_, text)| text)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.sent.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl Messenger for RecordingMessenger {
    async fn send_text(&self, recipient: RecipientId, text: &str) -> Result<(), DeliveryError> {
        if let Some(error) = self.failures.lock().get(&recipient) {
            return Err(error.clone());
        }
        self.sent.lock().push((recipient, text.to_string()));
        Ok(())
    }
}
