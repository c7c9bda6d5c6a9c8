//! State provider port.
//!
//! The provider is the remote application-state endpoint the bot polls.
//! Both the poll loop and the dispatcher fetch through this trait.

use async_trait::async_trait;

use crate::domain::StateSnapshot;
use crate::error::FetchError;

/// Source of state snapshots.
///
/// # Implementation Notes
///
/// - Implementations must be thread-safe (`Send + Sync`)
/// - Every call performs a fresh fetch; implementations must not cache
/// - Any transport or decode problem is reported as a [`FetchError`]
#[async_trait]
pub trait StateProvider: Send + Sync {
    /// Fetch the latest snapshot.
    async fn fetch(&self) -> Result<StateSnapshot, FetchError>;

    /// Human-readable provider location, for logs.
    fn describe(&self) -> String;
}
