//! Domain identifier types.

use std::fmt;

/// Chat or conversation that receives rate broadcasts.
///
/// Wraps the platform's numeric chat handle. Negative values are groups
/// and channels on Telegram; the core treats the value as opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RecipientId(i64);

impl RecipientId {
    /// Create a new RecipientId from a raw chat handle.
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Get the raw chat handle.
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for RecipientId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for RecipientId {
    fn from(id: i64) -> Self {
        Self::new(id)
    }
}
