//! Outbound adapters (driven side).

pub mod provider;

#[cfg(feature = "telegram")]
pub mod telegram;
