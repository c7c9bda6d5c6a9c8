//! Shared test utilities available to both unit and integration tests.
//!
//! Enabled via `#[cfg(test)]` (unit tests) or the `testkit` feature
//! (integration tests).
//!
//! # Modules
//!
//! - [`provider`] - [`ScriptedProvider`](provider::ScriptedProvider), a
//!   [`StateProvider`](crate::port::StateProvider) fed from a queue.
//! - [`messenger`] - [`RecordingMessenger`](messenger::RecordingMessenger),
//!   a [`Messenger`](crate::port::Messenger) that records deliveries and
//!   fails on demand.
//! - [`domain`] - Snapshot builders.

pub mod domain;
pub mod messenger;
pub mod provider;
