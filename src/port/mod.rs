//! Trait definitions (hexagonal ports). Depend only on domain.
//!
//! Ports define the extension points in the hexagonal architecture.
//! They are traits that adapters implement to integrate with external
//! systems.
//!
//! # Architecture
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │      Application        │
//!     ┌──────────────┤  Domain + Port          ├──────────────┐
//!     │              └─────────────────────────┘              │
//!     ▼                                                       ▼
//! ┌──────────┐                                         ┌───────────┐
//! │  State   │                                         │ Messenger │
//! │ Provider │                                         │  Adapter  │
//! └──────────┘                                         └───────────┘
//! ```
//!
//! # Available Ports
//!
//! - [`StateProvider`] - Snapshot source (HTTP state endpoint)
//! - [`Messenger`] - Outbound chat delivery (Telegram, logging)

mod messenger;
mod state;

pub use messenger::{LogMessenger, Messenger};
pub use state::StateProvider;
