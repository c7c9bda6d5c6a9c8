//! Exchange Robot - exchange-rate broadcasts to Telegram chats.
//!
//! The bot polls a state endpoint for the dollar price, per-currency rates
//! and its own behavior settings. Depending on those settings it broadcasts
//! a rates message to every registered chat whenever the state changes, on
//! a fixed interval, or not at all.
//!
//! # Architecture
//!
//! - **`domain`** - Wire snapshot types, price computation, diffing and rendering
//! - **`port`** - `StateProvider` and `Messenger` traits
//! - **`application`** - Recipient registry, snapshot store, interval
//!   scheduler, dispatcher and the reconciliation loops
//! - **`adapter`** - HTTP state provider and Telegram binding
//! - **`infrastructure`** - Configuration and runtime wiring
//!
//! # Features
//!
//! - `telegram` (default) - Telegram delivery and chat listener
//! - `testkit` - Scripted provider and recording messenger for tests
//!
//! # Example
//!
//! ```
//! use exchange_robot::domain::{group_thousands, render_board, Changes, PriceBoard};
//!
//! let board: PriceBoard = [("EUR", 941_357_i64)].into_iter().collect();
//! assert_eq!(render_board(&board, &Changes::new()), "- EUR: 941,357\n");
//! assert_eq!(group_thousands(-1_500), "-1,500");
//! ```

pub mod adapter;
pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod port;

#[cfg(any(test, feature = "testkit"))]
pub mod testkit;
